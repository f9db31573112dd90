//! User generation with term preferences.

use std::ops::RangeInclusive;

use rand::Rng;

use super::identifier::{generate_identifier, generate_term_subset};
use crate::output::{CsvRecord, join_terms};

/// Generated user row ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedUser {
    pub id: u32,
    pub username: String,
    pub preferences: Vec<&'static str>,
}

impl CsvRecord for GeneratedUser {
    const HEADER: &'static [&'static str] = &["id", "username", "preferences"];

    fn to_record(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.username.clone(),
            join_terms(&self.preferences),
        ]
    }
}

/// Generates a single user with the given id.
pub fn generate_user(id: u32, rng: &mut impl Rng) -> GeneratedUser {
    GeneratedUser {
        id,
        username: generate_identifier(rng),
        preferences: generate_term_subset(rng),
    }
}

/// Lazily generates users with ids `1..=count`, one per call to `next`.
pub struct UserGenerator<'a, R> {
    ids: RangeInclusive<u32>,
    rng: &'a mut R,
}

impl<'a, R: Rng> UserGenerator<'a, R> {
    /// Creates a generator for `count` users.
    pub fn new(count: u32, rng: &'a mut R) -> Self {
        Self { ids: 1..=count, rng }
    }

    /// Generates multiple users at once.
    pub fn generate_batch(count: u32, rng: &mut R) -> Vec<GeneratedUser> {
        UserGenerator::new(count, rng).collect()
    }
}

impl<R: Rng> Iterator for UserGenerator<'_, R> {
    type Item = GeneratedUser;

    fn next(&mut self) -> Option<GeneratedUser> {
        let id = self.ids.next()?;
        Some(generate_user(id, &mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<R: Rng> ExactSizeIterator for UserGenerator<'_, R> {}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vocabulary;

    #[test]
    fn test_generate_user() {
        let mut rng = rand::thread_rng();
        let user = generate_user(42, &mut rng);

        assert_eq!(user.id, 42);
        assert!((5..=15).contains(&user.username.len()));
        assert!((2..=5).contains(&user.preferences.len()));
        assert!(user.preferences.iter().all(|p| vocabulary::contains(p)));
    }

    #[test]
    fn test_generate_batch() {
        let mut rng = rand::thread_rng();
        let users = UserGenerator::generate_batch(10, &mut rng);

        assert_eq!(users.len(), 10);

        // Ids are sequential from 1
        let ids: Vec<u32> = users.iter().map(|u| u.id).collect();
        assert_eq!(ids, (1..=10).collect::<Vec<_>>());
    }

    #[test]
    fn test_empty_generator() {
        let mut rng = rand::thread_rng();
        let mut users = UserGenerator::new(0, &mut rng);

        assert_eq!(users.len(), 0);
        assert!(users.next().is_none());
    }

    #[test]
    fn test_user_record_fields() {
        let user = GeneratedUser {
            id: 2,
            username: "xyz12".to_string(),
            preferences: vec!["Gaming", "Hiking", "Go"],
        };

        assert_eq!(user.to_record(), vec!["2", "xyz12", "Gaming, Hiking, Go"]);
        assert_eq!(GeneratedUser::HEADER, &["id", "username", "preferences"]);
    }
}
