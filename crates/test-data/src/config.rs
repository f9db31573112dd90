//! Configuration types for test data generation.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Number of users written by the default seed run.
pub const DEFAULT_USER_COUNT: u32 = 10_000;

/// Number of posts written by the default seed run.
pub const DEFAULT_POST_COUNT: u32 = 10_000;

// The recommender reads from the same locations.
pub use recommender::{DEFAULT_POSTS_PATH, DEFAULT_USERS_PATH};

/// Inclusive bounds on the length of a generated identifier.
pub const IDENTIFIER_LEN: (usize, usize) = (5, 15);

/// Inclusive bounds on the number of terms in a preference or tag list.
pub const TERMS_PER_RECORD: (usize, usize) = (2, 5);

/// Configuration for seeding operations.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// Number of users to generate.
    pub user_count: u32,

    /// Number of posts to generate.
    pub post_count: u32,

    /// Where the users table is written.
    pub users_path: PathBuf,

    /// Where the posts table is written.
    pub posts_path: PathBuf,
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            user_count: DEFAULT_USER_COUNT,
            post_count: DEFAULT_POST_COUNT,
            users_path: PathBuf::from(DEFAULT_USERS_PATH),
            posts_path: PathBuf::from(DEFAULT_POSTS_PATH),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_uses_fixed_totals() {
        let config = SeedConfig::default();

        assert_eq!(config.user_count, 10_000);
        assert_eq!(config.post_count, 10_000);
        assert_eq!(config.users_path, PathBuf::from("data/users.csv"));
        assert_eq!(config.posts_path, PathBuf::from("data/posts.csv"));
    }

    #[test]
    fn test_term_bounds_fit_vocabulary() {
        assert!(TERMS_PER_RECORD.1 < crate::vocabulary::VOCABULARY.len());
    }
}
