use std::collections::BTreeSet;

use crate::models::{Post, User};

/// Anything carrying a set of normalized terms.
pub trait Tagged {
    fn terms(&self) -> &BTreeSet<String>;
}

impl Tagged for User {
    fn terms(&self) -> &BTreeSet<String> {
        &self.preferences
    }
}

impl Tagged for Post {
    fn terms(&self) -> &BTreeSet<String> {
        &self.tags
    }
}

/// A candidate together with its overlap score.
#[derive(Debug)]
pub struct Recommendation<'a, T> {
    pub item: &'a T,
    pub score: usize,
}

/// Number of terms two sets share.
pub fn overlap(a: &BTreeSet<String>, b: &BTreeSet<String>) -> usize {
    a.intersection(b).count()
}

/// Scores candidates against `terms`, dropping those with no shared term.
///
/// Higher scores come first; equal scores keep their input order. At most
/// `limit` candidates are returned.
pub fn rank_by_overlap<'a, T, I>(
    terms: &BTreeSet<String>,
    candidates: I,
    limit: usize,
) -> Vec<Recommendation<'a, T>>
where
    T: Tagged + 'a,
    I: IntoIterator<Item = &'a T>,
{
    let mut ranked: Vec<Recommendation<'a, T>> = candidates
        .into_iter()
        .map(|item| Recommendation {
            item,
            score: overlap(terms, item.terms()),
        })
        .filter(|r| r.score > 0)
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.score.cmp(&a.score));
    ranked.truncate(limit);
    ranked
}

/// Posts whose tags best match the user's preferences.
pub fn recommended_posts<'a>(
    user: &User,
    posts: &'a [Post],
    limit: usize,
) -> Vec<Recommendation<'a, Post>> {
    rank_by_overlap(&user.preferences, posts, limit)
}

/// Other users whose preferences best match this user's. Never includes the user itself.
pub fn recommended_users<'a>(
    current_user: &User,
    users: &'a [User],
    limit: usize,
) -> Vec<Recommendation<'a, User>> {
    rank_by_overlap(
        &current_user.preferences,
        users.iter().filter(|user| user.id != current_user.id),
        limit,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_terms;

    fn user(id: u32, prefs: &str) -> User {
        User {
            id,
            username: format!("user{id}"),
            preferences: parse_terms(prefs),
        }
    }

    fn post(id: u32, tags: &str) -> Post {
        Post {
            id,
            title: format!("Post: #{id}: author's Content"),
            tags: parse_terms(tags),
        }
    }

    #[test]
    fn test_overlap_counts_normalized_terms() {
        let a = parse_terms("Anime, Rock, Go");
        let b = parse_terms("ROCK_, ANIME_, Python");

        assert_eq!(overlap(&a, &b), 2);
    }

    #[test]
    fn test_recommended_posts_order_and_limit() {
        let me = user(1, "Anime, Rock, Go");
        let posts = vec![
            post(1, "Hiking, Cooking"),
            post(2, "Anime, Music"),
            post(3, "Anime, Rock, Go"),
            post(4, "Go, Rust"),
            post(5, "ROCK_, Go"),
        ];

        let recs = recommended_posts(&me, &posts, 3);
        let ids: Vec<u32> = recs.iter().map(|r| r.item.id).collect();
        let scores: Vec<usize> = recs.iter().map(|r| r.score).collect();

        assert_eq!(ids, vec![3, 5, 2]);
        assert_eq!(scores, vec![3, 2, 1]);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let me = user(1, "Go");
        let posts = vec![post(7, "Go, Rust"), post(3, "Go"), post(9, "Go, Python")];

        let ids: Vec<u32> = recommended_posts(&me, &posts, 10)
            .iter()
            .map(|r| r.item.id)
            .collect();

        assert_eq!(ids, vec![7, 3, 9]);
    }

    #[test]
    fn test_recommended_users_excludes_self() {
        let users = vec![
            user(1, "Anime, Rock"),
            user(2, "Anime"),
            user(3, "Cooking"),
            user(4, "Rock, Anime, Go"),
        ];

        let recs = recommended_users(&users[0], &users, 5);
        let ids: Vec<u32> = recs.iter().map(|r| r.item.id).collect();

        assert_eq!(ids, vec![4, 2]);
        assert!(recs.iter().all(|r| r.item.id != 1));
    }

    #[test]
    fn test_no_overlap_no_recommendations() {
        let me = user(1, "Hiking");
        let posts = vec![post(1, "Rust"), post(2, "Go")];

        assert!(recommended_posts(&me, &posts, 5).is_empty());
    }

    #[test]
    fn test_blank_preferences_match_nothing() {
        let users = vec![user(1, ""), user(2, " , "), user(3, "Go")];
        let posts = vec![post(1, ""), post(2, "Go")];

        assert!(recommended_users(&users[0], &users, 5).is_empty());
        assert!(recommended_posts(&users[1], &posts, 5).is_empty());
    }

    #[test]
    fn test_zero_limit() {
        let me = user(1, "Go");
        let posts = vec![post(1, "Go")];

        assert!(recommended_posts(&me, &posts, 0).is_empty());
    }
}
