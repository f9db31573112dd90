use std::collections::BTreeSet;

use serde::Deserialize;

/// A user with normalized preference terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u32,
    pub username: String,
    pub preferences: BTreeSet<String>,
}

/// A post with normalized tag terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub id: u32,
    pub title: String,
    pub tags: BTreeSet<String>,
}

/// One row of the users table as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct UserRecord {
    pub id: u32,
    pub username: String,
    pub preferences: String,
}

/// One row of the posts table as written on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct PostRecord {
    pub id: u32,
    pub title: String,
    pub tags: String,
}

impl From<UserRecord> for User {
    fn from(record: UserRecord) -> Self {
        Self {
            id: record.id,
            username: record.username,
            preferences: parse_terms(&record.preferences),
        }
    }
}

impl From<PostRecord> for Post {
    fn from(record: PostRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            tags: parse_terms(&record.tags),
        }
    }
}

/// Folds spelling variants of a term together: `" ROCK_"` and `"Rock"` both become `"rock"`.
pub fn normalize_tag(tag: &str) -> String {
    tag.trim().to_lowercase().replace('_', "")
}

/// Splits a comma-joined term field into a set of normalized terms.
///
/// Empty entries are dropped, so two records with blank fields never share a term.
pub fn parse_terms(field: &str) -> BTreeSet<String> {
    field
        .split(',')
        .map(normalize_tag)
        .filter(|term| !term.is_empty())
        .collect()
}
