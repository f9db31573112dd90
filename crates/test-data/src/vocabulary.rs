//! The fixed term vocabulary shared by user preferences and post tags.
//!
//! Several entries are deliberate near-duplicates (`Rock` / `ROCK_`,
//! `K-Pop` / `Kpop`) so that consumers have something to normalize.

/// Candidate preference/tag terms.
pub const VOCABULARY: [&str; 22] = [
    "Anime",
    "ANIME_",
    "Manga",
    "Mangá",
    "Music",
    "Rock",
    "ROCK_",
    "J-Pop",
    "Jpop",
    "K-Pop",
    "Kpop",
    "Programming",
    "Technology",
    "Rust",
    "Go",
    "Python",
    "PYTHON_",
    "Gaming",
    "Games",
    "GAMES_",
    "Hiking",
    "Cooking",
];

/// Returns true if `term` is one of the vocabulary entries, compared exactly.
pub fn contains(term: &str) -> bool {
    VOCABULARY.contains(&term)
}
