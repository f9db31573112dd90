//! Plain-text recommendation report.

use std::collections::BTreeSet;
use std::fmt::Write;

use crate::models::{Post, User};
use crate::scoring::{recommended_posts, recommended_users};

/// Joins a term set in sorted order.
pub fn format_terms(terms: &BTreeSet<String>) -> String {
    terms
        .iter()
        .map(String::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders one user's block: their preferences, then up to `limit` similar
/// users and up to `limit` matching posts.
pub fn render_user_report(user: &User, users: &[User], posts: &[Post], limit: usize) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail.
    let _ = writeln!(out, "\nUser {} (ID: {})", user.username, user.id);
    let _ = writeln!(out, "Preferences: {}", format_terms(&user.preferences));

    let _ = writeln!(out, "Recommended users:");
    for (index, rec) in recommended_users(user, users, limit).iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} (ID: {}) - Preferences: {} [{} shared]",
            index + 1,
            rec.item.username,
            rec.item.id,
            format_terms(&rec.item.preferences),
            rec.score
        );
    }

    let _ = writeln!(out, "Recommended posts:");
    for (index, rec) in recommended_posts(user, posts, limit).iter().enumerate() {
        let _ = writeln!(
            out,
            "  {}. {} (ID: {}) - Tags: {} [{} shared]",
            index + 1,
            rec.item.title,
            rec.item.id,
            format_terms(&rec.item.tags),
            rec.score
        );
    }

    out
}
