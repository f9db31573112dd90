//! Entity generators for test data.
//!
//! - [`generate_identifier`] and [`generate_term_subset`]: the random building blocks
//! - [`UserGenerator`]: users with preferences
//! - [`PostGenerator`]: posts with titles and tags

pub mod identifier;
pub mod post;
pub mod user;

pub use identifier::{generate_identifier, generate_term_subset};
pub use post::{GeneratedPost, PostGenerator, generate_post};
pub use user::{GeneratedUser, UserGenerator, generate_user};
