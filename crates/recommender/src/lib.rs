pub mod errors;
pub mod loader;
pub mod models;
pub mod report;
pub mod scoring;

pub use errors::RecommendError;
pub use loader::{DEFAULT_POSTS_PATH, DEFAULT_USERS_PATH, load_posts_from_csv, load_users_from_csv};
pub use models::{Post, User, normalize_tag};
pub use report::{format_terms, render_user_report};
pub use scoring::{Recommendation, Tagged, recommended_posts, recommended_users};
