use std::path::Path;

use recommender::{
    DEFAULT_POSTS_PATH, DEFAULT_USERS_PATH, load_posts_from_csv, load_users_from_csv,
    render_user_report,
};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// How many users get a recommendation report.
const USERS_TO_REPORT: usize = 15;

/// Recommendations listed per category.
const RECOMMENDATION_LIMIT: usize = 5;

fn init_logging() {
    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer().pretty())
        .init();
}

fn main() -> anyhow::Result<()> {
    init_logging();

    let users = load_users_from_csv(Path::new(DEFAULT_USERS_PATH))?;
    let posts = load_posts_from_csv(Path::new(DEFAULT_POSTS_PATH))?;

    println!("\n========== Recommended users and posts ==========");
    for user in users.iter().take(USERS_TO_REPORT) {
        print!(
            "{}",
            render_user_report(user, &users, &posts, RECOMMENDATION_LIMIT)
        );
        println!("\n------------------------------------------------------------");
    }

    Ok(())
}
