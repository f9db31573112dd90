//! Default seed script - writes the fake users and posts tables
//!
//! Run from the workspace root with:
//! ```
//! cargo run -p test-data --bin seed
//! ```

use test_data::builders::ScenarioBuilder;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let mut rng = rand::thread_rng();

    let result = ScenarioBuilder::fake_database().build(&mut rng)?;

    tracing::info!("Seed completed!");
    tracing::info!("  Users: {} -> {}", result.users_written, result.users_path.display());
    tracing::info!("  Posts: {} -> {}", result.posts_written, result.posts_path.display());

    println!("Generated fake database");

    Ok(())
}
