//! Fluent builder for constructing seed scenarios.

use std::path::{Path, PathBuf};
use std::time::Instant;

use rand::Rng;
use tracing::info;

use crate::config::SeedConfig;
use crate::generators::{GeneratedPost, GeneratedUser, PostGenerator, UserGenerator};
use crate::output::{CsvSeeder, SeedError};

/// Result of building and writing a scenario.
#[derive(Debug)]
pub struct ScenarioResult {
    pub users_written: usize,
    pub posts_written: usize,
    pub users_path: PathBuf,
    pub posts_path: PathBuf,
    /// Metrics from scenario generation (populated if metrics tracking enabled).
    pub metrics: Option<ScenarioMetrics>,
}

/// Timing for each table of a scenario.
#[derive(Debug, Clone)]
pub struct ScenarioMetrics {
    /// Time spent generating and writing users (milliseconds).
    pub users_time_ms: u64,
    /// Time spent generating and writing posts (milliseconds).
    pub posts_time_ms: u64,
}

/// Users and posts held in memory instead of written out.
#[derive(Debug, Clone)]
pub struct ScenarioData {
    pub users: Vec<GeneratedUser>,
    pub posts: Vec<GeneratedPost>,
}

/// Builder for the two seed tables.
///
/// # Example
///
/// ```rust,ignore
/// let result = ScenarioBuilder::new()
///     .with_users(500)
///     .with_posts(200)
///     .with_output_dir("target/seed")
///     .build(&mut rng)?;
/// ```
pub struct ScenarioBuilder {
    config: SeedConfig,
    progress_interval: usize,
    track_metrics: bool,
}

impl Default for ScenarioBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ScenarioBuilder {
    /// Creates a builder with the default counts and paths.
    pub fn new() -> Self {
        Self::from_config(SeedConfig::default())
    }

    /// Creates a builder from an explicit configuration.
    pub fn from_config(config: SeedConfig) -> Self {
        Self {
            config,
            progress_interval: 1_000,
            track_metrics: false,
        }
    }

    /// Sets the number of users.
    pub fn with_users(mut self, count: u32) -> Self {
        self.config.user_count = count;
        self
    }

    /// Sets the number of posts.
    pub fn with_posts(mut self, count: u32) -> Self {
        self.config.post_count = count;
        self
    }

    /// Writes `users.csv` and `posts.csv` inside `dir`.
    pub fn with_output_dir(mut self, dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        self.config.users_path = dir.join("users.csv");
        self.config.posts_path = dir.join("posts.csv");
        self
    }

    /// Sets how often row progress is logged.
    pub fn with_progress_interval(mut self, rows: usize) -> Self {
        self.progress_interval = rows;
        self
    }

    /// Enables timing collection.
    pub fn with_metrics(mut self, enabled: bool) -> Self {
        self.track_metrics = enabled;
        self
    }

    /// Generates both tables in memory without touching the filesystem.
    pub fn build_data(&self, rng: &mut impl Rng) -> ScenarioData {
        ScenarioData {
            users: UserGenerator::generate_batch(self.config.user_count, &mut *rng),
            posts: PostGenerator::generate_batch(self.config.post_count, rng),
        }
    }

    /// Generates and writes users, then posts.
    ///
    /// Rows are written as they are generated. If the posts table fails, the
    /// users table already on disk is left as is.
    pub fn build(&self, rng: &mut impl Rng) -> Result<ScenarioResult, SeedError> {
        let seeder = CsvSeeder::new().with_progress_interval(self.progress_interval);

        let start = Instant::now();
        let users_written = seeder.seed_users(
            &self.config.users_path,
            UserGenerator::new(self.config.user_count, &mut *rng),
        )?;
        let users_elapsed = start.elapsed();

        let start = Instant::now();
        let posts_written = seeder.seed_posts(
            &self.config.posts_path,
            PostGenerator::new(self.config.post_count, rng),
        )?;
        let posts_elapsed = start.elapsed();

        let metrics = self.track_metrics.then(|| ScenarioMetrics {
            users_time_ms: users_elapsed.as_millis() as u64,
            posts_time_ms: posts_elapsed.as_millis() as u64,
        });

        if let Some(m) = &metrics {
            info!(
                "Scenario timing: users {}ms, posts {}ms",
                m.users_time_ms, m.posts_time_ms
            );
        }

        Ok(ScenarioResult {
            users_written,
            posts_written,
            users_path: self.config.users_path.clone(),
            posts_path: self.config.posts_path.clone(),
            metrics,
        })
    }

    /// The full fake database: 10,000 users and 10,000 posts at the default paths.
    pub fn fake_database() -> Self {
        Self::new().with_metrics(true)
    }
}
