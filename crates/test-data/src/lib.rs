//! Test data generation for tag-recommender.
//!
//! This crate writes the two CSV tables the recommender loads: users with
//! preference terms and posts with tag terms, both sampled from a fixed
//! [`vocabulary`].
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use test_data::prelude::*;
//!
//! let result = ScenarioBuilder::new()
//!     .with_users(50)
//!     .with_posts(50)
//!     .with_output_dir("target/seed")
//!     .build(&mut rand::thread_rng())?;
//! ```

pub mod builders;
pub mod config;
pub mod generators;
pub mod output;
pub mod vocabulary;

pub mod prelude {
    //! Convenient re-exports for common usage.

    pub use crate::builders::{ScenarioBuilder, ScenarioData, ScenarioMetrics, ScenarioResult};
    pub use crate::config::SeedConfig;
    pub use crate::generators::{
        GeneratedPost, GeneratedUser, PostGenerator, UserGenerator, generate_identifier,
        generate_post, generate_term_subset, generate_user,
    };
    pub use crate::output::{CsvRecord, CsvSeeder, SeedError};
    pub use crate::vocabulary::VOCABULARY;
}
