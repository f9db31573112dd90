//! Fluent builder APIs for seed scenarios.
//!
//! The [`ScenarioBuilder`] writes the users table and then the posts table.

mod scenario;

pub use scenario::{ScenarioBuilder, ScenarioData, ScenarioMetrics, ScenarioResult};
