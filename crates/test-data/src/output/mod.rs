//! CSV output for generated records.
//!
//! Each record kind implements [`CsvRecord`], and [`CsvSeeder`] streams any
//! sequence of records into a file behind a single header row.

mod record;
mod seeder;

pub use record::{CsvRecord, TERM_SEPARATOR, join_terms};
pub use seeder::{CsvSeeder, SeedError};
