//! CSV table writer.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use thiserror::Error;
use tracing::{debug, info};

use super::record::CsvRecord;
use crate::generators::{GeneratedPost, GeneratedUser};

#[derive(Debug, Error)]
pub enum SeedError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Writes generated records to CSV files, one table per file.
///
/// Files are created or truncated. Nothing is cleaned up on failure, so an
/// interrupted write can leave a partial table behind.
pub struct CsvSeeder {
    progress_interval: usize,
}

impl CsvSeeder {
    /// Creates a seeder that reports progress every 1,000 rows.
    pub fn new() -> Self {
        Self {
            progress_interval: 1_000,
        }
    }

    /// Sets how many rows are written between progress log lines.
    pub fn with_progress_interval(mut self, rows: usize) -> Self {
        self.progress_interval = rows.max(1);
        self
    }

    /// Writes the users table.
    pub fn seed_users<I>(&self, path: &Path, users: I) -> Result<usize, SeedError>
    where
        I: IntoIterator<Item = GeneratedUser>,
    {
        info!("Seeding users into {}...", path.display());
        let written = self.write_table(path, users)?;
        info!("Seeded {} users", written);
        Ok(written)
    }

    /// Writes the posts table.
    pub fn seed_posts<I>(&self, path: &Path, posts: I) -> Result<usize, SeedError>
    where
        I: IntoIterator<Item = GeneratedPost>,
    {
        info!("Seeding posts into {}...", path.display());
        let written = self.write_table(path, posts)?;
        info!("Seeded {} posts", written);
        Ok(written)
    }

    /// Writes any record kind under its own header.
    pub fn write_table<R, I>(&self, path: &Path, rows: I) -> Result<usize, SeedError>
    where
        R: CsvRecord,
        I: IntoIterator<Item = R>,
    {
        self.write_rows(path, R::HEADER, rows.into_iter().map(|row| row.to_record()))
    }

    /// Writes a header line followed by one line per row.
    ///
    /// Fields that contain the delimiter are quoted; nothing else is escaped.
    /// Lines end with `\r\n`. Returns the number of data rows written.
    pub fn write_rows<I>(&self, path: &Path, header: &[&str], rows: I) -> Result<usize, SeedError>
    where
        I: IntoIterator<Item = Vec<String>>,
    {
        let file = BufWriter::new(File::create(path)?);
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .terminator(csv::Terminator::CRLF)
            .from_writer(file);

        writer.write_record(header)?;

        let mut written = 0;
        for row in rows {
            writer.write_record(&row)?;
            written += 1;

            if written % self.progress_interval == 0 {
                debug!("Wrote {} rows to {}", written, path.display());
            }
        }

        writer.flush()?;
        let mut file = writer.into_inner().map_err(|err| err.into_error())?;
        file.flush()?;

        Ok(written)
    }
}

impl Default for CsvSeeder {
    fn default() -> Self {
        Self::new()
    }
}
