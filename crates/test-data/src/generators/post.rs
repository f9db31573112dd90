//! Post generation with titles and tags.

use std::ops::RangeInclusive;

use rand::Rng;

use super::identifier::{generate_identifier, generate_term_subset};
use crate::output::{CsvRecord, join_terms};

/// Generated post row ready to be written.
#[derive(Debug, Clone)]
pub struct GeneratedPost {
    pub id: u32,
    pub title: String,
    pub tags: Vec<&'static str>,
}

impl CsvRecord for GeneratedPost {
    const HEADER: &'static [&'static str] = &["id", "title", "tags"];

    fn to_record(&self) -> Vec<String> {
        vec![self.id.to_string(), self.title.clone(), join_terms(&self.tags)]
    }
}

/// Generates a single post with the given id.
///
/// The title embeds the id and a fresh identifier that is unrelated to any
/// generated user.
pub fn generate_post(id: u32, rng: &mut impl Rng) -> GeneratedPost {
    let author = generate_identifier(rng);

    GeneratedPost {
        id,
        title: format!("Post: #{id}: {author}'s Content"),
        tags: generate_term_subset(rng),
    }
}

/// Lazily generates posts with ids `1..=count`.
pub struct PostGenerator<'a, R> {
    ids: RangeInclusive<u32>,
    rng: &'a mut R,
}

impl<'a, R: Rng> PostGenerator<'a, R> {
    /// Creates a generator for `count` posts.
    pub fn new(count: u32, rng: &'a mut R) -> Self {
        Self { ids: 1..=count, rng }
    }

    /// Generates multiple posts at once.
    pub fn generate_batch(count: u32, rng: &mut R) -> Vec<GeneratedPost> {
        PostGenerator::new(count, rng).collect()
    }
}

impl<R: Rng> Iterator for PostGenerator<'_, R> {
    type Item = GeneratedPost;

    fn next(&mut self) -> Option<GeneratedPost> {
        let id = self.ids.next()?;
        Some(generate_post(id, &mut *self.rng))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.ids.size_hint()
    }
}

impl<R: Rng> ExactSizeIterator for PostGenerator<'_, R> {}
