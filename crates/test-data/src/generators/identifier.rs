//! Random identifiers and vocabulary subsets.

use rand::Rng;
use rand::seq::index;

use crate::config::{IDENTIFIER_LEN, TERMS_PER_RECORD};
use crate::vocabulary::VOCABULARY;

/// Characters an identifier may contain: lowercase ASCII letters and digits.
const IDENTIFIER_CHARSET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a lowercase alphanumeric identifier of 5 to 15 characters.
///
/// Each character is drawn independently; nothing prevents two calls from
/// returning the same value.
pub fn generate_identifier(rng: &mut impl Rng) -> String {
    let (min_len, max_len) = IDENTIFIER_LEN;
    let len = rng.gen_range(min_len..=max_len);

    (0..len)
        .map(|_| IDENTIFIER_CHARSET[rng.gen_range(0..IDENTIFIER_CHARSET.len())] as char)
        .collect()
}

/// Samples 2 to 5 distinct vocabulary terms without replacement.
///
/// Terms come back in the order they were drawn, not sorted.
pub fn generate_term_subset(rng: &mut impl Rng) -> Vec<&'static str> {
    let (min_terms, max_terms) = TERMS_PER_RECORD;
    let amount = rng.gen_range(min_terms..=max_terms);

    index::sample(rng, VOCABULARY.len(), amount)
        .into_iter()
        .map(|i| VOCABULARY[i])
        .collect()
}
