//! Flattening records into CSV fields.

/// Secondary delimiter placed between terms of a multi-value field.
pub const TERM_SEPARATOR: &str = ", ";

/// A row that can be written to a delimited file.
pub trait CsvRecord {
    /// Column names, in output order.
    const HEADER: &'static [&'static str];

    /// Field values, one per header column.
    fn to_record(&self) -> Vec<String>;
}

/// Flattens a term list into a single field.
pub fn join_terms(terms: &[&str]) -> String {
    terms.join(TERM_SEPARATOR)
}
