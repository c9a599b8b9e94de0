//! # Error
//!
//! Covers all errors in our module. These arise from validating simulation
//! parameters, constructing sequence or details entries, splitting entries
//! into mates, and writing the simulated datasets out. Errors from other
//! packages are converted to this type so that error handling stays simple.

use std::io;
use std::num::TryFromIntError;
use thiserror::Error;

/// Enum that covers errors in our module.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum Error {
    /// A range whose low end exceeds its high end, or a length/count
    /// below one, was supplied to a simulator.
    #[error("invalid range: {0}")]
    InvalidRange(String),

    /// A sequence entry would have no quality strings, i.e. zero occurrences.
    #[error("sequence entry has zero occurrences")]
    EmptyOccurrence,

    /// Quality strings (or a tag and its qualities) differ in length.
    #[error("length mismatch: expected {expected}, found {found}")]
    LengthMismatch {
        /// The length every string should have
        expected: usize,
        /// The offending length
        found: usize,
    },

    /// Mates can only be produced from tags at least two symbols long.
    #[error("cannot split a tag of length {0} into mates")]
    SplitBoundary(usize),

    /// Symbol is not one of A, C, G, T, N
    #[error("invalid base: `{0}`")]
    InvalidBase(String),

    /// Quality symbol outside the printable Phred+33 range
    #[error("invalid quality symbol: `{0}`")]
    InvalidQuality(char),

    /// Error upon conversion from integer
    #[error("integer conversion error: `{0}`")]
    IntConversionError(#[from] TryFromIntError),

    /// Error parsing JSON
    #[error("JSON parsing error: `{0}`")]
    JsonParseError(#[from] serde_json::Error),

    /// Problem writing delimited output
    #[error("error writing tab-separated output: `{0}`")]
    CsvError(#[from] csv::Error),

    /// Generic Input-Output error
    #[error("input output error: `{0}`")]
    InputOutputError(#[from] io::Error),
}
