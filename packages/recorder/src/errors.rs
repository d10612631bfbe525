//! Error types for the recorder

use thiserror::Error;

/// A recorded mutation broke the caller's contract.
///
/// Once an error is returned the recorder must be discarded; the batch it
/// was recording cannot produce a meaningful diff.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MutationError {
    #[error("Inverted range: start {start} is past end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("Offset {offset} is out of bounds for virtual length {len}")]
    OutOfBounds { offset: usize, len: usize },
}

/// Failure while replaying a simplified diff onto a target.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReplayError {
    #[error("Offset {offset} is out of range for text of length {len}")]
    OffsetOutOfRange { offset: usize, len: usize },

    #[error("Inverted range: start {start} is past end {end}")]
    InvertedRange { start: usize, end: usize },

    #[error("Editor rejected action: {0}")]
    Rejected(String),
}
