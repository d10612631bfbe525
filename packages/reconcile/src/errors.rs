//! Error types for reconciliation

use textsync_recorder::{MutationError, ReplayError};
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ReconcileError {
    #[error("Mutation error: {0}")]
    Mutation(#[from] MutationError),

    #[error("Replay error: {0}")]
    Replay(#[from] ReplayError),

    #[error("Patch {index} could not be located in the document")]
    Unlocated { index: usize },

    #[error("Edit starting at {start} precedes the previous edit ending at {previous_end}")]
    OutOfOrder { start: usize, previous_end: usize },
}
