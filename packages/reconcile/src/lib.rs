//! # textsync reconcile
//!
//! Replays patches located by the fuzzy matcher into a
//! [`MutationRecorder`](textsync_recorder::MutationRecorder) and returns
//! the simplified diff for the editor to apply.
//!
//! ```rust
//! use textsync_reconcile::{DiffToken, LocatedPatch, Reconciler};
//!
//! let base = "The quick brown fox";
//! let patches = vec![LocatedPatch::located(
//!     4,
//!     vec![
//!         DiffToken::equal("quick "),
//!         DiffToken::delete("brown"),
//!         DiffToken::insert("red"),
//!     ],
//! )];
//!
//! let result = Reconciler::default().reconcile(base, &patches).unwrap();
//! assert_eq!(result.text, "The quick red fox");
//! ```

mod config;
mod edit;
mod errors;
mod reconciler;

pub use config::{ReconcileConfig, DEFAULT_CONFIG_NAME};
pub use edit::{DiffOp, DiffToken, LocatedPatch, PositionedEdit};
pub use errors::ReconcileError;
pub use reconciler::{Reconciler, Reconciliation};

pub use textsync_recorder::{
    EditorAdapter, MutationError, MutationRecorder, ReplayError, SimplifiedAction,
    SimplifiedDiff, StringBuffer,
};
