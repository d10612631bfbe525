//! # textsync recorder
//!
//! Simplifies a batch of positioned text edits into a minimal,
//! non-overlapping diff against the original document.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │ matcher: located patches → literal edits    │
//! └─────────────────────────────────────────────┘
//!                     ↓  insert / delete (virtual offsets)
//! ┌─────────────────────────────────────────────┐
//! │ recorder: chunk sequence over the base text │
//! │  - split / splice per edit                  │
//! │  - coalesce inserts, merge deletes          │
//! └─────────────────────────────────────────────┘
//!                     ↓  simplified diff (original offsets)
//! ┌─────────────────────────────────────────────┐
//! │ editor adapter: replay end-to-beginning     │
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use textsync_recorder::{MutationRecorder, SimplifiedAction};
//!
//! let mut recorder = MutationRecorder::new();
//! recorder.insert(3, "XY").unwrap();
//! recorder.delete(0, 1).unwrap();
//!
//! let diff = recorder.extract_simplified_diff();
//! assert_eq!(
//!     diff.actions(),
//!     &[
//!         SimplifiedAction::Insert { start: 3, text: "XY".to_string() },
//!         SimplifiedAction::Delete { start: 0, end: 1 },
//!     ]
//! );
//! assert_eq!(diff.apply_to("abcdef").unwrap(), "bcXYdef");
//! ```
//!
//! All offsets are char offsets, not byte offsets.

mod chunk;
mod diff;
mod errors;
mod recorder;
mod replay;

pub use diff::{SimplifiedAction, SimplifiedDiff};
pub use errors::{MutationError, ReplayError};
pub use recorder::MutationRecorder;
pub use replay::{EditorAdapter, StringBuffer};
