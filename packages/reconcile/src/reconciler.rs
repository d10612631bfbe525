//! # Reconciler
//!
//! Drives a [`MutationRecorder`] from patches located against a base text.
//!
//! Edits arrive in base coordinates, in increasing order. Each one is
//! shifted into virtual coordinates by the net length change of the edits
//! already recorded, so the recorder always sees offsets into the document
//! as it stands after the previous edits.

use crate::edit::{LocatedPatch, PositionedEdit};
use crate::{ReconcileConfig, ReconcileError};
use textsync_recorder::{MutationError, MutationRecorder, SimplifiedDiff};

/// Result of reconciling one batch of patches
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reconciliation {
    /// Simplified diff against the base text
    pub diff: SimplifiedDiff,

    /// Base text with the diff applied
    pub text: String,

    /// Indices of patches skipped because they could not be located
    pub skipped: Vec<usize>,
}

#[derive(Debug, Clone, Default)]
pub struct Reconciler {
    config: ReconcileConfig,
}

impl Reconciler {
    pub fn new(config: ReconcileConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ReconcileConfig {
        &self.config
    }

    /// Record positioned edits and extract the simplified diff.
    ///
    /// `base_len` enables bounds checking when the config asks for it.
    pub fn record_edits<I>(
        &self,
        base_len: Option<usize>,
        edits: I,
    ) -> Result<SimplifiedDiff, ReconcileError>
    where
        I: IntoIterator<Item = PositionedEdit>,
    {
        let mut recorder = match base_len {
            Some(len) if self.config.check_bounds => MutationRecorder::with_base_len(len),
            _ => MutationRecorder::new(),
        };

        // Net shift between base and virtual offsets, kept unsigned. Every
        // deleted span lies before the current edit, so `deleted <= start`.
        let mut inserted = 0usize;
        let mut deleted = 0usize;
        let mut previous_end = 0usize;

        for edit in edits {
            if edit.start() < previous_end {
                return Err(ReconcileError::OutOfOrder {
                    start: edit.start(),
                    previous_end,
                });
            }

            match &edit {
                PositionedEdit::Insert { at, text } => {
                    recorder.insert(at - deleted + inserted, text)?;
                    inserted += text.chars().count();
                }
                PositionedEdit::Delete { start, end } => {
                    if start > end {
                        return Err(MutationError::InvertedRange {
                            start: *start,
                            end: *end,
                        }
                        .into());
                    }
                    recorder.delete(start - deleted + inserted, end - deleted + inserted)?;
                    deleted += end - start;
                }
            }
            previous_end = edit.end();
        }

        Ok(recorder.extract_simplified_diff())
    }

    /// Reconcile located patches against `base`.
    pub fn reconcile(
        &self,
        base: &str,
        patches: &[LocatedPatch],
    ) -> Result<Reconciliation, ReconcileError> {
        let mut edits = Vec::new();
        let mut skipped = Vec::new();

        for (index, patch) in patches.iter().enumerate() {
            match patch.edits() {
                Some(patch_edits) => edits.extend(patch_edits),
                None if self.config.skip_unlocated => {
                    tracing::warn!(index, "skipping patch that could not be located");
                    skipped.push(index);
                }
                None => return Err(ReconcileError::Unlocated { index }),
            }
        }

        let edit_count = edits.len();
        let diff = self.record_edits(Some(base.chars().count()), edits)?;
        let text = diff.apply_to(base)?;

        tracing::debug!(
            patches = patches.len(),
            skipped = skipped.len(),
            edits = edit_count,
            actions = diff.len(),
            "reconciled patch batch"
        );

        Ok(Reconciliation {
            diff,
            text,
            skipped,
        })
    }
}
