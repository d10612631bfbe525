//! # Mutation Recorder
//!
//! Accumulates inserts and deletes against a virtual document without ever
//! materializing its text, then collapses them into a [`SimplifiedDiff`]
//! against the original document.
//!
//! ## Model
//!
//! The virtual document is a sequence of chunks. It starts as one unbounded
//! copy of the original document; every mutation only splits chunks and
//! splices the sequence. The trailing chunk is always the unbounded copy,
//! since no finite offset can reach past it.
//!
//! ## Cost
//!
//! Locating an offset is linear in the number of chunks, which is at most
//! about twice the number of recorded edits. That is fine for interactive
//! batches; very large batch imports would want an order-preserving tree
//! instead of a `Vec`.

use crate::chunk::{Chunk, ChunkLen};
use crate::diff::{merge_adjacent_deletes, SimplifiedAction, SimplifiedDiff};
use crate::MutationError;

/// Records edits in virtual coordinates for one reconciliation pass
#[derive(Debug, Clone)]
pub struct MutationRecorder {
    chunks: Vec<Chunk>,

    /// Current virtual length, tracked only when the base length is known
    virtual_len: Option<usize>,
}

impl Default for MutationRecorder {
    fn default() -> Self {
        Self::new()
    }
}

impl MutationRecorder {
    /// Create a recorder over a base document of unknown length.
    ///
    /// Offsets cannot be range-checked; only inverted delete spans are
    /// rejected.
    pub fn new() -> Self {
        Self {
            chunks: vec![Chunk::whole_document()],
            virtual_len: None,
        }
    }

    /// Create a recorder over a base document of `base_len` chars.
    ///
    /// The chunk model is identical to [`MutationRecorder::new`]; the length
    /// is only used to reject out-of-range offsets.
    pub fn with_base_len(base_len: usize) -> Self {
        Self {
            chunks: vec![Chunk::whole_document()],
            virtual_len: Some(base_len),
        }
    }

    /// Current virtual document length, if the base length is known
    pub fn virtual_len(&self) -> Option<usize> {
        self.virtual_len
    }

    pub fn chunk_count(&self) -> usize {
        self.chunks.len()
    }

    /// True until the first mutation that touches the chunk sequence
    pub fn is_pristine(&self) -> bool {
        matches!(
            self.chunks.as_slice(),
            [Chunk::Copy {
                start: 0,
                len: ChunkLen::Unbounded
            }]
        )
    }

    /// Insert `text` at virtual offset `index`.
    pub fn insert(&mut self, index: usize, text: &str) -> Result<(), MutationError> {
        self.check_offset(index)?;

        let added = text.chars().count();
        let boundary = self.split_at(index);
        self.chunks.insert(boundary, Chunk::insert(text));

        if let Some(len) = &mut self.virtual_len {
            *len += added;
        }

        tracing::trace!(index, len = added, chunks = self.chunks.len(), "recorded insert");
        Ok(())
    }

    /// Delete the virtual span `[start, end)`. An empty span is a no-op.
    pub fn delete(&mut self, start: usize, end: usize) -> Result<(), MutationError> {
        if start > end {
            return Err(MutationError::InvertedRange { start, end });
        }
        if start == end {
            return Ok(());
        }
        self.check_offset(end)?;

        // Splitting at `start` only adds a boundary, so `end` is searched in
        // the updated sequence without any offset correction.
        let first = self.split_at(start);
        let last = self.split_at(end);
        self.chunks.drain(first..last);

        if let Some(len) = &mut self.virtual_len {
            *len -= end - start;
        }

        tracing::trace!(start, end, chunks = self.chunks.len(), "recorded delete");
        Ok(())
    }

    /// Collapse everything recorded so far into a simplified diff.
    ///
    /// Consumes the recorder: a recording pass produces exactly one diff.
    pub fn extract_simplified_diff(self) -> SimplifiedDiff {
        let mut chunks = coalesce_inserts(self.chunks);

        let mut next_copy_start = match chunks.pop() {
            Some(Chunk::Copy {
                start,
                len: ChunkLen::Unbounded,
            }) => start,
            other => unreachable!("chunk sequence must end with the unbounded copy, found {other:?}"),
        };

        let mut actions = Vec::new();
        for chunk in chunks.into_iter().rev() {
            match chunk {
                Chunk::Copy {
                    start,
                    len: ChunkLen::Finite(len),
                } => {
                    let end = start + len;
                    if next_copy_start > end {
                        actions.push(SimplifiedAction::Delete {
                            start: end,
                            end: next_copy_start,
                        });
                    }
                    next_copy_start = start;
                }
                Chunk::Copy {
                    len: ChunkLen::Unbounded,
                    ..
                } => unreachable!("only the trailing copy chunk is unbounded"),
                Chunk::Insert { text, .. } => {
                    actions.push(SimplifiedAction::Insert {
                        start: next_copy_start,
                        text,
                    });
                }
            }
        }

        // Original text before the first surviving copy was deleted too.
        if next_copy_start > 0 {
            actions.push(SimplifiedAction::Delete {
                start: 0,
                end: next_copy_start,
            });
        }

        let emitted = actions.len();
        let actions = merge_adjacent_deletes(actions);
        tracing::debug!(emitted, actions = actions.len(), "extracted simplified diff");

        SimplifiedDiff::from_actions(actions)
    }

    fn check_offset(&self, offset: usize) -> Result<(), MutationError> {
        match self.virtual_len {
            Some(len) if offset > len => Err(MutationError::OutOfBounds { offset, len }),
            _ => Ok(()),
        }
    }

    /// Find the chunk whose virtual interval contains `target`, and the
    /// offset of `target` within it.
    fn locate(&self, target: usize) -> (usize, usize) {
        let mut accumulated = 0;
        for (index, chunk) in self.chunks.iter().enumerate() {
            let offset = target - accumulated;
            match chunk.len() {
                ChunkLen::Finite(len) if offset >= len => accumulated += len,
                _ => return (index, offset),
            }
        }
        unreachable!("the unbounded copy chunk always trails the sequence")
    }

    /// Ensure a chunk boundary at `target` and return the index of the chunk
    /// starting there. A target already on a boundary splits nothing.
    fn split_at(&mut self, target: usize) -> usize {
        let (index, offset) = self.locate(target);
        if offset == 0 {
            return index;
        }

        let right = self.chunks[index].split_off(offset);
        self.chunks.insert(index + 1, right);
        index + 1
    }
}

/// Drop empty inserts and merge runs of inserts into their first chunk.
fn coalesce_inserts(chunks: Vec<Chunk>) -> Vec<Chunk> {
    let mut coalesced: Vec<Chunk> = Vec::with_capacity(chunks.len());

    for chunk in chunks {
        match chunk {
            Chunk::Insert { len: 0, .. } => {}
            Chunk::Insert { text, len } => match coalesced.last_mut() {
                Some(Chunk::Insert {
                    text: run_text,
                    len: run_len,
                }) => {
                    run_text.push_str(&text);
                    *run_len += len;
                }
                _ => coalesced.push(Chunk::Insert { text, len }),
            },
            copy => coalesced.push(copy),
        }
    }

    coalesced
}
