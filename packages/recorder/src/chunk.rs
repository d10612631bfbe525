//! Chunks of the virtual document.
//!
//! A chunk is either a reference into the original document (`Copy`) or
//! literal text introduced by an edit (`Insert`). Offsets and lengths are
//! counted in chars.

/// Length of a chunk. Only the trailing copy chunk is ever `Unbounded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChunkLen {
    Finite(usize),
    /// Rest of the original document, whose length is unknown
    Unbounded,
}

impl ChunkLen {
    /// Whether `offset` is a valid split point short of the chunk's end.
    /// Splits also require `offset > 0`, so both halves are non-empty.
    pub(crate) fn contains(self, offset: usize) -> bool {
        match self {
            ChunkLen::Finite(len) => offset < len,
            ChunkLen::Unbounded => true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Chunk {
    /// Span of the original document, inherited unchanged
    Copy { start: usize, len: ChunkLen },

    /// Literal text with no relation to the original document
    Insert { text: String, len: usize },
}

impl Chunk {
    /// The chunk every recorder starts from: all of the original document.
    pub fn whole_document() -> Self {
        Chunk::Copy {
            start: 0,
            len: ChunkLen::Unbounded,
        }
    }

    pub fn insert(text: &str) -> Self {
        Chunk::Insert {
            text: text.to_string(),
            len: text.chars().count(),
        }
    }

    pub fn len(&self) -> ChunkLen {
        match self {
            Chunk::Copy { len, .. } => *len,
            Chunk::Insert { len, .. } => ChunkLen::Finite(*len),
        }
    }

    /// Split this chunk `offset` chars into its content.
    ///
    /// `self` keeps the left half and the right half is returned. The offset
    /// must lie strictly inside the chunk; boundary splits are resolved by the
    /// caller without touching the chunk.
    pub fn split_off(&mut self, offset: usize) -> Chunk {
        debug_assert!(offset > 0 && self.len().contains(offset));

        match self {
            Chunk::Copy { start, len } => {
                let right_len = match *len {
                    ChunkLen::Finite(total) => ChunkLen::Finite(total - offset),
                    ChunkLen::Unbounded => ChunkLen::Unbounded,
                };
                *len = ChunkLen::Finite(offset);
                Chunk::Copy {
                    start: *start + offset,
                    len: right_len,
                }
            }
            Chunk::Insert { text, len } => {
                let byte_index = text
                    .char_indices()
                    .nth(offset)
                    .map(|(index, _)| index)
                    .unwrap_or(text.len());
                let suffix = text.split_off(byte_index);
                let right_len = *len - offset;
                *len = offset;
                Chunk::Insert {
                    text: suffix,
                    len: right_len,
                }
            }
        }
    }
}
