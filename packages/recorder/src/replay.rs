//! Replay targets for simplified diffs.
//!
//! An editor widget maps absolute char offsets to its own positions and
//! performs the actual mutation; it plugs in by implementing
//! [`EditorAdapter`].

use crate::ReplayError;

/// Receiver of simplified actions, in original-document char offsets
pub trait EditorAdapter {
    /// Insert `text` at `offset`
    fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), ReplayError>;

    /// Delete the half-open span `[start, end)`
    fn delete_range(&mut self, start: usize, end: usize) -> Result<(), ReplayError>;
}

/// Plain string target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StringBuffer {
    text: String,
}

impl StringBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn into_string(self) -> String {
        self.text
    }

    /// Byte index of the char at `offset`; `offset == len` maps to the end.
    fn byte_index(&self, offset: usize) -> Result<usize, ReplayError> {
        let mut chars = 0;
        for (index, _) in self.text.char_indices() {
            if chars == offset {
                return Ok(index);
            }
            chars += 1;
        }

        if chars == offset {
            Ok(self.text.len())
        } else {
            Err(ReplayError::OffsetOutOfRange { offset, len: chars })
        }
    }
}

impl EditorAdapter for StringBuffer {
    fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), ReplayError> {
        let index = self.byte_index(offset)?;
        self.text.insert_str(index, text);
        Ok(())
    }

    fn delete_range(&mut self, start: usize, end: usize) -> Result<(), ReplayError> {
        if start > end {
            return Err(ReplayError::InvertedRange { start, end });
        }
        let end_index = self.byte_index(end)?;
        let start_index = self.byte_index(start)?;
        self.text.replace_range(start_index..end_index, "");
        Ok(())
    }
}

impl EditorAdapter for String {
    fn insert_text(&mut self, offset: usize, text: &str) -> Result<(), ReplayError> {
        let mut buffer = StringBuffer::new(std::mem::take(self));
        let result = buffer.insert_text(offset, text);
        *self = buffer.into_string();
        result
    }

    fn delete_range(&mut self, start: usize, end: usize) -> Result<(), ReplayError> {
        let mut buffer = StringBuffer::new(std::mem::take(self));
        let result = buffer.delete_range(start, end);
        *self = buffer.into_string();
        result
    }
}
