//! # Patch Edits
//!
//! Input shapes produced by the fuzzy matcher: diff tokens in document
//! order, located against the base text, and the literal positioned edits
//! they expand into.

use serde::{Deserialize, Serialize};

/// Kind of a diff token
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffOp {
    Equal,
    Insert,
    Delete,
}

/// One `(op, text)` token of a patch's content diff
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffToken {
    pub op: DiffOp,
    pub text: String,
}

impl DiffToken {
    pub fn equal(text: impl Into<String>) -> Self {
        Self {
            op: DiffOp::Equal,
            text: text.into(),
        }
    }

    pub fn insert(text: impl Into<String>) -> Self {
        Self {
            op: DiffOp::Insert,
            text: text.into(),
        }
    }

    pub fn delete(text: impl Into<String>) -> Self {
        Self {
            op: DiffOp::Delete,
            text: text.into(),
        }
    }

    /// Length in chars
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

/// Literal edit in base-document char offsets
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum PositionedEdit {
    Insert { at: usize, text: String },
    Delete { start: usize, end: usize },
}

impl PositionedEdit {
    pub fn start(&self) -> usize {
        match self {
            PositionedEdit::Insert { at, .. } => *at,
            PositionedEdit::Delete { start, .. } => *start,
        }
    }

    /// End of the affected base span. Inserts are zero-width.
    pub fn end(&self) -> usize {
        match self {
            PositionedEdit::Insert { at, .. } => *at,
            PositionedEdit::Delete { end, .. } => *end,
        }
    }
}

/// A patch after the matcher tried to place it in the base text
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocatedPatch {
    /// Base offset of the first token; `None` if the patch was not found
    pub start: Option<usize>,
    pub tokens: Vec<DiffToken>,
}

impl LocatedPatch {
    pub fn located(start: usize, tokens: Vec<DiffToken>) -> Self {
        Self {
            start: Some(start),
            tokens,
        }
    }

    pub fn unlocated(tokens: Vec<DiffToken>) -> Self {
        Self {
            start: None,
            tokens,
        }
    }

    pub fn is_located(&self) -> bool {
        self.start.is_some()
    }

    /// Expand the tokens into positioned edits, or `None` if unlocated.
    ///
    /// Equal and deleted text advance the base cursor; inserted text lands
    /// at the cursor without advancing it.
    pub fn edits(&self) -> Option<Vec<PositionedEdit>> {
        let mut cursor = self.start?;
        let mut edits = Vec::new();

        for token in self.tokens.iter().filter(|token| !token.is_empty()) {
            match token.op {
                DiffOp::Equal => cursor += token.len(),
                DiffOp::Insert => edits.push(PositionedEdit::Insert {
                    at: cursor,
                    text: token.text.clone(),
                }),
                DiffOp::Delete => {
                    let end = cursor + token.len();
                    edits.push(PositionedEdit::Delete { start: cursor, end });
                    cursor = end;
                }
            }
        }

        Some(edits)
    }
}
