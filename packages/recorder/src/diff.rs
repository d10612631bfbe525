//! # Simplified Diff
//!
//! The output of a recording pass: non-overlapping edits expressed in
//! original-document coordinates, ordered from the end of the document
//! toward the beginning.
//!
//! ## Replay discipline
//!
//! Actions must be applied in the order they are stored. Because every
//! action sits at or before the actions preceding it, applying one never
//! shifts the offsets of the ones still pending.

use crate::replay::{EditorAdapter, StringBuffer};
use crate::ReplayError;
use serde::{Deserialize, Serialize};

/// One edit against the original document
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SimplifiedAction {
    /// Delete the half-open span `[start, end)`
    Delete { start: usize, end: usize },

    /// Insert `text` at `start`
    Insert { start: usize, text: String },
}

impl SimplifiedAction {
    pub fn start(&self) -> usize {
        match self {
            SimplifiedAction::Delete { start, .. } | SimplifiedAction::Insert { start, .. } => {
                *start
            }
        }
    }

    /// End of the affected original span. Inserts are zero-width.
    pub fn end(&self) -> usize {
        match self {
            SimplifiedAction::Delete { end, .. } => *end,
            SimplifiedAction::Insert { start, .. } => *start,
        }
    }
}

/// Ordered end-to-beginning list of simplified actions
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SimplifiedDiff {
    actions: Vec<SimplifiedAction>,
}

impl SimplifiedDiff {
    pub(crate) fn from_actions(actions: Vec<SimplifiedAction>) -> Self {
        Self { actions }
    }

    pub fn actions(&self) -> &[SimplifiedAction] {
        &self.actions
    }

    pub fn into_actions(self) -> Vec<SimplifiedAction> {
        self.actions
    }

    pub fn len(&self) -> usize {
        self.actions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SimplifiedAction> {
        self.actions.iter()
    }

    /// Apply every action to `target`, end to beginning.
    ///
    /// Stops at the first action the target rejects; the target is then
    /// partially updated and should be resynchronised by the caller.
    pub fn replay<E: EditorAdapter + ?Sized>(&self, target: &mut E) -> Result<(), ReplayError> {
        for action in &self.actions {
            match action {
                SimplifiedAction::Delete { start, end } => target.delete_range(*start, *end)?,
                SimplifiedAction::Insert { start, text } => target.insert_text(*start, text)?,
            }
        }
        Ok(())
    }

    /// Replay onto a copy of `base` and return the result.
    pub fn apply_to(&self, base: &str) -> Result<String, ReplayError> {
        let mut buffer = StringBuffer::new(base);
        self.replay(&mut buffer)?;
        Ok(buffer.into_string())
    }
}

impl IntoIterator for SimplifiedDiff {
    type Item = SimplifiedAction;
    type IntoIter = std::vec::IntoIter<SimplifiedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.into_iter()
    }
}

impl<'a> IntoIterator for &'a SimplifiedDiff {
    type Item = &'a SimplifiedAction;
    type IntoIter = std::slice::Iter<'a, SimplifiedAction>;

    fn into_iter(self) -> Self::IntoIter {
        self.actions.iter()
    }
}

/// Collapse deletes that touch their neighbour in the list.
///
/// Only directly consecutive deletes are merged; a delete separated from
/// another by an insert at the shared boundary stays distinct.
pub(crate) fn merge_adjacent_deletes(actions: Vec<SimplifiedAction>) -> Vec<SimplifiedAction> {
    let mut merged: Vec<SimplifiedAction> = Vec::with_capacity(actions.len());

    for action in actions {
        if let (
            Some(SimplifiedAction::Delete {
                start: later_start, ..
            }),
            SimplifiedAction::Delete { start, end },
        ) = (merged.last_mut(), &action)
        {
            if *end == *later_start {
                *later_start = *start;
                continue;
            }
        }
        merged.push(action);
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    fn delete(start: usize, end: usize) -> SimplifiedAction {
        SimplifiedAction::Delete { start, end }
    }

    fn insert(start: usize, text: &str) -> SimplifiedAction {
        SimplifiedAction::Insert {
            start,
            text: text.to_string(),
        }
    }

    #[test]
    fn test_merge_collapses_unit_deletes() {
        let actions = vec![delete(4, 5), delete(3, 4), delete(2, 3)];
        assert_eq!(merge_adjacent_deletes(actions), vec![delete(2, 5)]);
    }

    #[test]
    fn test_merge_keeps_separated_deletes() {
        let actions = vec![delete(6, 8), delete(2, 3)];
        assert_eq!(
            merge_adjacent_deletes(actions.clone()),
            actions,
            "Non-adjacent deletes must not be merged"
        );
    }

    #[test]
    fn test_merge_does_not_cross_inserts() {
        let actions = vec![delete(4, 6), insert(4, "x"), delete(2, 4)];
        assert_eq!(merge_adjacent_deletes(actions.clone()), actions);
    }

    #[test]
    fn test_action_json_shape() {
        let json = serde_json::to_string(&insert(3, "XY")).unwrap();
        assert_eq!(json, r#"{"type":"insert","start":3,"text":"XY"}"#);

        let json = serde_json::to_string(&delete(0, 1)).unwrap();
        assert_eq!(json, r#"{"type":"delete","start":0,"end":1}"#);
    }

    #[test]
    fn test_diff_serializes_as_array() {
        let diff = SimplifiedDiff::from_actions(vec![insert(3, "XY"), delete(0, 1)]);
        let json = serde_json::to_string(&diff).unwrap();
        assert!(json.starts_with('['));

        let parsed: SimplifiedDiff = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, diff);
    }

    #[test]
    fn test_iteration_preserves_replay_order() {
        let diff = SimplifiedDiff::from_actions(vec![insert(5, "!"), delete(1, 3)]);

        let starts: Vec<usize> = diff.iter().map(SimplifiedAction::start).collect();
        assert_eq!(starts, vec![5, 1]);

        let mut ends = Vec::new();
        for action in &diff {
            ends.push(action.end());
        }
        assert_eq!(ends, vec![5, 3]);

        let owned: Vec<SimplifiedAction> = diff.clone().into_iter().collect();
        assert_eq!(owned, diff.into_actions());
    }

    #[test]
    fn test_apply_to_back_to_front() {
        let diff = SimplifiedDiff::from_actions(vec![insert(3, "XY"), delete(0, 1)]);
        assert_eq!(diff.apply_to("abcdef").unwrap(), "bcXYdef");
    }
}
