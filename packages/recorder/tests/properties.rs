//! Property tests: replaying the simplified diff must reproduce direct
//! application of the recorded edits.

use proptest::prelude::*;
use textsync_recorder::{MutationRecorder, SimplifiedAction};

/// Raw edit; offsets are folded into range against the current length
#[derive(Debug, Clone)]
enum EditOp {
    Insert { at: usize, text: String },
    Delete { at: usize, len: usize },
}

fn arb_edit_op() -> impl Strategy<Value = EditOp> {
    prop_oneof![
        (0..64usize, "[a-cé☃]{0,4}").prop_map(|(at, text)| EditOp::Insert { at, text }),
        (0..64usize, 0..8usize).prop_map(|(at, len)| EditOp::Delete { at, len }),
    ]
}

/// Apply the ops directly to a char buffer while recording them.
fn record(base: &str, ops: &[EditOp]) -> (MutationRecorder, String) {
    let mut recorder = MutationRecorder::with_base_len(base.chars().count());
    let mut text: Vec<char> = base.chars().collect();

    for op in ops {
        match op {
            EditOp::Insert { at, text: inserted } => {
                let index = at % (text.len() + 1);
                recorder.insert(index, inserted).unwrap();
                text.splice(index..index, inserted.chars());
            }
            EditOp::Delete { at, len } => {
                let start = at % (text.len() + 1);
                let end = start + len % (text.len() - start + 1);
                recorder.delete(start, end).unwrap();
                text.drain(start..end);
            }
        }
    }

    (recorder, text.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_replay_matches_direct_application(
        base in "[a-z0-9é]{0,24}",
        ops in prop::collection::vec(arb_edit_op(), 0..24)
    ) {
        let (recorder, expected) = record(&base, &ops);
        let diff = recorder.extract_simplified_diff();

        prop_assert_eq!(diff.apply_to(&base).unwrap(), expected);
    }

    #[test]
    fn prop_actions_are_ordered_and_disjoint(
        base in "[a-z]{0,24}",
        ops in prop::collection::vec(arb_edit_op(), 0..24)
    ) {
        let (recorder, _) = record(&base, &ops);
        let diff = recorder.extract_simplified_diff();
        let actions = diff.actions();

        for pair in actions.windows(2) {
            prop_assert!(pair[1].end() <= pair[0].start(), "not end-to-beginning: {:?}", pair);
        }

        let deletes: Vec<_> = actions
            .iter()
            .filter(|action| matches!(action, SimplifiedAction::Delete { .. }))
            .collect();
        for pair in deletes.windows(2) {
            prop_assert!(pair[1].end() < pair[0].start(), "adjacent deletes: {:?}", pair);
        }

        for action in actions {
            match action {
                SimplifiedAction::Insert { text, .. } => prop_assert!(!text.is_empty()),
                SimplifiedAction::Delete { start, end } => prop_assert!(start < end),
            }
        }
    }
}
