//! Gambling-Related Cognitions Scale (6-item subset)
//!
//! Items are tagged with their number in the full published instrument,
//! which is why the numbering is not contiguous. The scale is displayed
//! from "strongly agree" down to "strongly disagree", the reverse of the
//! published coding, so every response is reverse-coded on the way out:
//! 1 = strongly disagree, 7 = strongly agree.

use itertools::Itertools;
use tracing::trace;

use crate::{
    constants::grcs::{ITEM_COUNT, REVERSE_OFFSET, SCALE_LENGTH},
    error::{Error, Result},
};

use super::{
    config::{QuestionDescriptor, Task},
    response::selected_index,
};

/// Agreement labels in display order
pub const LABELS: [&str; SCALE_LENGTH] = [
    "strongly agree",
    "moderately agree",
    "mildly agree",
    "neither agree nor disagree",
    "mildly disagree",
    "moderately disagree",
    "strongly disagree",
];

const ITEMS: [(u32, &str); ITEM_COUNT] = [
    (
        4,
        "Losses when gambling, are bound to be followed by a series of wins.",
    ),
    (
        9,
        "A series of losses will provide me with a learning experience and that will help me win later.",
    ),
    (
        14,
        "When I have a win once, I will definitely have a win again.",
    ),
    (
        19,
        "There are times that I feel lucky and thus, gamble those times only.",
    ),
    (22, "I have some control over predicting my gambling wins."),
    (
        23,
        "If I keep changing my guesses, I have less chance of winning than if I keep the same guesses every time.",
    ),
];

/// Scores a GRCS `responses` payload
///
/// Shifts the selection to 1-based and reverses it: `8 - (index + 1)`.
/// Indices in `[0, 6]` land in `[1, 7]`; anything else passes through.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or coding the selection
/// overflows.
pub fn score(responses: &str) -> Result<i64> {
    let index = selected_index(responses)?;
    let resp = index
        .checked_add(1)
        .and_then(|one_based| REVERSE_OFFSET.checked_sub(one_based))
        .ok_or(Error::SelectionOutOfRange { index })?;
    trace!(index, resp, "grcs score");
    Ok(resp)
}

/// Builds the six items in presentation order
pub fn items() -> Vec<QuestionDescriptor> {
    ITEMS
        .iter()
        .zip(1..)
        .map(|(&(number, text), position)| {
            QuestionDescriptor::new(
                Task::Grcs,
                number,
                None,
                format!("Q {position}/{ITEM_COUNT}:\n{text}"),
                &LABELS,
            )
        })
        .collect_vec()
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    fn payload(index: i64) -> String {
        format!("{{\"Q0\":{index}}}")
    }

    #[test]
    fn test_score_reverses_onto_one_based_scale() {
        for i in 0..7 {
            let resp = score(&payload(i)).unwrap();
            assert_eq!(resp, 7 - i);
            assert!((1..=7).contains(&resp));
        }
    }

    #[test]
    fn test_score_extremes() {
        assert_eq!(score(&payload(0)).unwrap(), 7);
        assert_eq!(score(&payload(6)).unwrap(), 1);
    }

    #[test]
    fn test_score_ignores_other_slots() {
        assert_eq!(score(r#"{"Q0":3,"Q1":0}"#).unwrap(), 4);
    }

    #[test]
    fn test_score_overflow_is_an_error() {
        assert!(matches!(
            score(&payload(i64::MAX)),
            Err(Error::SelectionOutOfRange { index: i64::MAX })
        ));
        assert!(matches!(
            score(&payload(i64::MIN)),
            Err(Error::SelectionOutOfRange { index: i64::MIN })
        ));
        assert_eq!(score(&payload(-1)).unwrap(), 8);
    }

    #[test]
    fn test_score_propagates_payload_errors() {
        assert!(matches!(
            score(r#"{"Q0":null}"#),
            Err(Error::NonIntegerSelection { .. })
        ));
        assert!(matches!(score("{}"), Err(Error::MissingSlot(_))));
    }

    #[test]
    fn test_items_use_instrument_numbers() {
        let items = items();
        assert_eq!(items.len(), 6);
        assert_eq!(
            items.iter().map(QuestionDescriptor::question_number).collect_vec(),
            vec![4, 9, 14, 19, 22, 23]
        );
        assert!(items.iter().all(|item| item.factor().is_none()));
    }

    #[test]
    fn test_items_share_scale_and_flags() {
        for item in items() {
            assert_eq!(item.task(), Task::Grcs);
            assert_eq!(item.labels(), LABELS);
            assert_eq!(item.labels().len(), SCALE_LENGTH);
            assert!(item.required());
        }
    }

    #[test]
    fn test_item_prompts_use_position_not_number() {
        let items = items();
        assert_eq!(
            items[4].prompt(),
            "Q 5/6:\nI have some control over predicting my gambling wins."
        );
    }
}
