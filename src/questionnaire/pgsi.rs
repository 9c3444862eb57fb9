//! Problem Gambling Severity Index
//!
//! Nine frequency items answered on a 4-point scale. Each item carries a
//! factor label naming the behaviour it screens for. The shipped
//! configuration scores every item with forward coding, so the stored
//! response is the raw zero-based index.

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::{
    constants::pgsi::{ITEM_COUNT, REVERSE_OFFSET, SCALE_LENGTH},
    error::{Error, Result},
};

use super::{
    config::{Coding, QuestionDescriptor, Task},
    response::selected_index,
};

/// Frequency labels in display order
pub const LABELS: [&str; SCALE_LENGTH] = ["Never", "Sometimes", "Most of the time", "Almost always"];

/// Behaviour an item screens for
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "kebab-case")]
pub enum Factor {
    /// Betting more than one can afford to lose
    #[display("bet")]
    Bet,
    /// Needing larger stakes for the same excitement
    #[display("tolerance")]
    Tolerance,
    /// Returning to win back losses
    #[display("chase")]
    Chase,
    /// Borrowing or selling to fund gambling
    #[display("borrowed")]
    Borrowed,
    /// Feeling one might have a gambling problem
    #[display("felt-problem")]
    FeltProblem,
    /// Being criticized for gambling
    #[display("criticized")]
    Criticized,
    /// Feeling guilty about gambling
    #[display("felt-guilty")]
    FeltGuilty,
    /// Gambling causing health problems
    #[display("health-problem")]
    HealthProblem,
    /// Gambling causing financial problems
    #[display("financial-problem")]
    FinancialProblem,
}

const ITEMS: [(Factor, &str); ITEM_COUNT] = [
    (
        Factor::Bet,
        "How often have you bet more than you could afford to lose?",
    ),
    (
        Factor::Tolerance,
        "How often have you needed to gamble with larger amounts of money to get the same feeling of excitement?",
    ),
    (
        Factor::Chase,
        "How often have you gone back another day to try to win back the money you lost?",
    ),
    (
        Factor::Borrowed,
        "How often have you borrowed money or sold anything to get money to gamble?",
    ),
    (
        Factor::FeltProblem,
        "How often have you felt you might have a problem with gambling?",
    ),
    (
        Factor::Criticized,
        "How often have people criticized your betting or told you that you had a gambling problem, regardless of whether or not you thought it was true?",
    ),
    (
        Factor::FeltGuilty,
        "How often have you felt guilty about the way you gamble or what happens when you gamble?",
    ),
    (
        Factor::HealthProblem,
        "How often has your gambling caused you any health problems, including stress or anxiety?",
    ),
    (
        Factor::FinancialProblem,
        "How often has your gambling caused any financial problems for you or your household?",
    ),
];

/// Scores a PGSI `responses` payload
///
/// Forward coding returns the selected index unchanged. Reverse coding
/// returns `5 - index`, which lands in `[2, 5]` rather than `[1, 4]`; the
/// shipped items never reverse-code. Out-of-range indices pass through.
///
/// # Errors
///
/// Returns an error if the payload cannot be read or reverse coding the
/// selection overflows.
pub fn score(responses: &str, coding: Coding) -> Result<i64> {
    let index = selected_index(responses)?;
    let resp = match coding {
        Coding::Forward => index,
        Coding::Reverse => REVERSE_OFFSET
            .checked_sub(index)
            .ok_or(Error::SelectionOutOfRange { index })?,
    };
    trace!(index, ?coding, resp, "pgsi score");
    Ok(resp)
}

/// Builds the nine items in presentation order
///
/// Every item is scored with forward coding.
pub fn items() -> Vec<QuestionDescriptor> {
    ITEMS
        .iter()
        .zip(1..)
        .map(|(&(factor, text), number)| {
            QuestionDescriptor::new(
                Task::Pgsi,
                number,
                Some(factor),
                format!("Q {number}/{ITEM_COUNT}:\n{text}"),
                &LABELS,
            )
        })
        .collect_vec()
}
