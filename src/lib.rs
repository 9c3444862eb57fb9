//! # Gambling Scales
//!
//! Question definitions and response scoring for two gambling
//! questionnaires run inside a browser-based experiment: the Problem
//! Gambling Severity Index (PGSI) and a 6-item subset of the
//! Gambling-Related Cognitions Scale (GRCS). Rendering the questions is
//! left to an external survey engine; this crate provides the question
//! lists, the trial JSON the engine consumes, and the completion step that
//! scores each returned result.

#![cfg_attr(all(coverage_nightly, test), feature(coverage_attribute))]
#![deny(missing_docs)]
#![deny(rustdoc::missing_crate_level_docs)]
#![warn(clippy::pedantic)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod constants;
pub mod error;
pub mod questionnaire;
pub mod session;

pub use error::{Error, Result};
pub use questionnaire::{
    config::{Coding, QuestionDescriptor, Questionnaire, Task},
    grcs::score as score_grcs,
    pgsi::{Factor, score as score_pgsi},
    response::{RawResult, ScoredResult},
    trial::Trial,
};
pub use session::Runner;

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn test_top_level_scoring_contract() {
        assert_eq!(score_pgsi(r#"{"Q0":2}"#, Coding::from(0_u8)).unwrap(), 2);
        assert_eq!(score_pgsi(r#"{"Q0":2}"#, Coding::from(1_u8)).unwrap(), 3);
        assert_eq!(score_grcs(r#"{"Q0":2}"#).unwrap(), 5);
    }

    #[test]
    fn test_label_count_matches_scoring_range() {
        for questionnaire in [Questionnaire::pgsi(), Questionnaire::grcs()] {
            let expected = questionnaire.task().scale_length();
            assert!(
                questionnaire
                    .items()
                    .iter()
                    .all(|item| item.labels().len() == expected)
            );
        }
        assert_eq!(Task::Pgsi.scale_length(), 4);
        assert_eq!(Task::Grcs.scale_length(), 7);
    }

    #[test]
    fn test_questionnaires_are_independent() {
        let pgsi = Questionnaire::pgsi();
        let grcs = Questionnaire::grcs();

        assert_eq!(pgsi.len(), 9);
        assert_eq!(grcs.len(), 6);
        assert!(pgsi.items().iter().all(|item| item.task() == Task::Pgsi));
        assert!(grcs.items().iter().all(|item| item.task() == Task::Grcs));
    }
}
