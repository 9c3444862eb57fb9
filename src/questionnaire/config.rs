//! Questionnaire configuration and the per-question completion step
//!
//! This module defines the [`Questionnaire`] and [`QuestionDescriptor`]
//! records, their validation rules, and the completion step that stamps a
//! scored response onto the engine's result record. Descriptors are plain
//! data; scoring is dispatched on the descriptor's [`Task`] so it stays
//! testable without a rendering engine.

use garde::Validate;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use serde_with::skip_serializing_none;
use tracing::{debug, trace, warn};

use crate::{
    constants,
    error::{Error, Result},
    session::Runner,
};

use super::{grcs, pgsi, pgsi::Factor, response::RawResult, trial::Trial};

/// The instrument a question belongs to
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display,
)]
pub enum Task {
    /// Problem Gambling Severity Index
    #[serde(rename = "PGSI")]
    #[display("PGSI")]
    Pgsi,
    /// Gambling-Related Cognitions Scale
    #[serde(rename = "GRCS")]
    #[display("GRCS")]
    Grcs,
}

impl Task {
    /// Number of Likert categories the instrument's scoring expects
    pub fn scale_length(self) -> usize {
        match self {
            Self::Pgsi => constants::pgsi::SCALE_LENGTH,
            Self::Grcs => constants::grcs::SCALE_LENGTH,
        }
    }

    /// Scores a `responses` payload with this instrument's scoring function
    ///
    /// `coding` only affects PGSI; GRCS items are always reverse-coded.
    ///
    /// # Errors
    ///
    /// Returns an error if the payload cannot be read.
    pub fn score(self, responses: &str, coding: Coding) -> Result<i64> {
        match self {
            Self::Pgsi => pgsi::score(responses, coding),
            Self::Grcs => grcs::score(responses),
        }
    }
}

/// Whether a response is stored as selected or reverse-coded
///
/// Serialized as the `0`/`1` flag the experiment configuration uses. Any
/// flag other than `1` means forward coding.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "u8", into = "u8")]
pub enum Coding {
    /// Keep the selected index
    #[default]
    Forward,
    /// Invert the selected index on its scale
    Reverse,
}

impl From<u8> for Coding {
    fn from(flag: u8) -> Self {
        if flag == 1 {
            Self::Reverse
        } else {
            Self::Forward
        }
    }
}

impl From<Coding> for u8 {
    fn from(coding: Coding) -> Self {
        match coding {
            Coding::Forward => 0,
            Coding::Reverse => 1,
        }
    }
}

type ValidationResult = garde::Result;

/// Checks the label count against the scale the task's scoring expects
fn validate_label_count(task: Task, labels: &[String]) -> ValidationResult {
    if labels.len() == task.scale_length() {
        Ok(())
    } else {
        Err(garde::Error::new(format!(
            "{task} expects {} labels, found {}",
            task.scale_length(),
            labels.len()
        )))
    }
}

/// Factors only exist on PGSI items
fn validate_factor(task: Task, factor: Option<&Factor>) -> ValidationResult {
    match (task, factor) {
        (Task::Pgsi, Some(_)) | (Task::Grcs, None) => Ok(()),
        (Task::Pgsi, None) => Err(garde::Error::new("PGSI items need a factor")),
        (Task::Grcs, Some(_)) => Err(garde::Error::new("GRCS items have no factor")),
    }
}

/// Every item belongs to the questionnaire's task and has its own number
fn validate_items(task: Task, items: &[QuestionDescriptor]) -> ValidationResult {
    if let Some(item) = items.iter().find(|item| item.task != task) {
        return Err(garde::Error::new(format!(
            "question {} belongs to {}, not {task}",
            item.question_number, item.task
        )));
    }
    if let Some(number) = items.iter().map(|item| item.question_number).duplicates().next() {
        return Err(garde::Error::new(format!(
            "question number {number} appears more than once"
        )));
    }
    Ok(())
}

/// A single Likert question and the data its completion step stamps
///
/// Descriptors are built once and never mutated.
#[skip_serializing_none]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct QuestionDescriptor {
    /// Instrument the question belongs to
    #[garde(skip)]
    task: Task,
    /// Item number within the published instrument
    #[garde(range(min = 1))]
    question_number: u32,
    /// Semantic factor label (PGSI only)
    #[garde(custom(|v: &Option<Factor>, _| validate_factor(self.task, v.as_ref())))]
    factor: Option<Factor>,
    /// Text shown above the scale
    #[garde(length(min = constants::question::MIN_PROMPT_LENGTH, max = constants::question::MAX_PROMPT_LENGTH))]
    prompt: String,
    /// Category labels in display order
    #[garde(
        length(min = constants::question::MIN_LABEL_COUNT, max = constants::question::MAX_LABEL_COUNT),
        inner(length(min = 1, max = constants::question::MAX_LABEL_LENGTH)),
        custom(|v, _| validate_label_count(self.task, v))
    )]
    labels: Vec<String>,
    /// Whether the engine must insist on a selection
    #[garde(skip)]
    required: bool,
    /// Coding flag passed to the scoring function
    #[serde(default, rename = "reverse")]
    #[garde(skip)]
    coding: Coding,
}

impl QuestionDescriptor {
    /// Creates a required question with forward coding
    pub fn new(
        task: Task,
        question_number: u32,
        factor: Option<Factor>,
        prompt: impl Into<String>,
        labels: &[&str],
    ) -> Self {
        Self {
            task,
            question_number,
            factor,
            prompt: prompt.into(),
            labels: labels.iter().map(ToString::to_string).collect(),
            required: true,
            coding: Coding::Forward,
        }
    }

    /// Returns a copy with the given coding flag
    #[must_use]
    pub fn with_coding(mut self, coding: Coding) -> Self {
        self.coding = coding;
        self
    }

    /// Returns the instrument the question belongs to
    pub fn task(&self) -> Task {
        self.task
    }

    /// Returns the item number within the published instrument
    pub fn question_number(&self) -> u32 {
        self.question_number
    }

    /// Returns the factor label, if any
    pub fn factor(&self) -> Option<Factor> {
        self.factor
    }

    /// Returns the prompt text
    pub fn prompt(&self) -> &str {
        &self.prompt
    }

    /// Returns the category labels in display order
    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    /// Returns whether a selection is required
    pub fn required(&self) -> bool {
        self.required
    }

    /// Returns the coding flag passed to the scoring function
    pub fn coding(&self) -> Coding {
        self.coding
    }

    /// Builds the engine trial that presents this question
    pub fn to_trial(&self) -> Trial<'_> {
        Trial::new(&self.prompt, &self.labels, self.required)
    }

    /// Runs the completion step on the engine's result for this question
    ///
    /// Stamps `task`, `question_number` and (PGSI only) `factor`, then scores
    /// the selection and stores it as `resp`. The identifying fields are
    /// written even when scoring fails.
    ///
    /// # Errors
    ///
    /// Returns an error if the `responses` payload cannot be scored.
    pub fn finish(&self, result: &mut RawResult) -> Result<()> {
        result.task = Some(self.task);
        result.question_number = Some(self.question_number);
        if let Some(factor) = self.factor {
            result.factor = Some(factor);
        }

        let resp = self.task.score(&result.responses, self.coding)?;
        debug!(
            task = %self.task,
            question_number = self.question_number,
            resp,
            "scored response"
        );
        result.resp = Some(resp);
        Ok(())
    }
}

/// An ordered, immutable list of questions from one instrument
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Questionnaire {
    /// Instrument all items belong to
    #[garde(skip)]
    task: Task,
    /// Items in presentation order
    #[garde(
        length(min = constants::questionnaire::MIN_ITEM_COUNT, max = constants::questionnaire::MAX_ITEM_COUNT),
        dive,
        custom(|v, _| validate_items(self.task, v))
    )]
    items: Vec<QuestionDescriptor>,
}

impl Questionnaire {
    /// Creates a questionnaire from descriptors in presentation order
    ///
    /// # Errors
    ///
    /// Returns an error if the descriptors fail validation.
    pub fn new(task: Task, items: Vec<QuestionDescriptor>) -> Result<Self> {
        let questionnaire = Self { task, items };
        questionnaire.check()?;
        Ok(questionnaire)
    }

    /// The 9-item Problem Gambling Severity Index
    pub fn pgsi() -> Self {
        Self {
            task: Task::Pgsi,
            items: pgsi::items(),
        }
    }

    /// The 6-item subset of the Gambling-Related Cognitions Scale
    pub fn grcs() -> Self {
        Self {
            task: Task::Grcs,
            items: grcs::items(),
        }
    }

    /// Loads and validates a questionnaire definition from JSON
    ///
    /// # Errors
    ///
    /// Returns an error if the JSON does not describe a questionnaire or the
    /// questionnaire fails validation.
    pub fn from_json(json: &str) -> Result<Self> {
        let questionnaire: Self = serde_json::from_str(json).map_err(Error::MalformedDefinition)?;
        questionnaire.check()?;
        Ok(questionnaire)
    }

    fn check(&self) -> Result<()> {
        self.validate().map_err(|report| {
            warn!(task = %self.task, %report, "rejected questionnaire definition");
            Error::Invalid(report)
        })
    }

    /// Returns the instrument
    pub fn task(&self) -> Task {
        self.task
    }

    /// Returns the items in presentation order
    pub fn items(&self) -> &[QuestionDescriptor] {
        &self.items
    }

    /// Returns the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Checks if the questionnaire has no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Builds the engine trials in presentation order
    pub fn trials(&self) -> Vec<Trial<'_>> {
        self.items.iter().map(QuestionDescriptor::to_trial).collect_vec()
    }

    /// Serializes the trials as the JSON timeline the engine consumes
    ///
    /// # Panics
    ///
    /// This method panics if serialization fails, which should never happen
    /// with the default JSON serializer for well-formed data.
    pub fn to_timeline_json(&self) -> String {
        serde_json::to_string(&self.trials()).expect("default serializer cannot fail")
    }

    /// Presents every question through `runner` and scores the results
    ///
    /// Questions are presented in list order and each completion step runs
    /// exactly once, right after its question returns.
    ///
    /// # Errors
    ///
    /// Stops at and returns the first scoring error.
    pub fn administer<R: Runner>(&self, runner: &mut R) -> Result<Vec<RawResult>> {
        self.items
            .iter()
            .enumerate()
            .map(|(position, item)| {
                trace!(task = %self.task, position, "presenting question");
                let mut result = runner.run(&item.to_trial());
                item.finish(&mut result)?;
                Ok(result)
            })
            .collect()
    }
}
