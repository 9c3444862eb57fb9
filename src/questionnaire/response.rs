//! Raw results handed back by the rendering engine
//!
//! The engine produces one [`RawResult`] per question. It carries the
//! serialized selection under `responses` plus whatever bookkeeping fields
//! the engine adds (`rt`, `trial_index`, ...). The completion step stamps
//! the scored fields onto the same record.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use serde_with::skip_serializing_none;

use crate::{
    constants::question::RESPONSE_SLOT,
    error::{Error, Result},
};

use super::{config::Task, pgsi::Factor};

/// A single question's result as produced by the rendering engine
///
/// Scored fields are `None` until the completion step has run.
#[skip_serializing_none]
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawResult {
    /// JSON text mapping slot ids to zero-based selected indices
    pub responses: String,
    /// Questionnaire the question belongs to
    pub task: Option<Task>,
    /// Item number within the published instrument
    pub question_number: Option<u32>,
    /// Semantic factor of the item (PGSI only)
    pub factor: Option<Factor>,
    /// Scored response
    pub resp: Option<i64>,
    /// Engine fields this crate does not interpret
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

/// The fields written onto a [`RawResult`] by the completion step
#[skip_serializing_none]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ScoredResult {
    /// Questionnaire the question belongs to
    pub task: Task,
    /// Item number within the published instrument
    pub question_number: u32,
    /// Semantic factor of the item (PGSI only)
    pub factor: Option<Factor>,
    /// Scored response
    pub resp: i64,
}

impl RawResult {
    /// Creates an unscored result around a serialized `responses` payload
    pub fn new(responses: impl Into<String>) -> Self {
        Self {
            responses: responses.into(),
            ..Self::default()
        }
    }

    /// Creates an unscored result for a single selection in the default slot
    pub fn with_selection(index: i64) -> Self {
        Self::new(serde_json::json!({ RESPONSE_SLOT: index }).to_string())
    }

    /// Adds an engine field that is carried through untouched
    #[must_use]
    pub fn with_field(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }

    /// Returns the scored fields once the completion step has run
    pub fn scored(&self) -> Option<ScoredResult> {
        Some(ScoredResult {
            task: self.task?,
            question_number: self.question_number?,
            factor: self.factor,
            resp: self.resp?,
        })
    }

    /// Reads the selected index from this result's `responses` payload
    ///
    /// # Errors
    ///
    /// See [`selected_index`].
    pub fn selected_index(&self) -> Result<i64> {
        selected_index(&self.responses)
    }
}

/// Extracts the zero-based selected index from a `responses` payload
///
/// The value is returned as-is; no range check against the scale is made.
///
/// # Errors
///
/// Returns an error if the payload is not a JSON object, has no `"Q0"` slot,
/// or holds something other than an integer in that slot.
pub fn selected_index(responses: &str) -> Result<i64> {
    let slots: Map<String, Value> =
        serde_json::from_str(responses).map_err(Error::MalformedResponses)?;
    let value = slots
        .get(RESPONSE_SLOT)
        .ok_or(Error::MissingSlot(RESPONSE_SLOT))?;
    value.as_i64().ok_or_else(|| Error::NonIntegerSelection {
        slot: RESPONSE_SLOT,
        value: value.clone(),
    })
}
