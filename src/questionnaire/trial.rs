//! Engine trial shape for Likert questions
//!
//! A [`Trial`] borrows from its [`QuestionDescriptor`](super::config::QuestionDescriptor)
//! and serializes to the object the rendering engine's Likert plugin reads:
//! `{"type": "survey-likert", "questions": [{"prompt", "labels", "required"}]}`.

use serde::Serialize;

use crate::constants::engine::LIKERT_PLUGIN;

/// One question as presented inside a trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LikertQuestion<'a> {
    prompt: &'a str,
    labels: &'a [String],
    required: bool,
}

/// A single-question Likert trial
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Trial<'a> {
    #[serde(rename = "type")]
    plugin: &'static str,
    questions: [LikertQuestion<'a>; 1],
}

impl<'a> Trial<'a> {
    pub(super) fn new(prompt: &'a str, labels: &'a [String], required: bool) -> Self {
        Self {
            plugin: LIKERT_PLUGIN,
            questions: [LikertQuestion {
                prompt,
                labels,
                required,
            }],
        }
    }

    /// Returns the engine plugin name
    pub fn plugin(&self) -> &'static str {
        self.plugin
    }

    /// Returns the prompt text
    pub fn prompt(&self) -> &'a str {
        self.questions[0].prompt
    }

    /// Returns the category labels in display order
    pub fn labels(&self) -> &'a [String] {
        self.questions[0].labels
    }

    /// Returns whether a selection is required
    pub fn required(&self) -> bool {
        self.questions[0].required
    }
}
