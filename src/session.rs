//! Rendering engine session
//!
//! This module defines the trait through which questions are handed to
//! the external survey-rendering engine. The engine shows the prompt and
//! labels, enforces `required`, and returns the raw result for the
//! completion step.

use crate::questionnaire::{response::RawResult, trial::Trial};

/// Trait for presenting a single trial and collecting its result
///
/// Implementations might drive a browser page, a terminal prompt, or a
/// scripted list of selections in tests.
pub trait Runner {
    /// Presents the trial and blocks until the participant has answered
    ///
    /// # Arguments
    ///
    /// * `trial` - The question to present
    fn run(&mut self, trial: &Trial<'_>) -> RawResult;
}
