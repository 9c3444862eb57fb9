//! Configuration constants for the questionnaire definitions
//!
//! This module contains the scale sizes, coding constants and length
//! limits used throughout the crate to keep the built-in questionnaires
//! and any questionnaire loaded from JSON within consistent boundaries.

/// Limits shared by every questionnaire
pub mod questionnaire {
    /// Minimum number of items in a questionnaire
    pub const MIN_ITEM_COUNT: usize = 1;
    /// Maximum number of items in a questionnaire
    pub const MAX_ITEM_COUNT: usize = 100;
}

/// Single question descriptor limits
pub mod question {
    /// Minimum length of a question prompt
    pub const MIN_PROMPT_LENGTH: usize = 1;
    /// Maximum length of a question prompt
    pub const MAX_PROMPT_LENGTH: usize = 500;
    /// Minimum number of Likert categories
    pub const MIN_LABEL_COUNT: usize = 2;
    /// Maximum number of Likert categories
    pub const MAX_LABEL_COUNT: usize = 11;
    /// Maximum length of a single category label
    pub const MAX_LABEL_LENGTH: usize = 100;
    /// Slot identifier the engine uses for the only question of a trial
    pub const RESPONSE_SLOT: &str = "Q0";
}

/// Problem Gambling Severity Index constants
pub mod pgsi {
    /// Number of items in the instrument
    pub const ITEM_COUNT: usize = 9;
    /// Number of frequency categories
    pub const SCALE_LENGTH: usize = 4;
    /// Reverse coding subtracts the selected index from this value
    pub const REVERSE_OFFSET: i64 = 5;
}

/// Gambling-Related Cognitions Scale constants
pub mod grcs {
    /// Number of items in the subset administered here
    pub const ITEM_COUNT: usize = 6;
    /// Number of agreement categories
    pub const SCALE_LENGTH: usize = 7;
    /// Reverse coding subtracts the 1-based response from this value
    pub const REVERSE_OFFSET: i64 = 8;
}

/// Rendering engine constants
pub mod engine {
    /// Plugin name the engine registers for Likert surveys
    pub const LIKERT_PLUGIN: &str = "survey-likert";
}
