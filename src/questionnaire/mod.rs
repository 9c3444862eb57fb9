//! Questionnaire definitions
//!
//! This module contains the two gambling questionnaires, the records they
//! are built from, and the raw result type the rendering engine fills in.

pub mod config;
pub mod grcs;
pub mod pgsi;
pub mod response;
pub mod trial;
