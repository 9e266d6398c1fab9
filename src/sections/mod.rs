//! Password scoring sections
//!
//! Each section scores one attribute and, when the attribute is missing,
//! yields a recommendation.

mod length;
mod variety;

pub use length::length_section;
pub use variety::{digit_section, lowercase_section, special_section, uppercase_section};

use crate::charset::CharClasses;

/// What the sections look at, classified once per analysis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionInput {
    /// Length in characters.
    pub length: usize,
    pub classes: CharClasses,
}

impl SectionInput {
    pub fn of(password: &str) -> Self {
        Self {
            length: password.chars().count(),
            classes: CharClasses::detect(password),
        }
    }
}

/// Result of a single section.
/// - `points` - contribution to the score
/// - `feedback` - recommendation when the attribute is missing
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SectionOutcome {
    pub points: u8,
    pub feedback: Option<String>,
}

impl SectionOutcome {
    pub(crate) fn passed(points: u8) -> Self {
        Self {
            points,
            feedback: None,
        }
    }

    pub(crate) fn missing(points: u8, feedback: &str) -> Self {
        Self {
            points,
            feedback: Some(feedback.to_string()),
        }
    }
}
