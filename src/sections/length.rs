//! Length section - rewards length and asks for at least 8 characters.

use super::{SectionInput, SectionOutcome};

const MIN_LENGTH: usize = 8;
const SHORT_LENGTH: usize = 6;

/// Scores password length.
///
/// # Returns
/// - 2 points for 8+ characters, no feedback
/// - 1 point for 6 or 7 characters, with feedback
/// - 0 points otherwise, with feedback
pub fn length_section(input: &SectionInput) -> SectionOutcome {
    if input.length >= MIN_LENGTH {
        return SectionOutcome::passed(2);
    }

    let points = if input.length >= SHORT_LENGTH { 1 } else { 0 };
    SectionOutcome::missing(points, &format!("Use at least {} characters", MIN_LENGTH))
}
