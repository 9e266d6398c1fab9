//! Character variety sections - one per character class.

use super::{SectionInput, SectionOutcome};

fn class_section(present: bool, points: u8, feedback: &str) -> SectionOutcome {
    if present {
        SectionOutcome::passed(points)
    } else {
        SectionOutcome::missing(0, feedback)
    }
}

pub fn lowercase_section(input: &SectionInput) -> SectionOutcome {
    class_section(input.classes.lowercase, 1, "Add lowercase letters")
}

pub fn uppercase_section(input: &SectionInput) -> SectionOutcome {
    class_section(input.classes.uppercase, 1, "Add uppercase letters")
}

pub fn digit_section(input: &SectionInput) -> SectionOutcome {
    class_section(input.classes.digit, 1, "Add numbers")
}

/// Symbols weigh double.
pub fn special_section(input: &SectionInput) -> SectionOutcome {
    class_section(input.classes.special, 2, "Add special characters (!@#$%^&*)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_variety_section_missing_uppercase() {
        let result = uppercase_section(&SectionInput::of("lowercase123!"));
        assert_eq!(result.points, 0);
        assert_eq!(result.feedback.as_deref(), Some("Add uppercase letters"));
    }

    #[test]
    fn test_variety_section_missing_lowercase() {
        let result = lowercase_section(&SectionInput::of("UPPERCASE123!"));
        assert_eq!(result.feedback.as_deref(), Some("Add lowercase letters"));
    }

    #[test]
    fn test_variety_section_missing_numbers() {
        let result = digit_section(&SectionInput::of("NoNumbers!"));
        assert_eq!(result.feedback.as_deref(), Some("Add numbers"));
    }

    #[test]
    fn test_variety_section_special_counts_double() {
        assert_eq!(special_section(&SectionInput::of("a!")), SectionOutcome::passed(2));
        let result = special_section(&SectionInput::of("NoSpecial123"));
        assert_eq!(result.points, 0);
        assert!(result.feedback.unwrap().contains("special"));
    }

    #[test]
    fn test_variety_section_all_categories() {
        let input = SectionInput::of("HasAll123!@#");
        assert_eq!(lowercase_section(&input), SectionOutcome::passed(1));
        assert_eq!(uppercase_section(&input), SectionOutcome::passed(1));
        assert_eq!(digit_section(&input), SectionOutcome::passed(1));
        assert_eq!(special_section(&input), SectionOutcome::passed(2));
    }
}
