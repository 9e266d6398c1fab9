//! Combined analysis + estimate, rendered the way a form-based front end
//! shows it in its read-only output area.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::analyzer::analyze_password;
use crate::estimate::{estimate_crack_time, format_duration, format_grouped, CrackTimeEstimate};
use crate::types::PasswordAnalysis;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportError {
    #[error("Please enter a password.")]
    EmptyPassword,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PasswordReport {
    pub analysis: PasswordAnalysis,
    pub estimate: CrackTimeEstimate,
}

impl PasswordReport {
    /// Scores and estimates form input. Does not run the brute-force search.
    ///
    /// Surrounding whitespace is stripped before analysis.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::EmptyPassword` if nothing is left after trimming.
    pub fn from_input(input: &SecretString) -> Result<Self, ReportError> {
        let trimmed = input.expose_secret().trim();
        if trimmed.is_empty() {
            return Err(ReportError::EmptyPassword);
        }

        let password = SecretString::new(trimmed.to_string().into());
        Ok(Self {
            analysis: analyze_password(&password),
            estimate: estimate_crack_time(&password),
        })
    }
}

impl fmt::Display for PasswordReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let a = &self.analysis;
        writeln!(f, "Password Analysis:")?;
        writeln!(f, "- Strength: {} (Score: {})", a.strength, a.score)?;
        writeln!(f, "- Length: {} characters", a.length)?;
        writeln!(f, "- Includes Lowercase: {}", a.has_lowercase)?;
        writeln!(f, "- Includes Uppercase: {}", a.has_uppercase)?;
        writeln!(f, "- Includes Digits:    {}", a.has_digits)?;
        writeln!(f, "- Includes Special:   {}", a.has_special)?;

        if !a.feedback.is_empty() {
            writeln!(f, "\nRecommendations:")?;
            for item in &a.feedback {
                writeln!(f, "  • {}", item)?;
            }
        }

        let e = &self.estimate;
        writeln!(f, "\nEstimated Crack Time:")?;
        writeln!(f, "- Charset Size: {}", e.charset_size)?;
        writeln!(f, "- Total Combinations: {}", format_grouped(&e.combinations))?;
        writeln!(f, "- Estimated Time: {}", format_duration(e.seconds))
    }
}
