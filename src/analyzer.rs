//! Password strength analyzer - runs the scoring sections in order.

use secrecy::{ExposeSecret, SecretString};

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::sections::{
    digit_section, length_section, lowercase_section, special_section, uppercase_section,
    SectionInput, SectionOutcome,
};
use crate::types::{PasswordAnalysis, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
use crate::report::{PasswordReport, ReportError};

/// Analyzes password strength.
///
/// Pure and infallible: an empty password yields score 0, "Very Weak" and
/// the full list of recommendations.
///
/// # Arguments
/// * `password` - The password to analyze
///
/// # Returns
/// A `PasswordAnalysis` with score, strength label and feedback in the
/// order length, lowercase, uppercase, digits, special.
pub fn analyze_password(password: &SecretString) -> PasswordAnalysis {
    // Orchestrator: execute sections in feedback order
    let input = SectionInput::of(password.expose_secret());

    let sections: [(&str, fn(&SectionInput) -> SectionOutcome); 5] = [
        ("length", length_section),
        ("lowercase", lowercase_section),
        ("uppercase", uppercase_section),
        ("digits", digit_section),
        ("special", special_section),
    ];

    let mut points = 0u8;
    let mut feedback = Vec::new();

    for (_section_name, section_fn) in sections {
        let outcome = section_fn(&input);

        #[cfg(feature = "tracing")]
        tracing::trace!(
            section = _section_name,
            points = outcome.points,
            missing = outcome.feedback.is_some(),
            "section evaluated"
        );

        points += outcome.points;
        if let Some(reason) = outcome.feedback {
            feedback.push(reason);
        }
    }

    let score = PasswordScore::new(points);

    PasswordAnalysis {
        length: input.length,
        has_lowercase: input.classes.lowercase,
        has_uppercase: input.classes.uppercase,
        has_digits: input.classes.digit,
        has_special: input.classes.special,
        score,
        strength: PasswordStrength::from_score(score),
        feedback,
    }
}

/// Async version that sends the analysis and crack-time estimate via channel.
///
/// The input is trimmed first. Waits a short debounce; nothing is sent if
/// `token` is cancelled in the meantime. Never runs the brute-force search.
///
/// # Errors
///
/// Returns `ReportError::EmptyPassword` without waiting or sending anything
/// if the input is blank.
#[cfg(feature = "async")]
pub async fn analyze_password_tx(
    password: &SecretString,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordReport>,
) -> Result<(), ReportError> {
    use std::time::Duration;

    if password.expose_secret().trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::debug!("blank password rejected");
        return Err(ReportError::EmptyPassword);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("analysis is about to start...");

    tokio::time::sleep(Duration::from_millis(300)).await;

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("analysis cancelled before start");
        return Ok(());
    }

    let report = PasswordReport::from_input(password)?;

    if let Err(_e) = tx.send(report).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password report: {}", _e);
    }
    Ok(())
}
