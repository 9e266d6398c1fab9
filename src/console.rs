//! Interactive read-eval loop over any reader/writer pair.

use std::io::{self, BufRead, Write};

use secrecy::{ExposeSecret, SecretString};
use thiserror::Error;

use crate::analyzer::analyze_password;
use crate::brute_force::{brute_force_with_progress, SearchEvent, StopReason, SAFETY_LIMIT};
use crate::estimate::{estimate_crack_time, format_duration, format_grouped};

/// Passwords up to this many characters are put through the brute-force search.
pub const BRUTE_FORCE_MAX_CHARS: usize = 4;

#[derive(Error, Debug)]
pub enum ConsoleError {
    #[error("Failed to read password input: {0}")]
    Read(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Write(#[from] io::Error),
}

#[derive(Debug, Clone, Copy, Default)]
pub struct ConsoleOptions {
    /// Hide per-length and every-10,000-attempts search progress.
    pub quiet: bool,
}

fn mark(present: bool) -> &'static str {
    if present { "✓" } else { "✗" }
}

/// Runs the interactive loop until EOF or `quit` (any case).
///
/// # Errors
///
/// Returns error if reading `input` or writing `output` fails.
pub fn run_console<R: BufRead, W: Write>(
    mut input: R,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<(), ConsoleError> {
    writeln!(output, "🔐 Password Strength Checker with Brute Force Test")?;
    writeln!(output, "{}", "=".repeat(55))?;
    writeln!(output, "Educational tool to analyze password security")?;
    writeln!(output, "{}", "=".repeat(55))?;

    let mut line = String::new();
    loop {
        writeln!(output, "\nEnter a password to analyze (or 'quit' to exit):")?;
        write!(output, "Password: ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line).map_err(ConsoleError::Read)? == 0 {
            break;
        }

        let entered = line.trim();
        if entered.eq_ignore_ascii_case("quit") {
            break;
        }
        if entered.is_empty() {
            writeln!(output, "Please enter a password.")?;
            continue;
        }

        let password = SecretString::new(entered.to_string().into());
        check_password(&password, output, options)?;
    }

    writeln!(output, "\n🎓 Password Security Tips:")?;
    writeln!(output, "• Use at least 12 characters")?;
    writeln!(output, "• Mix uppercase, lowercase, numbers, and symbols")?;
    writeln!(output, "• Avoid dictionary words and personal information")?;
    writeln!(output, "• Use unique passwords for each account")?;
    Ok(())
}

fn check_password<W: Write>(
    password: &SecretString,
    output: &mut W,
    options: &ConsoleOptions,
) -> Result<(), ConsoleError> {
    let analysis = analyze_password(password);

    writeln!(output, "\n--- Analyzing Password: {} ---", "*".repeat(analysis.length))?;
    writeln!(output, "Length: {} characters", analysis.length)?;
    writeln!(output, "Strength: {} (Score: {})", analysis.strength, analysis.score)?;

    writeln!(output, "\nCharacter Types:")?;
    writeln!(output, "  Lowercase: {}", mark(analysis.has_lowercase))?;
    writeln!(output, "  Uppercase: {}", mark(analysis.has_uppercase))?;
    writeln!(output, "  Numbers:   {}", mark(analysis.has_digits))?;
    writeln!(output, "  Special:   {}", mark(analysis.has_special))?;

    if !analysis.feedback.is_empty() {
        writeln!(output, "\nRecommendations:")?;
        for item in &analysis.feedback {
            writeln!(output, "  • {}", item)?;
        }
    }

    let estimate = estimate_crack_time(password);
    writeln!(output, "\nCrack Time Estimate:")?;
    writeln!(output, "  Character set size: {}", estimate.charset_size)?;
    writeln!(output, "  Total combinations: {}", format_grouped(&estimate.combinations))?;
    writeln!(output, "  Average time to crack: {}", format_duration(estimate.seconds))?;

    if analysis.length > BRUTE_FORCE_MAX_CHARS {
        writeln!(output, "\n--- Brute Force Test Skipped ---")?;
        writeln!(output, "Password too long for practical brute force demonstration")?;
        writeln!(output, "(Would take too long to complete)")?;
        return Ok(());
    }

    writeln!(output, "\n--- Brute Force Test ---")?;
    writeln!(
        output,
        "⚠️ Testing actual brute force attack (password ≤ {} chars)",
        BRUTE_FORCE_MAX_CHARS
    )?;

    // The callback cannot fail, so the first write error is kept for later.
    let mut write_error: Option<io::Error> = None;
    let mut emit = |line: String| {
        if write_error.is_none() {
            write_error = writeln!(output, "{}", line).err();
        }
    };
    let result = brute_force_with_progress(password, None, |event| match event {
        SearchEvent::Started {
            alphabet_size,
            max_length,
        } => {
            emit(format!("Testing brute force attack (max length: {})...", max_length));
            emit(format!("Character set size: {}", alphabet_size));
        }
        SearchEvent::LengthStarted { length } if !options.quiet => {
            emit(format!("Trying passwords of length {}...", length));
        }
        SearchEvent::Progress {
            attempts,
            attempts_per_second,
        } if !options.quiet => {
            emit(format!(
                "Tried {} passwords... ({:.0} attempts/sec)",
                attempts, attempts_per_second
            ));
        }
        _ => {}
    });
    if let Some(e) = write_error {
        return Err(e.into());
    }

    let elapsed = result.elapsed.as_secs_f64();
    match (&result.stop, &result.recovered) {
        (StopReason::Cracked, Some(recovered)) => {
            writeln!(output, "✅ Password cracked: '{}'", recovered.expose_secret())?;
            writeln!(output, "Attempts: {}", result.attempts)?;
            writeln!(output, "Time taken: {:.2} seconds", elapsed)?;
            writeln!(output, "🚨 Oops! Your password was successfully cracked!")?;
        }
        (StopReason::SafetyLimit, _) => {
            writeln!(
                output,
                "⚠️ Stopping brute force test (safety limit of {} attempts reached)",
                SAFETY_LIMIT
            )?;
            writeln!(output, "✅ Password survived the limited brute force test")?;
        }
        _ => {
            writeln!(
                output,
                "❌ Password not cracked within {} characters",
                analysis.length.min(BRUTE_FORCE_MAX_CHARS)
            )?;
            writeln!(output, "Total attempts: {}", result.attempts)?;
            writeln!(output, "Time taken: {:.2} seconds", elapsed)?;
            writeln!(output, "✅ Password survived the limited brute force test")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    fn run(input: &str, options: ConsoleOptions) -> String {
        let mut output = Vec::new();
        run_console(Cursor::new(input.as_bytes()), &mut output, &options)
            .expect("console run failed");
        String::from_utf8(output).expect("output is not UTF-8")
    }

    #[test]
    fn test_quit_is_case_insensitive() {
        let out = run("QuIt\nabc\n", ConsoleOptions::default());
        assert!(!out.contains("Analyzing Password"));
        assert!(out.contains("Password Security Tips"));
    }

    #[test]
    fn test_eof_terminates() {
        let out = run("", ConsoleOptions::default());
        assert!(out.contains("Password Security Tips"));
    }

    #[test]
    fn test_empty_input_is_rejected() {
        let out = run("   \nquit\n", ConsoleOptions::default());
        assert!(out.contains("Please enter a password."));
        assert!(!out.contains("Analyzing Password"));
    }

    #[test]
    fn test_short_password_is_cracked() {
        let out = run("ab\nquit\n", ConsoleOptions::default());
        assert!(out.contains("--- Analyzing Password: ** ---"));
        assert!(out.contains("Strength: Weak (Score: 1/8)"));
        assert!(out.contains("  Lowercase: ✓"));
        assert!(out.contains("  Uppercase: ✗"));
        assert!(out.contains("Total combinations: 676"));
        assert!(out.contains("--- Brute Force Test ---"));
        assert!(out.contains("Trying passwords of length 2..."));
        assert!(out.contains("✅ Password cracked: 'ab'"));
        assert!(out.contains("Attempts: 28"));
    }

    #[test]
    fn test_long_password_skips_brute_force() {
        let out = run("Tr0ub4dor&3\nquit\n", ConsoleOptions::default());
        assert!(out.contains("Strength: Very Strong (Score: 7/8)"));
        assert!(out.contains("--- Brute Force Test Skipped ---"));
        assert!(!out.contains("--- Brute Force Test ---"));
    }

    #[test]
    fn test_unrecoverable_symbol_survives() {
        let out = run("a?\nquit\n", ConsoleOptions { quiet: true });
        assert!(out.contains("❌ Password not cracked within 2 characters"));
        assert!(out.contains("Password survived"));
        assert!(!out.contains("Trying passwords of length"));
    }

    #[test]
    fn test_safety_limit_reported() {
        let out = run("zZ9*\nquit\n", ConsoleOptions::default());
        assert!(out.contains("Tried 10000 passwords..."));
        assert!(out.contains("safety limit of 100000 attempts reached"));
        assert!(out.contains("Password survived"));
    }
}
