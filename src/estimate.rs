//! Crack-time estimation from charset size and length.

use num_bigint::BigUint;
use num_traits::{ToPrimitive, Zero};
use secrecy::{ExposeSecret, SecretString};

use crate::charset::CharClasses;

/// Guesses per second assumed for the attacker.
pub const ATTEMPTS_PER_SECOND: f64 = 1_000_000.0;

const SECONDS_PER_MINUTE: f64 = 60.0;
const SECONDS_PER_HOUR: f64 = 3_600.0;
const SECONDS_PER_DAY: f64 = 86_400.0;
const SECONDS_PER_YEAR: f64 = 31_536_000.0;

/// Above this many years durations are printed in scientific notation.
const SCIENTIFIC_YEARS: f64 = 1_000_000.0;

#[derive(Debug, Clone, PartialEq)]
pub struct CrackTimeEstimate {
    pub charset_size: u32,
    /// `charset_size ^ length`, exact.
    pub combinations: BigUint,
    /// Average-case time: half of the space at [`ATTEMPTS_PER_SECOND`].
    pub seconds: f64,
    pub minutes: f64,
    pub hours: f64,
    pub days: f64,
    pub years: f64,
}

/// Estimates how long an exhaustive search over the password's charset
/// would take on average.
///
/// Never fails. When the combination count exceeds the `f64` range the
/// durations are `f64::INFINITY`.
pub fn estimate_crack_time(password: &SecretString) -> CrackTimeEstimate {
    let pwd = password.expose_secret();
    let charset_size = CharClasses::detect(pwd).charset_size();
    let length = pwd.chars().count();

    let combinations = if charset_size == 0 {
        BigUint::zero()
    } else {
        num_traits::pow(BigUint::from(charset_size), length)
    };

    let seconds = combinations.to_f64().unwrap_or(f64::INFINITY) / (2.0 * ATTEMPTS_PER_SECOND);

    CrackTimeEstimate {
        charset_size,
        combinations,
        seconds,
        minutes: seconds / SECONDS_PER_MINUTE,
        hours: seconds / SECONDS_PER_HOUR,
        days: seconds / SECONDS_PER_DAY,
        years: seconds / SECONDS_PER_YEAR,
    }
}

/// Renders a duration in the largest fitting unit.
///
/// ```
/// use pwd_analyzer::format_duration;
///
/// assert_eq!(format_duration(59.9), "59.9 seconds");
/// assert_eq!(format_duration(90.0), "1.5 minutes");
/// ```
pub fn format_duration(seconds: f64) -> String {
    if seconds < SECONDS_PER_MINUTE {
        format!("{:.1} seconds", seconds)
    } else if seconds < SECONDS_PER_HOUR {
        format!("{:.1} minutes", seconds / SECONDS_PER_MINUTE)
    } else if seconds < SECONDS_PER_DAY {
        format!("{:.1} hours", seconds / SECONDS_PER_HOUR)
    } else if seconds < SECONDS_PER_YEAR {
        format!("{:.1} days", seconds / SECONDS_PER_DAY)
    } else {
        let years = seconds / SECONDS_PER_YEAR;
        if years > SCIENTIFIC_YEARS {
            format!("{:.0e} years", years)
        } else {
            format!("{:.0} years", years)
        }
    }
}

/// Formats an integer with `,` thousands separators.
pub fn format_grouped(value: &BigUint) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_estimate_empty_password() {
        let estimate = estimate_crack_time(&secret(""));
        assert_eq!(estimate.charset_size, 0);
        assert!(estimate.combinations.is_zero());
        assert_eq!(estimate.seconds, 0.0);
    }

    #[test]
    fn test_estimate_unrecognised_chars() {
        let estimate = estimate_crack_time(&secret("~~~~"));
        assert_eq!(estimate.charset_size, 0);
        assert!(estimate.combinations.is_zero());
        assert_eq!(estimate.years, 0.0);
    }

    #[test]
    fn test_estimate_eight_lowercase() {
        let estimate = estimate_crack_time(&secret("aaaaaaaa"));
        assert_eq!(estimate.charset_size, 26);
        assert_eq!(estimate.combinations, BigUint::from(208_827_064_576u64));
        assert!((estimate.seconds - 104_413.532_288).abs() < 1e-6);
        assert!((estimate.minutes - estimate.seconds / 60.0).abs() < 1e-9);
        assert!((estimate.days - estimate.seconds / 86_400.0).abs() < 1e-9);
    }

    #[test]
    fn test_estimate_exceeds_u64() {
        // 94^20 is far beyond u64::MAX
        let estimate = estimate_crack_time(&secret("Aa1!Aa1!Aa1!Aa1!Aa1!"));
        assert_eq!(estimate.charset_size, 94);
        assert_eq!(estimate.combinations, BigUint::from(94u32).pow(20));
        assert!(estimate.combinations > BigUint::from(u64::MAX));
        assert!(estimate.seconds.is_finite());
    }

    #[test]
    fn test_estimate_beyond_f64_is_infinite() {
        let long = "a".repeat(400);
        let estimate = estimate_crack_time(&secret(&long));
        assert!(estimate.seconds.is_infinite());
        assert_eq!(format_duration(estimate.seconds), "inf years");
    }

    #[test]
    fn test_format_duration_boundaries() {
        assert_eq!(format_duration(59.9), "59.9 seconds");
        assert_eq!(format_duration(60.0), "1.0 minutes");
        assert_eq!(format_duration(3_600.0), "1.0 hours");
        assert_eq!(format_duration(86_400.0), "1.0 days");
        assert_eq!(format_duration(31_536_000.0), "1 years");
        assert_eq!(format_duration(1e9 * 31_536_000.0), "1e9 years");
    }

    #[test]
    fn test_format_duration_million_years_is_not_scientific() {
        assert_eq!(format_duration(1_000_000.0 * 31_536_000.0), "1000000 years");
    }

    #[test]
    fn test_format_grouped() {
        assert_eq!(format_grouped(&BigUint::zero()), "0");
        assert_eq!(format_grouped(&BigUint::from(999u32)), "999");
        assert_eq!(format_grouped(&BigUint::from(1_000u32)), "1,000");
        assert_eq!(
            format_grouped(&BigUint::from(208_827_064_576u64)),
            "208,827,064,576"
        );
    }
}
