//! Password strength analysis library
//!
//! This library scores a password with simple character-class rules,
//! estimates the average time an exhaustive search would need, and can run
//! a small bounded brute-force search against an MD5 digest of the password
//! for demonstration purposes.
//!
//! # Features
//!
//! - `async` (default): Enables the debounced, cancellable channel helper
//! - `tracing`: Enables logging via tracing crate
//! - `cli`: Builds the `pwd-analyzer` interactive console binary
//!
//! # Example
//!
//! ```rust
//! use pwd_analyzer::{analyze_password, brute_force, estimate_crack_time, format_duration};
//! use secrecy::SecretString;
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! let analysis = analyze_password(&password);
//! println!("Strength: {} (Score: {})", analysis.strength, analysis.score);
//!
//! let estimate = estimate_crack_time(&password);
//! println!("Average time to crack: {}", format_duration(estimate.seconds));
//!
//! let short = SecretString::new("ab".to_string().into());
//! let result = brute_force(&short, None);
//! assert!(result.is_cracked());
//! ```

// Internal modules
mod analyzer;
mod brute_force;
mod charset;
mod console;
mod estimate;
mod report;
mod sections;
mod types;

// Public API
pub use analyzer::analyze_password;
pub use brute_force::{
    brute_force, brute_force_with_progress, BruteForceResult, Candidates, SearchEvent, StopReason,
    DEFAULT_MAX_LENGTH, PROGRESS_INTERVAL, SAFETY_LIMIT,
};
pub use charset::{brute_force_alphabet, CharClasses, BRUTE_FORCE_SPECIALS, SPECIAL_CHARS};
pub use console::{run_console, ConsoleError, ConsoleOptions, BRUTE_FORCE_MAX_CHARS};
pub use estimate::{
    estimate_crack_time, format_duration, format_grouped, CrackTimeEstimate, ATTEMPTS_PER_SECOND,
};
pub use report::{PasswordReport, ReportError};
pub use types::{PasswordAnalysis, PasswordScore, PasswordStrength};

#[cfg(feature = "async")]
pub use analyzer::analyze_password_tx;
