//! Bounded brute-force search against an MD5 digest of the password.
//!
//! This is a demonstration: MD5 only gives the search something to defeat.
//! The search is synchronous and CPU-bound; it stops at the first match,
//! after the last candidate of `max_length`, or at [`SAFETY_LIMIT`] digests,
//! whichever comes first.

use std::time::{Duration, Instant};

use md5::{Digest, Md5};
use secrecy::{ExposeSecret, SecretString};

use crate::charset::brute_force_alphabet;

/// Hard cap on hashed candidates per search.
pub const SAFETY_LIMIT: u64 = 100_000;

/// A [`SearchEvent::Progress`] is emitted every this many attempts.
pub const PROGRESS_INTERVAL: u64 = 10_000;

/// Upper bound for the default `max_length`.
pub const DEFAULT_MAX_LENGTH: usize = 4;

/// Observational notifications emitted while searching.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SearchEvent {
    Started {
        alphabet_size: usize,
        max_length: usize,
    },
    LengthStarted {
        length: usize,
    },
    Progress {
        attempts: u64,
        attempts_per_second: f64,
    },
}

/// Why a search returned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    Cracked,
    /// Every candidate up to `max_length` was tried.
    Exhausted,
    /// [`SAFETY_LIMIT`] was reached first.
    SafetyLimit,
}

#[derive(Debug)]
pub struct BruteForceResult {
    /// The recovered password, `None` when not found within limits.
    pub recovered: Option<SecretString>,
    pub attempts: u64,
    pub elapsed: Duration,
    pub stop: StopReason,
}

impl BruteForceResult {
    pub fn is_cracked(&self) -> bool {
        self.stop == StopReason::Cracked
    }
}

/// Per-call counters. Never shared between searches.
struct SearchState {
    attempts: u64,
    started: Instant,
}

impl SearchState {
    fn new() -> Self {
        Self {
            attempts: 0,
            started: Instant::now(),
        }
    }

    fn rate(&self) -> f64 {
        let secs = self.started.elapsed().as_secs_f64();
        if secs > 0.0 {
            self.attempts as f64 / secs
        } else {
            0.0
        }
    }

    fn finish(self, recovered: Option<String>, stop: StopReason) -> BruteForceResult {
        BruteForceResult {
            recovered: recovered.map(|p| SecretString::new(p.into())),
            attempts: self.attempts,
            elapsed: self.started.elapsed(),
            stop,
        }
    }
}

/// Every string of exactly `length` symbols over `alphabet`, in
/// lexicographic order of alphabet positions.
pub struct Candidates<'a> {
    alphabet: &'a [char],
    indices: Vec<usize>,
    done: bool,
}

impl<'a> Candidates<'a> {
    pub fn new(alphabet: &'a [char], length: usize) -> Self {
        Self {
            alphabet,
            indices: vec![0; length],
            done: alphabet.is_empty() || length == 0,
        }
    }
}

impl Iterator for Candidates<'_> {
    type Item = String;

    fn next(&mut self) -> Option<String> {
        if self.done {
            return None;
        }

        let candidate = self.indices.iter().map(|&i| self.alphabet[i]).collect();

        // Odometer step: rightmost position moves fastest.
        self.done = true;
        for slot in self.indices.iter_mut().rev() {
            *slot += 1;
            if *slot < self.alphabet.len() {
                self.done = false;
                break;
            }
            *slot = 0;
        }

        Some(candidate)
    }
}

/// Runs the search without progress reporting.
pub fn brute_force(password: &SecretString, max_length: Option<usize>) -> BruteForceResult {
    brute_force_with_progress(password, max_length, |_| {})
}

/// Runs the search, passing [`SearchEvent`]s to `on_event`.
///
/// `max_length` defaults to the password length capped at
/// [`DEFAULT_MAX_LENGTH`]. The alphabet is built from the character classes
/// observed in the password.
pub fn brute_force_with_progress<F>(
    password: &SecretString,
    max_length: Option<usize>,
    mut on_event: F,
) -> BruteForceResult
where
    F: FnMut(SearchEvent),
{
    let pwd = password.expose_secret();
    let max_length = max_length.unwrap_or_else(|| pwd.chars().count().min(DEFAULT_MAX_LENGTH));
    let target = Md5::digest(pwd.as_bytes());
    let alphabet = brute_force_alphabet(pwd);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        alphabet_size = alphabet.len(),
        max_length,
        "brute force search starting"
    );

    on_event(SearchEvent::Started {
        alphabet_size: alphabet.len(),
        max_length,
    });

    let mut state = SearchState::new();

    for length in 1..=max_length {
        on_event(SearchEvent::LengthStarted { length });

        for candidate in Candidates::new(&alphabet, length) {
            if state.attempts >= SAFETY_LIMIT {
                #[cfg(feature = "tracing")]
                tracing::warn!("brute force stopped at safety limit of {} attempts", SAFETY_LIMIT);
                return state.finish(None, StopReason::SafetyLimit);
            }

            state.attempts += 1;
            if Md5::digest(candidate.as_bytes()) == target {
                #[cfg(feature = "tracing")]
                tracing::info!(attempts = state.attempts, "brute force recovered the password");
                return state.finish(Some(candidate), StopReason::Cracked);
            }

            if state.attempts % PROGRESS_INTERVAL == 0 {
                on_event(SearchEvent::Progress {
                    attempts: state.attempts,
                    attempts_per_second: state.rate(),
                });
            }
        }
    }

    #[cfg(feature = "tracing")]
    tracing::info!(
        attempts = state.attempts,
        "brute force exhausted all candidates up to length {}",
        max_length
    );

    state.finish(None, StopReason::Exhausted)
}
