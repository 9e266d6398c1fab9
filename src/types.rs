//! Result types returned by the analyzer.

use std::fmt;

/// Rule-based score in the range `0..=8`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct PasswordScore(u8);

impl PasswordScore {
    /// Scale shown to users ("n/8"). The rules themselves top out at 7.
    pub const MAX: u8 = 8;

    /// Creates a score, clamping to [`PasswordScore::MAX`].
    pub fn new(value: u8) -> Self {
        Self(value.min(Self::MAX))
    }

    pub fn value(&self) -> u8 {
        self.0
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.0, Self::MAX)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum PasswordStrength {
    VeryWeak,
    Weak,
    Medium,
    Strong,
    VeryStrong,
}

impl PasswordStrength {
    /// Maps a score to its band. Bands are closed on the lower bound.
    pub fn from_score(score: PasswordScore) -> Self {
        match score.value() {
            7.. => Self::VeryStrong,
            5..=6 => Self::Strong,
            3..=4 => Self::Medium,
            1..=2 => Self::Weak,
            0 => Self::VeryWeak,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Outcome of [`analyze_password`](crate::analyze_password).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswordAnalysis {
    /// Length in characters.
    pub length: usize,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digits: bool,
    pub has_special: bool,
    pub score: PasswordScore,
    pub strength: PasswordStrength,
    /// Recommendations, one per missing attribute.
    pub feedback: Vec<String>,
}
