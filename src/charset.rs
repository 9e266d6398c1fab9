//! Character class detection shared by the scorer, the estimator and the
//! brute-force search.

/// Punctuation recognised as "special" when scoring and estimating.
pub const SPECIAL_CHARS: &str = "!@#$%^&*()_+-=[]{}|;:,.<>?";

/// Punctuation the brute-force search adds to its alphabet.
///
/// Narrower than [`SPECIAL_CHARS`]: a password whose only symbol is e.g. `?`
/// scores as having a special character but the search alphabet will not
/// contain it, so the search cannot recover that password.
pub const BRUTE_FORCE_SPECIALS: &str = "!@#$%^&*";

const ASCII_LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
const ASCII_UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const ASCII_DIGITS: &str = "0123456789";

/// Which character classes occur in a password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CharClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharClasses {
    /// Classifies `password` against the scoring special set.
    pub fn detect(password: &str) -> Self {
        Self::detect_with_specials(password, SPECIAL_CHARS)
    }

    fn detect_with_specials(password: &str, specials: &str) -> Self {
        let mut classes = Self::default();
        for c in password.chars() {
            classes.lowercase |= c.is_lowercase();
            classes.uppercase |= c.is_uppercase();
            classes.digit |= c.is_numeric();
            classes.special |= specials.contains(c);
        }
        classes
    }

    /// Size of the pool an attacker would draw from: 26 + 26 + 10 + 32.
    pub fn charset_size(&self) -> u32 {
        let mut size = 0;
        if self.lowercase {
            size += 26;
        }
        if self.uppercase {
            size += 26;
        }
        if self.digit {
            size += 10;
        }
        if self.special {
            size += 32;
        }
        size
    }
}

/// Builds the brute-force alphabet from the classes observed in `password`.
///
/// Classes are appended in the order lowercase, uppercase, digits, symbols,
/// which fixes the lexicographic order of the search.
pub fn brute_force_alphabet(password: &str) -> Vec<char> {
    let classes = CharClasses::detect_with_specials(password, BRUTE_FORCE_SPECIALS);

    [
        (classes.lowercase, ASCII_LOWERCASE),
        (classes.uppercase, ASCII_UPPERCASE),
        (classes.digit, ASCII_DIGITS),
        (classes.special, BRUTE_FORCE_SPECIALS),
    ]
    .into_iter()
    .filter(|(present, _)| *present)
    .flat_map(|(_, chars)| chars.chars())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detect_all_classes() {
        let classes = CharClasses::detect("aB3!");
        assert!(classes.lowercase && classes.uppercase && classes.digit && classes.special);
        assert_eq!(classes.charset_size(), 94);
    }

    #[test]
    fn test_detect_empty() {
        let classes = CharClasses::detect("");
        assert_eq!(classes, CharClasses::default());
        assert_eq!(classes.charset_size(), 0);
    }

    #[test]
    fn test_non_ascii_digits_count_as_digits() {
        // Arabic-Indic three
        let classes = CharClasses::detect("٣٣٣");
        assert!(classes.digit);
        assert_eq!(classes.charset_size(), 10);
    }

    #[test]
    fn test_unlisted_symbol_is_not_special() {
        // '~' and space are outside the scoring set
        let classes = CharClasses::detect("~ ");
        assert!(!classes.special);
        assert_eq!(classes.charset_size(), 0);
    }

    #[test]
    fn test_alphabet_order_and_size() {
        let alphabet = brute_force_alphabet("z9");
        assert_eq!(alphabet.len(), 36);
        assert_eq!(alphabet.first(), Some(&'a'));
        assert_eq!(alphabet.last(), Some(&'9'));
    }

    #[test]
    fn test_alphabet_uses_narrow_special_set() {
        // '?' counts for scoring but not for the search alphabet
        assert!(CharClasses::detect("?").special);
        assert!(brute_force_alphabet("?").is_empty());

        let alphabet: String = brute_force_alphabet("&").into_iter().collect();
        assert_eq!(alphabet, BRUTE_FORCE_SPECIALS);
    }
}
