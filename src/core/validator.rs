//! Document number validation logic

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exact number of characters in a valid document number
pub const DOC_NUMBER_LENGTH: usize = 15;

/// Prefixes a valid document number may start with
pub const ACCEPTED_PREFIXES: [&str; 2] = ["docnum", "contract"];

/// Outcome of classifying a single document number
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Verdict {
    Valid,
    InvalidLength,
    InvalidPrefix,
    InvalidCharacters,
}

impl Verdict {
    /// Every verdict, in rule order
    pub const ALL: [Verdict; 4] = [
        Verdict::Valid,
        Verdict::InvalidLength,
        Verdict::InvalidPrefix,
        Verdict::InvalidCharacters,
    ];

    /// Report text attached to this verdict.
    ///
    /// The spelling of the invalid-characters message is kept as-is because
    /// existing report consumers match on it.
    pub fn message(self) -> &'static str {
        match self {
            Verdict::Valid => "Valid document number",
            Verdict::InvalidLength => "Does not contain fifteen characters",
            Verdict::InvalidPrefix => "Does not start with docnum and with contract",
            Verdict::InvalidCharacters => "Does not contain only litters or digits",
        }
    }

    pub fn is_valid(self) -> bool {
        self == Verdict::Valid
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

type Rule = (fn(&str) -> bool, Verdict);

/// Ordered decision table. The first matching predicate decides the verdict,
/// so a number that is both too short and badly prefixed is only reported
/// as `InvalidLength`.
const RULES: [Rule; 3] = [
    (is_valid_number, Verdict::Valid),
    (has_wrong_length, Verdict::InvalidLength),
    (lacks_accepted_prefix, Verdict::InvalidPrefix),
];

/// Classify a document number
///
/// # Arguments
/// * `identifier` - The document number exactly as read from its line
///
/// # Returns
/// The single verdict for this number. Every string is classifiable.
pub fn classify(identifier: &str) -> Verdict {
    RULES
        .iter()
        .find(|(matches, _)| matches(identifier))
        .map(|&(_, verdict)| verdict)
        .unwrap_or(Verdict::InvalidCharacters)
}

/// Check whether a document number satisfies every rule at once
pub fn is_valid_number(identifier: &str) -> bool {
    !has_wrong_length(identifier)
        && !lacks_accepted_prefix(identifier)
        && identifier.chars().all(|ch| ch.is_ascii_alphanumeric())
}

// Length is counted in characters, not bytes.
fn has_wrong_length(identifier: &str) -> bool {
    identifier.chars().count() != DOC_NUMBER_LENGTH
}

fn lacks_accepted_prefix(identifier: &str) -> bool {
    !ACCEPTED_PREFIXES
        .iter()
        .any(|prefix| identifier.starts_with(prefix))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_numbers() {
        assert_eq!(classify("contractAB12345"), Verdict::Valid);
        assert_eq!(classify("docnum123456789"), Verdict::Valid);
        assert_eq!(classify("docnumABCdef123"), Verdict::Valid);
    }

    #[test]
    fn test_short_number_is_invalid_length() {
        assert_eq!(classify("docnum1234567"), Verdict::InvalidLength);
    }

    #[test]
    fn test_empty_string_is_invalid_length() {
        assert_eq!(classify(""), Verdict::InvalidLength);
    }

    #[test]
    fn test_length_wins_over_prefix_and_characters() {
        // Wrong length, wrong prefix and a symbol: only the length is reported
        assert_eq!(classify("xx!"), Verdict::InvalidLength);
        assert_eq!(classify("docnum1234567890"), Verdict::InvalidLength);
    }

    #[test]
    fn test_missing_prefix() {
        assert_eq!(classify("xxxxxxxxxxxxxxx"), Verdict::InvalidPrefix);
        // Prefix check wins over the character check
        assert_eq!(classify("xxxxxxxxxxxxx!!"), Verdict::InvalidPrefix);
        // Prefixes are case-sensitive
        assert_eq!(classify("DOCNUM123456789"), Verdict::InvalidPrefix);
    }

    #[test]
    fn test_symbols_after_valid_prefix() {
        assert_eq!(classify("docnum12345!@#$"), Verdict::InvalidCharacters);
        assert_eq!(classify("contract 123456"), Verdict::InvalidCharacters);
    }

    #[test]
    fn test_length_counts_characters_not_bytes() {
        // 15 characters, 16 bytes; the accented letter is not ASCII
        let id = "docnum\u{e9}12345678";
        assert_eq!(id.chars().count(), 15);
        assert_eq!(classify(id), Verdict::InvalidCharacters);
    }

    #[test]
    fn test_messages() {
        assert_eq!(Verdict::Valid.to_string(), "Valid document number");
        assert_eq!(
            Verdict::InvalidCharacters.to_string(),
            "Does not contain only litters or digits"
        );
        assert!(Verdict::ALL.iter().filter(|v| v.is_valid()).count() == 1);
    }
}
