//! Explain why a line produced no name.
//!
//! Checks run in a fixed priority order against the original line with only
//! its leading numbers removed. The first check that fires decides the
//! reason; the reason is informational and never changes the outcome.

use super::names::helpers::letter_count;
use super::names::predicates::starts_lowercase;
use super::names::strategies::MIN_SINGLE_NAME_LETTERS;
use crate::Reason;

/// Classify a line that the name cascade rejected.
pub(crate) fn classify(text: &str) -> Reason {
    let text = text.trim_start();
    let tokens: Vec<&str> = text.split_whitespace().collect();

    let Some(first) = tokens.first() else {
        return Reason::UnrecognizedFormat;
    };

    if starts_lowercase(first) {
        return Reason::FirstNameNotCapitalized;
    }

    if tokens.get(1).is_some_and(|second| starts_lowercase(second)) {
        return Reason::LastNameNotCapitalized;
    }

    if tokens.len() == 1 && letter_count(first) < MIN_SINGLE_NAME_LETTERS {
        return Reason::NameTooShort;
    }

    let after_first = &text[first.len()..];
    if regex!(r"\d{1,4}[/.\-]\d{1,2}[/.\-]\d{1,4}|\d{2,}").is_match(after_first) {
        return Reason::NumbersInterfered;
    }

    Reason::UnrecognizedFormat
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classify_in_priority_order() {
        let cases: Vec<(Reason, &str)> = vec![
            (Reason::FirstNameNotCapitalized, "smith"),
            (Reason::FirstNameNotCapitalized, "harry Kane"),
            (Reason::FirstNameNotCapitalized, "bo"),
            (Reason::LastNameNotCapitalized, "Harry kane"),
            (Reason::LastNameNotCapitalized, "Jo x 1999"),
            (Reason::NameTooShort, "Bo"),
            (Reason::NameTooShort, "Ian"),
            (Reason::NumbersInterfered, "Jo 12/03/1999 B"),
            (Reason::NumbersInterfered, "A 1987"),
            (Reason::UnrecognizedFormat, "A B"),
            (Reason::UnrecognizedFormat, "A 7 B"),
            (Reason::UnrecognizedFormat, "-- ??"),
            (Reason::UnrecognizedFormat, ""),
        ];

        for (expected, input) in cases {
            assert_eq!(classify(input), expected, "unexpected reason for '{}'", input);
        }
    }

    #[test]
    fn digits_in_first_token_do_not_count() {
        assert_eq!(classify("Abcd1987"), Reason::UnrecognizedFormat);
    }
}
