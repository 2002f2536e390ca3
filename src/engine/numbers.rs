//! Jersey number extraction.
//!
//! Only *leading* digit runs are candidates. A run may carry a `#` marker and
//! be followed by a `.`, `)`, `:` or `-` separator ("#10 Messi", "1. 26 Ann
//! Lee"). The resolved [`JerseyColumn`] says how many leading runs to consume;
//! the last one consumed is the jersey number. When fewer runs are present
//! the ones that exist are still consumed and the number is empty.
//!
//! Digits later in the line (squad totals, birth years) stay in the remainder
//! for the name strategies to step over.

use crate::JerseyColumn;

/// Result of splitting one line into jersey number and remainder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NumberSplit<'t> {
    /// Selected jersey number, or empty.
    pub number: &'t str,
    /// Leading runs consumed, in order.
    pub leading: Vec<&'t str>,
    /// Trimmed text after the consumed runs.
    pub rest: &'t str,
}

pub(crate) fn split_jersey(text: &str, column: JerseyColumn) -> NumberSplit<'_> {
    let wanted = column.leading_runs();
    let mut rest = text.trim_start();
    let mut leading = Vec::with_capacity(wanted);

    while leading.len() < wanted {
        let Some(caps) = regex!(r"^#?(\d+)\s*(?:[.):\-]\s*)?").captures(rest) else {
            break;
        };
        let (Some(whole), Some(digits)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        leading.push(digits.as_str());
        rest = &rest[whole.end()..];
    }

    let number = if leading.len() == wanted { leading[wanted - 1] } else { "" };

    NumberSplit { number, leading, rest: rest.trim() }
}

/// Apply the configured prefix to a non-empty number.
pub(crate) fn prefixed(number: &str, prefix: Option<&str>) -> String {
    match prefix {
        Some(prefix) if !number.is_empty() => format!("{prefix}{number}"),
        _ => number.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_examples() {
        // (column, input, expected number, expected rest)
        let cases: Vec<(JerseyColumn, &str, &str, &str)> = vec![
            (JerseyColumn::First, "4 Messi", "4", "Messi"),
            (JerseyColumn::First, "#10 Lionel Messi", "10", "Lionel Messi"),
            (JerseyColumn::First, "7. Bukayo Saka", "7", "Bukayo Saka"),
            (JerseyColumn::First, "7 - Bukayo Saka", "7", "Bukayo Saka"),
            (JerseyColumn::First, "10Messi", "10", "Messi"),
            (JerseyColumn::First, "Lionel Messi 10", "", "Lionel Messi 10"),
            (JerseyColumn::First, "1 26 Taylor Smith", "1", "26 Taylor Smith"),
            (JerseyColumn::Second, "1 26 Taylor Smith", "26", "Taylor Smith"),
            (JerseyColumn::Second, "1) 26 Taylor Smith", "26", "Taylor Smith"),
            (JerseyColumn::Second, "4 Messi", "", "Messi"),
            (JerseyColumn::Second, "4 Messi 1987", "", "Messi 1987"),
            (JerseyColumn::Second, "Messi", "", "Messi"),
            (JerseyColumn::First, "", "", ""),
        ];

        for (column, input, number, rest) in cases {
            let split = split_jersey(input, column);
            assert_eq!((split.number, split.rest), (number, rest), "unexpected split for '{}' ({:?})", input, column);
        }
    }

    #[test]
    fn leading_runs_are_recorded() {
        let split = split_jersey("3 14 Ann Lee", JerseyColumn::Second);
        assert_eq!(split.leading, ["3", "14"]);
    }

    #[test]
    fn prefix_only_applies_to_real_numbers() {
        assert_eq!(prefixed("7", Some("#")), "#7");
        assert_eq!(prefixed("", Some("#")), "");
        assert_eq!(prefixed("7", None), "7");
    }
}
