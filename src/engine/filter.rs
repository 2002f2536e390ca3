//! Line filtering.
//!
//! Splits the submitted text into lines and drops the ones that can never
//! hold a player: blank lines and position-group headings ("Forwards",
//! "Point Guard:"). Survivors keep their 1-based line number and trimmed
//! original text for diagnostics.

use crate::NoiseLexicon;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FilteredLine<'t> {
    pub line_no: usize,
    pub original: &'t str,
}

pub(crate) fn filter_lines<'t>(input: &'t str, noise: &NoiseLexicon) -> Vec<FilteredLine<'t>> {
    input
        .lines()
        .enumerate()
        .filter_map(|(idx, line)| {
            let original = line.trim();
            if original.is_empty() {
                return None;
            }
            if noise.is_heading(original) {
                log::debug!("line {}: heading {:?} dropped", idx + 1, original);
                return None;
            }
            Some(FilteredLine { line_no: idx + 1, original })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;

    #[test]
    fn drops_blank_and_heading_lines() {
        let input = "Defenders\n\n  4 Virgil van Dijk  \r\n\t\nMidfielders:\n8 Dominik Szoboszlai";
        let lines = filter_lines(input, Lexicon::builtin().noise());

        assert_eq!(
            lines,
            vec![
                FilteredLine { line_no: 3, original: "4 Virgil van Dijk" },
                FilteredLine { line_no: 6, original: "8 Dominik Szoboszlai" },
            ]
        );
    }

    #[test]
    fn empty_input() {
        assert!(filter_lines("", Lexicon::builtin().noise()).is_empty());
    }
}
