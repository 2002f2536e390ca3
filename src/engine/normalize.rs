//! Line normalization.
//!
//! Produces the working text used for number and name extraction. Steps run
//! in a fixed order, each on the previous step's output:
//!
//! 1. strip leading bullets (`*`, `•`) and whitespace;
//! 2. remove every `( ... )` aside, first `)` closing the first `(`;
//! 3. remove position terms, then country terms (whole word, case-sensitive).
//!
//! Whitespace left behind by removals is not collapsed.

use crate::NoiseLexicon;

pub(crate) fn normalize(line: &str, noise: &NoiseLexicon) -> String {
    let line = strip_bullets(line);
    let line = strip_parentheticals(line);
    noise.strip(&line)
}

pub(crate) fn strip_bullets(line: &str) -> &str {
    line.trim_start_matches(|c: char| c == '*' || c == '•' || c.is_whitespace())
}

fn strip_parentheticals(line: &str) -> String {
    regex!(r"\(.*?\)").replace_all(line, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Lexicon;

    #[test]
    fn normalize_steps() {
        let noise = Lexicon::builtin().noise();
        let cases: Vec<(&str, &str)> = vec![
            ("** 7 Jan van Persie (NED)", "7 Jan van Persie "),
            ("• 10 Lionel Messi (c) (37)", "10 Lionel Messi  "),
            ("3 Forward Harry Kane England", "3  Harry Kane "),
            ("5 Point Guard Steph Curry USA", "5  Steph Curry "),
            ("9 Ivan (CRO (Split)) Perisic", "9 Ivan ) Perisic"),
            ("6 Unclosed (paren Smith", "6 Unclosed (paren Smith"),
        ];

        for (input, expected) in cases {
            assert_eq!(normalize(input, noise), expected, "unexpected working text for '{}'", input);
        }
    }

    #[test]
    fn bullets_only_at_start() {
        assert_eq!(strip_bullets(" * *Ann Lee*"), "Ann Lee*");
    }
}
