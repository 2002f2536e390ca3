//! Name-matching strategies, tried in a fixed order.
//!
//! | # | strategy          | accepts                                                   |
//! |---|-------------------|-----------------------------------------------------------|
//! | 1 | `multi-word span` | two or more capitalized tokens, one particle between each |
//! | 2 | `single word`     | first capitalized token with at least four letters        |
//!
//! The first strategy returning a span wins. Each strategy searches the whole
//! remainder, so a multi-word name later in the text beats an earlier
//! single word.

use super::helpers::{collapse_whitespace, token_spans};
use super::predicates::{has_min_letters, is_initial};
use crate::{MatchKind, NameMatch, NameParticleSet, Range, Strategy};

/// Minimum letters for a name given as a single word.
pub(crate) const MIN_SINGLE_NAME_LETTERS: usize = 4;

pub(crate) static STRATEGIES: &[Strategy] = &[
    Strategy { name: "multi-word span", kind: MatchKind::MultiWord, run: multi_word_span },
    Strategy { name: "single word", kind: MatchKind::SingleWord, run: single_word },
];

/// Run the strategy cascade over `text` and return the first match.
pub(crate) fn match_name(text: &str, particles: &NameParticleSet) -> Option<NameMatch> {
    STRATEGIES.iter().find_map(|strategy| {
        let range = (strategy.run)(text, particles)?;
        Some(NameMatch {
            name: collapse_whitespace(&text[range.start..range.end]),
            range,
            strategy: strategy.name,
            kind: strategy.kind,
        })
    })
}

/// Longest particle-aware span of capitalized tokens, leftmost first.
fn multi_word_span(text: &str, particles: &NameParticleSet) -> Option<Range> {
    particles.span_pattern().find_iter(text).find_map(|m| {
        let len = validated_len(m.as_str(), particles)?;
        Some(Range { start: m.start(), end: m.start() + len })
    })
}

/// Reject a span ending in a stray initial ("Harry Kane J.") unless a
/// particle precedes it ("Jan van B."). Returns the span's byte length, or
/// `None` so the search moves on to the next candidate.
fn validated_len(span: &str, particles: &NameParticleSet) -> Option<usize> {
    let tokens = token_spans(span);
    let &(start, last) = tokens.last()?;

    let after_particle = tokens.len() >= 2 && particles.contains(tokens[tokens.len() - 2].1);
    if is_initial(last) && !after_particle {
        return None;
    }

    let names = tokens.iter().filter(|(_, t)| !particles.contains(t)).count();
    if names < 2 {
        return None;
    }

    Some(start + last.len())
}

/// First capitalized standalone token with enough letters to be a mononym.
fn single_word(text: &str, _particles: &NameParticleSet) -> Option<Range> {
    regex!(r"\b[A-Z][\p{L}'’`.\-]*")
        .find_iter(text)
        .find(|m| has_min_letters::<MIN_SINGLE_NAME_LETTERS>(m.as_str()))
        .map(|m| Range { start: m.start(), end: m.end() })
}
