use crate::rules::names::strategies::{STRATEGIES, match_name};
use crate::{Lexicon, MatchKind};

#[test]
fn name_examples_matching() {
    // (remainder after number removal, expected name)
    let cases: Vec<(&str, Option<&str>)> = vec![
        ("Taylor Smith", Some("Taylor Smith")),
        ("Jan van Persie", Some("Jan van Persie")),
        ("Robert De Niro", Some("Robert De Niro")),
        ("Virgil van Dijk", Some("Virgil van Dijk")),
        ("Rafael van der Vaart", Some("Rafael van der Vaart")),
        ("Cristiano Ronaldo dos Santos Aveiro", Some("Cristiano Ronaldo dos Santos Aveiro")),
        ("Shaun O'Neill", Some("Shaun O'Neill")),
        ("Jean-Luc Ponty", Some("Jean-Luc Ponty")),
        ("T.J. Warren", Some("T.J. Warren")),
        ("J. Smith", Some("J. Smith")),
        ("Ivan Perišić", Some("Ivan Perišić")),
        ("- Harry   Kane", Some("Harry Kane")),
        ("captain Harry Kane", Some("Harry Kane")),
        ("Harry Kane 10", Some("Harry Kane")),
        ("John Smith 1987 Bar", Some("John Smith")),
        ("Messi", Some("Messi")),
        ("Pele", Some("Pele")),
        // trailing initial rejects the span; the single-word rule takes over
        ("John S.", Some("John")),
        ("Smith J.", Some("Smith")),
        ("Harry Kane J.", Some("Harry")),
        ("Jan B.", None),
        // a particle before the initial keeps it
        ("Jan van B.", Some("Jan van B.")),
        ("Rafael van der V.", Some("Rafael van der V.")),
        ("Ian", None),
        ("Al B.", None),
        ("Jan van", None),
        ("smith jones", None),
        ("", None),
        ("   ", None),
    ];

    let particles = Lexicon::builtin().particles();

    for (input, expected) in cases {
        let got = match_name(input, particles).map(|m| m.name);
        assert_eq!(got.as_deref(), expected, "unexpected name for input '{}'", input);
    }
}

#[test]
fn multi_word_span_beats_earlier_single_word() {
    let particles = Lexicon::builtin().particles();
    let m = match_name("Messi and Lionel Andres", particles).unwrap();

    assert_eq!(m.name, "Lionel Andres");
    assert_eq!(m.kind, MatchKind::MultiWord);
    assert_eq!(m.strategy, "multi-word span");
}

#[test]
fn single_word_fallback_is_reported() {
    let particles = Lexicon::builtin().particles();
    let m = match_name("Neymar", particles).unwrap();

    assert_eq!(m.kind, MatchKind::SingleWord);
    assert_eq!((m.range.start, m.range.end), (0, 6));
}

#[test]
fn strategies_are_ordered_strongest_first() {
    let kinds: Vec<MatchKind> = STRATEGIES.iter().map(|s| s.kind).collect();
    assert_eq!(kinds, vec![MatchKind::MultiWord, MatchKind::SingleWord]);
}

#[test]
fn particles_come_from_the_lexicon() {
    let lexicon = Lexicon::from_json(r#"{"version": 1, "particles": ["ter"]}"#).unwrap();

    let m = match_name("Marc ter Stegen", lexicon.particles()).unwrap();
    assert_eq!(m.name, "Marc ter Stegen");

    // "van" is not a particle here, so the span stops before it.
    let m = match_name("Jan van Persie", lexicon.particles()).unwrap();
    assert_eq!(m.kind, MatchKind::SingleWord);
    assert_eq!(m.name, "Persie");
}

#[test]
fn trailing_initial_falls_back_to_single_word() {
    let particles = Lexicon::builtin().particles();
    let m = match_name("Harry Kane J.", particles).unwrap();

    assert_eq!(m.name, "Harry");
    assert_eq!(m.kind, MatchKind::SingleWord);
}
