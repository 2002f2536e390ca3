//! Literal term tables used by the pipeline.
//!
//! A [`Lexicon`] bundles two tables:
//!
//! - [`NoiseLexicon`]: position terms, country terms and role codes that are
//!   removed from a line before name matching (and position terms double as
//!   section headings).
//! - [`NameParticleSet`]: lowercase surname particles ("van", "de", ...) that
//!   may sit between two capitalized name tokens.
//!
//! Tables are plain data ([`LexiconTable`]) and can be loaded from JSON. All
//! derived patterns are compiled once in [`Lexicon::from_table`].
//!
//! ## Match order
//!
//! Multi-word entries must win over their sub-phrases ("Small Forward" before
//! "Forward"). The regex engine picks the first alternative that matches, so
//! terms are sorted explicitly: more words first, then longer first, then
//! declaration order.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Only table version understood by this build.
pub const LEXICON_VERSION: u32 = 1;

/// Start of a name token: an ASCII capital followed by letters or name punctuation.
pub(crate) const NAME_TOKEN: &str = r"[A-Z][\p{L}'’`.\-]+";

static BUILTIN: Lazy<Lexicon> = Lazy::new(|| {
    // The built-in table is static data; compiling it cannot fail.
    Lexicon::from_table(LexiconTable::builtin()).unwrap()
});

// --- Built-in terms -----------------------------------------------------------

const POSITIONS: &[&str] = &[
    // Cricket
    "All-rounders",
    "All-rounder",
    "Wicketkeepers",
    "Wicketkeeper",
    "Bowlers",
    "Bowler",
    "Batters",
    "Batter",
    // Football
    "Forwards",
    "Defenders",
    "Goalkeepers",
    "Midfielders",
    "Forward",
    "Defender",
    "Goalkeeper",
    "Midfielder",
    // Basketball
    "Point Guard",
    "PG",
    "Shooting Guard",
    "SG",
    "Small Forward",
    "SF",
    "Power Forward",
    "PF",
    "Center",
    "C",
];

const COUNTRIES: &[&str] = &[
    "Australia",
    "AUS",
    "New Zealand",
    "NZ",
    "United States",
    "America",
    "USA",
    "Canada",
    "England",
    "ENG",
    "South Africa",
    "India",
    "Pakistan",
    "Sri Lanka",
    "West Indies",
    "Bangladesh",
    "Afghanistan",
    "Ireland",
    "Scotland",
    "Netherlands",
    "NED",
    "Germany",
    "GER",
    "France",
    "FRA",
    "Italy",
    "ITA",
    "Spain",
    "ESP",
    "Portugal",
    "Belgium",
    "Greece",
    "Turkey",
    "China",
    "Japan",
    "Korea",
    "Brazil",
    "BRA",
    "Argentina",
    "ARG",
    "Mexico",
    "Sweden",
    "Norway",
    "Denmark",
    "Finland",
    "Poland",
    "Russia",
    "Ukraine",
    "Egypt",
    "Morocco",
    "Nigeria",
];

const ROLE_CODES: &[&str] = &["GK", "DF", "MF", "FW"];

const PARTICLES: &[&str] =
    &["van der", "van den", "van", "von", "de", "da", "di", "le", "la", "del", "du", "dos", "mac", "mc"];

// --- Table ---------------------------------------------------------------------

/// Serializable term table.
///
/// ```
/// use teamsheet::Lexicon;
///
/// let lexicon = Lexicon::from_json(r#"{
///     "version": 1,
///     "positions": ["Forwards", "Forward"],
///     "countries": ["Brazil"],
///     "role_codes": ["GK"],
///     "particles": ["van", "de"]
/// }"#).unwrap();
/// assert_eq!(lexicon.noise().positions(), ["Forwards", "Forward"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LexiconTable {
    pub version: u32,
    #[serde(default)]
    pub positions: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub role_codes: Vec<String>,
    #[serde(default)]
    pub particles: Vec<String>,
}

impl LexiconTable {
    /// The built-in term table.
    pub fn builtin() -> Self {
        fn owned(terms: &[&str]) -> Vec<String> {
            terms.iter().map(|t| t.to_string()).collect()
        }

        LexiconTable {
            version: LEXICON_VERSION,
            positions: owned(POSITIONS),
            countries: owned(COUNTRIES),
            role_codes: owned(ROLE_CODES),
            particles: owned(PARTICLES),
        }
    }
}

// --- Noise ---------------------------------------------------------------------

/// Position, country and role-code terms, with their compiled removal patterns.
#[derive(Debug, Clone)]
pub struct NoiseLexicon {
    positions: Vec<String>,
    countries: Vec<String>,
    role_codes: Vec<String>,
    /// Lowercased position terms in match order, for heading detection.
    heading_terms: Vec<String>,
    position_re: Option<Regex>,
    country_re: Option<Regex>,
    role_code_re: Option<Regex>,
}

impl NoiseLexicon {
    fn new(positions: Vec<String>, countries: Vec<String>, role_codes: Vec<String>) -> Result<Self> {
        let positions = match_order(positions);
        let countries = match_order(countries);
        let role_codes = match_order(role_codes);

        let heading_terms = positions.iter().map(|t| t.to_lowercase()).collect();
        let position_re = whole_word_pattern(&positions)?;
        let country_re = whole_word_pattern(&countries)?;
        let role_code_re = if role_codes.is_empty() {
            None
        } else {
            Some(Regex::new(&format!(r"^(?:{})\b\s*", alternation(&role_codes)))?)
        };

        Ok(NoiseLexicon { positions, countries, role_codes, heading_terms, position_re, country_re, role_code_re })
    }

    /// Position terms in match order.
    pub fn positions(&self) -> &[String] {
        &self.positions
    }

    /// Country terms in match order.
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Role codes in match order.
    pub fn role_codes(&self) -> &[String] {
        &self.role_codes
    }

    /// True when `line` reads as a position-group heading ("Forwards",
    /// "Point Guard:").
    ///
    /// Matching is case-insensitive and whole-word at the start of the line.
    /// Abbreviations of two characters or fewer only count when they make up
    /// the whole line, so "C. Ronaldo" is not a heading.
    pub fn is_heading(&self, line: &str) -> bool {
        let lower = line.trim().to_lowercase();

        self.heading_terms.iter().any(|term| {
            if term.chars().count() <= 2 {
                return lower.trim_end_matches(':').trim_end() == term.as_str();
            }
            lower.starts_with(term.as_str())
                && !lower[term.len()..].chars().next().is_some_and(|c| c.is_alphanumeric())
        })
    }

    /// Remove every whole-word, case-sensitive occurrence of a position term,
    /// then of a country term.
    pub fn strip(&self, text: &str) -> String {
        let mut out = text.to_string();
        for re in [&self.position_re, &self.country_re].into_iter().flatten() {
            out = re.replace_all(&out, "").into_owned();
        }
        out
    }

    /// Remove one leading role code ("GK Alisson" -> "Alisson").
    pub fn strip_role_code<'t>(&self, text: &'t str) -> &'t str {
        match &self.role_code_re {
            Some(re) => match re.find(text) {
                Some(m) => &text[m.end()..],
                None => text,
            },
            None => text,
        }
    }
}

// --- Particles -------------------------------------------------------------------

/// Lowercase surname particles and the particle-aware name-span pattern.
#[derive(Debug, Clone)]
pub struct NameParticleSet {
    particles: Vec<String>,
    /// Individual words of every particle entry ("van der" -> "van", "der").
    words: HashSet<String>,
    span_re: Regex,
}

impl NameParticleSet {
    fn new(particles: Vec<String>) -> Result<Self> {
        let particles = match_order(particles);
        let words = particles.iter().flat_map(|p| p.split_whitespace().map(str::to_string)).collect();

        let span = if particles.is_empty() {
            format!(r"\b{tok}(?:\s+{tok})+", tok = NAME_TOKEN)
        } else {
            format!(r"\b{tok}(?:\s+(?:(?:{parts})\s+)?{tok})+", tok = NAME_TOKEN, parts = alternation(&particles))
        };

        Ok(NameParticleSet { particles, words, span_re: Regex::new(&span)? })
    }

    /// Particle entries in match order.
    pub fn particles(&self) -> &[String] {
        &self.particles
    }

    /// True when `word` is (part of) a recognized particle.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Pattern matching two or more capitalized tokens, optionally linked by
    /// one particle between each pair.
    pub(crate) fn span_pattern(&self) -> &Regex {
        &self.span_re
    }
}

// --- Lexicon -----------------------------------------------------------------------

/// Complete set of term tables for one extraction run.
#[derive(Debug, Clone)]
pub struct Lexicon {
    version: u32,
    noise: NoiseLexicon,
    particles: NameParticleSet,
}

impl Lexicon {
    /// Shared built-in lexicon.
    pub fn builtin() -> &'static Lexicon {
        &BUILTIN
    }

    /// Build a lexicon from a table, compiling all derived patterns.
    pub fn from_table(table: LexiconTable) -> Result<Self> {
        if table.version != LEXICON_VERSION {
            return Err(Error::InvalidLexicon(format!(
                "unsupported version {} (expected {})",
                table.version, LEXICON_VERSION
            )));
        }

        for (category, terms) in [
            ("positions", &table.positions),
            ("countries", &table.countries),
            ("role_codes", &table.role_codes),
            ("particles", &table.particles),
        ] {
            if terms.iter().any(|t| t.trim().is_empty()) {
                return Err(Error::InvalidLexicon(format!("blank term in '{category}'")));
            }
        }

        let noise = NoiseLexicon::new(table.positions, table.countries, table.role_codes)?;
        let particles = NameParticleSet::new(table.particles)?;

        log::debug!(
            "lexicon v{}: {} positions, {} countries, {} role codes, {} particles",
            table.version,
            noise.positions.len(),
            noise.countries.len(),
            noise.role_codes.len(),
            particles.particles.len()
        );

        Ok(Lexicon { version: table.version, noise, particles })
    }

    /// Parse a JSON table and build a lexicon from it.
    pub fn from_json(json: &str) -> Result<Self> {
        let table: LexiconTable = serde_json::from_str(json)?;
        Self::from_table(table)
    }

    pub fn version(&self) -> u32 {
        self.version
    }

    pub fn noise(&self) -> &NoiseLexicon {
        &self.noise
    }

    pub fn particles(&self) -> &NameParticleSet {
        &self.particles
    }
}

// --- Helpers -------------------------------------------------------------------------

/// Deduplicate and sort terms so longer phrases are tried before sub-phrases.
fn match_order(terms: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut ordered: Vec<String> =
        terms.into_iter().map(|t| t.trim().to_string()).filter(|t| seen.insert(t.clone())).collect();

    // `sort_by` is stable, so ties keep declaration order.
    ordered.sort_by(|a, b| {
        let words = |s: &str| s.split_whitespace().count();
        words(b).cmp(&words(a)).then_with(|| b.chars().count().cmp(&a.chars().count()))
    });
    ordered
}

fn alternation(terms: &[String]) -> String {
    terms.iter().map(|t| regex::escape(t)).collect::<Vec<_>>().join("|")
}

fn whole_word_pattern(terms: &[String]) -> Result<Option<Regex>> {
    if terms.is_empty() {
        return Ok(None);
    }
    Ok(Some(Regex::new(&format!(r"\b(?:{})\b", alternation(terms)))?))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(positions: &[&str], countries: &[&str]) -> LexiconTable {
        LexiconTable {
            version: LEXICON_VERSION,
            positions: positions.iter().map(|s| s.to_string()).collect(),
            countries: countries.iter().map(|s| s.to_string()).collect(),
            role_codes: vec!["GK".into()],
            particles: vec!["van".into(), "van der".into()],
        }
    }

    #[test]
    fn longer_phrases_are_ordered_first() {
        let lexicon = Lexicon::from_table(table(&["Forward", "PF", "Small Forward"], &[])).unwrap();
        assert_eq!(lexicon.noise().positions(), ["Small Forward", "Forward", "PF"]);
        assert_eq!(lexicon.particles().particles(), ["van der", "van"]);
    }

    #[test]
    fn strip_removes_multi_word_term_without_orphans() {
        let lexicon = Lexicon::builtin();
        let out = lexicon.noise().strip("11 Small Forward LeBron James");
        assert!(!out.contains("Small"), "orphan word left in {out:?}");
        assert!(out.contains("LeBron James"));
    }

    #[test]
    fn strip_is_whole_word_and_case_sensitive() {
        let lexicon = Lexicon::from_table(table(&["Forward"], &["India"])).unwrap();
        assert_eq!(lexicon.noise().strip("Forwardson India"), "Forwardson ");
        assert_eq!(lexicon.noise().strip("forward india"), "forward india");
    }

    #[test]
    fn positions_are_removed_before_countries() {
        let lexicon = Lexicon::from_table(table(&["Center Spain"], &["Spain"])).unwrap();
        assert_eq!(lexicon.noise().strip("Center Spain Joe Bloggs").trim(), "Joe Bloggs");
    }

    #[test]
    fn heading_detection() {
        let noise = Lexicon::builtin().noise();
        assert!(noise.is_heading("Forwards"));
        assert!(noise.is_heading("forward"));
        assert!(noise.is_heading("Point Guard:"));
        assert!(noise.is_heading("PG"));
        assert!(!noise.is_heading("C. Ronaldo"));
        assert!(!noise.is_heading("Forwardson Smith"));
        assert!(!noise.is_heading("9 Harry Kane"));
    }

    #[test]
    fn role_code_only_stripped_at_start() {
        let noise = Lexicon::builtin().noise();
        assert_eq!(noise.strip_role_code("GK Alisson Becker"), "Alisson Becker");
        assert_eq!(noise.strip_role_code("Alisson GK"), "Alisson GK");
        assert_eq!(noise.strip_role_code("GKX Someone"), "GKX Someone");
    }

    #[test]
    fn from_json_rejects_bad_tables() {
        assert!(matches!(Lexicon::from_json(r#"{"version": 2}"#), Err(Error::InvalidLexicon(_))));
        assert!(matches!(
            Lexicon::from_json(r#"{"version": 1, "countries": ["  "]}"#),
            Err(Error::InvalidLexicon(_))
        ));
        assert!(matches!(Lexicon::from_json("not json"), Err(Error::Json(_))));
    }

    #[test]
    fn empty_table_is_usable() {
        let lexicon = Lexicon::from_json(r#"{"version": 1}"#).unwrap();
        assert_eq!(lexicon.noise().strip("GK Spain"), "GK Spain");
        assert!(!lexicon.noise().is_heading("Forwards"));
        assert!(lexicon.particles().span_pattern().is_match("Jan Persie"));
    }
}
