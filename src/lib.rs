//! Rule-based extraction of player records from pasted team sheets.
//!
//! Each line of a roster copied from a web page, PDF or press release is run
//! through a fixed pipeline:
//!
//! ```text
//! filter (blank lines, headings)
//!   -> normalize (bullets, parentheticals, position/country noise)
//!   -> jersey number (leading digit runs, column policy)
//!   -> name strategies (multi-word span, then single word)
//!   -> record | skip outcome with a diagnostic reason
//! ```
//!
//! ```
//! use teamsheet::{ColumnPolicy, ExtractionConfig, extract_with};
//!
//! let config = ExtractionConfig::default().with_column_policy(ColumnPolicy::SecondNumber);
//! let out = extract_with("1 26 Taylor Smith\n2 7 Jan van Persie (NED)", &config);
//!
//! assert_eq!(out.records[0].number, "26");
//! assert_eq!(out.records[0].name, "Taylor Smith");
//! assert_eq!(out.records[1].name, "Jan van Persie");
//! ```

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod export;
mod rules;

pub use api::{
    AutoDetectStats, ColumnPolicy, ExtractionConfig, ExtractionDetails, ExtractionResult, ExtractionResultVerbose,
    JerseyColumn, LineTrace, MatchWarning, PlayerRecord, Reason, SkipOutcome, extract, extract_verbose_with,
    extract_with, extract_with_lexicon,
};
pub use engine::LineShape;
pub use error::{Error, Result};
pub use rules::lexicon::{LEXICON_VERSION, Lexicon, LexiconTable, NameParticleSet, NoiseLexicon};

// --- Internal types ---------------------------------------------------------

/// Byte span into the text a strategy was run against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Range {
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    MultiWord,
    SingleWord,
}

/// A named name-matching strategy. Strategies are pure: given the remainder
/// of a line they return the span of a name, or `None`.
pub(crate) struct Strategy {
    pub name: &'static str,
    pub kind: MatchKind,
    pub run: fn(&str, &NameParticleSet) -> Option<Range>,
}

impl std::fmt::Debug for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Strategy").field("name", &self.name).field("kind", &self.kind).field("run", &"<fn>").finish()
    }
}

/// Output of the name cascade.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct NameMatch {
    /// Matched name with whitespace runs collapsed.
    pub name: String,
    pub range: Range,
    pub strategy: &'static str,
    pub kind: MatchKind,
}

/// A filtered input line together with its normalized working text.
#[derive(Debug, Clone)]
pub(crate) struct PreparedLine<'t> {
    /// 1-based line number in the submitted text.
    pub line_no: usize,
    /// Trimmed original text, kept for diagnostics.
    pub original: &'t str,
    /// Text after bullet, parenthetical and noise removal.
    pub working: String,
    pub shape: LineShape,
}
