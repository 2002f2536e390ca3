use crate::engine;
use crate::error::Error;
use crate::{LineShape, Lexicon};
use serde::Serialize;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// How the jersey number is picked from the leading digit runs of a line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnPolicy {
    /// The first leading number is the jersey number.
    #[default]
    FirstNumber,
    /// The first leading number is a list index; the second is the jersey.
    SecondNumber,
    /// Decide once per submission by scanning every line.
    AutoDetect,
}

impl ColumnPolicy {
    /// The fixed column for this policy, or `None` for [`ColumnPolicy::AutoDetect`].
    pub fn fixed(self) -> Option<JerseyColumn> {
        match self {
            ColumnPolicy::FirstNumber => Some(JerseyColumn::First),
            ColumnPolicy::SecondNumber => Some(JerseyColumn::Second),
            ColumnPolicy::AutoDetect => None,
        }
    }
}

impl FromStr for ColumnPolicy {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "first" | "first_number" => Ok(ColumnPolicy::FirstNumber),
            "second" | "second_number" => Ok(ColumnPolicy::SecondNumber),
            "auto" | "auto_detect" => Ok(ColumnPolicy::AutoDetect),
            _ => Err(Error::UnknownPolicy(s.to_string())),
        }
    }
}

impl fmt::Display for ColumnPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ColumnPolicy::FirstNumber => "first",
            ColumnPolicy::SecondNumber => "second",
            ColumnPolicy::AutoDetect => "auto",
        })
    }
}

/// Column actually used for a run once auto-detection is resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JerseyColumn {
    First,
    Second,
}

impl JerseyColumn {
    /// Number of leading digit runs consumed from each line.
    pub fn leading_runs(self) -> usize {
        match self {
            JerseyColumn::First => 1,
            JerseyColumn::Second => 2,
        }
    }
}

/// Options for one extraction run.
///
/// Built once by the caller and never mutated by the pipeline. Blank suffix
/// and prefix strings behave as unset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtractionConfig {
    pub column_policy: ColumnPolicy,
    /// Appended to every matched name, separated by one space.
    pub append_suffix: Option<String>,
    /// Prepended to every non-empty jersey number.
    pub prepend_prefix: Option<String>,
    pub include_numbers: bool,
    /// Uppercase a lowercase first character of the remainder before matching.
    pub recover_lowercase_initial: bool,
}

impl Default for ExtractionConfig {
    fn default() -> Self {
        Self {
            column_policy: ColumnPolicy::FirstNumber,
            append_suffix: None,
            prepend_prefix: None,
            include_numbers: true,
            recover_lowercase_initial: false,
        }
    }
}

impl ExtractionConfig {
    pub fn with_column_policy(mut self, policy: ColumnPolicy) -> Self {
        self.column_policy = policy;
        self
    }

    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.append_suffix = Some(suffix.into());
        self
    }

    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prepend_prefix = Some(prefix.into());
        self
    }

    pub fn with_include_numbers(mut self, include: bool) -> Self {
        self.include_numbers = include;
        self
    }

    pub fn with_lowercase_recovery(mut self, recover: bool) -> Self {
        self.recover_lowercase_initial = recover;
        self
    }

    /// Suffix to append, if set and not blank.
    pub(crate) fn suffix(&self) -> Option<&str> {
        self.append_suffix.as_deref().map(str::trim).filter(|s| !s.is_empty())
    }

    /// Prefix to prepend, if set and not blank.
    pub(crate) fn prefix(&self) -> Option<&str> {
        self.prepend_prefix.as_deref().filter(|s| !s.trim().is_empty())
    }
}

/// One extracted player.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PlayerRecord {
    /// Jersey number (with prefix), possibly empty.
    pub number: String,
    pub name: String,
}

/// Why a line produced no record (or only a weak one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Reason {
    FirstNameNotCapitalized,
    LastNameNotCapitalized,
    NameTooShort,
    NumbersInterfered,
    UnrecognizedFormat,
    /// Only attached to warnings: the record came from the single-word fallback.
    SingleWordOnly,
}

impl Reason {
    /// Human-readable explanation.
    pub fn message(self) -> &'static str {
        match self {
            Reason::FirstNameNotCapitalized => "first name not capitalized",
            Reason::LastNameNotCapitalized => "last name not capitalized",
            Reason::NameTooShort => "name too short",
            Reason::NumbersInterfered => "numbers or dates interfered with parsing",
            Reason::UnrecognizedFormat => "unrecognized format",
            Reason::SingleWordOnly => "only a single name was recognized",
        }
    }
}

impl fmt::Display for Reason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// A line that yielded no record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SkipOutcome {
    /// 1-based line number in the submitted text.
    pub line_no: usize,
    pub original_line: String,
    pub reason: Reason,
}

/// A record that was emitted from a weak match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MatchWarning {
    pub line_no: usize,
    pub name: String,
    pub reason: Reason,
}

/// Output of one run. Records and skips keep input line order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExtractionResult {
    pub records: Vec<PlayerRecord>,
    pub skipped: Vec<SkipOutcome>,
    pub warnings: Vec<MatchWarning>,
    /// Column used for this run (auto-detection already resolved).
    pub resolved_policy: JerseyColumn,
}

impl ExtractionResult {
    pub(crate) fn empty(resolved_policy: JerseyColumn) -> Self {
        Self { records: Vec::new(), skipped: Vec::new(), warnings: Vec::new(), resolved_policy }
    }

    /// True when no player was detected.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Outcome of the batch-level auto-detect scan.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AutoDetectStats {
    /// Number of lines scanned.
    pub sample: usize,
    /// Lines starting with two digit runs.
    pub leading_pairs: usize,
    pub fraction: f64,
    pub chosen: JerseyColumn,
}

/// Per-line trace for debugging.
#[derive(Debug, Clone, Serialize)]
pub struct LineTrace {
    pub line_no: usize,
    pub original: String,
    /// Line after bullet, parenthetical and noise removal.
    pub working: String,
    /// Text handed to the name strategies.
    pub remainder: String,
    #[serde(serialize_with = "serialize_shape")]
    pub shape: LineShape,
    /// Leading digit runs consumed from the working text.
    pub leading: Vec<String>,
    pub number: String,
    /// Strategy that produced the name, if any.
    pub strategy: Option<&'static str>,
    pub reason: Option<Reason>,
}

fn serialize_shape<S: serde::Serializer>(shape: &LineShape, s: S) -> Result<S::Ok, S::Error> {
    s.collect_seq(shape.iter_names().map(|(name, _)| name))
}

/// Extra details returned by [`extract_verbose_with`].
#[derive(Debug, Clone, Serialize)]
pub struct ExtractionDetails {
    pub traces: Vec<LineTrace>,
    /// Present when the run was configured with [`ColumnPolicy::AutoDetect`].
    pub auto_detect: Option<AutoDetectStats>,
    /// Time spent filtering and normalizing lines.
    pub prepare: Duration,
    /// Time spent resolving the column policy.
    pub resolve_policy: Duration,
    /// Time spent extracting numbers, matching names and assembling records.
    pub matching: Duration,
    pub total: Duration,
}

/// Result from [`extract_verbose_with`].
#[derive(Debug, Clone)]
pub struct ExtractionResultVerbose {
    pub result: ExtractionResult,
    pub details: ExtractionDetails,
}

/// Extract records from `text` with the default configuration and the
/// built-in lexicon.
///
/// # Example
/// ```
/// use teamsheet::extract;
///
/// let out = extract("Forwards\n9 Harry Kane\n10 Heung-min Son (KOR)");
/// assert_eq!(out.records.len(), 2);
/// assert_eq!(out.records[0].number, "9");
/// ```
pub fn extract(text: &str) -> ExtractionResult {
    extract_with(text, &ExtractionConfig::default())
}

/// Extract records from `text` with `config` and the built-in lexicon.
pub fn extract_with(text: &str, config: &ExtractionConfig) -> ExtractionResult {
    extract_with_lexicon(text, config, Lexicon::builtin())
}

/// Extract records from `text` with `config` and a caller-supplied lexicon.
pub fn extract_with_lexicon(text: &str, config: &ExtractionConfig, lexicon: &Lexicon) -> ExtractionResult {
    engine::Extractor::new(lexicon, config).run(text)
}

/// Like [`extract_with_lexicon`], also returning per-line traces and timings.
pub fn extract_verbose_with(text: &str, config: &ExtractionConfig, lexicon: &Lexicon) -> ExtractionResultVerbose {
    let run = engine::Extractor::new(lexicon, config).run_with_metrics(text);

    let details = ExtractionDetails {
        traces: run.traces,
        auto_detect: run.auto_detect,
        prepare: run.metrics.prepare,
        resolve_policy: run.metrics.resolve_policy,
        matching: run.metrics.matching,
        total: run.metrics.total,
    };

    ExtractionResultVerbose { result: run.result, details }
}
