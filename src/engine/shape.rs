//! Line-shape scan and batch-level column detection.
//!
//! Every prepared line gets a cheap set of [`LineShape`] flags computed from
//! its working text. The flags feed the only cross-line decision in the
//! pipeline: whether the submission carries a redundant left-index column.
//!
//! ## Auto-detect heuristic
//!
//! With [`ColumnPolicy::AutoDetect`] the column is decided once per run:
//! when more than [`MIN_SAMPLE`] lines were scanned and at least
//! [`LEADING_PAIR_THRESHOLD`] of them start with two digit runs, every line
//! is read with [`JerseyColumn::Second`]; otherwise with
//! [`JerseyColumn::First`].

use bitflags::bitflags;

use crate::{AutoDetectStats, ColumnPolicy, JerseyColumn};

/// Sample size must exceed this before auto-detect may pick the second column.
pub const MIN_SAMPLE: usize = 3;
/// Minimum share of lines starting with two digit runs.
pub const LEADING_PAIR_THRESHOLD: f64 = 0.8;

bitflags! {
    /// Coarse features of a working line.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct LineShape: u8 {
        /// Line starts with a digit run.
        const LEADING_NUMBER = 1 << 0;
        /// Line starts with two digit runs separated by whitespace.
        const LEADING_PAIR = 1 << 1;
        /// Line contains any digit.
        const HAS_DIGITS = 1 << 2;
        /// Line ends with a digit run.
        const TRAILING_DIGITS = 1 << 3;
        /// First letter of the line is lowercase.
        const LOWERCASE_START = 1 << 4;
    }
}

impl LineShape {
    pub fn scan(working: &str) -> Self {
        let mut shape = LineShape::empty();
        let text = working.trim();

        if text.bytes().any(|b| b.is_ascii_digit()) {
            shape |= LineShape::HAS_DIGITS;
        }
        if regex!(r"^#?\d").is_match(text) {
            shape |= LineShape::LEADING_NUMBER;
        }
        if regex!(r"^#?\d+[.):\-]?\s+#?\d+[.):\-]?\s").is_match(text) {
            shape |= LineShape::LEADING_PAIR;
        }
        if text.bytes().last().is_some_and(|b| b.is_ascii_digit()) {
            shape |= LineShape::TRAILING_DIGITS;
        }
        if text.chars().find(|c| c.is_alphabetic()).is_some_and(char::is_lowercase) {
            shape |= LineShape::LOWERCASE_START;
        }

        shape
    }
}

/// Resolve the column for a run. Auto-detect returns its scan statistics.
pub(crate) fn resolve_column(policy: ColumnPolicy, shapes: &[LineShape]) -> (JerseyColumn, Option<AutoDetectStats>) {
    if let Some(column) = policy.fixed() {
        return (column, None);
    }

    let sample = shapes.len();
    let leading_pairs = shapes.iter().filter(|s| s.contains(LineShape::LEADING_PAIR)).count();
    let fraction = if sample == 0 { 0.0 } else { leading_pairs as f64 / sample as f64 };

    let chosen = if sample > MIN_SAMPLE && fraction >= LEADING_PAIR_THRESHOLD {
        JerseyColumn::Second
    } else {
        JerseyColumn::First
    };

    log::info!("auto-detect: {leading_pairs}/{sample} lines start with two numbers -> {chosen:?} column");

    (chosen, Some(AutoDetectStats { sample, leading_pairs, fraction, chosen }))
}
