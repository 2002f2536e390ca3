//! Run orchestration.
//!
//! ```text
//! run_with_metrics
//!   ├─ prepare()          filter + normalize + LineShape::scan   (every line)
//!   ├─ resolve_column()   one JerseyColumn for the whole run
//!   └─ fold process_line  number -> role code -> name cascade -> record | skip
//! ```
//!
//! `process_line` only sees one prepared line and the resolved column, so
//! each line's outcome is independent of its neighbours once the column is
//! fixed.

use std::borrow::Cow;
use std::time::Instant;

use super::assemble::assemble;
use super::filter::filter_lines;
use super::metrics::{RunMetrics, RunResult};
use super::normalize::{normalize, strip_bullets};
use super::numbers::split_jersey;
use super::shape::{LineShape, resolve_column};
use crate::rules::diagnose::classify;
use crate::rules::names::helpers::uppercase_first;
use crate::rules::names::predicates::starts_lowercase;
use crate::rules::names::strategies::match_name;
use crate::{
    ExtractionConfig, ExtractionResult, JerseyColumn, Lexicon, LineTrace, MatchKind, MatchWarning, PlayerRecord,
    PreparedLine, Reason, SkipOutcome,
};

enum LineOutcome {
    Record { record: PlayerRecord, warning: Option<MatchWarning> },
    Skip(SkipOutcome),
}

/// Runs the pipeline for one configuration and lexicon.
///
/// Usage: `Extractor::new(&lexicon, &config).run(text)`.
#[derive(Debug, Clone, Copy)]
pub struct Extractor<'a> {
    lexicon: &'a Lexicon,
    config: &'a ExtractionConfig,
}

impl<'a> Extractor<'a> {
    pub fn new(lexicon: &'a Lexicon, config: &'a ExtractionConfig) -> Self {
        Extractor { lexicon, config }
    }

    pub fn run(&self, input: &str) -> ExtractionResult {
        self.run_with_metrics(input).result
    }

    pub fn run_with_metrics(&self, input: &str) -> RunResult {
        let started = Instant::now();

        let lines = self.prepare(input);
        let prepared_at = Instant::now();

        let shapes: Vec<LineShape> = lines.iter().map(|line| line.shape).collect();
        let (column, auto_detect) = resolve_column(self.config.column_policy, &shapes);
        let resolved_at = Instant::now();

        let (result, traces) = lines.iter().fold(
            (ExtractionResult::empty(column), Vec::with_capacity(lines.len())),
            |(mut result, mut traces), line| {
                let (outcome, trace) = self.process_line(line, column);
                match outcome {
                    LineOutcome::Record { record, warning } => {
                        result.records.push(record);
                        result.warnings.extend(warning);
                    }
                    LineOutcome::Skip(skip) => result.skipped.push(skip),
                }
                traces.push(trace);
                (result, traces)
            },
        );
        let finished = Instant::now();

        log::info!(
            "{} lines: {} records, {} skipped, {} warnings ({:?} column)",
            lines.len(),
            result.records.len(),
            result.skipped.len(),
            result.warnings.len(),
            column
        );

        RunResult {
            result,
            traces,
            auto_detect,
            metrics: RunMetrics {
                total: finished - started,
                prepare: prepared_at - started,
                resolve_policy: resolved_at - prepared_at,
                matching: finished - resolved_at,
            },
        }
    }

    fn prepare<'t>(&self, input: &'t str) -> Vec<PreparedLine<'t>> {
        let noise = self.lexicon.noise();

        filter_lines(input, noise)
            .into_iter()
            .map(|line| {
                let working = normalize(line.original, noise);
                let shape = LineShape::scan(&working);
                PreparedLine { line_no: line.line_no, original: line.original, working, shape }
            })
            .collect()
    }

    fn process_line(&self, line: &PreparedLine<'_>, column: JerseyColumn) -> (LineOutcome, LineTrace) {
        let split = split_jersey(&line.working, column);
        let rest = self.lexicon.noise().strip_role_code(split.rest).trim();

        let candidate: Cow<'_, str> = if self.config.recover_lowercase_initial && starts_lowercase(rest) {
            Cow::Owned(uppercase_first(rest))
        } else {
            Cow::Borrowed(rest)
        };

        let mut trace = LineTrace {
            line_no: line.line_no,
            original: line.original.to_string(),
            working: line.working.clone(),
            remainder: candidate.to_string(),
            shape: line.shape,
            leading: split.leading.iter().map(|run| run.to_string()).collect(),
            number: split.number.to_string(),
            strategy: None,
            reason: None,
        };

        let outcome = match match_name(&candidate, self.lexicon.particles()) {
            Some(m) => {
                let warning = (m.kind == MatchKind::SingleWord).then(|| MatchWarning {
                    line_no: line.line_no,
                    name: m.name.clone(),
                    reason: Reason::SingleWordOnly,
                });
                trace.strategy = Some(m.strategy);
                trace.reason = warning.as_ref().map(|w| w.reason);

                log::debug!(
                    "line {}: {:?} -> #{} {:?} via {} at {}..{}",
                    line.line_no,
                    line.working,
                    split.number,
                    m.name,
                    m.strategy,
                    m.range.start,
                    m.range.end
                );

                LineOutcome::Record { record: assemble(split.number, &m.name, self.config), warning }
            }
            None => {
                let reason = classify(split_jersey(strip_bullets(line.original), column).rest);
                trace.reason = Some(reason);

                log::debug!("line {}: skipped {:?} ({})", line.line_no, line.original, reason);

                LineOutcome::Skip(SkipOutcome { line_no: line.line_no, original_line: line.original.to_string(), reason })
            }
        };

        (outcome, trace)
    }
}
