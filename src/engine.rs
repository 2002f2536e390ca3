//! Line-to-record extraction engine.
//!
//! A run is a two-phase pipeline over the submitted text:
//!
//! ```text
//! input ── filter_lines ──> normalize ──> LineShape::scan        (phase 1, whole batch)
//!          (filter.rs)     (normalize.rs)  (shape.rs)
//!                                              │
//!                                   resolve_column (shape.rs)
//!                                   one JerseyColumn per run
//!                                              │
//!                                              v
//!          per line: split_jersey ──> strip role code ──> name strategies   (phase 2)
//!                    (numbers.rs)                          (rules/names)
//!                                              │
//!                         ┌────────────────────┴─────────────────┐
//!                   assemble (assemble.rs)               classify (rules/diagnose.rs)
//!                   PlayerRecord                         SkipOutcome
//! ```
//!
//! Phase 1 is the only place that looks across lines. Phase 2 receives the
//! resolved column and folds every prepared line into a single
//! `ExtractionResult`.
//!
//! ## Responsibilities by module
//!
//! - `filter.rs`: split input, drop blank and heading lines.
//! - `normalize.rs`: bullets, parentheticals, position/country noise.
//! - `shape.rs`: per-line `LineShape` flags and the auto-detect decision.
//! - `numbers.rs`: leading digit runs and jersey selection.
//! - `assemble.rs`: suffix, prefix and the include-numbers toggle.
//! - `extractor.rs`: orchestration and tracing.
//! - `metrics.rs`: timing data for verbose runs.
//!
//! ## Debugging
//!
//! Per-line traces are logged at `debug` level through the `log` facade;
//! the binary enables them with `RUST_LOG=teamsheet=debug`.

#[path = "engine/assemble.rs"]
mod assemble;
#[path = "engine/extractor.rs"]
mod extractor;
#[path = "engine/filter.rs"]
mod filter;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/normalize.rs"]
mod normalize;
#[path = "engine/numbers.rs"]
mod numbers;
#[path = "engine/shape.rs"]
mod shape;

pub use extractor::Extractor;
pub use shape::LineShape;
