//! Error types for the boundary layer.
//!
//! The extraction pipeline itself never fails: every line becomes either a
//! record or a skip outcome. Errors only come from parsing user-facing
//! options, loading lexicon tables and writing export or JSON output.

/// Result type alias for fallible `teamsheet` operations.
pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Output format name not recognized (expected csv, tsv or txt).
    #[error("unknown output format '{0}' (expected csv, tsv or txt)")]
    UnknownFormat(String),

    /// Column policy name not recognized (expected first, second or auto).
    #[error("unknown column policy '{0}' (expected first, second or auto)")]
    UnknownPolicy(String),

    /// JSON could not be read or written (lexicon tables, `--json` output).
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Lexicon table deserialized but its contents are unusable.
    #[error("invalid lexicon table: {0}")]
    InvalidLexicon(String),

    /// A pattern derived from lexicon terms failed to compile.
    #[error("failed to compile lexicon pattern: {0}")]
    Pattern(#[from] regex::Error),

    /// Delimited export could not be written or read back.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
