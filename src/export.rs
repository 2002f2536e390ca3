//! Delimited export of extracted records.
//!
//! Each record becomes one `number<delimiter>name` row. Fields containing
//! the delimiter, a double quote or a line break are wrapped in quotes with
//! inner quotes doubled, so [`parse_rows`] recovers the exact strings.
//!
//! ```
//! use teamsheet::export::{ExportFormat, parse_rows, to_delimited};
//! use teamsheet::PlayerRecord;
//!
//! let records = vec![PlayerRecord { number: "9".into(), name: "Kane, Harry".into() }];
//! let csv = to_delimited(&records, ExportFormat::Csv)?;
//! assert_eq!(csv, "9,\"Kane, Harry\"\n");
//! assert_eq!(parse_rows(&csv, b',')?, vec![vec!["9".to_string(), "Kane, Harry".to_string()]]);
//! # Ok::<(), teamsheet::Error>(())
//! ```

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use chrono::NaiveDateTime;

use crate::PlayerRecord;
use crate::error::{Error, Result};

/// Stem used for generated filenames.
pub const DEFAULT_STEM: &str = "team";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    /// Comma-separated, `.csv`.
    Csv,
    /// Tab-separated, `.tsv`.
    #[default]
    Tsv,
    /// Tab-separated plain text, `.txt`, ready for text-expander imports.
    Text,
}

impl ExportFormat {
    pub fn delimiter(self) -> u8 {
        match self {
            ExportFormat::Csv => b',',
            ExportFormat::Tsv | ExportFormat::Text => b'\t',
        }
    }

    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Tsv => "tsv",
            ExportFormat::Text => "txt",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            ExportFormat::Csv => "text/csv",
            ExportFormat::Tsv => "text/tab-separated-values",
            ExportFormat::Text => "text/plain",
        }
    }
}

impl FromStr for ExportFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "csv" => Ok(ExportFormat::Csv),
            "tsv" => Ok(ExportFormat::Tsv),
            "txt" | "text" => Ok(ExportFormat::Text),
            _ => Err(Error::UnknownFormat(s.to_string())),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.extension())
    }
}

// --- Writing -------------------------------------------------------------------

/// Serialize records as delimited rows, one per line.
pub fn to_delimited(records: &[PlayerRecord], format: ExportFormat) -> Result<String> {
    let mut writer = csv::WriterBuilder::new()
        .delimiter(format.delimiter())
        .has_headers(false)
        .quote_style(csv::QuoteStyle::Necessary)
        .terminator(csv::Terminator::Any(b'\n'))
        .from_writer(Vec::new());

    for record in records {
        writer.write_record([record.number.as_str(), record.name.as_str()])?;
    }

    let bytes = writer.into_inner().map_err(|err| err.into_error())?;
    String::from_utf8(bytes).map_err(|err| Error::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err)))
}

// --- Reading -------------------------------------------------------------------

/// Quote-aware reader for the rows written by [`to_delimited`]. CRLF tolerant.
pub fn parse_rows(text: &str, delimiter: u8) -> Result<Vec<Vec<String>>> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    reader
        .records()
        .map(|row| -> Result<Vec<String>> { Ok(row?.iter().map(str::to_string).collect()) })
        .collect()
}

// --- Filenames and artifacts -----------------------------------------------------

/// `team_<YYYYmmdd_HHMMSS>.<ext>`
pub fn default_filename(format: ExportFormat, timestamp: &NaiveDateTime) -> String {
    format!("{}_{}.{}", DEFAULT_STEM, timestamp.format("%Y%m%d_%H%M%S"), format.extension())
}

/// Use a non-blank explicit name (adding the format's extension when it has
/// none), otherwise the timestamped default.
pub fn resolve_filename(explicit: Option<&str>, format: ExportFormat, timestamp: &NaiveDateTime) -> String {
    match explicit.map(str::trim).filter(|name| !name.is_empty()) {
        Some(name) if Path::new(name).extension().is_some() => name.to_string(),
        Some(name) => format!("{}.{}", name, format.extension()),
        None => default_filename(format, timestamp),
    }
}

/// Serialized records ready to be offered as a download or written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportArtifact {
    pub filename: String,
    pub content_type: &'static str,
    pub bytes: Vec<u8>,
}

pub fn build_export(
    records: &[PlayerRecord],
    format: ExportFormat,
    explicit_name: Option<&str>,
    timestamp: &NaiveDateTime,
) -> Result<ExportArtifact> {
    Ok(ExportArtifact {
        filename: resolve_filename(explicit_name, format, timestamp),
        content_type: format.content_type(),
        bytes: to_delimited(records, format)?.into_bytes(),
    })
}

/// Write `artifact` into `dir` and return the final path.
pub fn write_export(artifact: &ExportArtifact, dir: &Path) -> Result<PathBuf> {
    let path = dir.join(&artifact.filename);
    std::fs::write(&path, &artifact.bytes)?;
    log::info!("wrote {} bytes to {}", artifact.bytes.len(), path.display());
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn timestamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(3, 4, 5).unwrap()
    }

    fn record(number: &str, name: &str) -> PlayerRecord {
        PlayerRecord { number: number.into(), name: name.into() }
    }

    #[test]
    fn plain_rows_split_back_on_the_delimiter() {
        let records = vec![record("9", "Harry Kane"), record("", "Declan Rice")];
        let tsv = to_delimited(&records, ExportFormat::Tsv).unwrap();

        assert_eq!(tsv, "9\tHarry Kane\n\tDeclan Rice\n");
        for (line, rec) in tsv.lines().zip(&records) {
            let fields: Vec<&str> = line.split('\t').collect();
            assert_eq!(fields, [rec.number.as_str(), rec.name.as_str()]);
        }
    }

    #[test]
    fn awkward_fields_survive_a_round_trip() {
        let records = vec![
            record("#7", "Smith, \"Smudge\" John"),
            record("10", "Tab\tInside"),
            record("", "Line\r\nBreak"),
        ];

        for format in [ExportFormat::Csv, ExportFormat::Tsv, ExportFormat::Text] {
            let text = to_delimited(&records, format).unwrap();
            let rows = parse_rows(&text, format.delimiter()).unwrap();
            let back: Vec<PlayerRecord> = rows.iter().map(|r| record(&r[0], &r[1])).collect();
            assert_eq!(back, records, "round trip failed for {format}");
        }
    }

    #[test]
    fn parse_rows_without_trailing_newline() {
        assert_eq!(parse_rows("1,A\r\n2,B", b',').unwrap(), vec![vec!["1", "A"], vec!["2", "B"]]);
        assert!(parse_rows("", b',').unwrap().is_empty());
    }

    #[test]
    fn format_names() {
        assert_eq!("CSV".parse::<ExportFormat>().unwrap(), ExportFormat::Csv);
        assert_eq!("text".parse::<ExportFormat>().unwrap(), ExportFormat::Text);
        assert!(matches!("xlsx".parse::<ExportFormat>(), Err(Error::UnknownFormat(_))));
        assert_eq!(ExportFormat::Tsv.content_type(), "text/tab-separated-values");
    }

    #[test]
    fn filenames() {
        let ts = timestamp();
        assert_eq!(default_filename(ExportFormat::Csv, &ts), "team_20240102_030405.csv");
        assert_eq!(resolve_filename(None, ExportFormat::Tsv, &ts), "team_20240102_030405.tsv");
        assert_eq!(resolve_filename(Some("   "), ExportFormat::Text, &ts), "team_20240102_030405.txt");
        assert_eq!(resolve_filename(Some(" squad "), ExportFormat::Tsv, &ts), "squad.tsv");
        assert_eq!(resolve_filename(Some("squad.txt"), ExportFormat::Csv, &ts), "squad.txt");
    }

    #[test]
    fn build_and_write_artifact() {
        let artifact = build_export(&[record("1", "Alisson Becker")], ExportFormat::Csv, None, &timestamp()).unwrap();
        assert_eq!(artifact.filename, "team_20240102_030405.csv");
        assert_eq!(artifact.content_type, "text/csv");
        assert_eq!(artifact.bytes, b"1,Alisson Becker\n");

        let dir = std::env::temp_dir().join(format!("teamsheet-export-{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let path = write_export(&artifact, &dir).unwrap();
        assert_eq!(std::fs::read(&path).unwrap(), artifact.bytes);
        std::fs::remove_dir_all(&dir).unwrap();
    }
}
