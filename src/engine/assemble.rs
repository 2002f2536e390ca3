use super::numbers::prefixed;
use crate::{ExtractionConfig, PlayerRecord};

/// Build the output record for a matched line.
///
/// The suffix is appended after one space; the prefix only decorates
/// non-empty numbers; `include_numbers = false` blanks the number.
pub(crate) fn assemble(number: &str, name: &str, config: &ExtractionConfig) -> PlayerRecord {
    let name = match config.suffix() {
        Some(suffix) => format!("{name} {suffix}"),
        None => name.to_string(),
    };

    let number = if config.include_numbers { prefixed(number, config.prefix()) } else { String::new() };

    PlayerRecord { number, name }
}
