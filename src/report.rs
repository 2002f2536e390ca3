use teamsheet::export::{ExportFormat, to_delimited};
use teamsheet::{ExtractionDetails, ExtractionResult, LineTrace};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

/// Print the extracted table followed by skipped lines and warnings.
pub fn print_result(result: &ExtractionResult, format: ExportFormat, color: bool) -> teamsheet::Result<()> {
    let palette = ansi::Palette::new(color);

    if result.is_empty() {
        println!("{}", palette.paint("No player names detected. Make sure your team sheet is pasted correctly.", ansi::YELLOW));
    } else {
        println!("{}", palette.paint(format!("━━━ Extracted team sheet ({}) ━━━", format), ansi::GRAY));
        print!("{}", palette.bold(to_delimited(&result.records, format)?));
    }

    if !result.skipped.is_empty() {
        println!("\n{}", palette.paint("━━━ Skipped lines (names not recognized) ━━━", ansi::GRAY));
        for skip in &result.skipped {
            println!(
                "  {} {}  {}",
                palette.paint(format!("{:>3}", skip.line_no), ansi::GRAY),
                skip.original_line,
                palette.paint(format!("({})", skip.reason), ansi::YELLOW)
            );
        }
    }

    if !result.warnings.is_empty() {
        println!("\n{}", palette.paint("━━━ Check these ━━━", ansi::GRAY));
        for warning in &result.warnings {
            println!(
                "  {} {}  {}",
                palette.paint(format!("{:>3}", warning.line_no), ansi::GRAY),
                warning.name,
                palette.dim(format!("({})", warning.reason))
            );
        }
    }

    Ok(())
}

/// Print per-line traces, the auto-detect decision and timings.
pub fn print_details(details: &ExtractionDetails, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("\n{}", palette.paint("━━━ Lines ━━━", ansi::GRAY));
    for trace in &details.traces {
        println!("{}", fmt_trace(trace, &palette));
    }

    if let Some(stats) = &details.auto_detect {
        println!("\n{}", palette.paint("━━━ Auto-detect ━━━", ansi::GRAY));
        println!(
            "  {}/{} lines start with two numbers ({:.0}%) → {}",
            stats.leading_pairs,
            stats.sample,
            stats.fraction * 100.0,
            palette.paint(format!("{:?} column", stats.chosen), ansi::GREEN)
        );
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Prepare: {}  │  Policy: {}  │  Matching: {}",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.dim(format!("{:?}", details.prepare)),
        palette.dim(format!("{:?}", details.resolve_policy)),
        palette.paint(format!("{:?}", details.matching), ansi::CYAN),
    );
    println!();
}

fn fmt_trace(trace: &LineTrace, palette: &ansi::Palette) -> String {
    let verdict = match (trace.strategy, trace.reason) {
        (Some(strategy), _) => palette.paint(format!("✓ {strategy}"), ansi::GREEN),
        (None, Some(reason)) => palette.paint(format!("✗ {reason}"), ansi::YELLOW),
        (None, None) => palette.dim("?"),
    };
    let shape: Vec<&str> = trace.shape.iter_names().map(|(name, _)| name).collect();

    format!(
        "  {} {}\n      {} {:?}  {} {:?}  {} {}  {}",
        palette.paint(format!("[{}]", trace.line_no), ansi::GRAY),
        verdict,
        palette.dim("working:"),
        trace.working,
        palette.dim("remainder:"),
        trace.remainder,
        palette.dim("#"),
        palette.paint(
            if trace.leading.is_empty() { "-".to_string() } else { trace.leading.join(" ") },
            ansi::BLUE
        ),
        palette.dim(shape.join("|")),
    )
}
