mod report;

use chrono::Local;
use std::io::{self, IsTerminal, Read};
use std::path::{Path, PathBuf};
use teamsheet::export::{ExportFormat, build_export, write_export};
use teamsheet::{ColumnPolicy, ExtractionConfig, Lexicon, extract_verbose_with};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(2);
        }
    };

    if let Err(err) = run(&config) {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run(cli: &CliConfig) -> teamsheet::Result<()> {
    let custom_lexicon = cli.lexicon.as_deref().map(load_lexicon).transpose()?;
    let lexicon = custom_lexicon.as_ref().unwrap_or_else(|| Lexicon::builtin());

    let res = extract_verbose_with(&cli.input, &cli.extraction, lexicon);

    if cli.json {
        let json = serde_json::to_string_pretty(&res.result)?;
        println!("{json}");
    } else {
        report::print_result(&res.result, cli.format, cli.color)?;
        if cli.verbose {
            report::print_details(&res.details, cli.color);
        }
    }

    if (cli.save || cli.output.is_some()) && !res.result.is_empty() {
        let timestamp = Local::now().naive_local();
        let artifact = build_export(&res.result.records, cli.format, cli.output.as_deref(), &timestamp)?;
        let path = write_export(&artifact, Path::new("."))?;
        eprintln!("saved {} ({})", path.display(), artifact.content_type);
    }

    Ok(())
}

fn load_lexicon(path: &Path) -> teamsheet::Result<Lexicon> {
    let json = std::fs::read_to_string(path)?;
    Lexicon::from_json(&json)
}

struct CliConfig {
    input: String,
    extraction: ExtractionConfig,
    format: ExportFormat,
    lexicon: Option<PathBuf>,
    output: Option<String>,
    save: bool,
    json: bool,
    verbose: bool,
    color: bool,
}

fn parse_args() -> Result<CliConfig, String> {
    let mut input: Option<String> = None;
    let mut extraction = ExtractionConfig::default();
    let mut format = ExportFormat::default();
    let mut lexicon = None;
    let mut output = None;
    let mut save = false;
    let mut json = false;
    let mut verbose = false;
    let mut color = io::stdout().is_terminal();
    let mut args = std::env::args().skip(1).peekable();

    fn set_input(input: &mut Option<String>, value: String) -> Result<(), String> {
        if input.is_some() {
            return Err("error: input provided multiple times".to_string());
        }
        *input = Some(value);
        Ok(())
    }

    while let Some(arg) = args.next() {
        // Accept both `--flag value` and `--flag=value`.
        let (flag, inline) = match arg.split_once('=') {
            Some((flag, value)) if flag.starts_with("--") => (flag.to_string(), Some(value.to_string())),
            _ => (arg.clone(), None),
        };
        let mut value = |name: &str| -> Result<String, String> {
            match inline.clone() {
                Some(v) => Ok(v),
                None => args.next().ok_or_else(|| format!("error: {name} expects a value")),
            }
        };

        match flag.as_str() {
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            "-V" | "--version" => {
                println!("teamsheet {}", env!("CARGO_PKG_VERSION"));
                std::process::exit(0);
            }
            "--color" => color = true,
            "--no-color" => color = false,
            "--json" => json = true,
            "--verbose" | "-v" => verbose = true,
            "--save" => save = true,
            "--no-numbers" => extraction.include_numbers = false,
            "--recover-lowercase" => extraction.recover_lowercase_initial = true,
            "--skip-left-column" => extraction.column_policy = ColumnPolicy::SecondNumber,
            "--auto-detect" => extraction.column_policy = ColumnPolicy::AutoDetect,
            "--policy" => {
                let v = value("--policy")?;
                extraction.column_policy = v.parse().map_err(|e| format!("error: {e}"))?;
            }
            "--append" => extraction.append_suffix = Some(value("--append")?),
            "--prefix" => extraction.prepend_prefix = Some(value("--prefix")?),
            "--format" => {
                let v = value("--format")?;
                format = v.parse().map_err(|e| format!("error: {e}"))?;
            }
            "--lexicon" => lexicon = Some(PathBuf::from(value("--lexicon")?)),
            "--output" | "-o" => output = Some(value("--output")?),
            "--input" | "-i" => {
                let v = value("--input")?;
                set_input(&mut input, v)?;
            }
            "--" => {
                let rest = roster_lines(args.by_ref());
                if !rest.trim().is_empty() {
                    set_input(&mut input, rest)?;
                }
                break;
            }
            _ if arg.starts_with('-') => {
                return Err(format!("error: unknown option '{arg}'"));
            }
            _ => {
                let rest = roster_lines(std::iter::once(arg).chain(args.by_ref()));
                set_input(&mut input, rest)?;
                break;
            }
        }
    }

    let input = match input {
        Some(value) => value,
        None => read_stdin_input()?,
    };

    if input.trim().is_empty() {
        return Err(format!("error: no input provided\n\n{}", help_text()));
    }

    Ok(CliConfig { input, extraction, format, lexicon, output, save, json, verbose, color })
}

fn read_stdin_input() -> Result<String, String> {
    let mut buffer = String::new();
    io::stdin().read_to_string(&mut buffer).map_err(|err| format!("error: failed to read stdin: {err}"))?;
    Ok(buffer)
}

/// Each positional argument is one roster line.
fn roster_lines(args: impl Iterator<Item = String>) -> String {
    args.collect::<Vec<_>>().join("\n")
}

fn print_help() {
    println!("{}", help_text());
}

fn help_text() -> String {
    format!(
        "teamsheet {version}

Extract jersey numbers and player names from a pasted team sheet.

Usage:
  teamsheet [OPTIONS] < roster.txt
  teamsheet [OPTIONS] --input <text>

Options:
  -i, --input <text>         Team sheet text. If omitted, reads remaining args
                             (one roster line each) or stdin.
  --policy <first|second|auto>
                             Which leading number is the jersey. Default: first
  --skip-left-column         Same as --policy second.
  --auto-detect              Same as --policy auto.
  --no-numbers               Leave the number column empty.
  --append <text>            Text appended after every player name.
  --prefix <text>            Text prepended to every jersey number.
  --recover-lowercase        Uppercase a lowercase first letter before matching.
  --lexicon <file.json>      Replace the built-in term tables.
  --format <csv|tsv|txt>     Output format. Default: {default_format}
  -o, --output <name>        Save the export under this name.
  --save                     Save the export under a timestamped name.
  --json                     Print the full result as JSON.
  -v, --verbose              Print per-line traces and timings.
  --color                    Force ANSI color output.
  --no-color                 Disable ANSI color output.
  -h, --help                 Show this help message.
  -V, --version              Print version information.

Environment:
  RUST_LOG                   Log filter, e.g. RUST_LOG=teamsheet=debug.

Exit codes:
  0  Success.
  1  Runtime error (lexicon or export file).
  2  Invalid arguments or missing input.
",
        version = env!("CARGO_PKG_VERSION"),
        default_format = ExportFormat::default()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positional_args_are_separate_lines() {
        let args = ["9 Harry Kane", "10 Son Heung-min"].map(String::from);
        let input = roster_lines(args.into_iter());

        assert_eq!(input, "9 Harry Kane\n10 Son Heung-min");
        assert_eq!(teamsheet::extract(&input).records.len(), 2);
    }
}
