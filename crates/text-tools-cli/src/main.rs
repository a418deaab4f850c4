//! `text-tools` command line interface
//!
//! Exposes the text tool libraries as subcommands. `--json` switches every
//! subcommand to the JSON shapes the web route used to serve.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use regex_pattern_explainer::{explain_pattern, test_pattern};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use text_diff_engine::{DiffKind, DiffMode, compute_diff};
use text_transform::{CaseMode, LoremUnit, convert_case, lorem_ipsum};

#[derive(Parser)]
#[command(name = "text-tools", about = "Text diffing, regex explanation, and small text utilities")]
struct Cli {
    /// Emit results as JSON instead of human-readable text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compare two text files
    Diff {
        /// The old version of the text
        old: PathBuf,
        /// The new version of the text
        new: PathBuf,
        /// Comparison granularity
        #[arg(long, value_enum, default_value_t = Granularity::Line)]
        mode: Granularity,
    },

    /// Explain a regex pattern token by token (without compiling it)
    Explain {
        /// The regex source string
        pattern: String,
    },

    /// Compile a regex and run it against a text
    Regex {
        /// The regex source string
        pattern: String,
        /// Text to search; read from stdin when omitted
        text: Option<String>,
        /// Flag characters: i, m, s, x (g and u are accepted no-ops)
        #[arg(long, default_value = "g")]
        flags: String,
    },

    /// Convert text case
    Case {
        #[arg(value_enum)]
        mode: Case,
        /// Text to convert; read from stdin when omitted
        text: Option<String>,
    },

    /// Generate lorem ipsum filler text
    Lorem {
        #[arg(long, default_value_t = 1)]
        count: usize,
        #[arg(long, value_enum, default_value_t = Unit::Paragraphs)]
        unit: Unit,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Granularity {
    Line,
    Word,
    Char,
}

impl From<Granularity> for DiffMode {
    fn from(value: Granularity) -> Self {
        match value {
            Granularity::Line => DiffMode::Line,
            Granularity::Word => DiffMode::Word,
            Granularity::Char => DiffMode::Char,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Case {
    Upper,
    Lower,
    Title,
}

impl From<Case> for CaseMode {
    fn from(value: Case) -> Self {
        match value {
            Case::Upper => CaseMode::Uppercase,
            Case::Lower => CaseMode::Lowercase,
            Case::Title => CaseMode::Titlecase,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Unit {
    Words,
    Paragraphs,
}

impl From<Unit> for LoremUnit {
    fn from(value: Unit) -> Self {
        match value {
            Unit::Words => LoremUnit::Words,
            Unit::Paragraphs => LoremUnit::Paragraphs,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Diff { old, new, mode } => run_diff(&old, &new, mode.into(), cli.json),
        Command::Explain { pattern } => run_explain(&pattern, cli.json),
        Command::Regex { pattern, text, flags } => {
            let text = text_or_stdin(text)?;
            run_regex(&text, &pattern, &flags, cli.json)
        }
        Command::Case { mode, text } => {
            let text = text_or_stdin(text)?;
            emit_result(&convert_case(&text, mode.into()), cli.json)
        }
        Command::Lorem { count, unit } => emit_result(&lorem_ipsum(count, unit.into()), cli.json),
    }
}

fn run_diff(old: &PathBuf, new: &PathBuf, mode: DiffMode, as_json: bool) -> anyhow::Result<()> {
    let text_a = std::fs::read_to_string(old)
        .with_context(|| format!("failed to read {}", old.display()))?;
    let text_b = std::fs::read_to_string(new)
        .with_context(|| format!("failed to read {}", new.display()))?;

    let (entries, stats) = compute_diff(&text_a, &text_b, mode);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "differences": entries, "stats": stats }))?
        );
        return Ok(());
    }

    for entry in &entries {
        let position = entry
            .line_number
            .map(|n| format!("line {n}: "))
            .unwrap_or_default();
        match entry.kind {
            DiffKind::Add => {
                println!("{position}+ {}", entry.line.as_deref().unwrap_or(""));
            }
            DiffKind::Remove => {
                println!("{position}- {}", entry.line.as_deref().unwrap_or(""));
            }
            DiffKind::Change => {
                println!(
                    "{position}~ {:?} -> {:?}",
                    entry.old_line.as_deref().unwrap_or(""),
                    entry.new_line.as_deref().unwrap_or("")
                );
            }
        }
    }
    println!(
        "{} difference(s): +{} -{} ~{}",
        stats.total_diffs, stats.additions, stats.deletions, stats.changes
    );
    Ok(())
}

fn run_explain(pattern: &str, as_json: bool) -> anyhow::Result<()> {
    let tokens = explain_pattern(pattern);

    if as_json {
        println!(
            "{}",
            serde_json::to_string_pretty(&json!({ "patternParts": tokens }))?
        );
        return Ok(());
    }

    let width = tokens.iter().map(|t| t.text.len()).max().unwrap_or(0);
    for token in &tokens {
        println!("{:width$}  {}", token.text, token.explanation);
    }
    Ok(())
}

fn run_regex(text: &str, pattern: &str, flags: &str, as_json: bool) -> anyhow::Result<()> {
    let report = test_pattern(text, pattern, flags)?;

    if as_json {
        println!("{}", serde_json::to_string_pretty(&report)?);
        return Ok(());
    }

    println!("{} match(es)", report.matches.len());
    for (matched, groups) in report.matches.iter().zip(&report.capture_groups) {
        println!("  {matched:?}");
        for (idx, group) in groups.iter().enumerate().skip(1) {
            match group {
                Some(g) => println!("    group {idx}: {g:?}"),
                None => println!("    group {idx}: <no match>"),
            }
        }
    }
    println!("{}", report.highlighted_text);
    Ok(())
}

fn emit_result(result: &str, as_json: bool) -> anyhow::Result<()> {
    if as_json {
        println!("{}", serde_json::to_string_pretty(&json!({ "result": result }))?);
    } else {
        println!("{result}");
    }
    Ok(())
}

fn text_or_stdin(text: Option<String>) -> anyhow::Result<String> {
    match text {
        Some(text) => Ok(text),
        None => {
            log::debug!("no text argument given, reading from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("failed to read text from stdin")?;
            Ok(buf)
        }
    }
}
