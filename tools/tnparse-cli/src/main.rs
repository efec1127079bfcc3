//! Release name parser CLI
//!
//! Parses titles given as arguments, or one per line from stdin, and
//! prints one JSON object per title.

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use tnparse_core::catalog::{default_catalog, PatternCatalog};
use tnparse_core::parser::{Parser as TitleParser, ParserConfig};
use tnparse_core::types::ParsedResult;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// CLI arguments
#[derive(Parser)]
#[command(name = "tnparse")]
#[command(about = "Extract metadata from media release names")]
#[command(version)]
struct Cli {
    /// Titles to parse; stdin is read line by line when none are given
    titles: Vec<String>,

    /// Report matched text instead of canonical labels
    #[arg(short, long)]
    raw: bool,

    /// JSON file with rule overrides, keyed by category
    #[arg(short, long, env = "TNPARSE_CATALOG")]
    catalog: Option<PathBuf>,

    /// Pretty-print each result
    #[arg(short, long)]
    pretty: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

#[derive(Debug, Serialize)]
struct ParseOutput<'a> {
    input: &'a str,
    #[serde(flatten)]
    result: ParsedResult,
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn load_catalog(path: &Path) -> Result<PatternCatalog> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read catalog overrides from {}", path.display()))?;
    PatternCatalog::from_json(&json)
        .with_context(|| format!("Invalid catalog overrides in {}", path.display()))
}

fn render(title: &str, result: ParsedResult, pretty: bool) -> Result<String> {
    let output = ParseOutput {
        input: title,
        result,
    };
    let json = if pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    Ok(json)
}

fn run(cli: Cli) -> Result<()> {
    let custom = cli.catalog.as_deref().map(load_catalog).transpose()?;
    let catalog = custom.as_ref().unwrap_or_else(|| default_catalog());
    let parser = TitleParser::new(catalog, ParserConfig::new().with_standardized(!cli.raw));
    info!(rules = catalog.rule_count(), raw = cli.raw, "parser ready");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let mut emit = |title: &str| -> Result<()> {
        let result = parser.parse(title);
        debug!(%title, %result, "parsed");
        writeln!(out, "{}", render(title, result, cli.pretty)?)?;
        Ok(())
    };

    if cli.titles.is_empty() {
        for line in io::stdin().lock().lines() {
            let line = line.context("Failed to read title from stdin")?;
            let line = line.trim();
            if line.is_empty() {
                continue;
            }
            emit(line)?;
        }
    } else {
        for title in &cli.titles {
            emit(title)?;
        }
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    run(cli)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_parse() {
        let cli = Cli::try_parse_from(["tnparse", "--raw", "-vv", "A.Title.2020"]).unwrap();
        assert!(cli.raw);
        assert_eq!(cli.verbose, 2);
        assert_eq!(cli.titles, vec!["A.Title.2020"]);
        assert!(!cli.pretty);
    }

    #[test]
    fn render_flattens_result() {
        let title = "Movie.Title.2020.1080p.BluRay.x264-GROUP";
        let json = render(title, tnparse_core::parse_default(title), false).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["input"], title);
        assert_eq!(value["name"], "Movie Title");
        assert_eq!(value["codec"], "H.264");
        assert_eq!(value["media_type"], "movie");
    }

    #[test]
    fn missing_catalog_file_reports_path() {
        let err = load_catalog(Path::new("/nonexistent/overrides.json")).unwrap_err();
        assert!(err.to_string().contains("/nonexistent/overrides.json"));
    }
}
