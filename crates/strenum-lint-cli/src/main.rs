//! strenum-lint CLI tool.
//!
//! Usage:
//! ```bash
//! strenum-lint --path src/
//! strenum-lint --path models.py --path schemas.py --format json
//! ```
//!
//! Exit status is non-zero when any diagnostic was produced or any given
//! path did not exist; zero otherwise.

use anyhow::{Context, Result};
use clap::Parser;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use strenum_lint_core::{Analyzer, Config, LintResult};
use strenum_lint_rules::StrEnumCasing;
use tracing_subscriber::EnvFilter;

mod output;

/// Checks that Python StrEnum member names match the casing of their values
#[derive(Parser)]
#[command(name = "strenum-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Files or directories to check (can be given multiple times)
    #[arg(short, long, required = true)]
    path: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, default_value = "text")]
    format: OutputFormat,

    /// Path to configuration file (default: strenum-lint.toml if present)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Treat files with syntax errors as failures instead of skipping them
    #[arg(long)]
    fail_on_parse_error: bool,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output with a summary line.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("warn")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = load_config(cli.config.as_deref())?;

    let mut result = LintResult::new();
    let mut missing_path = false;

    for path in &cli.path {
        if !path.exists() {
            eprintln!("Error: Path '{}' does not exist", path.display());
            missing_path = true;
            continue;
        }

        let analyzer = Analyzer::builder()
            .root(path)
            .config(config.clone())
            .rule(StrEnumCasing::new())
            .fail_on_parse_error(cli.fail_on_parse_error)
            .build()
            .context("Failed to build analyzer")?;

        tracing::info!("Analyzing {}", path.display());

        let path_result = analyzer
            .analyze()
            .with_context(|| format!("Analysis of {} failed", path.display()))?;
        result.extend(path_result);
    }

    output::print(&result, cli.format)?;

    if result.has_violations() || missing_path {
        Ok(ExitCode::FAILURE)
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

/// Resolves configuration: explicit `--config`, else `strenum-lint.toml`
/// in the current directory, else defaults.
fn load_config(explicit: Option<&Path>) -> Result<Config> {
    if let Some(path) = explicit {
        return Config::from_file(path)
            .with_context(|| format!("Failed to load config: {}", path.display()));
    }

    let default_path = Path::new("strenum-lint.toml");
    if default_path.exists() {
        tracing::info!("Using config: {}", default_path.display());
        return Config::from_file(default_path)
            .with_context(|| format!("Failed to load config: {}", default_path.display()));
    }

    Ok(Config::default())
}
