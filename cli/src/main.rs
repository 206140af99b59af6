//! CLI for the Release Radar.
//!
//! This tool polls GitHub releases for the configured frameworks and prints
//! the chat message and note digests as JSON.

use clap::Parser;
use release_radar::{RadarConfig, RunReport, Runner, RunnerConfig, RunnerError};
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{error, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Release Radar - Collect recent framework releases into chat and note digests.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to a TOML config file (defaults to the built-in Vue.js / Nuxt sources).
    #[arg(long)]
    config: Option<PathBuf>,

    /// GitHub Personal Access Token (optional, raises the rate limit).
    #[arg(long, env = "GITHUB_TOKEN")]
    token: Option<String>,

    /// Releases requested per source (1-100), overriding the config file.
    #[arg(long, value_parser = clap::value_parser!(u8).range(1..=100))]
    per_page: Option<u8>,

    /// Maximum concurrent API requests.
    #[arg(long, default_value_t = 2)]
    concurrency: usize,

    /// Print single-line JSON instead of pretty-printed JSON.
    #[arg(long)]
    compact: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    init_tracing();

    // Prefer aws-lc-rs when more than one rustls provider is compiled in.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let args = Args::parse();
    let compact = args.compact;

    match run(args).await {
        Ok(report) => {
            if let Err(e) = print_report(&report, compact) {
                error!(error = %e, "Failed to serialize report");
                return ExitCode::from(2);
            }

            if report.has_failures() {
                warn!(sources = ?report.failed_sources, "Some sources failed");
                ExitCode::from(1)
            } else {
                ExitCode::from(0)
            }
        }
        Err(e) => {
            error!(error = %e, "Critical failure");
            ExitCode::from(2)
        }
    }
}

/// Initializes tracing with environment filter support.
///
/// Logs go to stderr so stdout carries only the JSON report.
/// - Compact log formatting (single-line output)
/// - Log level filtering via `RUST_LOG` env var (defaults to "info")
fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            fmt::layer()
                .compact()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();
}

/// Main execution logic.
async fn run(args: Args) -> Result<RunReport, RunnerError> {
    let mut radar = RadarConfig::load(args.config.as_deref())?;
    if let Some(per_page) = args.per_page {
        radar.per_page = per_page;
    }

    let token = args.token.filter(|t| !t.trim().is_empty());
    let runner = Runner::new(RunnerConfig::new(radar, token, args.concurrency))?;
    runner.run().await
}

/// Prints the report as JSON on stdout.
fn print_report(report: &RunReport, compact: bool) -> Result<(), serde_json::Error> {
    let json = if compact {
        serde_json::to_string(report)?
    } else {
        serde_json::to_string_pretty(report)?
    };
    println!("{json}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_per_page_within_api_bounds() {
        let args = Args::try_parse_from(["release-radar", "--per-page", "100"]).unwrap();
        assert_eq!(args.per_page, Some(100));

        let args = Args::try_parse_from(["release-radar"]).unwrap();
        assert_eq!(args.per_page, None);
    }

    #[test]
    fn rejects_per_page_outside_api_bounds() {
        for value in ["0", "101", "255"] {
            let result = Args::try_parse_from(["release-radar", "--per-page", value]);
            assert!(result.is_err(), "--per-page {value} should be rejected");
        }
    }
}
