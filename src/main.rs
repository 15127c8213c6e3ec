mod cli;
mod config;
mod error;
mod fetch;
mod report;
mod score;
mod types;

use crate::error::PulseError;
use crate::fetch::{GitHubClient, RepoRef};
use crate::types::report::{HealthReport, Severity};
use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub mod exit_code {
    pub const SUCCESS: i32 = 0;
    pub const WARNINGS: i32 = 1;
    pub const BLOCKING: i32 = 2;
    pub const RUNTIME_FAILURE: i32 = 3;
}

fn init_tracing(verbose: u8, quiet: bool) {
    let default_level = if quiet {
        "error"
    } else {
        match verbose {
            0 => "warn",
            1 => "info",
            _ => "debug",
        }
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(filter)
        .init();
}

/// One analysis run: validate the reference, load config, fetch the
/// listing, score it.
fn fetch_report(
    repo_input: &str,
    cli_token: Option<String>,
    top_override: Option<usize>,
) -> Result<HealthReport, PulseError> {
    let repo = RepoRef::parse(repo_input)?;
    let cfg = config::load_config(std::path::Path::new("."))?;
    let token = config::resolve_token(cli_token, &cfg);
    let client = GitHubClient::new(cfg.api_base(), token);
    let files = client.fetch_listing(&repo)?;

    let mut thresholds = cfg.thresholds();
    if let Some(top) = top_override {
        thresholds.top_files = top;
    }
    Ok(score::analyze(&repo.to_string(), &files, &thresholds))
}

fn exit_code_for(report: &HealthReport) -> i32 {
    if report.has_critical() {
        exit_code::BLOCKING
    } else if !report.findings.is_empty() {
        exit_code::WARNINGS
    } else {
        exit_code::SUCCESS
    }
}

fn run() -> Result<i32, PulseError> {
    let cli = cli::Cli::parse();
    init_tracing(cli.verbose, cli.quiet);

    match cli.command {
        cli::Commands::Analyze(cmd) => {
            let health_report = fetch_report(&cmd.repo, cmd.token, cmd.top)?;

            let output_format = match cmd.format {
                cli::ReportFormat::Json => report::OutputFormat::Json,
                cli::ReportFormat::Md => report::OutputFormat::Md,
                cli::ReportFormat::Sarif => report::OutputFormat::Sarif,
            };
            let rendered = report::render(&health_report, output_format)?;
            println!("{rendered}");

            Ok(exit_code_for(&health_report))
        }
        cli::Commands::Check(cmd) => {
            let health_report = fetch_report(&cmd.repo, cmd.token, None)?;

            if health_report.findings.is_empty() {
                println!(
                    "check: no findings, score {}/100 ({})",
                    health_report.score,
                    health_report.status.as_str()
                );
                return Ok(exit_code::SUCCESS);
            }

            for finding in &health_report.findings {
                let level = match finding.severity {
                    Severity::Critical => "BLOCKING",
                    Severity::Warning => "WARN",
                    Severity::Info => "INFO",
                };
                println!("[{}] {}: {}", level, finding.id, finding.title);
                println!("  {} ({})", finding.remedy, finding.urgency);
            }
            println!(
                "score {}/100 ({})",
                health_report.score,
                health_report.status.as_str()
            );

            Ok(exit_code_for(&health_report))
        }
    }
}

fn main() {
    match run() {
        Ok(code) => {
            if code != 0 {
                std::process::exit(code);
            }
        }
        Err(e) => {
            eprintln!("error: {}", e);
            std::process::exit(exit_code::RUNTIME_FAILURE);
        }
    }
}
