use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "repopulse",
    version,
    about = "GitHub repository health scoring CLI"
)]
pub struct Cli {
    /// Increase verbosity (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch a repository's file tree and print the full health report
    Analyze(AnalyzeCommand),
    /// Print findings only, with CI-friendly exit codes
    Check(CheckCommand),
}

#[derive(Args)]
pub struct AnalyzeCommand {
    /// Repository as owner/repo or a full GitHub URL
    pub repo: String,

    #[arg(short, long, value_enum, default_value = "md")]
    pub format: ReportFormat,

    /// API token; overrides REPOPULSE_TOKEN, GITHUB_TOKEN and the config file
    #[arg(long)]
    pub token: Option<String>,

    /// How many of the largest files to list
    #[arg(long)]
    pub top: Option<usize>,
}

#[derive(Args)]
pub struct CheckCommand {
    /// Repository as owner/repo or a full GitHub URL
    pub repo: String,

    #[arg(long)]
    pub token: Option<String>,
}

#[derive(Clone, ValueEnum)]
pub enum ReportFormat {
    Json,
    Md,
    Sarif,
}
