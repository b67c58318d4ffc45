use std::path::PathBuf;

use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "vyatta-config")]
#[command(about = "Convert, format, inspect and compare Vyatta/VyOS configuration files")]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short = 'v', action = clap::ArgAction::Count, global = true)]
    pub log_level: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(clap::Subcommand, Debug)]
pub enum Command {
    /// Parse a configuration file and print it as JSON.
    Parse(ParseArgs),
    /// Generate configuration text from a JSON tree.
    Generate(GenerateArgs),
    /// Rewrite a configuration file in canonical form.
    Fmt(FmtArgs),
    /// Show the section and leaf structure of a configuration file.
    Inspect(InspectArgs),
    /// Print the node stored at a label path.
    Get(GetArgs),
    /// Compare two configuration files.
    Diff(DiffArgs),
}

#[derive(Parser, Debug)]
pub struct ParseArgs {
    pub file: PathBuf,
    /// Write JSON here instead of stdout.
    #[arg(long)]
    pub output: Option<PathBuf>,
    /// Emit single-line JSON.
    #[arg(long)]
    pub compact: bool,
}

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// JSON tree, as produced by `parse`.
    pub file: PathBuf,
    #[arg(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug)]
pub struct FmtArgs {
    pub file: PathBuf,
    #[arg(long, conflicts_with = "check")]
    pub output: Option<PathBuf>,
    /// Fail when the file is not already canonical.
    #[arg(long)]
    pub check: bool,
}

#[derive(Parser, Debug)]
pub struct InspectArgs {
    pub file: PathBuf,
    /// Only show this top-level section.
    #[arg(long)]
    pub section: Option<String>,
    #[arg(long, default_value_t = 3)]
    pub depth: usize,
}

#[derive(Parser, Debug)]
pub struct GetArgs {
    pub file: PathBuf,
    /// Labels from the top level down, e.g. `interfaces "ethernet eth0" address`.
    #[arg(required = true)]
    pub path: Vec<String>,
}

#[derive(Parser, Debug)]
pub struct DiffArgs {
    pub file1: PathBuf,
    pub file2: PathBuf,
    /// Skip a full path (`system > host-name`) or any label with this name.
    #[arg(long)]
    pub ignore: Vec<String>,
    /// TOML diff profile with ignore paths and depth limits.
    #[arg(long)]
    pub profile: Option<PathBuf>,
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
    #[arg(long)]
    pub summary: bool,
    /// Also list identical paths.
    #[arg(long)]
    pub verbose: bool,
    /// Exit non-zero when any difference is found.
    #[arg(long)]
    pub strict: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
