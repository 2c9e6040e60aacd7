//! CLI argument definitions

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "supercaderno")]
#[command(
    author,
    version,
    about = "Consolidate a directory of PDF documents into a topic notebook"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format
    #[arg(long, global = true, value_enum, default_value = "cli")]
    pub format: OutputFormat,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the full pipeline
    Run(RunArgs),
}

#[derive(Args)]
pub struct RunArgs {
    /// Directory scanned recursively for PDF documents
    #[arg(long)]
    pub dir: PathBuf,

    /// File name of the principal script, when known
    #[arg(long)]
    pub principal: Option<String>,

    /// YAML configuration file
    #[arg(long, default_value = "config.yaml")]
    pub config: PathBuf,

    /// Notebook file name, written inside the artifacts directory
    #[arg(long = "out-sc", default_value = "supercaderno.md")]
    pub out_sc: String,

    /// Synopsis file name, written inside the artifacts directory
    #[arg(long = "out-sinopse", default_value = "sinopse.md")]
    pub out_sinopse: String,

    /// Pin generation parameters for reproducible output
    #[arg(long)]
    pub deterministic: bool,

    /// Safety level handed to the model caller
    #[arg(long, default_value = "default", value_parser = ["default", "relaxed", "off"])]
    pub safety: String,

    /// Raise the prefilter threshold to spend fewer calls
    #[arg(long)]
    pub economy: bool,

    /// Upper bound on model calls for the whole run
    #[arg(long)]
    pub max_calls: Option<u64>,

    /// Render the configured placeholder under topics with no content
    #[arg(long)]
    pub strict: bool,

    /// Prepend a run summary block to the notebook
    #[arg(long)]
    pub add_summary_header: bool,

    /// Only preview which document/topic pairs would be processed
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Cli,
    Json,
}
