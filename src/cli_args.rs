use std::path::PathBuf;

use clap::{ArgAction, ArgGroup, Parser, Subcommand};

/// CLI options
#[derive(Parser, Debug)]
#[command(
    name = "diffbot",
    version,
    about = "LLM-assisted code assistant for diffs: documentation, release notes, optimizations"
)]
#[command(group(
    ArgGroup::new("model_group")
        .args(["model", "no_model"])
        .multiple(false)
))]
pub struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Model name to use (e.g. codechat-bison@001)
    #[arg(long, global = true)]
    pub model: Option<String>,

    /// Disable model calls; return dummy responses instead
    #[arg(long, global = true)]
    pub no_model: bool,

    /// Bearer access token for the model endpoint (otherwise uses VERTEX_ACCESS_TOKEN env var)
    #[arg(long, env = "VERTEX_ACCESS_TOKEN", global = true, hide_env_values = true)]
    pub access_token: Option<String>,

    /// Cloud project that hosts the model endpoint
    #[arg(long, env = "GOOGLE_CLOUD_PROJECT", global = true)]
    pub project: Option<String>,

    /// Endpoint region (e.g. us-central1)
    #[arg(long, global = true)]
    pub location: Option<String>,

    /// Path to the diff file to process
    #[arg(long, global = true, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// Subcommand (e.g. 'documentation')
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands, e.g. `diffbot optimize`
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Generate documentation for provided code
    Documentation,

    /// Generate release notes
    ReleaseNotes,

    /// Generate a function
    WriteAFunction,

    /// Look at code and suggest optimization
    Optimize,

    /// Look at code and suggest security optimization
    OptimizeSecurity,
}
