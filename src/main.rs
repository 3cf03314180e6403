mod cli_args;
mod commands;
mod config;
mod llm;
mod logging;
mod setup;
mod workspace;

use std::process;

use anyhow::Result;
use clap::{CommandFactory, Parser};
use colored::Colorize;

use crate::cli_args::Cli;
use crate::config::Config;

fn main() {
    let cli = Cli::parse();
    logging::init_logger(cli.verbose);

    if let Err(err) = run(&cli) {
        eprintln!("{} {err:#}", "error:".red().bold());
        process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    // Bare invocation behaves like --help, with no model call.
    let Some(command) = &cli.command else {
        Cli::command().print_help()?;
        return Ok(());
    };

    let cfg = Config::from_sources(cli);
    log::debug!(
        "Resolved config: model={}, diff_file={}",
        cfg.model,
        cfg.diff_file.display()
    );

    let model = setup::build_model(cli, &cfg)?;
    commands::run(command, &cfg, model.as_ref())
}
