use std::time::Duration;

use anyhow::Result;
use indicatif::ProgressBar;

use crate::cli_args::Command;
use crate::config::Config;
use crate::llm::{CodeChatModel, prompt_builder};
use crate::workspace;

/// Dispatch one subcommand: read input where required, build the prompt,
/// run the single model exchange, handle the reply.
pub fn run(command: &Command, cfg: &Config, model: &dyn CodeChatModel) -> Result<()> {
    match command {
        Command::Documentation => documentation(cfg, model),
        Command::ReleaseNotes => release_notes(cfg, model),
        Command::WriteAFunction => write_a_function(model),
        Command::Optimize => optimize(cfg, model),
        Command::OptimizeSecurity => optimize_security(cfg, model),
    }
}

fn documentation(cfg: &Config, model: &dyn CodeChatModel) -> Result<()> {
    let code = workspace::load_input(&cfg.diff_file)?;
    let reply = send(model, &prompt_builder::documentation_prompt(&code))?;
    println!("Response from Model: {reply}");
    Ok(())
}

fn release_notes(cfg: &Config, model: &dyn CodeChatModel) -> Result<()> {
    let code = workspace::load_input(&cfg.diff_file)?;
    let reply = send(model, &prompt_builder::release_notes_prompt(&code))?;
    workspace::write_release_notes(&cfg.notes_file, &reply)?;
    println!("The generated release notes are:\n\n{reply}");
    Ok(())
}

fn write_a_function(model: &dyn CodeChatModel) -> Result<()> {
    let reply = send(model, &prompt_builder::write_a_function_prompt())?;
    println!("Response from Model: {reply}");
    Ok(())
}

fn optimize(cfg: &Config, model: &dyn CodeChatModel) -> Result<()> {
    let code = workspace::load_input(&cfg.diff_file)?;
    let reply = send(model, &prompt_builder::optimize_prompt(&code))?;
    println!("A possible optimization is:\n\n{reply}");
    Ok(())
}

fn optimize_security(cfg: &Config, model: &dyn CodeChatModel) -> Result<()> {
    let code = workspace::load_input(&cfg.diff_file)?;
    let reply = send(model, &prompt_builder::optimize_security_prompt(&code))?;
    println!("A possible security optimization is:\n\n{reply}");
    Ok(())
}

/// Run the blocking exchange behind a spinner so the wait is visible.
fn send(model: &dyn CodeChatModel, prompt: &str) -> Result<String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("waiting for model");
    spinner.enable_steady_tick(Duration::from_millis(120));

    let reply = model.send_message(prompt);

    spinner.finish_and_clear();
    reply
}
