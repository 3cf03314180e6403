use anyhow::{Result, anyhow};
use log::debug;

use crate::cli_args::Cli;
use crate::config::Config;
use crate::llm::vertex::VertexClient;
use crate::llm::{CodeChatModel, NoopModel};

/// Build the model client based on CLI + config.
pub fn build_model(cli: &Cli, cfg: &Config) -> Result<Box<dyn CodeChatModel>> {
    if cli.no_model {
        debug!("Using NoopModel (no model calls)");
        return Ok(Box::new(NoopModel));
    }

    let access_token = cfg.access_token.clone().ok_or_else(|| {
        anyhow!("VERTEX_ACCESS_TOKEN (or --access-token) is required unless --no-model is used")
    })?;
    let project = cfg.project.clone().ok_or_else(|| {
        anyhow!("GOOGLE_CLOUD_PROJECT (or --project) is required unless --no-model is used")
    })?;

    debug!("Using VertexClient with model: {}", cfg.model);

    Ok(Box::new(VertexClient::new(access_token, project, cfg)))
}
