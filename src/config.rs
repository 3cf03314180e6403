use crate::cli_args::Cli;
use serde::Deserialize;
use std::env;
use std::fs;
use std::path::PathBuf;

pub const DEFAULT_MODEL: &str = "codechat-bison@001";
pub const DEFAULT_LOCATION: &str = "us-central1";
pub const DEFAULT_DIFF_FILE: &str = "/workspace/diff.txt";
pub const DEFAULT_NOTES_FILE: &str = "release_notes.md";
pub const DEFAULT_TEMPERATURE: f32 = 0.5;
pub const DEFAULT_MAX_OUTPUT_TOKENS: u32 = 1024;

/// Final resolved configuration for diffbot.
#[derive(Debug, Clone)]
pub struct Config {
    pub model: String,
    pub project: Option<String>,
    pub location: String,
    pub access_token: Option<String>,
    pub diff_file: PathBuf,
    pub notes_file: PathBuf,
    pub temperature: f32,
    pub max_output_tokens: u32,
    /// Optional endpoint override, mostly for pointing at a proxy.
    pub api_base: Option<String>,
}

impl Config {
    /// Build the final config from CLI flags, environment, TOML file, and defaults.
    ///
    /// Precedence:
    ///   1. CLI flags (`--model`, `--project`, `--file`, ...)
    ///   2. Env vars (`DIFFBOT_MODEL`, `GOOGLE_CLOUD_PROJECT`, `VERTEX_ACCESS_TOKEN`)
    ///   3. TOML `~/.config/diffbot.toml`
    ///   4. Hardcoded defaults
    pub fn from_sources(cli: &Cli) -> Self {
        let file_cfg = load_file_config().unwrap_or_default();

        let model = cli
            .model
            .clone()
            .or_else(|| env::var("DIFFBOT_MODEL").ok())
            .or(file_cfg.model)
            .unwrap_or_else(|| DEFAULT_MODEL.to_string());

        // clap already folded GOOGLE_CLOUD_PROJECT / VERTEX_ACCESS_TOKEN into the flags.
        let project = cli.project.clone().or(file_cfg.project);
        let access_token = cli.access_token.clone().or(file_cfg.access_token);

        let location = cli
            .location
            .clone()
            .or(file_cfg.location)
            .unwrap_or_else(|| DEFAULT_LOCATION.to_string());

        let diff_file = cli
            .file
            .clone()
            .or(file_cfg.diff_file.map(PathBuf::from))
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DIFF_FILE));

        let notes_file = file_cfg
            .notes_file
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_NOTES_FILE));

        Config {
            model,
            project,
            location,
            access_token,
            diff_file,
            notes_file,
            temperature: file_cfg.temperature.unwrap_or(DEFAULT_TEMPERATURE),
            max_output_tokens: file_cfg.max_output_tokens.unwrap_or(DEFAULT_MAX_OUTPUT_TOKENS),
            api_base: file_cfg.api_base,
        }
    }
}

#[derive(Debug, Default, Deserialize)]
struct FileConfig {
    pub model: Option<String>,
    pub project: Option<String>,
    pub location: Option<String>,
    pub access_token: Option<String>,
    pub diff_file: Option<String>,
    pub notes_file: Option<String>,
    pub temperature: Option<f32>,
    pub max_output_tokens: Option<u32>,
    pub api_base: Option<String>,
}

/// Return `~/.config/diffbot.toml`
fn config_path() -> Option<PathBuf> {
    let home = dirs::home_dir()?;
    Some(home.join(".config").join("diffbot.toml"))
}

fn load_file_config() -> Option<FileConfig> {
    let path = config_path()?;
    if !path.exists() {
        return None;
    }

    let data = fs::read_to_string(&path).ok()?;
    toml::from_str::<FileConfig>(&data).ok()
}
