pub mod vertex;
mod prompts;
pub mod prompt_builder;

use anyhow::Result;

/// Trait for talking to the hosted code-chat model (real or dummy).
///
/// One operation: send a prompt through a fresh single-turn chat session and
/// get the reply text back. Callers never see conversational state.
pub trait CodeChatModel: Send + Sync {
    fn send_message(&self, prompt: &str) -> Result<String>;
}

/// Dummy model for --no-model runs; answers without touching the network.
pub struct NoopModel;

impl CodeChatModel for NoopModel {
    fn send_message(&self, prompt: &str) -> Result<String> {
        Ok(format!(
            "[DUMMY RESPONSE] model calls disabled; prompt was {} chars",
            prompt.len()
        ))
    }
}
