use super::CodeChatModel;
use crate::config::Config;
use anyhow::{Context, Result, anyhow};
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Minimal request/response structs for the Vertex AI code-chat predict API.
#[derive(Serialize)]
struct PredictRequest {
    instances: Vec<ChatInstance>,
    parameters: ChatParameters,
}

/// One chat session's worth of messages. Every run opens a fresh session
/// holding exactly one user turn.
#[derive(Serialize)]
struct ChatInstance {
    messages: Vec<ChatMessage>,
}

#[derive(Serialize)]
struct ChatMessage {
    author: String,
    content: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct ChatParameters {
    temperature: f32,
    max_output_tokens: u32,
}

#[derive(Deserialize)]
struct PredictResponse {
    predictions: Vec<Prediction>,
    metadata: Option<ResponseMetadata>,
}

#[derive(Deserialize)]
struct Prediction {
    candidates: Vec<Candidate>,
}

#[derive(Deserialize)]
struct Candidate {
    content: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct ResponseMetadata {
    token_metadata: Option<TokenMetadata>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenMetadata {
    input_token_count: Option<TokenCount>,
    output_token_count: Option<TokenCount>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct TokenCount {
    total_tokens: Option<u64>,
}

/// Vertex AI implementation of CodeChatModel.
pub struct VertexClient {
    client: Client,
    access_token: String,
    model: String,
    project: String,
    location: String,
    api_base: Option<String>,
    temperature: f32,
    max_output_tokens: u32,
}

impl VertexClient {
    pub fn new(access_token: String, project: String, cfg: &Config) -> Self {
        let client = Client::builder()
            .timeout(Duration::from_secs(90))
            .build()
            .expect("failed to build HTTP client");

        VertexClient {
            client,
            access_token,
            model: cfg.model.clone(),
            project,
            location: cfg.location.clone(),
            api_base: cfg.api_base.as_ref().map(|b| b.trim_end_matches('/').to_string()),
            temperature: cfg.temperature,
            max_output_tokens: cfg.max_output_tokens,
        }
    }

    fn predict_url(&self) -> String {
        let base = match &self.api_base {
            Some(base) => base.clone(),
            None => format!("https://{}-aiplatform.googleapis.com", self.location),
        };

        format!(
            "{base}/v1/projects/{project}/locations/{location}/publishers/google/models/{model}:predict",
            project = self.project,
            location = self.location,
            model = self.model,
        )
    }

    fn call_predict(&self, req: &PredictRequest) -> Result<String> {
        let url = self.predict_url();

        log::info!("Calling Vertex model {:?}", &self.model);

        let resp = self
            .client
            .post(url)
            .bearer_auth(&self.access_token)
            .json(req)
            .send()
            .context("failed to send request to Vertex AI")?;

        if !resp.status().is_success() {
            let status = resp.status();
            let body = resp.text().unwrap_or_default();
            return Err(anyhow!(
                "Vertex AI error: HTTP {} - {}",
                status.as_u16(),
                extract_api_error(&body)
            ));
        }

        let predict_resp: PredictResponse =
            resp.json().context("failed to parse Vertex AI response")?;

        if let Some(tokens) = predict_resp
            .metadata
            .as_ref()
            .and_then(|m| m.token_metadata.as_ref())
        {
            let input = tokens.input_token_count.as_ref().and_then(|c| c.total_tokens);
            let output = tokens.output_token_count.as_ref().and_then(|c| c.total_tokens);
            log::debug!("Token usage: input={input:?}, output={output:?}");
        }

        let content = predict_resp
            .predictions
            .first()
            .and_then(|p| p.candidates.first())
            .map(|c| c.content.clone())
            .ok_or_else(|| anyhow!("no candidates returned from Vertex AI"))?;

        Ok(content)
    }
}

impl CodeChatModel for VertexClient {
    fn send_message(&self, prompt: &str) -> Result<String> {
        log::trace!("Prompt:\n{}", truncate(prompt, 2000));

        let req = PredictRequest {
            instances: vec![ChatInstance {
                messages: vec![ChatMessage {
                    author: "user".into(),
                    content: prompt.to_owned(),
                }],
            }],
            parameters: ChatParameters {
                temperature: self.temperature,
                max_output_tokens: self.max_output_tokens,
            },
        };

        self.call_predict(&req)
    }
}

/// Pull the human-readable message out of a Google API error envelope,
/// falling back to the raw body when it is not one.
fn extract_api_error(body: &str) -> String {
    #[derive(Deserialize)]
    struct ErrorEnvelope {
        error: Option<ApiError>,
    }

    #[derive(Deserialize)]
    struct ApiError {
        code: Option<i64>,
        message: Option<String>,
        status: Option<String>,
    }

    if let Ok(parsed) = serde_json::from_str::<ErrorEnvelope>(body)
        && let Some(err) = parsed.error
    {
        let message = err.message.unwrap_or_else(|| "unknown error".to_string());
        let status = err.status.unwrap_or_else(|| "unknown".to_string());
        let code = err
            .code
            .map(|c| c.to_string())
            .unwrap_or_else(|| "none".to_string());
        return format!("{message} (status={status}, code={code})");
    }

    body.to_string()
}

/// Truncate long strings for debug logging.
fn truncate(s: &str, max_len: usize) -> String {
    if s.len() <= max_len {
        s.to_string()
    } else {
        format!("{}...\n[truncated {} chars]", &s[..max_len], s.len() - max_len)
    }
}
