/// LLM Client - the single point of entry for all Claude API calls.
///
/// ARCHITECTURAL RULE: No other module may call the Anthropic API directly.
/// All LLM interactions MUST go through this module.
///
/// One attempt per analysis call: failures are reported to the orchestration
/// layer, which degrades to the heuristic-only result instead of retrying.
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const ANTHROPIC_VERSION: &str = "2023-06-01";
/// The model used for all analysis calls.
pub const MODEL: &str = "claude-sonnet-4-20250514";
const MAX_TOKENS: u32 = 4096;
/// Low temperature keeps the structured analysis consistent across runs.
const TEMPERATURE: f32 = 0.3;
/// Request timeout; doubles as the upper bound on how long an analysis can
/// wait for enhancement.
const REQUEST_TIMEOUT_SECS: u64 = 60;
/// Scaffold value shipped in .env templates; treated the same as no key.
const PLACEHOLDER_API_KEY: &str = "your_api_key_here";

#[derive(Debug, Error)]
pub enum AiError {
    #[error("AI client is not configured (missing or placeholder API key)")]
    NotConfigured,

    #[error("invalid API key")]
    Auth,

    #[error("rate limit exceeded")]
    RateLimited,

    #[error("AI service unavailable (status {status})")]
    ServiceUnavailable { status: u16 },

    #[error("network error: {0}")]
    Network(reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("malformed AI response: {0}")]
    MalformedResponse(serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

#[derive(Debug, Serialize)]
struct AnthropicRequest<'a> {
    model: &'a str,
    max_tokens: u32,
    temperature: f32,
    system: &'a str,
    messages: Vec<AnthropicMessage<'a>>,
}

#[derive(Debug, Serialize)]
struct AnthropicMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
pub struct LlmResponse {
    pub content: Vec<ContentBlock>,
    pub usage: Usage,
}

#[derive(Debug, Deserialize)]
pub struct ContentBlock {
    #[serde(rename = "type")]
    pub block_type: String,
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// Extracts the text content from the first text block.
    pub fn text(&self) -> Option<&str> {
        self.content
            .iter()
            .find(|b| b.block_type == "text")
            .and_then(|b| b.text.as_deref())
    }
}

#[derive(Debug, Deserialize)]
struct AnthropicError {
    error: AnthropicErrorBody,
}

#[derive(Debug, Deserialize)]
struct AnthropicErrorBody {
    message: String,
}

/// The single LLM client shared by all analyses. Holds only static
/// configuration; concurrent analyses share it freely.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    base_url: String,
}

impl LlmClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        Self {
            client: Client::builder()
                .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
                .build()
                .expect("Failed to build HTTP client"),
            api_key,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Cheap predicate checked before any network call. False when the key
    /// is absent or still the .env placeholder.
    pub fn is_configured(&self) -> bool {
        !self.api_key.is_empty() && self.api_key != PLACEHOLDER_API_KEY
    }

    /// Makes one call to the Claude Messages API. Never retries; status
    /// codes map onto the [`AiError`] taxonomy for the caller to act on.
    pub async fn call(&self, prompt: &str, system: &str) -> Result<LlmResponse, AiError> {
        if !self.is_configured() {
            return Err(AiError::NotConfigured);
        }

        let request_body = AnthropicRequest {
            model: MODEL,
            max_tokens: MAX_TOKENS,
            temperature: TEMPERATURE,
            system,
            messages: vec![AnthropicMessage {
                role: "user",
                content: prompt,
            }],
        };

        let response = self
            .client
            .post(format!("{}/v1/messages", self.base_url))
            .header("x-api-key", &self.api_key)
            .header("anthropic-version", ANTHROPIC_VERSION)
            .header("content-type", "application/json")
            .json(&request_body)
            .send()
            .await
            .map_err(AiError::Network)?;

        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 => AiError::Auth,
                429 => AiError::RateLimited,
                s if s >= 500 => AiError::ServiceUnavailable { status: s },
                s => {
                    // Prefer the message from the Anthropic error envelope
                    let message = serde_json::from_str::<AnthropicError>(&body)
                        .map(|e| e.error.message)
                        .unwrap_or(body);
                    AiError::Api { status: s, message }
                }
            });
        }

        let body = response.text().await.map_err(AiError::Network)?;
        let llm_response: LlmResponse =
            serde_json::from_str(&body).map_err(AiError::MalformedResponse)?;

        debug!(
            "LLM call succeeded: input_tokens={}, output_tokens={}",
            llm_response.usage.input_tokens, llm_response.usage.output_tokens
        );

        Ok(llm_response)
    }

    /// Calls the LLM and deserializes the text response as JSON. The prompt
    /// must instruct the model to return valid JSON; a fenced response is
    /// unwrapped first, and a parse failure is [`AiError::MalformedResponse`].
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        prompt: &str,
        system: &str,
    ) -> Result<T, AiError> {
        let response = self.call(prompt, system).await?;

        let text = response.text().ok_or(AiError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(AiError::MalformedResponse)
    }
}

/// Strips ```json ... ``` or ``` ... ``` code fences from LLM output.
fn strip_json_fences(text: &str) -> &str {
    let text = text.trim();
    if let Some(stripped) = text.strip_prefix("```json") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else if let Some(stripped) = text.strip_prefix("```") {
        stripped
            .trim_start()
            .strip_suffix("```")
            .map(|s| s.trim())
            .unwrap_or(stripped.trim_start())
    } else {
        text
    }
}
