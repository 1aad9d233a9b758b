//! LLM client: the single point of entry for model calls.
//!
//! Speaks the OpenAI Responses API and asks for strict JSON-schema output.
//! One attempt per call, no retries. Callers own the fallback policy.

use std::time::Duration;

use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

const RESPONSES_PATH: &str = "/v1/responses";
pub const DEFAULT_BASE_URL: &str = "https://api.openai.com";
pub const DEFAULT_MODEL: &str = "gpt-4o-mini";
/// Hard deadline for one call, connect to last body byte.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Error)]
pub enum LlmError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("LLM returned empty content")]
    EmptyContent,
}

impl LlmError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, LlmError::Http(e) if e.is_timeout())
    }
}

/// Named JSON schema the model output must satisfy.
#[derive(Debug, Clone, Copy)]
pub struct JsonSchemaFormat<'a> {
    pub name: &'a str,
    pub schema: &'a Value,
}

#[derive(Debug, Serialize)]
struct ResponsesRequest<'a> {
    model: &'a str,
    input: Vec<InputMessage<'a>>,
    text: TextOptions<'a>,
}

#[derive(Debug, Serialize)]
struct InputMessage<'a> {
    role: &'a str,
    content: Vec<InputText<'a>>,
}

#[derive(Debug, Serialize)]
struct InputText<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    text: &'a str,
}

#[derive(Debug, Serialize)]
struct TextOptions<'a> {
    format: FormatSpec<'a>,
}

#[derive(Debug, Serialize)]
struct FormatSpec<'a> {
    #[serde(rename = "type")]
    kind: &'a str,
    name: &'a str,
    strict: bool,
    schema: &'a Value,
}

#[derive(Debug, Default, Deserialize)]
pub struct LlmResponse {
    #[serde(default)]
    pub output_text: Option<String>,
    #[serde(default)]
    pub output: Vec<OutputItem>,
    #[serde(default)]
    pub usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
pub struct OutputItem {
    #[serde(default)]
    pub content: Vec<ContentPart>,
}

#[derive(Debug, Deserialize)]
pub struct ContentPart {
    #[serde(default)]
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct Usage {
    pub input_tokens: u32,
    pub output_tokens: u32,
}

impl LlmResponse {
    /// `output_text` when non-blank, else the first non-blank content part.
    pub fn text(&self) -> Option<&str> {
        let non_blank = |text: &&str| !text.trim().is_empty();
        self.output_text.as_deref().filter(non_blank).or_else(|| {
            self.output
                .iter()
                .flat_map(|item| &item.content)
                .filter_map(|part| part.text.as_deref())
                .find(non_blank)
        })
    }
}

/// The single LLM client used by the service.
#[derive(Clone)]
pub struct LlmClient {
    client: Client,
    api_key: String,
    model: String,
    endpoint: String,
}

impl LlmClient {
    pub fn new(api_key: String, model: String, base_url: &str) -> Result<Self, LlmError> {
        Self::with_timeout(api_key, model, base_url, REQUEST_TIMEOUT)
    }

    pub fn with_timeout(
        api_key: String,
        model: String,
        base_url: &str,
        timeout: Duration,
    ) -> Result<Self, LlmError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            api_key,
            model,
            endpoint: format!("{}{RESPONSES_PATH}", base_url.trim_end_matches('/')),
        })
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    /// Makes one call to the Responses API, returning the full response object.
    pub async fn call(
        &self,
        system: &str,
        input: &str,
        format: JsonSchemaFormat<'_>,
    ) -> Result<LlmResponse, LlmError> {
        let request_body = ResponsesRequest {
            model: &self.model,
            input: vec![
                InputMessage {
                    role: "system",
                    content: vec![InputText {
                        kind: "input_text",
                        text: system,
                    }],
                },
                InputMessage {
                    role: "user",
                    content: vec![InputText {
                        kind: "input_text",
                        text: input,
                    }],
                },
            ],
            text: TextOptions {
                format: FormatSpec {
                    kind: "json_schema",
                    name: format.name,
                    strict: true,
                    schema: format.schema,
                },
            },
        };

        let response = self
            .client
            .post(&self.endpoint)
            .bearer_auth(&self.api_key)
            .json(&request_body)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            warn!("LLM API returned {}", status);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message: body,
            });
        }

        let body = response.text().await?;
        let llm_response: LlmResponse = serde_json::from_str(&body)?;

        if let Some(usage) = &llm_response.usage {
            debug!(
                "LLM call succeeded: input_tokens={}, output_tokens={}",
                usage.input_tokens, usage.output_tokens
            );
        }

        Ok(llm_response)
    }

    /// Calls the LLM and deserializes the output text as JSON.
    pub async fn call_json<T: DeserializeOwned>(
        &self,
        system: &str,
        input: &str,
        format: JsonSchemaFormat<'_>,
    ) -> Result<T, LlmError> {
        let response = self.call(system, input, format).await?;

        let text = response.text().ok_or(LlmError::EmptyContent)?;

        // Strip markdown code fences if the model wraps JSON in them
        let text = strip_json_fences(text);

        serde_json::from_str(text).map_err(LlmError::Parse)
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
