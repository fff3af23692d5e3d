//! Chat completion client

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;
use tracing::debug;

use crate::credentials::CredentialProvider;
use crate::error::CompletionError;
use crate::prompt::Prompt;

const TEMPERATURE: f64 = 0.4;
const MAX_TOKENS: u32 = 400;
const TOP_P: f64 = 1.0;
const FREQUENCY_PENALTY: f64 = 0.0;
const PRESENCE_PENALTY: f64 = 0.0;

/// Sends a rendered prompt to a completion provider
#[async_trait]
pub trait CompletionClient: Send + Sync {
    /// Returns the raw completion text for the prompt. One request per
    /// call; failures are reported, never retried here.
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError>;
}

/// Location of the completion deployment
#[derive(Debug, Clone)]
pub struct CompletionEndpoint {
    /// Service base URL
    pub endpoint: String,
    /// Deployment (model instance) identifier
    pub deployment: String,
    /// API version query value
    pub api_version: String,
}

/// HTTP client for a chat-completions deployment
///
/// Builds the two-message request with fixed generation parameters and
/// authenticates through the configured credential provider, so the same
/// client serves both static-key and bearer-token deployments.
pub struct ChatCompletionClient {
    http: reqwest::Client,
    endpoint: CompletionEndpoint,
    credentials: Arc<dyn CredentialProvider>,
}

impl ChatCompletionClient {
    pub fn new(endpoint: CompletionEndpoint, credentials: Arc<dyn CredentialProvider>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            endpoint,
            credentials,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/openai/deployments/{}/chat/completions?api-version={}",
            self.endpoint.endpoint.trim_end_matches('/'),
            self.endpoint.deployment,
            self.endpoint.api_version
        )
    }

    fn request_body(prompt: &Prompt) -> ApiRequest {
        ApiRequest {
            messages: vec![
                ApiMessage {
                    role: "system".into(),
                    content: prompt.system.clone(),
                },
                ApiMessage {
                    role: "user".into(),
                    content: prompt.user.clone(),
                },
            ],
            temperature: TEMPERATURE,
            max_tokens: MAX_TOKENS,
            top_p: TOP_P,
            frequency_penalty: FREQUENCY_PENALTY,
            presence_penalty: PRESENCE_PENALTY,
        }
    }
}

#[async_trait]
impl CompletionClient for ChatCompletionClient {
    async fn complete(&self, prompt: &Prompt) -> Result<String, CompletionError> {
        let auth = self.credentials.authorization().await?;
        let body = Self::request_body(prompt);

        debug!(deployment = %self.endpoint.deployment, "sending completion request");

        let response = self
            .http
            .post(self.completions_url())
            .header(auth.header, auth.value)
            .json(&body)
            .send()
            .await
            .map_err(|err| CompletionError::Transport(err.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CompletionError::Endpoint { status, body });
        }

        let api_response: ApiResponse =
            response
                .json()
                .await
                .map_err(|err| CompletionError::Endpoint {
                    status,
                    body: format!("unreadable completion response: {err}"),
                })?;

        api_response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content)
            .ok_or_else(|| CompletionError::Endpoint {
                status,
                body: "no choices in completion response".into(),
            })
    }
}

// --- Completion API wire types ---

#[derive(Debug, Serialize)]
struct ApiRequest {
    messages: Vec<ApiMessage>,
    temperature: f64,
    max_tokens: u32,
    top_p: f64,
    frequency_penalty: f64,
    presence_penalty: f64,
}

#[derive(Debug, Serialize)]
struct ApiMessage {
    role: String,
    content: String,
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    choices: Vec<ApiChoice>,
}

#[derive(Debug, Deserialize)]
struct ApiChoice {
    message: ApiChoiceMessage,
}

#[derive(Debug, Deserialize)]
struct ApiChoiceMessage {
    #[serde(default)]
    content: Option<String>,
}
