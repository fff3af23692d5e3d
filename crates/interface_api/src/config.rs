//! API configuration

use serde::{Deserialize, Serialize};
use std::sync::Arc;

use domain_summarization::{
    BearerTokenCredential, CompletionEndpoint, CredentialProvider, StaticKeyCredential,
};

/// API configuration
///
/// Loaded from the environment with the `API_` prefix and `__` as the
/// nesting separator, e.g. `API_PORT=8080`,
/// `API_COMPLETION__ENDPOINT=https://example.openai.azure.com`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Server host
    pub host: String,
    /// Server port
    pub port: u16,
    /// Log level
    pub log_level: String,
    /// Path of the claims dataset file
    pub claims_path: String,
    /// Path of the note-set dataset file
    pub notes_path: String,
    /// Completion provider settings
    pub completion: CompletionConfig,
}

/// Completion provider settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// Service base URL
    pub endpoint: String,
    /// Deployment (model instance) identifier
    pub deployment: String,
    /// API version query value
    pub api_version: String,
    /// Static API key; when set, requests authenticate with it directly
    pub api_key: Option<String>,
    /// Identity endpoint for bearer-token acquisition (key absent)
    pub token_url: String,
    /// Audience the bearer token is scoped to
    pub audience: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
            log_level: "info".to_string(),
            claims_path: "data/claims.json".to_string(),
            notes_path: "data/notes.json".to_string(),
            completion: CompletionConfig::default(),
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            endpoint: String::new(),
            deployment: String::new(),
            api_version: "2024-02-15-preview".to_string(),
            api_key: None,
            token_url: "http://169.254.169.254/metadata/identity/oauth2/token".to_string(),
            audience: "https://cognitiveservices.azure.com".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from environment, seeded with defaults
    pub fn from_env() -> Result<Self, config::ConfigError> {
        config::Config::builder()
            .add_source(config::Config::try_from(&ApiConfig::default())?)
            .add_source(config::Environment::with_prefix("API").separator("__"))
            .build()?
            .try_deserialize()
    }

    /// Returns the server address
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl CompletionConfig {
    pub fn completion_endpoint(&self) -> CompletionEndpoint {
        CompletionEndpoint {
            endpoint: self.endpoint.clone(),
            deployment: self.deployment.clone(),
            api_version: self.api_version.clone(),
        }
    }

    /// Selects the credential strategy: the static key when one is
    /// configured, identity-issued bearer tokens otherwise.
    pub fn credentials(&self) -> Arc<dyn CredentialProvider> {
        match self.api_key.as_deref() {
            Some(key) if !key.is_empty() => Arc::new(StaticKeyCredential::new(key)),
            _ => Arc::new(BearerTokenCredential::new(
                self.token_url.clone(),
                self.audience.clone(),
            )),
        }
    }
}
