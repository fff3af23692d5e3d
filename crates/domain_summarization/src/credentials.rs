//! Credential providers for the completion endpoint
//!
//! The completion client is written once against [`CredentialProvider`];
//! whether the deployment uses a static key or an identity-issued bearer
//! token is a wiring decision.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use crate::error::CredentialError;

/// An authorization value ready to attach to an outbound request
#[derive(Debug, Clone)]
pub struct Authorization {
    /// Header name the value belongs under
    pub header: &'static str,
    /// Header value, including any scheme prefix
    pub value: String,
}

/// Produces the current authorization value for the completion endpoint
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    async fn authorization(&self) -> Result<Authorization, CredentialError>;
}

/// Static key credential, presented as an `api-key` header
#[derive(Debug, Clone)]
pub struct StaticKeyCredential {
    key: String,
}

impl StaticKeyCredential {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }
}

#[async_trait]
impl CredentialProvider for StaticKeyCredential {
    async fn authorization(&self) -> Result<Authorization, CredentialError> {
        Ok(Authorization {
            header: "api-key",
            value: self.key.clone(),
        })
    }
}

/// Bearer token credential acquired from an identity endpoint
///
/// Fetches a short-lived token scoped to the configured audience on every
/// call (instance-metadata style: GET with `resource` query parameter and a
/// `Metadata: true` header) and presents it as `Authorization: Bearer ...`.
/// Tokens are deliberately not cached; the identity endpoint is local to
/// the host and each summarization performs exactly one completion call.
pub struct BearerTokenCredential {
    http: reqwest::Client,
    token_url: String,
    audience: String,
}

#[derive(Debug, Deserialize)]
struct TokenResponse {
    access_token: String,
}

impl BearerTokenCredential {
    pub fn new(token_url: impl Into<String>, audience: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(10))
            .build()
            .expect("Failed to create HTTP client");

        Self {
            http,
            token_url: token_url.into(),
            audience: audience.into(),
        }
    }
}

#[async_trait]
impl CredentialProvider for BearerTokenCredential {
    async fn authorization(&self) -> Result<Authorization, CredentialError> {
        debug!(audience = %self.audience, "acquiring bearer token");

        let response = self
            .http
            .get(&self.token_url)
            .query(&[
                ("resource", self.audience.as_str()),
                ("api-version", "2019-08-01"),
            ])
            .header("Metadata", "true")
            .send()
            .await
            .map_err(|err| CredentialError::Request(err.to_string()))?;

        let status = response.status().as_u16();
        if !response.status().is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(CredentialError::Endpoint { status, body });
        }

        let token: TokenResponse = response
            .json()
            .await
            .map_err(|err| CredentialError::Malformed(err.to_string()))?;

        Ok(Authorization {
            header: "Authorization",
            value: format!("Bearer {}", token.access_token),
        })
    }
}
