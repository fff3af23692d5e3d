//! Summarization errors

use thiserror::Error;

use domain_claims::{ClaimId, StoreError};

/// Errors acquiring an authorization value
#[derive(Debug, Error)]
pub enum CredentialError {
    #[error("token request failed: {0}")]
    Request(String),

    #[error("token endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("token response unreadable: {0}")]
    Malformed(String),
}

/// Errors from the chat completion call
///
/// `Endpoint` is a completion failure (the provider answered with an error
/// status or an unusable body); the other variants are transport-level. The
/// orchestrator absorbs all of them into the placeholder summary.
#[derive(Debug, Error)]
pub enum CompletionError {
    #[error("completion endpoint returned {status}: {body}")]
    Endpoint { status: u16, body: String },

    #[error("completion transport failed: {0}")]
    Transport(String),

    #[error("credential acquisition failed: {0}")]
    Credential(#[from] CredentialError),
}

/// Errors that escape the summarization orchestrator
///
/// Only upstream conditions propagate; every expected completion-path
/// failure is converted to a degraded summary instead.
#[derive(Debug, Error)]
pub enum SummarizeError {
    #[error("claim {0} not found")]
    ClaimNotFound(ClaimId),

    #[error(transparent)]
    Store(#[from] StoreError),
}
