//! Mock collaborators

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};

use domain_claims::StoreError;
use domain_summarization::{CompletionClient, CompletionError, Prompt};
use infra_store::DatasetSource;

use crate::fixtures::{SAMPLE_CLAIMS_JSON, SAMPLE_NOTES_JSON};

/// In-memory dataset source that counts load attempts.
pub struct CountingDataset {
    claims: String,
    notes: String,
    loads: AtomicUsize,
}

impl CountingDataset {
    pub fn new(claims: impl Into<String>, notes: impl Into<String>) -> Self {
        Self {
            claims: claims.into(),
            notes: notes.into(),
            loads: AtomicUsize::new(0),
        }
    }

    /// The sample fixture datasets.
    pub fn sample() -> Self {
        Self::new(SAMPLE_CLAIMS_JSON, SAMPLE_NOTES_JSON)
    }

    /// Number of times the claims collection was read.
    pub fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for CountingDataset {
    async fn read_claims(&self) -> Result<String, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        Ok(self.claims.clone())
    }

    async fn read_note_sets(&self) -> Result<String, StoreError> {
        Ok(self.notes.clone())
    }
}

/// Completion client that always answers with the same content.
pub struct FixedCompletionClient {
    content: String,
}

impl FixedCompletionClient {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for FixedCompletionClient {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, CompletionError> {
        Ok(self.content.clone())
    }
}

/// Completion client that always fails in a scripted way.
pub struct FailingCompletionClient {
    status: Option<u16>,
    body: String,
}

impl FailingCompletionClient {
    /// Fails as a completion (endpoint) failure with the given status.
    pub fn endpoint(status: u16, body: impl Into<String>) -> Self {
        Self {
            status: Some(status),
            body: body.into(),
        }
    }

    /// Fails as a transport failure.
    pub fn transport(message: impl Into<String>) -> Self {
        Self {
            status: None,
            body: message.into(),
        }
    }
}

#[async_trait]
impl CompletionClient for FailingCompletionClient {
    async fn complete(&self, _prompt: &Prompt) -> Result<String, CompletionError> {
        match self.status {
            Some(status) => Err(CompletionError::Endpoint {
                status,
                body: self.body.clone(),
            }),
            None => Err(CompletionError::Transport(self.body.clone())),
        }
    }
}
