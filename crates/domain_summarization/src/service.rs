//! Summarization orchestrator

use std::sync::Arc;
use tracing::{error, warn};

use domain_claims::{ClaimId, ClaimStore, ClaimSummary, NoteSet};

use crate::client::CompletionClient;
use crate::error::{CompletionError, SummarizeError};
use crate::parser::parse_summary;
use crate::prompt::build_prompt;

/// Composes store, prompt, client, and parser into one operation
///
/// Provider failures never escape: they degrade to the fixed placeholder
/// summary so the endpoint contract stays available. Only unknown claims
/// and dataset defects propagate.
pub struct ClaimSummarizer {
    store: Arc<dyn ClaimStore>,
    client: Arc<dyn CompletionClient>,
}

impl ClaimSummarizer {
    pub fn new(store: Arc<dyn ClaimStore>, client: Arc<dyn CompletionClient>) -> Self {
        Self { store, client }
    }

    /// Summarizes the notes of one claim.
    pub async fn summarize(&self, id: ClaimId) -> Result<ClaimSummary, SummarizeError> {
        let claim = self
            .store
            .get_claim(id)
            .await?
            .ok_or(SummarizeError::ClaimNotFound(id))?;
        let notes = self
            .store
            .get_notes(id)
            .await?
            .unwrap_or_else(|| NoteSet::empty(id));

        let prompt = build_prompt(&claim, &notes);

        let content = match self.client.complete(&prompt).await {
            Ok(content) => content,
            Err(CompletionError::Endpoint { status, body }) => {
                warn!(claim = %id, status, body, "completion endpoint rejected the request");
                return Ok(ClaimSummary::unavailable(id));
            }
            Err(err) => {
                error!(claim = %id, error = %err, "completion request failed");
                return Ok(ClaimSummary::unavailable(id));
            }
        };

        Ok(parse_summary(id, &content).unwrap_or_else(|| ClaimSummary::from_raw(id, &content)))
    }
}
