//! Claim store port
//!
//! The store is a read-only collaborator: implementations load the claim
//! and note datasets once and serve lookups from an in-memory cache.

use async_trait::async_trait;
use thiserror::Error;

use crate::claim::{Claim, ClaimId};
use crate::note::NoteSet;

/// Errors raised by claim store implementations
///
/// Both variants indicate a deployment or configuration defect (missing or
/// malformed dataset), so callers treat them as fatal for the request that
/// triggered the load rather than recovering with an empty store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read dataset {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed dataset {path}: {source}")]
    Malformed {
        path: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Read access to claims and their notes
#[async_trait]
pub trait ClaimStore: Send + Sync {
    /// Looks up a single claim; `None` when the id is unknown.
    async fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError>;

    /// Returns every claim in dataset order.
    async fn get_all_claims(&self) -> Result<Vec<Claim>, StoreError>;

    /// Looks up the note set for a claim; `None` when the claim has no notes.
    async fn get_notes(&self, id: ClaimId) -> Result<Option<NoteSet>, StoreError>;
}
