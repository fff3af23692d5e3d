//! Dataset-backed `ClaimStore` implementation

use async_trait::async_trait;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::OnceCell;
use tracing::info;

use domain_claims::{Claim, ClaimId, ClaimStore, NoteSet, StoreError};

use crate::dataset::{DatasetSource, FileDataset};

/// Claim store serving lookups from a lazily loaded in-memory cache
///
/// The first caller triggers a single load of both datasets; concurrent
/// first callers await that load rather than starting their own, and no
/// caller ever observes a partially populated cache. After a successful
/// load the cache is immutable. A failed load leaves the cell empty, so
/// the underlying defect resurfaces on the next request instead of being
/// masked by an empty store.
pub struct DatasetClaimStore {
    source: Arc<dyn DatasetSource>,
    cache: OnceCell<StoreCache>,
}

struct StoreCache {
    claims: Vec<Claim>,
    notes: HashMap<ClaimId, NoteSet>,
}

impl DatasetClaimStore {
    pub fn new(source: Arc<dyn DatasetSource>) -> Self {
        Self {
            source,
            cache: OnceCell::new(),
        }
    }

    /// Convenience constructor over the two dataset files.
    pub fn from_paths(
        claims_path: impl Into<std::path::PathBuf>,
        notes_path: impl Into<std::path::PathBuf>,
    ) -> Self {
        Self::new(Arc::new(FileDataset::new(claims_path, notes_path)))
    }

    async fn cache(&self) -> Result<&StoreCache, StoreError> {
        self.cache.get_or_try_init(|| self.load()).await
    }

    async fn load(&self) -> Result<StoreCache, StoreError> {
        let claims_text = self.source.read_claims().await?;
        let records: Vec<ClaimRecord> =
            serde_json::from_str(&claims_text).map_err(|source| StoreError::Malformed {
                path: self.source.claims_label(),
                source,
            })?;
        let claims: Vec<Claim> = records.into_iter().map(ClaimRecord::into_claim).collect();

        let notes_text = self.source.read_note_sets().await?;
        let sets: Vec<NoteSet> =
            serde_json::from_str(&notes_text).map_err(|source| StoreError::Malformed {
                path: self.source.note_sets_label(),
                source,
            })?;
        let notes = sets.into_iter().map(|set| (set.id, set)).collect();

        let cache = StoreCache { claims, notes };
        info!(
            claims = cache.claims.len(),
            note_sets = cache.notes.len(),
            "claim datasets loaded"
        );
        Ok(cache)
    }
}

#[async_trait]
impl ClaimStore for DatasetClaimStore {
    async fn get_claim(&self, id: ClaimId) -> Result<Option<Claim>, StoreError> {
        let cache = self.cache().await?;
        Ok(cache.claims.iter().find(|claim| claim.id == id).cloned())
    }

    async fn get_all_claims(&self) -> Result<Vec<Claim>, StoreError> {
        Ok(self.cache().await?.claims.clone())
    }

    async fn get_notes(&self, id: ClaimId) -> Result<Option<NoteSet>, StoreError> {
        Ok(self.cache().await?.notes.get(&id).cloned())
    }
}

/// Raw claim record as it appears in the dataset
///
/// Converted to the domain `Claim` on load; the only normalization is the
/// last-updated timestamp, which may arrive with or without an explicit
/// offset and is pinned to UTC either way.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ClaimRecord {
    id: ClaimId,
    policy_number: String,
    #[serde(rename = "type")]
    claim_type: String,
    status: String,
    loss_date: NaiveDate,
    insured_name: String,
    amount_claimed: Decimal,
    amount_reserved: Decimal,
    #[serde(deserialize_with = "utc_instant")]
    last_updated: DateTime<Utc>,
}

impl ClaimRecord {
    fn into_claim(self) -> Claim {
        Claim {
            id: self.id,
            policy_number: self.policy_number,
            claim_type: self.claim_type,
            status: self.status,
            loss_date: self.loss_date,
            insured_name: self.insured_name,
            amount_claimed: self.amount_claimed,
            amount_reserved: self.amount_reserved,
            last_updated: self.last_updated,
        }
    }
}

fn utc_instant<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    DateTime::parse_from_rfc3339(&raw)
        .map(|instant| instant.with_timezone(&Utc))
        .or_else(|_| {
            NaiveDateTime::parse_from_str(&raw, "%Y-%m-%dT%H:%M:%S%.f")
                .map(|naive| naive.and_utc())
        })
        .map_err(|err| serde::de::Error::custom(format!("invalid timestamp {raw:?}: {err}")))
}
