//! Tests for the dataset-backed claim store

use async_trait::async_trait;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use domain_claims::{ClaimId, ClaimStore, StoreError};
use infra_store::{DatasetClaimStore, DatasetSource, FileDataset};

const CLAIMS_JSON: &str = r#"[
    {
        "id": 1001,
        "policyNumber": "POL-88421",
        "type": "Auto",
        "status": "Open",
        "lossDate": "2024-01-15",
        "insuredName": "Dana Whitfield",
        "amountClaimed": 12840.55,
        "amountReserved": 9000.00,
        "lastUpdated": "2024-02-01T10:30:00Z"
    },
    {
        "id": 1002,
        "policyNumber": "POL-11203",
        "type": "Property",
        "status": "UnderReview",
        "lossDate": "2023-11-02",
        "insuredName": "Luis Ortega",
        "amountClaimed": 48200.00,
        "amountReserved": 30000.00,
        "lastUpdated": "2024-01-20T16:45:00Z"
    },
    {
        "id": 1003,
        "policyNumber": "POL-77310",
        "type": "Liability",
        "status": "Closed",
        "lossDate": "2023-06-30",
        "insuredName": "Priya Raman",
        "amountClaimed": 5300.25,
        "amountReserved": 0,
        "lastUpdated": "2023-09-14T09:00:00Z"
    }
]"#;

const NOTES_JSON: &str = r#"[
    {
        "id": 1001,
        "notes": [
            {"author": "intake", "text": "First notice of loss received by phone"},
            {"author": "adjuster", "text": "Requested photos of vehicle damage"}
        ]
    },
    {
        "id": 1003,
        "notes": [
            {"author": "legal", "text": "Settlement executed, file closed"}
        ]
    }
]"#;

/// In-memory source that counts how many times the datasets are read.
struct CountingSource {
    claims: String,
    notes: String,
    loads: AtomicUsize,
}

impl CountingSource {
    fn sample() -> Self {
        Self {
            claims: CLAIMS_JSON.to_string(),
            notes: NOTES_JSON.to_string(),
            loads: AtomicUsize::new(0),
        }
    }

    fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatasetSource for CountingSource {
    async fn read_claims(&self) -> Result<String, StoreError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        // Widen the window in which concurrent first callers could race.
        tokio::time::sleep(Duration::from_millis(20)).await;
        Ok(self.claims.clone())
    }

    async fn read_note_sets(&self) -> Result<String, StoreError> {
        Ok(self.notes.clone())
    }
}

// ============================================================================
// Lookup Tests
// ============================================================================

mod lookup_tests {
    use super::*;

    #[tokio::test]
    async fn get_claim_returns_matching_record() {
        let store = DatasetClaimStore::new(Arc::new(CountingSource::sample()));

        let claim = store.get_claim(ClaimId::new(1002)).await.unwrap().unwrap();
        assert_eq!(claim.id, ClaimId::new(1002));
        assert_eq!(claim.insured_name, "Luis Ortega");
    }

    #[tokio::test]
    async fn get_claim_misses_for_unknown_id() {
        let store = DatasetClaimStore::new(Arc::new(CountingSource::sample()));
        assert!(store.get_claim(ClaimId::new(9999)).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn get_all_claims_returns_dataset_in_order() {
        let store = DatasetClaimStore::new(Arc::new(CountingSource::sample()));

        let claims = store.get_all_claims().await.unwrap();
        assert_eq!(claims.len(), 3);

        let ids: Vec<u32> = claims.iter().map(|c| c.id.value()).collect();
        assert_eq!(ids, vec![1001, 1002, 1003]);

        let mut unique = ids.clone();
        unique.sort_unstable();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[tokio::test]
    async fn get_notes_returns_set_in_dataset_order() {
        let store = DatasetClaimStore::new(Arc::new(CountingSource::sample()));

        let set = store.get_notes(ClaimId::new(1001)).await.unwrap().unwrap();
        assert_eq!(set.notes.len(), 2);
        assert_eq!(set.notes[0].author, "intake");
        assert_eq!(set.notes[1].author, "adjuster");
    }

    #[tokio::test]
    async fn get_notes_misses_for_claim_without_notes() {
        let store = DatasetClaimStore::new(Arc::new(CountingSource::sample()));
        assert!(store.get_notes(ClaimId::new(1002)).await.unwrap().is_none());
    }
}

// ============================================================================
// Caching Tests
// ============================================================================

mod caching_tests {
    use super::*;

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn concurrent_first_access_loads_once() {
        let source = Arc::new(CountingSource::sample());
        let store = Arc::new(DatasetClaimStore::new(source.clone()));

        let mut handles = Vec::new();
        for _ in 0..16 {
            let store = store.clone();
            handles.push(tokio::spawn(
                async move { store.get_all_claims().await.unwrap() },
            ));
        }

        let mut results = Vec::new();
        for handle in handles {
            results.push(handle.await.unwrap());
        }

        assert_eq!(source.loads(), 1);
        for claims in &results {
            assert_eq!(claims, &results[0]);
        }
    }

    #[tokio::test]
    async fn repeated_access_serves_from_cache() {
        let source = Arc::new(CountingSource::sample());
        let store = DatasetClaimStore::new(source.clone());

        store.get_claim(ClaimId::new(1001)).await.unwrap();
        store.get_notes(ClaimId::new(1001)).await.unwrap();
        store.get_all_claims().await.unwrap();

        assert_eq!(source.loads(), 1);
    }
}

// ============================================================================
// Failure Tests
// ============================================================================

mod failure_tests {
    use super::*;

    struct MalformedSource;

    #[async_trait]
    impl DatasetSource for MalformedSource {
        async fn read_claims(&self) -> Result<String, StoreError> {
            Ok("{ not valid json".to_string())
        }

        async fn read_note_sets(&self) -> Result<String, StoreError> {
            Ok("[]".to_string())
        }
    }

    #[tokio::test]
    async fn malformed_claims_dataset_is_fatal() {
        let store = DatasetClaimStore::new(Arc::new(MalformedSource));
        let err = store.get_all_claims().await.unwrap_err();
        assert!(matches!(err, StoreError::Malformed { .. }));
    }

    #[tokio::test]
    async fn missing_dataset_file_is_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let store = DatasetClaimStore::new(Arc::new(FileDataset::new(
            dir.path().join("claims.json"),
            dir.path().join("notes.json"),
        )));

        let err = store.get_claim(ClaimId::new(1)).await.unwrap_err();
        assert!(matches!(err, StoreError::Read { .. }));
    }

    #[tokio::test]
    async fn file_dataset_round_trips_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let claims_path = dir.path().join("claims.json");
        let notes_path = dir.path().join("notes.json");
        std::fs::write(&claims_path, CLAIMS_JSON).unwrap();
        std::fs::write(&notes_path, NOTES_JSON).unwrap();

        let store = DatasetClaimStore::new(Arc::new(FileDataset::new(claims_path, notes_path)));
        let claims = store.get_all_claims().await.unwrap();
        assert_eq!(claims.len(), 3);

        let notes = store.get_notes(ClaimId::new(1003)).await.unwrap().unwrap();
        assert_eq!(notes.notes[0].author, "legal");
    }
}
