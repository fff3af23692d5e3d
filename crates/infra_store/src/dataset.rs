//! Dataset sources

use async_trait::async_trait;
use std::path::{Path, PathBuf};

use domain_claims::StoreError;

/// Provider of the raw dataset text
///
/// Implementations return the JSON-encoded claims and note-set collections.
/// The labels identify each collection in diagnostics and error messages.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    /// Raw JSON text of the claims collection.
    async fn read_claims(&self) -> Result<String, StoreError>;

    /// Raw JSON text of the note-set collection.
    async fn read_note_sets(&self) -> Result<String, StoreError>;

    fn claims_label(&self) -> String {
        "claims".to_string()
    }

    fn note_sets_label(&self) -> String {
        "notes".to_string()
    }
}

/// Dataset source reading the two JSON files from disk
#[derive(Debug, Clone)]
pub struct FileDataset {
    claims_path: PathBuf,
    notes_path: PathBuf,
}

impl FileDataset {
    pub fn new(claims_path: impl Into<PathBuf>, notes_path: impl Into<PathBuf>) -> Self {
        Self {
            claims_path: claims_path.into(),
            notes_path: notes_path.into(),
        }
    }

    async fn read(path: &Path) -> Result<String, StoreError> {
        tokio::fs::read_to_string(path)
            .await
            .map_err(|source| StoreError::Read {
                path: path.display().to_string(),
                source,
            })
    }
}

#[async_trait]
impl DatasetSource for FileDataset {
    async fn read_claims(&self) -> Result<String, StoreError> {
        Self::read(&self.claims_path).await
    }

    async fn read_note_sets(&self) -> Result<String, StoreError> {
        Self::read(&self.notes_path).await
    }

    fn claims_label(&self) -> String {
        self.claims_path.display().to_string()
    }

    fn note_sets_label(&self) -> String {
        self.notes_path.display().to_string()
    }
}
