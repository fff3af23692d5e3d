//! Free-text notes attached to claims

use serde::{Deserialize, Serialize};

use crate::claim::ClaimId;

/// A single annotation on a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    /// Who wrote the note
    pub author: String,
    /// The note body, verbatim from the dataset
    pub text: String,
}

/// The ordered set of notes belonging to one claim
///
/// The id matches the owning claim's id. Order is insertion order as it
/// appears in the dataset and is preserved verbatim. A claim with no notes
/// has no set in the dataset; callers substitute [`NoteSet::empty`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteSet {
    pub id: ClaimId,
    #[serde(default)]
    pub notes: Vec<Note>,
}

impl NoteSet {
    /// An empty note set scoped to the given claim
    pub fn empty(id: ClaimId) -> Self {
        Self {
            id,
            notes: Vec::new(),
        }
    }
}
