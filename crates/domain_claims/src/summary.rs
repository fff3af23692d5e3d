//! Multi-perspective claim summaries

use serde::{Deserialize, Serialize};

use crate::claim::ClaimId;

/// Placeholder text used when the completion provider cannot be reached.
pub const UNAVAILABLE_TEXT: &str = "Summarization unavailable";
/// Next step accompanying the unavailable placeholder.
pub const UNAVAILABLE_NEXT_STEP: &str = "Retry later";
/// Next step accompanying a raw, unstructured completion.
pub const RAW_CONTENT_NEXT_STEP: &str = "Review details";

/// The result of summarizing one claim's notes
///
/// Produced per request and never persisted. Three audiences get their own
/// summary text plus a single recommended next step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummary {
    pub claim_id: ClaimId,
    /// Concise general summary
    pub summary: String,
    /// Simplified summary suitable for the customer
    pub customer_summary: String,
    /// Detailed summary for the adjuster, calling out missing information
    pub adjuster_summary: String,
    /// Single recommended next-step phrase
    pub next_step: String,
}

impl ClaimSummary {
    /// The fixed degrade-path summary returned when the completion call
    /// fails outright.
    pub fn unavailable(claim_id: ClaimId) -> Self {
        Self {
            claim_id,
            summary: UNAVAILABLE_TEXT.to_string(),
            customer_summary: UNAVAILABLE_TEXT.to_string(),
            adjuster_summary: UNAVAILABLE_TEXT.to_string(),
            next_step: UNAVAILABLE_NEXT_STEP.to_string(),
        }
    }

    /// Echoes an unstructured completion verbatim into every summary field
    /// so the model's output reaches the caller even when it does not match
    /// the expected shape.
    pub fn from_raw(claim_id: ClaimId, content: &str) -> Self {
        Self {
            claim_id,
            summary: content.to_string(),
            customer_summary: content.to_string(),
            adjuster_summary: content.to_string(),
            next_step: RAW_CONTENT_NEXT_STEP.to_string(),
        }
    }
}
