//! Completion response parsing

use tracing::debug;

use domain_claims::{ClaimId, ClaimSummary};

/// Interprets completion text as a structured summary.
///
/// The text must be a JSON object; keys are matched case-insensitively.
/// Missing `customerSummary`/`adjusterSummary` fall back to `summary`, and
/// a missing `nextStep` becomes empty text. Returns `None` when the text is
/// not JSON or not an object — the model answered outside the requested
/// shape, which is expected often enough that it is only a debug event.
pub fn parse_summary(claim_id: ClaimId, content: &str) -> Option<ClaimSummary> {
    let value: serde_json::Value = match serde_json::from_str(content) {
        Ok(value) => value,
        Err(err) => {
            debug!(claim = %claim_id, error = %err, "completion content is not JSON");
            return None;
        }
    };

    let Some(object) = value.as_object() else {
        debug!(claim = %claim_id, "completion JSON is not an object");
        return None;
    };

    let field = |name: &str| {
        object
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .and_then(|(_, value)| value.as_str())
    };

    let summary = field("summary").unwrap_or_default().to_string();

    Some(ClaimSummary {
        claim_id,
        customer_summary: field("customerSummary")
            .map(str::to_string)
            .unwrap_or_else(|| summary.clone()),
        adjuster_summary: field("adjusterSummary")
            .map(str::to_string)
            .unwrap_or_else(|| summary.clone()),
        next_step: field("nextStep").unwrap_or_default().to_string(),
        summary,
    })
}
