//! Prompt construction
//!
//! Rendering is pure and deterministic: the same claim and notes always
//! produce the same prompt text.

use std::fmt::Write;

use domain_claims::{Claim, NoteSet};

const SYSTEM_INSTRUCTION: &str = "You are an insurance claims assistant. Create: \
(1) a concise general summary \
(2) a simple customer-facing summary \
(3) a more detailed adjuster summary with any missing info callouts \
(4) a single recommended next step phrase. \
Return JSON with keys summary, customerSummary, adjusterSummary, nextStep.";

/// A rendered two-message chat prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub user: String,
}

/// Renders the system instruction and user message for one claim.
///
/// The user message carries the claim header fields and one `- author: text`
/// line per note, in note-set order. An empty note set leaves the notes
/// block empty rather than omitting it.
pub fn build_prompt(claim: &Claim, notes: &NoteSet) -> Prompt {
    let mut note_lines = String::new();
    for (index, note) in notes.notes.iter().enumerate() {
        if index > 0 {
            note_lines.push('\n');
        }
        let _ = write!(note_lines, "- {}: {}", note.author, note.text);
    }

    let user = format!(
        "Claim: {} Type: {} Status: {} LossDate: {} Notes:\n{}",
        claim.id, claim.claim_type, claim.status, claim.loss_date, note_lines
    );

    Prompt {
        system: SYSTEM_INSTRUCTION.to_string(),
        user,
    }
}
