//! Response DTOs

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::Serialize;

use domain_claims::{Claim, ClaimId, ClaimSummary};

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimResponse {
    pub id: ClaimId,
    pub policy_number: String,
    #[serde(rename = "type")]
    pub claim_type: String,
    pub status: String,
    pub loss_date: NaiveDate,
    pub insured_name: String,
    pub amount_claimed: Decimal,
    pub amount_reserved: Decimal,
    pub last_updated: DateTime<Utc>,
}

impl From<Claim> for ClaimResponse {
    fn from(claim: Claim) -> Self {
        Self {
            id: claim.id,
            policy_number: claim.policy_number,
            claim_type: claim.claim_type,
            status: claim.status,
            loss_date: claim.loss_date,
            insured_name: claim.insured_name,
            amount_claimed: claim.amount_claimed,
            amount_reserved: claim.amount_reserved,
            last_updated: claim.last_updated,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimSummaryResponse {
    pub claim_id: ClaimId,
    pub summary: String,
    pub customer_summary: String,
    pub adjuster_summary: String,
    pub next_step: String,
}

impl From<ClaimSummary> for ClaimSummaryResponse {
    fn from(summary: ClaimSummary) -> Self {
        Self {
            claim_id: summary.claim_id,
            summary: summary.summary,
            customer_summary: summary.customer_summary,
            adjuster_summary: summary.adjuster_summary,
            next_step: summary.next_step,
        }
    }
}
