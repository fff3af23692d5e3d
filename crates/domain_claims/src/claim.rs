//! Claim record and identifier

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Strongly-typed claim identifier
///
/// Claim ids are positive integers assigned by the dataset. The newtype
/// prevents accidental mixing with other numeric values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(u32);

impl ClaimId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the underlying integer value
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ClaimId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u32>().map(Self)
    }
}

impl From<u32> for ClaimId {
    fn from(id: u32) -> Self {
        Self(id)
    }
}

/// An insurance claim record
///
/// Claims are immutable values loaded from the claims dataset; nothing in
/// the system mutates them after load. Monetary amounts use `Decimal` so
/// dataset quantities round-trip exactly, and `last_updated` is normalized
/// to UTC when the record is loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    /// Unique identifier within the dataset
    pub id: ClaimId,
    /// Policy the claim was filed against
    pub policy_number: String,
    /// Kind of claim, as recorded in the dataset (e.g. "Auto", "Property")
    #[serde(rename = "type")]
    pub claim_type: String,
    /// Current processing status, free text from the dataset
    pub status: String,
    /// Date of loss, calendar date with no time component
    pub loss_date: NaiveDate,
    /// Name of the insured party
    pub insured_name: String,
    /// Amount claimed by the insured
    pub amount_claimed: Decimal,
    /// Amount currently reserved against the claim
    pub amount_reserved: Decimal,
    /// Last modification instant, UTC
    pub last_updated: DateTime<Utc>,
}
