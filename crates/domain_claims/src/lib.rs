//! Claim Domain
//!
//! This crate provides the data model for the claim status system:
//! claims loaded from a static dataset, their free-text notes, and the
//! multi-perspective summaries produced for them. It also defines the
//! `ClaimStore` port through which the rest of the system reads claim data.

pub mod claim;
pub mod note;
pub mod store;
pub mod summary;

pub use claim::{Claim, ClaimId};
pub use note::{Note, NoteSet};
pub use store::{ClaimStore, StoreError};
pub use summary::ClaimSummary;
