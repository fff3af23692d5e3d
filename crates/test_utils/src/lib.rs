//! Test Utilities
//!
//! Shared fixtures and mock collaborators for the claim status test suite:
//!
//! - **Fixtures**: sample claim and note datasets matching the production
//!   wire shape, plus a helper to materialize them on disk
//! - **Mocks**: dataset sources and completion clients with scripted
//!   behavior for exercising the store and the summarization path

pub mod fixtures;
pub mod mocks;

pub use fixtures::{write_datasets, SAMPLE_CLAIMS_JSON, SAMPLE_NOTES_JSON};
pub use mocks::{CountingDataset, FailingCompletionClient, FixedCompletionClient};
