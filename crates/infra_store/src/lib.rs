//! Dataset-Backed Claim Store
//!
//! This crate implements the `ClaimStore` port over two static JSON
//! datasets: a claims collection and a note-set collection. Both are read
//! once on first access and cached in memory for the life of the process.
//!
//! The raw bytes come through the [`DatasetSource`] trait so tests can
//! substitute in-memory sources; production wiring uses [`FileDataset`].

pub mod dataset;
pub mod repository;

pub use dataset::{DatasetSource, FileDataset};
pub use repository::DatasetClaimStore;
