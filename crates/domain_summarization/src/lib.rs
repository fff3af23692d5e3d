//! Claim Summarization
//!
//! This crate turns a claim and its notes into a multi-perspective summary
//! by calling an external chat completion service:
//!
//! 1. [`prompt::build_prompt`] renders a deterministic system/user prompt.
//! 2. [`client::ChatCompletionClient`] sends it to the configured endpoint,
//!    authenticating through a pluggable [`credentials::CredentialProvider`].
//! 3. [`parser::parse_summary`] interprets the loosely structured response.
//! 4. [`service::ClaimSummarizer`] composes the steps and owns the
//!    degrade-to-placeholder policy for provider failures.

pub mod client;
pub mod credentials;
pub mod error;
pub mod parser;
pub mod prompt;
pub mod service;

pub use client::{ChatCompletionClient, CompletionClient, CompletionEndpoint};
pub use credentials::{
    Authorization, BearerTokenCredential, CredentialProvider, StaticKeyCredential,
};
pub use error::{CompletionError, CredentialError, SummarizeError};
pub use parser::parse_summary;
pub use prompt::{build_prompt, Prompt};
pub use service::ClaimSummarizer;
