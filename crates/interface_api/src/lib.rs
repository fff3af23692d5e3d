//! HTTP API Layer
//!
//! This crate provides the REST API for the claim status system using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: claim lookup, listing, and summarization endpoints
//! - **DTOs**: response data transfer objects with the wire field names
//! - **Error Handling**: consistent error responses, 404 for unknown claims
//!
//! Summarization-provider failures never surface as API errors: the
//! summarize endpoint answers 200 with placeholder text when the external
//! call fails, keeping the endpoint contract available.

pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use domain_claims::ClaimStore;
use domain_summarization::{ChatCompletionClient, ClaimSummarizer, CompletionClient};
use infra_store::DatasetClaimStore;

use crate::config::ApiConfig;
use crate::handlers::{claims, health};

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn ClaimStore>,
    pub summarizer: Arc<ClaimSummarizer>,
}

impl AppState {
    /// Wires the production collaborators from configuration: file-backed
    /// datasets and the configured completion deployment.
    pub fn from_config(config: &ApiConfig) -> Self {
        let store: Arc<dyn ClaimStore> = Arc::new(DatasetClaimStore::from_paths(
            &config.claims_path,
            &config.notes_path,
        ));
        let client: Arc<dyn CompletionClient> = Arc::new(ChatCompletionClient::new(
            config.completion.completion_endpoint(),
            config.completion.credentials(),
        ));
        let summarizer = Arc::new(ClaimSummarizer::new(store.clone(), client));

        Self { store, summarizer }
    }
}

/// Creates the main API router
pub fn create_router(state: AppState) -> Router {
    let claims_routes = Router::new()
        .route("/", get(claims::list_claims))
        .route("/:id", get(claims::get_claim))
        .route("/:id/summarize", post(claims::summarize_claim));

    Router::new()
        .route("/healthz", get(health::health_check))
        .nest("/claims", claims_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
