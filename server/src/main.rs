#![recursion_limit = "256"]

mod error;
mod llm;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::llm::LlmChat;
use crate::llm::config::env_parse;
use crate::services::assistant::{SweepConfig, spawn_session_sweeper};

const DEFAULT_PORT: u16 = 3000;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let port: u16 = env_parse("PORT", DEFAULT_PORT);

    // Initialize LLM client (non-fatal: the site still renders without it).
    let llm: Option<Arc<dyn LlmChat>> = match llm::LlmClient::from_env() {
        Ok(client) => {
            tracing::info!(model = client.model(), "LLM client initialized");
            Some(Arc::new(client))
        }
        Err(e) => {
            tracing::warn!(error = %e, "LLM client not configured, assistant turns disabled");
            None
        }
    };

    let state = state::AppState::new(llm);

    let _sweeper = spawn_session_sweeper(state.sessions.clone(), SweepConfig::from_env());

    let app = routes::leptos_app(state).expect("leptos app init failed");
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "nyv-care listening");
    axum::serve(listener, app).await.expect("server failed");
}
