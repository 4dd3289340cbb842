// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop server entry point.
use anyhow::{Result, anyhow};
use axum::{Router, routing::post};
use log::info;
use std::sync::Arc;
use tokio::{net::TcpListener, signal};

use crate::{AccessGate, api};

/// Server config.
#[derive(Debug)]
pub struct Config {
    /// The server listening address.
    pub address: String,
    /// The server listening port.
    pub port: u16,
    /// Trials above this value are capped.
    pub max_trials: u32,
}

/// The state shared by all request handlers.
#[derive(Debug)]
pub struct AppState<G> {
    /// Verifies callers token and subscription.
    pub gate: Arc<G>,
    /// Trials above this value are capped.
    pub max_trials: u32,
}

impl<G> AppState<G> {
    /// Creates a new state.
    pub fn new(gate: G, max_trials: u32) -> Self {
        Self {
            gate: Arc::new(gate),
            max_trials,
        }
    }
}

impl<G> Clone for AppState<G> {
    fn clone(&self) -> Self {
        Self {
            gate: self.gate.clone(),
            max_trials: self.max_trials,
        }
    }
}

/// Creates the API router.
pub fn router<G: AccessGate>(state: AppState<G>) -> Router {
    Router::new()
        .route("/api/solve", post(api::solve::<G>))
        .route("/api/check", post(api::check::<G>))
        .with_state(state)
}

/// Server entry point.
pub async fn run<G: AccessGate>(config: Config, gate: G) -> Result<()> {
    // Build the rank table before accepting requests.
    scoop_eval::eval::table::warm_up();

    let addr = format!("{}:{}", config.address, config.port);
    info!("Starting server listening on {addr}");

    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|e| anyhow!("Tcp listener bind error: {e}"))?;

    let app = router(AppState::new(gate, config.max_trials));
    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            let _ = signal::ctrl_c().await;
            info!("Received shutdown signal...");
        })
        .await
        .map_err(|e| anyhow!("Server error: {e}"))?;

    Ok(())
}
