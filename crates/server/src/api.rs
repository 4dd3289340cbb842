// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! API route handlers.
use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode, header},
};
use log::info;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use scoop_sim::{COMPONENTS, SimRequest, SimResult, Simulation};

use crate::{AccessGate, ApiError, AppState, Identity};

/// The response to a solved simulation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResponse {
    /// The response type, always `done`.
    #[serde(rename = "type")]
    pub kind: String,
    /// The number of completed trials.
    pub trial: u32,
    /// The number of players.
    pub num_players: usize,
    /// Each player points for the first board, the second board, and the hole
    /// cards only.
    pub points: Vec<[f64; COMPONENTS]>,
    /// Each player accumulated pot share.
    pub pot_eq: Vec<f64>,
    /// Each player number of scoops.
    pub scoops: Vec<u32>,
}

impl From<SimResult> for SolveResponse {
    fn from(res: SimResult) -> Self {
        Self {
            kind: "done".to_string(),
            trial: res.trials,
            num_players: res.num_players,
            points: res.points,
            pot_eq: res.pot_equity,
            scoops: res.scoops,
        }
    }
}

/// The response to a subscription check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CheckResponse {
    /// True if the caller has an active subscription.
    pub subscribed: bool,
}

/// Handles `POST /api/solve`.
pub async fn solve<G: AccessGate>(
    State(state): State<AppState<G>>,
    headers: HeaderMap,
    body: Result<Json<SimRequest>, JsonRejection>,
) -> Result<Json<SolveResponse>, ApiError> {
    let identity = authorize(state.gate.as_ref(), &headers).await?;
    if !state.gate.is_subscribed(&identity).await? {
        return Err(ApiError::NotSubscribed);
    }

    let Json(req) = body.map_err(|e| ApiError::InvalidBody(e.body_text()))?;
    let config = req.validate_with_cap(state.max_trials)?;

    let now = Instant::now();
    let res = tokio::task::spawn_blocking(move || Simulation::new(&config).map(Simulation::run))
        .await
        .map_err(|e| ApiError::Solver(e.to_string()))??;

    info!(
        "Solved {} trials for {} players in {:.3}s for {}",
        res.trials,
        res.num_players,
        now.elapsed().as_secs_f64(),
        identity.email
    );

    Ok(Json(res.into()))
}

/// Handles `POST /api/check`.
pub async fn check<G: AccessGate>(
    State(state): State<AppState<G>>,
    headers: HeaderMap,
) -> Result<(StatusCode, Json<CheckResponse>), ApiError> {
    let identity = authorize(state.gate.as_ref(), &headers).await?;
    let subscribed = state.gate.is_subscribed(&identity).await?;
    let status = if subscribed {
        StatusCode::OK
    } else {
        StatusCode::FORBIDDEN
    };

    Ok((status, Json(CheckResponse { subscribed })))
}

/// Verifies the request bearer token.
async fn authorize<G: AccessGate>(gate: &G, headers: &HeaderMap) -> Result<Identity, ApiError> {
    let token = headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .ok_or(ApiError::MissingToken)?;

    Ok(gate.verify_token(token).await?)
}
