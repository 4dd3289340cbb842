// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! API errors.
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use log::{error, warn};
use serde_json::json;
use thiserror::Error;

use scoop_sim::SimError;

use crate::AccessError;

/// Errors returned to API clients.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request has no bearer token.
    #[error("Sign in to use the calculator")]
    MissingToken,
    /// The identity provider rejected the token.
    #[error("Auth failed: {0}")]
    Auth(String),
    /// The caller has no active subscription.
    #[error("Subscription required")]
    NotSubscribed,
    /// The subscription provider failed.
    #[error("Subscription check failed: {0}")]
    Subscription(String),
    /// The request body is not a valid JSON object.
    #[error("Invalid request body: {0}")]
    InvalidBody(String),
    /// The simulation input was rejected.
    #[error(transparent)]
    Sim(#[from] SimError),
    /// The simulation failed while running.
    #[error("Solver error: {0}")]
    Solver(String),
}

impl ApiError {
    /// Returns the response status code for this error.
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::MissingToken | ApiError::Auth(_) => StatusCode::UNAUTHORIZED,
            ApiError::NotSubscribed => StatusCode::FORBIDDEN,
            ApiError::InvalidBody(_) | ApiError::Sim(_) => StatusCode::BAD_REQUEST,
            ApiError::Subscription(_) | ApiError::Solver(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<AccessError> for ApiError {
    fn from(e: AccessError) -> Self {
        match e {
            AccessError::InvalidToken(msg) => ApiError::Auth(msg),
            AccessError::Service(msg) => ApiError::Subscription(msg),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            error!("{self}");
        } else {
            warn!("Rejected request: {self}");
        }

        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes() {
        let cases = [
            (ApiError::MissingToken, StatusCode::UNAUTHORIZED),
            (ApiError::Auth("expired".into()), StatusCode::UNAUTHORIZED),
            (ApiError::NotSubscribed, StatusCode::FORBIDDEN),
            (ApiError::Subscription("down".into()), StatusCode::INTERNAL_SERVER_ERROR),
            (ApiError::InvalidBody("eof".into()), StatusCode::BAD_REQUEST),
            (ApiError::Sim(SimError::Players), StatusCode::BAD_REQUEST),
            (ApiError::Solver("panic".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, status) in cases {
            assert_eq!(err.status(), status, "{err}");
            assert_eq!(err.into_response().status(), status);
        }
    }

    #[test]
    fn messages() {
        assert_eq!(
            ApiError::from(SimError::Players).to_string(),
            "Players must be between 2 and 5"
        );
        assert_eq!(
            ApiError::from(AccessError::InvalidToken("unknown token".into())).to_string(),
            "Auth failed: unknown token"
        );
        assert!(matches!(
            ApiError::from(AccessError::Service("timeout".into())),
            ApiError::Subscription(_)
        ));
    }
}
