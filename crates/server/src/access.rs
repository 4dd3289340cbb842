// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Access checks for the solver routes.
//!
//! The identity and subscription providers are external services, the server
//! only depends on the [AccessGate] trait.
use ahash::{AHashMap, AHashSet};
use anyhow::{Result, anyhow};
use serde::Deserialize;
use std::{future::Future, path::Path};
use thiserror::Error;

/// A verified caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Identity {
    /// The caller email.
    pub email: String,
}

/// Access check errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AccessError {
    /// The token was rejected by the identity provider.
    #[error("{0}")]
    InvalidToken(String),
    /// The subscription provider failed.
    #[error("{0}")]
    Service(String),
}

/// Verifies callers identity and subscription.
pub trait AccessGate: Send + Sync + 'static {
    /// Verifies a bearer token and returns the caller identity.
    fn verify_token(
        &self,
        token: &str,
    ) -> impl Future<Output = Result<Identity, AccessError>> + Send;

    /// Checks if the caller has an active subscription.
    fn is_subscribed(
        &self,
        identity: &Identity,
    ) -> impl Future<Output = Result<bool, AccessError>> + Send;
}

/// An access gate that accepts any token as an active subscriber.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenAccess;

impl AccessGate for OpenAccess {
    async fn verify_token(&self, _token: &str) -> Result<Identity, AccessError> {
        Ok(Identity {
            email: "anonymous".to_string(),
        })
    }

    async fn is_subscribed(&self, _identity: &Identity) -> Result<bool, AccessError> {
        Ok(true)
    }
}

/// An access gate with a fixed set of tokens and subscribers.
///
/// The access file has the format:
///
/// ```json
/// {
///   "tokens": { "<token>": "alice@example.com" },
///   "subscribers": ["alice@example.com"]
/// }
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StaticAccess {
    /// Maps a token to the owner email.
    tokens: AHashMap<String, String>,
    /// Emails with an active subscription.
    #[serde(default)]
    subscribers: AHashSet<String>,
}

impl StaticAccess {
    /// Loads the tokens and subscribers from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| anyhow!("Cannot read access file {}: {e}", path.display()))?;
        let access = Self::from_json(&data)
            .map_err(|e| anyhow!("Invalid access file {}: {e}", path.display()))?;

        log::info!(
            "Loaded {} tokens and {} subscribers from {}",
            access.tokens.len(),
            access.subscribers.len(),
            path.display()
        );

        Ok(access)
    }

    /// Parses the tokens and subscribers from a JSON string.
    pub fn from_json(data: &str) -> Result<Self> {
        Ok(serde_json::from_str(data)?)
    }

    /// Adds a token for the given email.
    pub fn with_token(mut self, token: &str, email: &str) -> Self {
        self.tokens.insert(token.to_string(), email.to_string());
        self
    }

    /// Adds a subscriber email.
    pub fn with_subscriber(mut self, email: &str) -> Self {
        self.subscribers.insert(email.to_string());
        self
    }
}

impl AccessGate for StaticAccess {
    async fn verify_token(&self, token: &str) -> Result<Identity, AccessError> {
        self.tokens
            .get(token)
            .map(|email| Identity {
                email: email.clone(),
            })
            .ok_or_else(|| AccessError::InvalidToken("unknown token".to_string()))
    }

    async fn is_subscribed(&self, identity: &Identity) -> Result<bool, AccessError> {
        Ok(self.subscribers.contains(&identity.email))
    }
}
