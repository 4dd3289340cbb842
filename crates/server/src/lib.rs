// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop equity calculator server.
//!
//! # Routes
//!
//! | Method | Path         | Description                                 |
//! |--------|--------------|---------------------------------------------|
//! | `POST` | `/api/solve` | Run a simulation and return the equities    |
//! | `POST` | `/api/check` | Check the caller has an active subscription |
//!
//! Both routes require an `Authorization: Bearer <token>` header, the token
//! and the subscription are checked by an [AccessGate].
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod access;
pub use access::{AccessError, AccessGate, Identity, OpenAccess, StaticAccess};

pub mod api;

pub mod error;
pub use error::ApiError;

pub mod server;
pub use server::{AppState, Config, router, run};
