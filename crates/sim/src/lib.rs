// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop equity calculator simulation.
//!
//! Estimates how a pot is shared among 2 to 5 players when each hand is
//! scored in three components: two hole cards and three board cards on the
//! first board, the same on the second board, and the best five cards out of
//! the player cards alone. Each component is worth one point, split equally
//! among the players tied for the best value, and the player with the most
//! points wins the pot (or shares it on a tie).
//!
//! Unknown cards (player draws and missing board cards) are dealt at random
//! on every trial:
//!
//! ```
//! # use scoop_sim::*;
//! let request = SimRequest {
//!     num_players: Some(2),
//!     starting_cards: Some(2),
//!     total_draws: Some(0),
//!     num_trials: Some(1_000),
//!     player_hands: Some(vec![vec![51, 50], vec![47, 46]]),
//!     ..Default::default()
//! };
//!
//! let config = request.validate().unwrap();
//! let result = Simulation::new(&config).unwrap().run();
//! assert_eq!(result.trials, 1_000);
//!
//! let pot = result.pot_equity.iter().sum::<f64>();
//! assert_eq!(pot, 1_000.0);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]

pub mod config;
pub use config::{MAX_TRIALS, SimConfig, SimRequest};

pub mod engine;
pub use engine::{COMPONENTS, SimResult, Simulation};

pub mod error;
pub use error::{ErrorKind, SimError};
