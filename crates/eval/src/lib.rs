// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop poker hand evaluator.
//!
//! Five cards hands are ranked with a rank patterns lookup table built once
//! per process and shared read only by all evaluations. Larger hands are
//! ranked by enumerating five cards subsets, either any five cards with
//! [best_of_n] or exactly two hole cards and three board cards with
//! [best_hole_board].
//!
//! ```
//! # use scoop_eval::*;
//! let cards = "AH KH QH JH TH 2C 2D"
//!     .split_whitespace()
//!     .map(|c| c.parse::<Card>().unwrap())
//!     .collect::<Vec<_>>();
//!
//! let v1 = HandValue::eval(&cards[..5]);
//! let v2 = best_of_n(&cards);
//! assert_eq!(v1.rank(), HandRank::StraightFlush);
//! assert_eq!(v1, v2);
//!
//! let board = [cards[2], cards[3], cards[4], cards[5], cards[6]];
//! let v3 = best_hole_board(&cards[..2], &board);
//! assert_eq!(v3, v1);
//! ```
//!
//! The [XorShift] generator is the fast random source used to shuffle the
//! deck during simulations.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
pub mod eval;
pub use eval::{HandRank, HandValue, best_hole_board, best_of_n};

pub mod rng;
pub use rng::XorShift;

// Reexport cards types.
pub use scoop_cards::{Card, Deck, InvalidCard, ParseCardError, Rank, Suit};
