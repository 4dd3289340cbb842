// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Poker hand evaluator.
//!
//! Five cards hands are ranked with a lookup table indexed by the hand ranks
//! sorted in descending order, every rank pattern maps to a score that
//! combines the hand category with a tiebreak value, flushes are detected
//! separately and promote the score to the flush or straight flush category.
//!
//! Larger hands are ranked by picking the best five cards with [best_of_n]
//! (any five cards) or [best_hole_board] (exactly two hole cards and three
//! board cards).

pub mod eval;
pub use eval::{HandRank, HandValue};

pub mod select;
pub use select::{best_hole_board, best_of_n};

pub mod table;
