// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop cards types.
//!
//! This crate define types to create cards:
//!
//! ```
//! # use scoop_cards::{Card, Rank, Suit};
//! let ah = Card::new(Rank::Ace, Suit::Hearts);
//! let kd: Card = "KD".parse().unwrap();
//! assert_eq!(ah.id(), 50);
//! assert_eq!(kd.id(), 45);
//! ```
//!
//! Cards cross process boundaries as the integer returned by [Card::id], with
//! `rank = id >> 2` and `suit = id & 3`, and serialize to the same integer.
//!
//! The [Deck] type is used for shuffling, sampling, and iterating cards in the
//! deck. For example to iterate through all 5 cards hands:
//!
//! ```no_run
//! # use scoop_cards::Deck;
//! let mut counter = 0;
//! Deck::default().for_each(5, |hand| {
//!     counter += 1;
//! });
//! assert_eq!(counter, 2_598_960);
//! ```
//!
//! or to draw the first 10 cards of a partially shuffled deck:
//!
//! ```
//! # use scoop_cards::Deck;
//! let mut deck = Deck::default();
//! let cards = deck.partial_shuffle(10, &mut rand::rng());
//! assert_eq!(cards.len(), 10);
//! ```
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
mod deck;
pub use deck::{Card, Deck, InvalidCard, ParseCardError, Rank, Suit};
