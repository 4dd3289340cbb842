// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation errors.
use scoop_eval::{Card, InvalidCard};
use thiserror::Error;

/// Errors detected before a simulation runs.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    /// Number of players out of range.
    #[error("Players must be between 2 and 5")]
    Players,
    /// Number of starting cards out of range.
    #[error("Starting cards must be between 1 and 14")]
    StartingCards,
    /// Number of draws out of range.
    #[error("Total draws must be between 0 and 15")]
    TotalDraws,
    /// Number of trials out of range.
    #[error("Trials must be at least 1")]
    Trials,
    /// The number of hands doesn't match the number of players.
    #[error("playerHands must match numPlayers")]
    HandsCount,
    /// A hand with the wrong number of cards, the player is 1 based.
    #[error("Player {player} must have exactly {expected} cards")]
    HandSize {
        /// The player number starting from 1.
        player: usize,
        /// The expected number of cards.
        expected: usize,
    },
    /// A known board with more than 5 cards, the board is 1 based.
    #[error("Board {board} can have at most 5 known cards")]
    BoardSize {
        /// The board number starting from 1.
        board: usize,
    },
    /// A card value outside the deck.
    #[error("Invalid card value {0}, must be between 0 and 51")]
    InvalidCard(i64),
    /// A card assigned to more than one hand or board.
    #[error("Card {0} is used more than once")]
    DuplicateCard(Card),
    /// Not enough unknown cards to deal every trial.
    #[error("Not enough cards: {needed} needed per trial but only {available} left in the deck")]
    NotEnoughCards {
        /// Cards dealt on every trial.
        needed: usize,
        /// Cards left after removing the known cards.
        available: usize,
    },
}

/// The class of a [SimError].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Malformed input.
    Input,
    /// Valid input that needs more cards than a deck has.
    Resources,
}

impl SimError {
    /// Returns the error class.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SimError::NotEnoughCards { .. } => ErrorKind::Resources,
            _ => ErrorKind::Input,
        }
    }
}

impl From<InvalidCard> for SimError {
    fn from(e: InvalidCard) -> Self {
        SimError::InvalidCard(e.0)
    }
}
