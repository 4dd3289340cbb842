// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation request and validated configuration.
use serde::Deserialize;
use std::ops::RangeInclusive;

use scoop_eval::Card;

use crate::SimError;

/// Trials above this value are capped to bound the request latency.
pub const MAX_TRIALS: u32 = 100_000;

const PLAYERS: RangeInclusive<i64> = 2..=5;
const STARTING_CARDS: RangeInclusive<i64> = 1..=14;
const TOTAL_DRAWS: RangeInclusive<i64> = 0..=15;

/// Number of cards on a full board.
pub const BOARD_SIZE: usize = 5;

/// A simulation request as received from a client.
///
/// Fields are optional and integers are signed so that any well formed JSON
/// body deserializes and is rejected by [SimRequest::validate] with a message
/// describing the offending field.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SimRequest {
    /// The known cards for each player.
    pub player_hands: Option<Vec<Vec<i64>>>,
    /// The number of players.
    pub num_players: Option<i64>,
    /// The number of known cards per player.
    pub starting_cards: Option<i64>,
    /// The number of cards each player draws on every trial.
    pub total_draws: Option<i64>,
    /// The number of trials.
    pub num_trials: Option<i64>,
    /// The known cards on the first board.
    pub known_board1: Option<Vec<i64>>,
    /// The known cards on the second board.
    pub known_board2: Option<Vec<i64>>,
}

/// A validated simulation configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimConfig {
    hands: Vec<Vec<Card>>,
    starting_cards: usize,
    total_draws: usize,
    num_trials: u32,
    boards: [Vec<Card>; 2],
}

impl SimRequest {
    /// Validates this request capping trials to [MAX_TRIALS].
    pub fn validate(&self) -> Result<SimConfig, SimError> {
        self.validate_with_cap(MAX_TRIALS)
    }

    /// Validates this request capping trials to `max_trials`.
    pub fn validate_with_cap(&self, max_trials: u32) -> Result<SimConfig, SimError> {
        let num_players = in_range(self.num_players, PLAYERS, SimError::Players)?;
        let starting_cards = in_range(self.starting_cards, STARTING_CARDS, SimError::StartingCards)?;
        let total_draws = in_range(self.total_draws, TOTAL_DRAWS, SimError::TotalDraws)?;

        let num_trials = match self.num_trials {
            Some(n) if n >= 1 => n.min(max_trials.max(1) as i64) as u32,
            _ => return Err(SimError::Trials),
        };

        let hands = match &self.player_hands {
            Some(hands) if hands.len() == num_players => hands,
            _ => return Err(SimError::HandsCount),
        };

        if let Some(player) = hands.iter().position(|h| h.len() != starting_cards) {
            return Err(SimError::HandSize {
                player: player + 1,
                expected: starting_cards,
            });
        }

        let mut boards = [Vec::new(), Vec::new()];
        for (idx, known) in [&self.known_board1, &self.known_board2].into_iter().enumerate() {
            let known = known.as_deref().unwrap_or_default();
            if known.len() > BOARD_SIZE {
                return Err(SimError::BoardSize { board: idx + 1 });
            }

            boards[idx] = to_cards(known)?;
        }

        let hands = hands
            .iter()
            .map(|h| to_cards(h))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SimConfig {
            hands,
            starting_cards,
            total_draws,
            num_trials,
            boards,
        })
    }
}

impl SimConfig {
    /// Creates a configuration from typed cards.
    ///
    /// Applies the same checks as [SimRequest::validate], the number of
    /// players and starting cards are taken from the hands.
    pub fn new(
        hands: &[Vec<Card>],
        total_draws: usize,
        num_trials: u32,
        board1: &[Card],
        board2: &[Card],
    ) -> Result<Self, SimError> {
        let ids = |cards: &[Card]| cards.iter().map(|c| c.id() as i64).collect::<Vec<_>>();

        SimRequest {
            player_hands: Some(hands.iter().map(|h| ids(h)).collect()),
            num_players: Some(hands.len() as i64),
            starting_cards: Some(hands.first().map_or(0, |h| h.len() as i64)),
            total_draws: Some(total_draws as i64),
            num_trials: Some(num_trials as i64),
            known_board1: Some(ids(board1)),
            known_board2: Some(ids(board2)),
        }
        .validate()
    }

    /// The players known cards.
    pub fn hands(&self) -> &[Vec<Card>] {
        &self.hands
    }

    /// The number of players.
    pub fn num_players(&self) -> usize {
        self.hands.len()
    }

    /// The number of known cards per player.
    pub fn starting_cards(&self) -> usize {
        self.starting_cards
    }

    /// The number of cards each player draws on every trial.
    pub fn total_draws(&self) -> usize {
        self.total_draws
    }

    /// The number of trials to run.
    pub fn num_trials(&self) -> u32 {
        self.num_trials
    }

    /// The known cards for a board, `board` is 0 or 1.
    pub fn board(&self, board: usize) -> &[Card] {
        &self.boards[board]
    }

    /// Iterates all known cards, players hands first.
    pub fn known_cards(&self) -> impl Iterator<Item = Card> + '_ {
        self.hands
            .iter()
            .flatten()
            .chain(self.boards.iter().flatten())
            .copied()
    }
}

fn in_range(
    value: Option<i64>,
    range: RangeInclusive<i64>,
    err: SimError,
) -> Result<usize, SimError> {
    match value {
        Some(v) if range.contains(&v) => Ok(v as usize),
        _ => Err(err),
    }
}

fn to_cards(ids: &[i64]) -> Result<Vec<Card>, SimError> {
    ids.iter()
        .map(|&id| Card::try_from(id).map_err(SimError::from))
        .collect()
}
