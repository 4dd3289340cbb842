// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Monte Carlo simulation engine.
use log::debug;
use rand::RngCore;
use std::time::Instant;

use scoop_eval::{Card, Deck, HandValue, Rank, Suit, XorShift, best_hole_board, best_of_n};

use crate::{SimConfig, SimError, config::BOARD_SIZE};

/// The number of scoring components, first board, second board, and hole
/// cards only.
pub const COMPONENTS: usize = 3;

/// Shares are also counted in 1/60 units, 60 is divisible by any number of
/// winners up to 5, so trial totals compare exactly.
const SHARE_UNITS: u32 = 60;

/// The accumulated results of a simulation.
#[derive(Debug, Clone, PartialEq)]
pub struct SimResult {
    /// The number of trials that were run.
    pub trials: u32,
    /// The number of players.
    pub num_players: usize,
    /// The points won by each player in each component.
    pub points: Vec<[f64; COMPONENTS]>,
    /// The pot share won by each player.
    pub pot_equity: Vec<f64>,
    /// The number of trials each player won the whole pot.
    pub scoops: Vec<u32>,
}

impl SimResult {
    fn new(num_players: usize) -> Self {
        Self {
            trials: 0,
            num_players,
            points: vec![[0.0; COMPONENTS]; num_players],
            pot_equity: vec![0.0; num_players],
            scoops: vec![0; num_players],
        }
    }

    /// The average pot share for a player.
    pub fn equity(&self, player: usize) -> f64 {
        self.per_trial(self.pot_equity[player])
    }

    /// The fraction of trials a player won the whole pot.
    pub fn scoop_rate(&self, player: usize) -> f64 {
        self.per_trial(self.scoops[player] as f64)
    }

    /// The average share of a component for a player.
    pub fn component_share(&self, player: usize, component: usize) -> f64 {
        self.per_trial(self.points[player][component])
    }

    fn per_trial(&self, value: f64) -> f64 {
        if self.trials == 0 {
            0.0
        } else {
            value / self.trials as f64
        }
    }
}

/// A simulation ready to run.
///
/// All buffers are allocated when the simulation is created and reused by
/// every trial.
#[derive(Debug)]
pub struct Simulation<R = XorShift> {
    /// Each player known cards followed by the cards drawn on a trial.
    hands: Vec<Vec<Card>>,
    /// Number of known cards in each hand.
    starting_cards: usize,
    /// The two boards, known cards first.
    boards: [[Card; BOARD_SIZE]; 2],
    /// Number of known cards on each board.
    known: [usize; 2],
    /// The cards not assigned to any hand or board.
    deck: Deck,
    /// Cards dealt on every trial.
    cards_needed: usize,
    num_trials: u32,
    /// Per trial values for each component and player.
    values: [Vec<HandValue>; COMPONENTS],
    /// Per trial points for each player in share units.
    units: Vec<u32>,
    rng: R,
}

impl Simulation<XorShift> {
    /// Creates a simulation seeded from the wall clock.
    pub fn new(config: &SimConfig) -> Result<Self, SimError> {
        Self::with_rng(config, XorShift::from_clock())
    }
}

impl<R: RngCore> Simulation<R> {
    /// Creates a simulation that shuffles with the given generator.
    ///
    /// Fails if a card is assigned more than once or if there are not enough
    /// cards left to deal every trial.
    pub fn with_rng(config: &SimConfig, rng: R) -> Result<Self, SimError> {
        let mut used = 0u64;
        let mut deck = Deck::default();
        for card in config.known_cards() {
            let bit = 1u64 << card.id();
            if used & bit != 0 {
                return Err(SimError::DuplicateCard(card));
            }

            used |= bit;
            deck.remove(card);
        }

        let num_players = config.num_players();
        let known = [config.board(0).len(), config.board(1).len()];
        let cards_needed =
            num_players * config.total_draws() + (BOARD_SIZE - known[0]) + (BOARD_SIZE - known[1]);

        if cards_needed > deck.count() {
            return Err(SimError::NotEnoughCards {
                needed: cards_needed,
                available: deck.count(),
            });
        }

        // Placeholder for the slots overwritten on each trial.
        let blank = Card::new(Rank::Deuce, Suit::Clubs);

        let hand_size = config.starting_cards() + config.total_draws();
        let hands = config
            .hands()
            .iter()
            .map(|known| {
                let mut hand = vec![blank; hand_size];
                hand[..known.len()].copy_from_slice(known);
                hand
            })
            .collect();

        let mut boards = [[blank; BOARD_SIZE]; 2];
        for (idx, board) in boards.iter_mut().enumerate() {
            board[..known[idx]].copy_from_slice(config.board(idx));
        }

        debug!(
            "Simulation with {num_players} players, {hand_size} cards per hand, {cards_needed} \
             cards dealt per trial from {} unknown cards",
            deck.count()
        );

        Ok(Self {
            hands,
            starting_cards: config.starting_cards(),
            boards,
            known,
            deck,
            cards_needed,
            num_trials: config.num_trials(),
            values: std::array::from_fn(|_| vec![HandValue::NONE; num_players]),
            units: vec![0; num_players],
            rng,
        })
    }

    /// Runs all trials and returns the accumulated results.
    pub fn run(mut self) -> SimResult {
        let now = Instant::now();
        let mut result = SimResult::new(self.hands.len());

        for _ in 0..self.num_trials {
            self.deal();
            self.score(&mut result);
        }

        result.trials = self.num_trials;

        debug!(
            "Completed {} trials in {:.3}s",
            result.trials,
            now.elapsed().as_secs_f64()
        );

        result
    }

    /// Deals random cards to the players draws and the unknown board cards.
    fn deal(&mut self) {
        let mut dealt = self
            .deck
            .partial_shuffle(self.cards_needed, &mut self.rng)
            .iter()
            .copied();

        // Players first, then the first board, then the second board.
        for hand in &mut self.hands {
            for (slot, card) in hand[self.starting_cards..].iter_mut().zip(&mut dealt) {
                *slot = card;
            }
        }

        for (board, known) in self.boards.iter_mut().zip(self.known) {
            for (slot, card) in board[known..].iter_mut().zip(&mut dealt) {
                *slot = card;
            }
        }
    }

    /// Scores the current deal and adds the shares to the result.
    fn score(&mut self, result: &mut SimResult) {
        for (p, hand) in self.hands.iter().enumerate() {
            self.values[0][p] = best_hole_board(hand, &self.boards[0]);
            self.values[1][p] = best_hole_board(hand, &self.boards[1]);
            self.values[2][p] = best_of_n(hand);
        }

        self.units.fill(0);

        for (component, values) in self.values.iter().enumerate() {
            let best = values.iter().copied().max().unwrap_or_default();
            let winners = values.iter().filter(|&&v| v == best).count();
            let share = 1.0 / winners as f64;
            let units = SHARE_UNITS / winners as u32;

            for (p, &v) in values.iter().enumerate() {
                if v == best {
                    result.points[p][component] += share;
                    self.units[p] += units;
                }
            }
        }

        let best = self.units.iter().copied().max().unwrap_or_default();
        let winners = self.units.iter().filter(|&&u| u == best).count();
        let share = 1.0 / winners as f64;

        for (p, &u) in self.units.iter().enumerate() {
            if u == best {
                result.pot_equity[p] += share;
                if winners == 1 {
                    result.scoops[p] += 1;
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::SimRequest;

    fn cards(s: &str) -> Vec<Card> {
        s.split_whitespace()
            .map(|c| c.parse::<Card>().unwrap())
            .collect()
    }

    fn config(hands: &[&str], draws: usize, trials: u32, b1: &str, b2: &str) -> SimConfig {
        let hands = hands.iter().map(|h| cards(h)).collect::<Vec<_>>();
        SimConfig::new(&hands, draws, trials, &cards(b1), &cards(b2)).unwrap()
    }

    fn simulation(config: &SimConfig) -> Simulation<XorShift> {
        Simulation::with_rng(config, XorShift::new(0xC0FFEE, 0xBADF00D)).unwrap()
    }

    #[test]
    fn fixed_deal_split_pot() {
        // Aces win the first board, kings make trips on the second board, two
        // cards hands can't make a five cards hand so the last component ties.
        let config = config(
            &["AH AD", "KH KD"],
            0,
            10,
            "2C 7D 9S JC 4H",
            "KC 8D 3S 5C 6H",
        );

        let result = simulation(&config).run();
        assert_eq!(result.trials, 10);
        assert_eq!(result.points[0], [10.0, 0.0, 5.0]);
        assert_eq!(result.points[1], [0.0, 10.0, 5.0]);
        assert_eq!(result.pot_equity, [5.0, 5.0]);
        assert_eq!(result.scoops, [0, 0]);
    }

    #[test]
    fn fixed_deal_scoop() {
        let config = config(
            &["AH AD", "KH KD"],
            0,
            10,
            "2C 7D 9S JC 4H",
            "AC 8D 3S 5C 6H",
        );

        let result = simulation(&config).run();
        assert_eq!(result.points[0], [10.0, 10.0, 5.0]);
        assert_eq!(result.points[1], [0.0, 0.0, 5.0]);
        assert_eq!(result.pot_equity, [10.0, 0.0]);
        assert_eq!(result.scoops, [10, 0]);
        assert_eq!(result.equity(0), 1.0);
        assert_eq!(result.scoop_rate(1), 0.0);
        assert_eq!(result.component_share(1, 2), 0.5);
    }

    #[test]
    fn three_way_tie_on_totals() {
        // Nines straight wins the first board, kings trips the second board,
        // aces trips the hole cards component, all totals are one point.
        let config = config(
            &["AH AD AS 4D 5H", "KH KD 2C 2D 4S", "QH QD 9C 8D 7S"],
            0,
            1,
            "AC 8H 3S 5C 6H",
            "KC JH 3D 5S 6C",
        );

        let result = simulation(&config).run();
        assert_eq!(result.points, [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0], [1.0, 0.0, 0.0]]);
        assert_eq!(result.pot_equity, [1.0 / 3.0; 3]);
        assert_eq!(result.scoops, [0, 0, 0]);
    }

    #[test]
    fn equity_conserved_every_trial() {
        let config = config(&["AH KH", "QS QD", "7C 8C", "2D 2S"], 3, 1, "", "TD");

        let mut sim = simulation(&config);
        let mut result = SimResult::new(4);

        for trial in 1..=2_000 {
            let before = result.clone();
            sim.deal();
            sim.score(&mut result);

            for c in 0..COMPONENTS {
                let delta = (0..4)
                    .map(|p| result.points[p][c] - before.points[p][c])
                    .sum::<f64>();
                assert!((delta - 1.0).abs() < 1e-9, "trial {trial} component {c}");
            }

            let delta = (0..4)
                .map(|p| result.pot_equity[p] - before.pot_equity[p])
                .sum::<f64>();
            assert!((delta - 1.0).abs() < 1e-9, "trial {trial}");

            let scoops = result.scoops.iter().sum::<u32>() - before.scoops.iter().sum::<u32>();
            assert!(scoops <= 1);
        }

        assert!(result.scoops.iter().sum::<u32>() <= 2_000);
    }

    #[test]
    fn deal_keeps_cards_disjoint() {
        let config = config(&["AH KH 3C", "QS QD 4C"], 4, 1, "2S 3S", "");
        let mut sim = simulation(&config);

        for _ in 0..500 {
            sim.deal();

            let mut seen = 0u64;
            let all = sim.hands.iter().flatten().chain(sim.boards.iter().flatten());
            for card in all {
                let bit = 1u64 << card.id();
                assert_eq!(seen & bit, 0, "{card} dealt twice");
                seen |= bit;
            }

            assert_eq!(seen.count_ones(), 2 * 7 + 10);

            // Known cards never move.
            assert_eq!(sim.hands[0][..3], cards("AH KH 3C"));
            assert_eq!(sim.hands[1][..3], cards("QS QD 4C"));
            assert_eq!(sim.boards[0][..2], cards("2S 3S"));
        }
    }

    #[test]
    fn two_boards_end_to_end() {
        // Full first board, unknown second board.
        let request = SimRequest {
            player_hands: Some(vec![vec![51, 50], vec![3, 7]]),
            num_players: Some(2),
            starting_cards: Some(2),
            total_draws: Some(0),
            num_trials: Some(1_000),
            known_board1: Some(vec![10, 20, 30, 40, 44]),
            known_board2: None,
        };

        let config = request.validate().unwrap();
        let sim = Simulation::new(&config).unwrap();
        assert_eq!(sim.cards_needed, 5);

        let result = sim.run();
        assert_eq!(result.trials, 1_000);
        assert_eq!(result.num_players, 2);

        for c in 0..COMPONENTS {
            let sum = result.points.iter().map(|p| p[c]).sum::<f64>();
            assert_eq!(sum, 1_000.0);
        }

        assert_eq!(result.pot_equity.iter().sum::<f64>(), 1_000.0);
        assert!(result.scoops.iter().sum::<u32>() <= 1_000);
    }

    #[test]
    fn aces_beat_deuces() {
        let config = config(&["AH AD", "2C 7D"], 0, 20_000, "", "");
        let result = Simulation::new(&config).unwrap().run();

        // Aces win each board around 87% of the times.
        let share = result.component_share(0, 0);
        assert!(share > 0.8 && share < 0.95, "{share}");
        assert!(result.equity(0) > 0.8);
    }

    #[test]
    fn duplicate_cards() {
        let hands = [cards("AH AD"), cards("AH 7D")];
        let config = SimConfig::new(&hands, 0, 10, &[], &[]).unwrap();
        let err = Simulation::new(&config).unwrap_err();
        assert_eq!(err, SimError::DuplicateCard("AH".parse().unwrap()));

        let hands = [cards("AH AD"), cards("KH 7D")];
        let config = SimConfig::new(&hands, 0, 10, &cards("7D"), &[]).unwrap();
        assert!(matches!(
            Simulation::new(&config),
            Err(SimError::DuplicateCard(_))
        ));
    }

    #[test]
    fn not_enough_cards() {
        let hands = ["AH AD", "KH KD", "QH QD", "JH JD", "TH TD"]
            .iter()
            .map(|h| cards(h))
            .collect::<Vec<_>>();

        let config = SimConfig::new(&hands, 15, 10, &[], &[]).unwrap();
        let err = Simulation::new(&config).unwrap_err();
        assert_eq!(
            err,
            SimError::NotEnoughCards {
                needed: 85,
                available: 42
            }
        );
        assert_eq!(err.kind(), crate::ErrorKind::Resources);

        // Three players with 12 draws use all 46 unknown cards.
        let config = SimConfig::new(&hands[..3], 12, 10, &[], &[]).unwrap();
        let result = Simulation::new(&config).unwrap().run();
        assert_eq!(result.trials, 10);

        let config = SimConfig::new(&hands[..3], 13, 10, &[], &[]).unwrap();
        let err = Simulation::new(&config).unwrap_err();
        assert_eq!(err.kind(), crate::ErrorKind::Resources);
    }
}
