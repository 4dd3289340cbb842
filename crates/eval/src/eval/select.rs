// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Best five cards selection.
use crate::Card;

use super::HandValue;

/// The 10 ways to pick three of the five board positions.
const BOARD_TRIPLES: [[usize; 3]; 10] = [
    [0, 1, 2],
    [0, 1, 3],
    [0, 1, 4],
    [0, 2, 3],
    [0, 2, 4],
    [0, 3, 4],
    [1, 2, 3],
    [1, 2, 4],
    [1, 3, 4],
    [2, 3, 4],
];

/// Returns the best value of any five cards out of the given cards.
///
/// Returns [HandValue::NONE] if there are less than 5 cards.
pub fn best_of_n(cards: &[Card]) -> HandValue {
    let n = cards.len();
    let mut best = HandValue::NONE;

    for a in 0..n {
        for b in (a + 1)..n {
            for c in (b + 1)..n {
                for d in (c + 1)..n {
                    for e in (d + 1)..n {
                        let v = HandValue::eval5(cards[a], cards[b], cards[c], cards[d], cards[e]);
                        best = best.max(v);
                    }
                }
            }
        }
    }

    best
}

/// Returns the best value using exactly two of the hole cards and exactly
/// three of the board cards.
///
/// Returns [HandValue::NONE] if there are less than 2 hole cards.
pub fn best_hole_board(hole: &[Card], board: &[Card; 5]) -> HandValue {
    let n = hole.len();
    let mut best = HandValue::NONE;

    for a in 0..n {
        for b in (a + 1)..n {
            let (h0, h1) = (hole[a], hole[b]);
            for [i, j, k] in BOARD_TRIPLES {
                let v = HandValue::eval5(h0, h1, board[i], board[j], board[k]);
                best = best.max(v);
            }
        }
    }

    best
}
