// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Five cards hand value.
use crate::Card;

use super::table::{self, BASE};

/// The hand category, from the weakest to the strongest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HandRank {
    /// High card.
    HighCard = 0,
    /// One pair.
    OnePair,
    /// Two pair.
    TwoPair,
    /// Three of a kind.
    ThreeOfAKind,
    /// Straight.
    Straight,
    /// Flush.
    Flush,
    /// Full house.
    FullHouse,
    /// Four of a kind.
    FourOfAKind,
    /// Straight flush.
    StraightFlush,
}

/// The value of a five cards hand, a higher value beats a lower one and equal
/// values are a tie.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HandValue(u32);

impl HandValue {
    /// The value below every hand, used when no five cards hand can be made.
    pub const NONE: HandValue = HandValue(0);

    /// Evaluates a five cards hand.
    ///
    /// Panics if the number of cards is not 5.
    pub fn eval(cards: &[Card]) -> Self {
        match cards {
            &[c0, c1, c2, c3, c4] => Self::eval5(c0, c1, c2, c3, c4),
            _ => panic!("Expected 5 cards got {}", cards.len()),
        }
    }

    /// Evaluates five cards.
    #[inline]
    pub fn eval5(c0: Card, c1: Card, c2: Card, c3: Card, c4: Card) -> Self {
        let mut r = [
            c0.rank_bits(),
            c1.rank_bits(),
            c2.rank_bits(),
            c3.rank_bits(),
            c4.rank_bits(),
        ];

        // Optimal sorting network for 5 elements, descending order.
        sort_pair(&mut r, 0, 3);
        sort_pair(&mut r, 1, 4);
        sort_pair(&mut r, 0, 2);
        sort_pair(&mut r, 1, 3);
        sort_pair(&mut r, 0, 1);
        sort_pair(&mut r, 2, 4);
        sort_pair(&mut r, 1, 2);
        sort_pair(&mut r, 3, 4);
        sort_pair(&mut r, 2, 3);

        let mut value = table::lookup(r);

        // Only five distinct ranks can be a flush.
        if r[0] > r[1] && r[1] > r[2] && r[2] > r[3] && r[3] > r[4] {
            let s = c0.suit_bits();
            if s == c1.suit_bits()
                && s == c2.suit_bits()
                && s == c3.suit_bits()
                && s == c4.suit_bits()
            {
                value += if value >= HandRank::Straight as u32 * BASE {
                    // Straight to straight flush.
                    4 * BASE
                } else {
                    // High card to flush.
                    HandRank::Flush as u32 * BASE
                };
            }
        }

        Self(value)
    }

    /// Returns the hand category.
    pub fn rank(&self) -> HandRank {
        match self.0 / BASE {
            0 => HandRank::HighCard,
            1 => HandRank::OnePair,
            2 => HandRank::TwoPair,
            3 => HandRank::ThreeOfAKind,
            4 => HandRank::Straight,
            5 => HandRank::Flush,
            6 => HandRank::FullHouse,
            7 => HandRank::FourOfAKind,
            _ => HandRank::StraightFlush,
        }
    }

    /// Returns the raw value.
    pub fn value(&self) -> u32 {
        self.0
    }
}

#[inline(always)]
fn sort_pair(r: &mut [u8; 5], i: usize, j: usize) {
    if r[i] < r[j] {
        r.swap(i, j);
    }
}
