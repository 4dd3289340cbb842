// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Rank patterns lookup table.
//!
//! The table is indexed by the base 13 value of five ranks sorted in
//! descending order and it stores `category * BASE + tiebreak` for every rank
//! pattern. It is built once on first use and it is read only afterwards.
use std::sync::LazyLock;

use super::HandRank;

/// The category multiplier, larger than any tiebreak value (13^5 - 1).
pub const BASE: u32 = 371_294;

/// The rank patterns table.
static TABLE: LazyLock<Box<[u32]>> = LazyLock::new(build);

/// Returns the base 13 index for five ranks.
#[inline]
pub fn index(ranks: [u8; 5]) -> usize {
    let [r0, r1, r2, r3, r4] = ranks.map(usize::from);
    r0 * 28_561 + r1 * 2_197 + r2 * 169 + r3 * 13 + r4
}

/// Returns the score for five ranks sorted in descending order.
#[inline]
pub fn lookup(ranks: [u8; 5]) -> u32 {
    TABLE[index(ranks)]
}

/// Builds the table if it hasn't been built yet.
pub fn warm_up() {
    LazyLock::force(&TABLE);
}

fn build() -> Box<[u32]> {
    let mut table = vec![0u32; BASE as usize].into_boxed_slice();

    for r0 in (0..13u8).rev() {
        for r1 in (0..=r0).rev() {
            for r2 in (0..=r1).rev() {
                for r3 in (0..=r2).rev() {
                    for r4 in (0..=r3).rev() {
                        let ranks = [r0, r1, r2, r3, r4];
                        table[index(ranks)] = score(ranks);
                    }
                }
            }
        }
    }

    table
}

/// Scores five ranks sorted in descending order ignoring suits.
fn score(ranks: [u8; 5]) -> u32 {
    let [r0, r1, r2, r3, r4] = ranks;

    if r0 > r1 && r1 > r2 && r2 > r3 && r3 > r4 {
        return if r0 - r4 == 4 {
            HandRank::Straight as u32 * BASE + r0 as u32
        } else if ranks == [12, 3, 2, 1, 0] {
            // The wheel ranks as a five high straight.
            HandRank::Straight as u32 * BASE + 3
        } else {
            // High card, or flush after the suits check.
            index(ranks) as u32
        };
    }

    // Group equal ranks as (count, rank), equal ranks are adjacent.
    let mut groups = [(0u8, 0u8); 5];
    let mut len = 0;
    for r in ranks {
        if len > 0 && groups[len - 1].1 == r {
            groups[len - 1].0 += 1;
        } else {
            groups[len] = (1, r);
            len += 1;
        }
    }

    let groups = &mut groups[..len];
    groups.sort_unstable_by(|a, b| b.cmp(a));

    let category = match (groups[0].0, groups.get(1).map_or(0, |g| g.0)) {
        // Five of a kind cannot be dealt from one deck.
        (5, _) => return 0,
        (4, _) => HandRank::FourOfAKind,
        (3, 2) => HandRank::FullHouse,
        (3, _) => HandRank::ThreeOfAKind,
        (2, 2) => HandRank::TwoPair,
        _ => HandRank::OnePair,
    };

    let tiebreak = groups.iter().fold(0, |acc, &(_, r)| acc * 13 + r as u32);
    category as u32 * BASE + tiebreak
}
