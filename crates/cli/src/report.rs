// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Simulation results table.
use std::fmt;

use scoop_eval::Card;
use scoop_sim::{COMPONENTS, SimResult};

const HEADERS: [&str; COMPONENTS] = ["Board 1", "Board 2", "Hole"];

/// Formats a simulation result, one row per player.
pub struct Report<'a> {
    hands: &'a [Vec<Card>],
    result: &'a SimResult,
}

impl<'a> Report<'a> {
    pub fn new(hands: &'a [Vec<Card>], result: &'a SimResult) -> Self {
        Self { hands, result }
    }
}

impl fmt::Display for Report<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let hand_width = self
            .hands
            .iter()
            .map(|h| 3 * h.len())
            .max()
            .unwrap_or(0)
            .max(4);

        write!(f, "{:<8}{:<hand_width$}", "Player", "Hand")?;
        for h in HEADERS {
            write!(f, "{h:>9}")?;
        }
        writeln!(f, "{:>9}{:>9}", "Equity", "Scoop")?;

        let res = self.result;
        for (player, hand) in self.hands.iter().enumerate() {
            let cards = hand
                .iter()
                .map(|c| c.to_string())
                .collect::<Vec<_>>()
                .join(" ");

            write!(f, "{:<8}{cards:<hand_width$}", player + 1)?;
            for c in 0..COMPONENTS {
                write!(f, "{:>8.2}%", 100.0 * res.component_share(player, c))?;
            }
            writeln!(
                f,
                "{:>8.2}%{:>8.2}%",
                100.0 * res.equity(player),
                100.0 * res.scoop_rate(player)
            )?;
        }

        writeln!(f, "{} trials", res.trials)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoop_eval::XorShift;
    use scoop_sim::{SimConfig, Simulation};

    #[test]
    fn report_rows() {
        let cards = |s: &str| {
            s.split_whitespace()
                .map(|c| c.parse::<Card>().unwrap())
                .collect::<Vec<_>>()
        };

        let hands = [cards("AH AD"), cards("7C 2D")];
        let config = SimConfig::new(&hands, 0, 100, &cards("AS AC KD"), &[]).unwrap();
        let result = Simulation::with_rng(&config, XorShift::default())
            .unwrap()
            .run();

        let text = Report::new(&hands, &result).to_string();
        let lines = text.lines().collect::<Vec<_>>();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].starts_with("Player"));
        assert!(lines[1].starts_with("1       AH AD"));
        assert!(lines[2].starts_with("2       7C 2D"));
        assert_eq!(lines[3], "100 trials");

        // Quad aces always win the first board.
        assert!(lines[1].contains("100.00%"));
    }
}
