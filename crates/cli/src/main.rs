// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Scoop equity calculator command line.
#![warn(clippy::all, rust_2018_idioms, missing_docs)]
use anyhow::{Result, anyhow};
use clap::Parser;
use log::{error, info};

use scoop_eval::{Card, XorShift};
use scoop_sim::{SimConfig, Simulation};

mod report;

#[derive(Debug, Parser)]
struct Cli {
    /// A player known cards, e.g. "AH KH 7D 2C", repeat for each player.
    #[clap(long = "hand", short = 'H', required = true)]
    hands: Vec<String>,
    /// The known cards on the first board.
    #[clap(long, default_value = "")]
    board1: String,
    /// The known cards on the second board.
    #[clap(long, default_value = "")]
    board2: String,
    /// The number of cards each player draws.
    #[clap(long, short, default_value_t = 0)]
    draws: usize,
    /// The number of trials.
    #[clap(long, short, default_value_t = 10_000)]
    trials: u32,
    /// Seed for a reproducible run.
    #[clap(long)]
    seed: Option<u64>,
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    if let Err(e) = run(Cli::parse()) {
        error!("{e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let hands = cli
        .hands
        .iter()
        .map(|h| parse_cards(h))
        .collect::<Result<Vec<_>>>()?;
    let board1 = parse_cards(&cli.board1)?;
    let board2 = parse_cards(&cli.board2)?;

    let config = SimConfig::new(&hands, cli.draws, cli.trials, &board1, &board2)?;
    info!(
        "Running {} trials for {} players",
        config.num_trials(),
        config.num_players()
    );

    let result = match cli.seed {
        Some(seed) => {
            let rng = XorShift::new(seed as u32, (seed >> 32) as u32);
            Simulation::with_rng(&config, rng)?.run()
        }
        None => Simulation::new(&config)?.run(),
    };

    print!("{}", report::Report::new(&hands, &result));
    Ok(())
}

/// Parses cards separated by spaces or commas.
fn parse_cards(s: &str) -> Result<Vec<Card>> {
    s.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|c| !c.is_empty())
        .map(|c| c.parse::<Card>().map_err(|e| anyhow!("{e}")))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_card_lists() {
        let cards = parse_cards("AH kh, 7d  2C").unwrap();
        assert_eq!(
            cards.iter().map(|c| c.to_string()).collect::<Vec<_>>(),
            ["AH", "KH", "7D", "2C"]
        );

        assert!(parse_cards("").unwrap().is_empty());
        assert!(parse_cards("AH 1X").is_err());
    }

    #[test]
    fn cli_args() {
        let cli = Cli::try_parse_from([
            "scoop", "-H", "AH KH", "--hand", "QS QD", "--board1", "2C 7D 9H", "-d", "1",
            "--trials", "50", "--seed", "7",
        ])
        .unwrap();

        assert_eq!(cli.hands, ["AH KH", "QS QD"]);
        assert_eq!(cli.draws, 1);
        assert_eq!(cli.trials, 50);
        assert!(run(cli).is_ok());

        assert!(Cli::try_parse_from(["scoop"]).is_err());
    }

    #[test]
    fn invalid_input() {
        let cli = Cli::try_parse_from(["scoop", "-H", "AH KH"]).unwrap();
        let err = run(cli).unwrap_err();
        assert_eq!(err.to_string(), "Players must be between 2 and 5");

        let cli = Cli::try_parse_from(["scoop", "-H", "AH KH", "-H", "AH QD"]).unwrap();
        assert!(run(cli).is_err());
    }
}
