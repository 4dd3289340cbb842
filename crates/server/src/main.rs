// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
use clap::Parser;
use log::error;
use std::path::PathBuf;

use scoop_server::{OpenAccess, StaticAccess, server};

#[derive(Debug, Parser)]
struct Cli {
    /// The server listening address.
    #[clap(long, short, default_value = "127.0.0.1")]
    address: String,
    /// The server listening port.
    #[clap(long, short, default_value_t = 9872)]
    port: u16,
    /// Trials above this value are capped.
    #[clap(long, default_value_t = scoop_sim::MAX_TRIALS,
           value_parser = clap::value_parser!(u32).range(1..=scoop_sim::MAX_TRIALS as i64))]
    max_trials: u32,
    /// JSON file with the accepted tokens and the subscribers.
    #[clap(long, required_unless_present = "open", conflicts_with = "open")]
    access: Option<PathBuf>,
    /// Accept any bearer token as an active subscriber.
    #[clap(long)]
    open: bool,
}

#[tokio::main]
async fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let config = server::Config {
        address: cli.address,
        port: cli.port,
        max_trials: cli.max_trials,
    };

    let res = match cli.access {
        Some(path) => match StaticAccess::load(&path) {
            Ok(gate) => server::run(config, gate).await,
            Err(e) => Err(e),
        },
        None => server::run(config, OpenAccess).await,
    };

    if let Err(e) = res {
        error!("{e}");
    }
}
