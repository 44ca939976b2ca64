//! Market Today CLI
//!
//! Builds option chains for the configured indices and prints the JSON
//! response envelope to stdout. Logs go to stderr.
//!
//! Usage: market-today [--offline] [--config <path>] [--seed <u64>]

use std::process::ExitCode;

use chrono::Utc;
use market_today::prelude::*;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

const USAGE: &str = "Usage: market-today [--offline] [--config <path>] [--seed <u64>]";

struct Args {
    offline: bool,
    config: Option<String>,
    seed: Option<u64>,
}

fn parse_args() -> Result<Args, String> {
    let mut args = Args {
        offline: false,
        config: None,
        seed: None,
    };

    let mut iter = std::env::args().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--offline" => args.offline = true,
            "--config" => {
                args.config = Some(iter.next().ok_or("--config needs a path")?);
            }
            "--seed" => {
                let value = iter.next().ok_or("--seed needs a value")?;
                args.seed = Some(value.parse().map_err(|_| format!("invalid seed: {}", value))?);
            }
            other => return Err(format!("unknown argument: {}", other)),
        }
    }

    Ok(args)
}

fn run(args: Args) -> MarketResult<ChainResponse> {
    let config = match &args.config {
        Some(path) => MarketConfig::from_file(path)?,
        None => MarketConfig::default(),
    };

    let mut rng = match args.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };

    let today = Utc::now().date_naive();

    let response = if args.offline {
        OptionsDesk::new(config, MockQuoteSource::nse_snapshot()).chains(today, &mut rng)
    } else {
        OptionsDesk::new(config, YahooClient::new()).chains(today, &mut rng)
    };

    Ok(response)
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match parse_args() {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", e);
            eprintln!("{}", USAGE);
            return ExitCode::from(2);
        }
    };

    let response = run(args).unwrap_or_else(|e| {
        tracing::error!("Error generating options: {}", e);
        ChainResponse::failure("Failed to generate options")
    });

    match serde_json::to_string_pretty(&response) {
        Ok(json) => println!("{}", json),
        Err(e) => {
            eprintln!("Failed to serialize response: {}", e);
            return ExitCode::FAILURE;
        }
    }

    if response.success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
