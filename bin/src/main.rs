//! Ronda CLI binary.
//!
//! Provides command-line interface for the Ronda scoring pipeline.

mod cmd;
mod data;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::process;

#[derive(Parser)]
#[command(name = "ronda")]
#[command(about = "Composite factor scoring for equity universes", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List available models
    Models {
        /// Show detailed information
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rank a universe of symbols
    Rank {
        /// Model name
        #[arg(short, long, default_value = "quality_momentum")]
        model: String,

        /// Ticker symbols (defaults to the built-in universe)
        #[arg(short, long, value_delimiter = ',')]
        symbols: Vec<String>,

        /// Trading days of history to request
        #[arg(short, long, default_value = "504")]
        lookback: usize,

        /// Output format (text, csv, or json)
        #[arg(short, long, default_value = "text")]
        format: String,

        /// Write the report to a file instead of stdout
        #[arg(short, long)]
        output: Option<String>,

        /// Rows to show in the text report
        #[arg(short, long, default_value = "15")]
        top: usize,
    },

    /// Score a single symbol
    Score {
        /// Ticker symbol
        symbol: String,

        /// Model name
        #[arg(short, long, default_value = "quality_momentum")]
        model: String,

        /// Trading days of history to request
        #[arg(short, long, default_value = "504")]
        lookback: usize,
    },

    /// Show raw features for a symbol
    Features {
        /// Ticker symbol
        symbol: String,

        /// Trading days of history to request
        #[arg(short, long, default_value = "504")]
        lookback: usize,
    },
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

async fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Models { verbose } => {
            cmd::models::list_models(verbose);
        }
        Commands::Rank {
            model,
            symbols,
            lookback,
            format,
            output,
            top,
        } => {
            cmd::rank::run_ranking(&model, &symbols, lookback, &format, output.as_deref(), top)
                .await?;
        }
        Commands::Score {
            symbol,
            model,
            lookback,
        } => {
            cmd::score::show_score(&symbol, &model, lookback).await?;
        }
        Commands::Features { symbol, lookback } => {
            cmd::features::show_features(&symbol, lookback).await?;
        }
    }

    Ok(())
}
