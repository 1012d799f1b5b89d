//! Command-line argument definitions.

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "yacht",
    version,
    about = "Score dice hands against the yacht categories"
)]
pub struct YachtCli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Roll hands and show their CHANCE score and best category
    Roll {
        #[arg(long)]
        seed: Option<u64>,
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..=10_000))]
        count: u32,
        /// Print one JSON object per hand
        #[arg(long)]
        json: bool,
    },
    /// Score a hand in one category, or in every category
    Score {
        /// Face values, e.g. 1,2,3,4,5
        #[arg(long, allow_hyphen_values = true)]
        dice: String,
        /// Category name, e.g. FULL_HOUSE (case-insensitive)
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        json: bool,
    },
    /// Find the highest scoring category for a hand
    Best {
        /// Face values, e.g. 1,2,3,4,5
        #[arg(long, allow_hyphen_values = true)]
        dice: String,
        #[arg(long)]
        json: bool,
    },
    /// Run the built-in scoring checks
    Check,
    /// Display the resolved configuration and where each value came from
    Cfg,
}
