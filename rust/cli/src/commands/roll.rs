//! Roll command handler.
//!
//! Rolls hands with the configured rules and prints, for each one, the hand,
//! its CHANCE score and its best category. The seed comes from `--seed`, then
//! the configuration, then a random draw.

use crate::config::Config;
use crate::error::CliError;
use std::io::Write;
use tracing::info;
use yacht_engine::category::Category;
use yacht_engine::roller::DiceRoller;
use yacht_engine::scoring::Evaluator;

pub fn handle_roll_command(
    seed: Option<u64>,
    count: u32,
    json: bool,
    config: &Config,
    out: &mut dyn Write,
) -> Result<(), CliError> {
    let base_seed = seed.or(config.seed).unwrap_or_else(rand::random);
    info!(seed = base_seed, count, "rolling hands");

    let rules = config.rules();
    let mut roller = DiceRoller::new_with_seed(base_seed, rules)?;
    let evaluator = Evaluator::new(rules);

    for _ in 0..count {
        let hand = roller.roll();
        let chance = evaluator.evaluate(&hand, Category::Chance);
        let best = evaluator.best_category(&hand);
        if json {
            let line = serde_json::json!({
                "hand": hand,
                "chance": chance.score,
                "best": best,
            });
            writeln!(out, "{}", line)?;
        } else {
            writeln!(out, "Rolls: {}", hand)?;
            writeln!(
                out,
                "Score for {} category was {}",
                chance.category, chance.score
            )?;
            writeln!(
                out,
                "Highest scoring category was {} with {}",
                best.category, best.score
            )?;
        }
    }
    Ok(())
}
