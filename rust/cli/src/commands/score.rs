//! Score command handler.
//!
//! With `--category` prints the score for that category; without it prints
//! the full score card in canonical order.

use crate::config::Config;
use crate::error::CliError;
use crate::formatters::{format_score, format_score_card};
use crate::ui;
use crate::validation::parse_hand;
use std::io::Write;
use yacht_engine::category::Category;
use yacht_engine::scoring::Evaluator;

pub fn handle_score_command(
    dice: &str,
    category: Option<&str>,
    json: bool,
    config: &Config,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> Result<(), CliError> {
    let rules = config.rules();
    let parsed = parse_hand(dice, &rules)?;
    if let Some(w) = &parsed.warning {
        ui::display_warning(err, w)?;
    }
    let evaluator = Evaluator::new(rules);

    match category {
        Some(name) => {
            let category: Category = name.parse()?;
            let result = evaluator.evaluate(&parsed.hand, category);
            if json {
                let line = serde_json::json!({
                    "hand": parsed.hand,
                    "category": result.category,
                    "score": result.score,
                });
                writeln!(out, "{}", line)?;
            } else {
                writeln!(out, "{}", format_score(&result))?;
            }
        }
        None => {
            let card = evaluator.score_card(&parsed.hand);
            if json {
                let line = serde_json::json!({
                    "hand": parsed.hand,
                    "scores": card,
                });
                writeln!(out, "{}", line)?;
            } else {
                writeln!(out, "Rolls: {}", parsed.hand)?;
                writeln!(out, "{}", format_score_card(&card))?;
            }
        }
    }
    Ok(())
}
