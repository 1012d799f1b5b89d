//! Best command handler: highest scoring category for a hand.

use crate::config::Config;
use crate::error::CliError;
use crate::ui;
use crate::validation::parse_hand;
use std::io::Write;
use yacht_engine::scoring::Evaluator;

pub fn handle_best_command(
    dice: &str,
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
    let best = Evaluator::new(rules).best_category(&parsed.hand);
    if json {
        let line = serde_json::json!({
            "hand": parsed.hand,
            "category": best.category,
            "score": best.score,
        });
        writeln!(out, "{}", line)?;
    } else {
        writeln!(
            out,
            "Highest scoring category was {} with {}",
            best.category, best.score
        )?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_best_prefers_earlier_category_on_tie() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_best_command("1,1,1,2,3", false, &Config::default(), &mut out, &mut err).unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap().trim(),
            "Highest scoring category was THREE_OF_A_KIND with 8"
        );
    }

    #[test]
    fn test_best_json() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        handle_best_command("5,2,1,3,4", true, &Config::default(), &mut out, &mut err).unwrap();
        let v: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(v["category"], "LARGE_STRAIGHT");
        assert_eq!(v["score"], 40);
        assert_eq!(v["hand"], serde_json::json!([5, 2, 1, 3, 4]));
    }

    #[test]
    fn test_best_rejects_out_of_range_face() {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let result =
            handle_best_command("1,2,3,4,9", false, &Config::default(), &mut out, &mut err);
        assert!(result.is_err());
        assert!(out.is_empty());
    }
}
