//! Check command handler.
//!
//! Runs the built-in scenarios against the default rules, prints one line per
//! scenario and a summary. The tally lives on this function's stack.

use crate::error::CliError;
use crate::formatters::{format_check_line, format_tally};
use std::io::Write;
use tracing::warn;
use yacht_engine::check::{builtin_scenarios, run_scenarios, CheckTally};
use yacht_engine::scoring::Evaluator;

/// Returns [`CliError::ChecksFailed`] when any scenario fails, after the full
/// report has been written.
pub fn handle_check_command(out: &mut dyn Write) -> Result<(), CliError> {
    let scenarios = builtin_scenarios();
    let evaluator = Evaluator::default();
    let mut tally = CheckTally::default();
    let mut write_result = Ok(());

    run_scenarios(&evaluator, &scenarios, &mut tally, |outcome| {
        if write_result.is_ok() {
            write_result = writeln!(out, "{}", format_check_line(outcome));
        }
    });
    write_result?;

    writeln!(out)?;
    writeln!(out, "{}", format_tally(&tally))?;
    if tally.all_passed() {
        Ok(())
    } else {
        warn!(failed = tally.failed, "self-check failures");
        Err(CliError::ChecksFailed(tally.failed))
    }
}
