//! Text formatters for hands, scores and check reports.
//!
//! Pure functions; commands decide where the text goes. Check reports use
//! ✔/✘ marks where the terminal is assumed to handle Unicode and fall back to
//! `ok`/`FAIL` otherwise.
//!
//! ```rust
//! use yacht_cli::formatters::format_score_card;
//! use yacht_engine::dice::Hand;
//! use yacht_engine::scoring::Evaluator;
//!
//! let hand = Hand::new(vec![1, 1, 1, 8, 8]).unwrap();
//! let card = Evaluator::default().score_card(&hand);
//! let text = format_score_card(&card);
//! assert!(text.contains("FULL_HOUSE"));
//! assert_eq!(text.lines().count(), 16);
//! ```

use yacht_engine::check::{CheckOutcome, CheckTally, Scenario};
use yacht_engine::scoring::ScoreResult;

/// On Windows, checks for Windows Terminal (WT_SESSION), modern terminals
/// (TERM_PROGRAM) or VS Code (VSCODE_INJECTION). Unix-like systems are assumed
/// to render Unicode.
pub fn supports_unicode() -> bool {
    if cfg!(windows) {
        std::env::var("WT_SESSION").is_ok()
            || std::env::var("TERM_PROGRAM").is_ok()
            || std::env::var("VSCODE_INJECTION").is_ok()
    } else {
        true
    }
}

pub fn pass_mark(passed: bool) -> &'static str {
    match (passed, supports_unicode()) {
        (true, true) => "✔",
        (false, true) => "✘",
        (true, false) => "ok",
        (false, false) => "FAIL",
    }
}

/// `CATEGORY  score`, category left-aligned in 16 columns.
pub fn format_score(result: &ScoreResult) -> String {
    format!("{:<16} {}", result.category.name(), result.score)
}

pub fn format_score_card(card: &[ScoreResult]) -> String {
    card.iter()
        .map(format_score)
        .collect::<Vec<_>>()
        .join("\n")
}

/// One report line per scenario.
pub fn format_check_line(outcome: &CheckOutcome<'_>) -> String {
    let mark = pass_mark(outcome.passed);
    match outcome.scenario {
        Scenario::Score {
            hand,
            category,
            expected,
        } => format!(
            "{} {:<16} {:<16} expected {:<3} actual {}",
            mark,
            hand.to_string(),
            category.name(),
            expected,
            outcome.actual.score
        ),
        Scenario::Best { hand, expected } => format!(
            "{} {:<16} best            expected {} actual {} ({})",
            mark,
            hand.to_string(),
            expected.name(),
            outcome.actual.category.name(),
            outcome.actual.score
        ),
    }
}

pub fn format_tally(tally: &CheckTally) -> String {
    format!(
        "Finished running {} checks. Passed: {} Failed: {}",
        tally.run, tally.passed, tally.failed
    )
}
