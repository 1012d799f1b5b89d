//! Command handler modules for the yacht CLI.
//!
//! Each subcommand lives in its own module with the same shape:
//!
//! - Public handler function: `pub fn handle_COMMAND_command(...) -> Result<(), CliError>`
//! - Output streams (`&mut dyn Write`) passed in as parameters
//! - Resolved configuration passed in by [`crate::run`]
//! - Errors propagated via the `CliError` enum

mod best;
mod cfg;
mod check;
mod roll;
mod score;

pub use best::handle_best_command;
pub use cfg::handle_cfg_command;
pub use check::handle_check_command;
pub use roll::handle_roll_command;
pub use score::handle_score_command;
