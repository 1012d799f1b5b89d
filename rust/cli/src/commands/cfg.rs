//! Configuration command handler.
//!
//! Prints the resolved configuration as JSON, each value paired with the
//! place it came from (default, file or env).
//!
//! ```json
//! {
//!   "dice": { "value": 5, "source": "default" },
//!   "faces": { "value": 8, "source": "env" },
//!   ...
//! }
//! ```

use crate::config::ConfigResolved;
use crate::error::CliError;
use std::io::Write;

pub fn handle_cfg_command(resolved: &ConfigResolved, out: &mut dyn Write) -> Result<(), CliError> {
    let ConfigResolved { config, sources } = resolved;
    let display = serde_json::json!({
        "dice": {
            "value": config.dice,
            "source": sources.dice,
        },
        "faces": {
            "value": config.faces,
            "source": sources.faces,
        },
        "seed": {
            "value": config.seed,
            "source": sources.seed,
        },
        "points": {
            "value": config.points,
            "source": sources.points,
        },
    });
    let json_str = serde_json::to_string_pretty(&display).map_err(std::io::Error::other)?;
    writeln!(out, "{}", json_str)?;
    Ok(())
}
