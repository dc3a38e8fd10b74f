//! Log output for the two places this tool runs: a GitHub Actions job,
//! where messages must be workflow commands so the runner annotates them,
//! and a local terminal, where plain styled lines are friendlier.

use console::style;
use std::env;

fn on_actions_runner() -> bool {
    env::var("GITHUB_ACTIONS").map(|v| v == "true").unwrap_or(false)
}

fn runner_debug_enabled() -> bool {
    env::var("RUNNER_DEBUG").map(|v| v == "1").unwrap_or(false)
}

/// Escape a message for a single-line workflow command
fn escape_command_data(message: &str) -> String {
    message
        .replace('%', "%25")
        .replace('\r', "%0D")
        .replace('\n', "%0A")
}

/// Emit a debug message (hidden on the runner unless step debugging is on)
pub fn debug(message: &str) {
    if on_actions_runner() {
        println!("::debug::{}", escape_command_data(message));
    } else if runner_debug_enabled() {
        println!("{} {}", style("debug:").dim(), message);
    }
}

/// Emit a non-fatal warning
pub fn warning(message: &str) {
    if on_actions_runner() {
        println!("::warning::{}", escape_command_data(message));
    } else {
        eprintln!("{} {}", style("warning:").yellow().bold(), message);
    }
}

/// Emit an error message
pub fn error(message: &str) {
    if on_actions_runner() {
        println!("::error::{}", escape_command_data(message));
    } else {
        eprintln!("{} {}", style("error:").red().bold(), message);
    }
}
