//! # calcbot-cli
//!
//! CLI foundation: argument parsing, config loading, handler assembly, and the offline calculator commands.

pub mod assembly;
pub mod cli;

use anyhow::{Context, Result};
use calculator::{apply, evaluate, format_result, NextAction, Symbol, ERROR_DISPLAY};

pub use assembly::{build_handler_chain, run_bot};
pub use calcbot_telegram::TelegramConfig;
pub use cli::{load_config, Cli, Commands};

/// Display text the `=` button would show for `expression`.
pub fn eval_display(expression: &str) -> String {
    match evaluate(expression) {
        Ok(value) => format_result(value),
        Err(_) => ERROR_DISPLAY.to_string(),
    }
}

/// Applies `symbols` starting from `from`; returns the display after each press.
pub fn replay(from: &str, symbols: &[String]) -> Result<Vec<String>> {
    let mut display = from.to_string();
    let mut steps = Vec::with_capacity(symbols.len());
    for raw in symbols {
        let symbol: Symbol = raw
            .parse()
            .with_context(|| format!("Parse button {:?}", raw))?;
        if let NextAction::Replace(text) = apply(&display, symbol) {
            display = text;
        }
        steps.push(display.clone());
    }
    Ok(steps)
}
