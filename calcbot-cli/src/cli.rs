//! CLI parser and config loading.

use anyhow::Result;
use calcbot_telegram::TelegramConfig;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "calcbot")]
#[command(about = "Telegram inline-keyboard calculator bot", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the Telegram bot (config from env; token can override BOT_TOKEN).
    Run {
        #[arg(short, long)]
        token: Option<String>,
    },
    /// Evaluate an expression the way the `=` button does and print the display text.
    Eval {
        expression: String,
    },
    /// Replay button presses (e.g. `1 + 2 =`) against a display and print each step.
    Press {
        /// Starting display text.
        #[arg(short, long, default_value = "0")]
        from: String,
        #[arg(required = true, allow_hyphen_values = true)]
        symbols: Vec<String>,
    },
}

/// Load TelegramConfig from environment. If `token` is provided it overrides BOT_TOKEN.
pub fn load_config(token: Option<String>) -> Result<TelegramConfig> {
    TelegramConfig::load(token)
}
