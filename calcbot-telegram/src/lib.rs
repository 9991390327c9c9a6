//! # calcbot-telegram
//!
//! Telegram transport layer: adapters from teloxide types, [`calcbot_core::Bot`] implementation,
//! minimal config, and the dispatcher runner. Handles only Telegram connectivity and handler-chain
//! execution; the calculator logic lives in the handlers.

mod adapters;
mod bot_adapter;
mod config;
mod runner;

pub use adapters::{TelegramCallbackWrapper, TelegramMessageWrapper, TelegramUserWrapper};
pub use bot_adapter::{to_inline_markup, TelegramBotAdapter};
pub use config::{TelegramConfig, DEFAULT_LOG_FILE};
pub use runner::{build_teloxide_bot, run_dispatcher};
