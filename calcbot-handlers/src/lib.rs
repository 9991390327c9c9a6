//! # Handlers for the calculator bot
//!
//! This crate provides the chain handlers: logging, text commands, and the calculator keyboard.

mod calculator_handler;
mod command_handler;
mod keyboard;
mod logging_handler;

#[cfg(test)]
mod test;

pub use calculator_handler::CalculatorHandler;
pub use command_handler::{Command, CommandHandler, DEFAULT_GIF_URL, HELP_TEXT, STOP_TEXT};
pub use keyboard::calculator_keyboard;
pub use logging_handler::LoggingHandler;
