//! # calcbot-core
//!
//! Core types and traits for the calculator bot: [`Bot`], [`Handler`], updates (text messages and
//! callback presses), the inline [`Keyboard`] model, and tracing initialization. Transport-agnostic;
//! used by calcbot-telegram, handler-chain and calcbot-handlers.

pub mod bot;
pub mod error;
pub mod logger;
pub mod types;

pub use bot::{parse_message_id, Bot};
pub use error::{CalcBotError, HandlerError, Result};
pub use logger::init_tracing;
pub use types::{
    CallbackPress, Chat, Handler, HandlerResponse, KeyButton, Keyboard, Message, ToCoreCallback,
    ToCoreMessage, ToCoreUser, Update, User,
};
