//! Bot abstraction for sending and editing messages.
//!
//! [`Bot`] is transport-agnostic; `calcbot-telegram` implements it via teloxide, tests substitute a mock.

use crate::error::{CalcBotError, Result};
use crate::types::{Chat, Keyboard};
use async_trait::async_trait;

/// Abstraction for sending and editing messages. Implementations map to a transport (e.g. Telegram).
#[async_trait]
pub trait Bot: Send + Sync {
    /// Sends a plain text message to the given chat.
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()>;
    /// Sends a message with an inline keyboard attached and returns its id (for later edits).
    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<String>;
    /// Replaces the text of an already-sent message and re-attaches `keyboard`. `message_id` is transport-specific.
    async fn edit_message_with_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<()>;
}

/// Parses a message id string into an i32. Used by edit implementations.
pub fn parse_message_id(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| CalcBotError::Bot(format!("Invalid message_id for edit: {}", s)))
}
