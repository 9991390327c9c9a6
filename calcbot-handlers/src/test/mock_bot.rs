//! Mock implementation of [`calcbot_core::Bot`] for handler tests.
//!
//! Records every send and edit so tests can assert on the text and keyboard without hitting Telegram.

use async_trait::async_trait;
use calcbot_core::{Bot, Chat, Keyboard, Result};
use std::sync::Arc;
use tokio::sync::mpsc;

/// One recorded outgoing call.
#[derive(Debug, Clone, PartialEq)]
pub enum BotCall {
    Send {
        chat_id: i64,
        text: String,
        keyboard: Option<Keyboard>,
    },
    Edit {
        chat_id: i64,
        message_id: String,
        text: String,
        keyboard: Keyboard,
    },
}

/// Mock Bot that forwards each call to a channel; the receiver is held by the test.
pub struct MockBot {
    /// Fixed id returned by `send_message_with_keyboard`.
    placeholder_id: String,
    calls_tx: mpsc::UnboundedSender<BotCall>,
}

impl MockBot {
    /// Creates a MockBot and returns the receiver for recorded calls. Placeholder id is `"1"`.
    pub fn with_receiver() -> (Arc<Self>, mpsc::UnboundedReceiver<BotCall>) {
        let (calls_tx, calls_rx) = mpsc::unbounded_channel();
        let bot = Arc::new(Self {
            placeholder_id: "1".to_string(),
            calls_tx,
        });
        (bot, calls_rx)
    }
}

#[async_trait]
impl Bot for MockBot {
    async fn send_message(&self, chat: &Chat, text: &str) -> Result<()> {
        let _ = self.calls_tx.send(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: None,
        });
        Ok(())
    }

    async fn send_message_with_keyboard(
        &self,
        chat: &Chat,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<String> {
        let _ = self.calls_tx.send(BotCall::Send {
            chat_id: chat.id,
            text: text.to_string(),
            keyboard: Some(keyboard.clone()),
        });
        Ok(self.placeholder_id.clone())
    }

    async fn edit_message_with_keyboard(
        &self,
        chat: &Chat,
        message_id: &str,
        text: &str,
        keyboard: &Keyboard,
    ) -> Result<()> {
        let _ = self.calls_tx.send(BotCall::Edit {
            chat_id: chat.id,
            message_id: message_id.to_string(),
            text: text.to_string(),
            keyboard: keyboard.clone(),
        });
        Ok(())
    }
}

/// Drains every call recorded so far.
pub fn drain(rx: &mut mpsc::UnboundedReceiver<BotCall>) -> Vec<BotCall> {
    let mut calls = Vec::new();
    while let Ok(call) = rx.try_recv() {
        calls.push(call);
    }
    calls
}
