//! Core types: user, chat, incoming message, callback press, keyboard, handler response, and Handler trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// User identity (id, username, names).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    /// Placeholder for updates that carry no sender (e.g. channel posts).
    pub fn unknown() -> Self {
        Self {
            id: 0,
            username: None,
            first_name: None,
            last_name: None,
        }
    }
}

/// Chat (channel or private) identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Chat {
    pub id: i64,
    pub chat_type: String,
}

/// An incoming text message (commands arrive this way).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub user: User,
    pub chat: Chat,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// One tap on an inline keyboard button.
///
/// `message_text` is the snapshot of the message the keyboard is attached to; handlers never see the live message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CallbackPress {
    /// Transport callback id (Telegram callback query id).
    pub id: String,
    pub user: User,
    pub chat: Chat,
    /// Id of the message carrying the keyboard; transport-specific (Telegram numeric string).
    pub message_id: String,
    pub message_text: String,
    /// Callback data of the pressed button.
    pub data: String,
    pub created_at: DateTime<Utc>,
}

/// Everything the handler chain can receive.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Update {
    Message(Message),
    Callback(CallbackPress),
}

impl Update {
    pub fn user(&self) -> &User {
        match self {
            Update::Message(m) => &m.user,
            Update::Callback(c) => &c.user,
        }
    }

    pub fn chat(&self) -> &Chat {
        match self {
            Update::Message(m) => &m.chat,
            Update::Callback(c) => &c.chat,
        }
    }

    /// Short name used in log fields.
    pub fn kind(&self) -> &'static str {
        match self {
            Update::Message(_) => "message",
            Update::Callback(_) => "callback",
        }
    }
}

impl From<Message> for Update {
    fn from(message: Message) -> Self {
        Update::Message(message)
    }
}

impl From<CallbackPress> for Update {
    fn from(press: CallbackPress) -> Self {
        Update::Callback(press)
    }
}

/// One inline button: visible label and the callback data sent back when pressed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyButton {
    pub label: String,
    pub data: String,
}

impl KeyButton {
    pub fn new(label: impl Into<String>, data: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            data: data.into(),
        }
    }
}

/// Transport-neutral inline keyboard, row by row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyboard {
    pub rows: Vec<Vec<KeyButton>>,
}

impl Keyboard {
    pub fn new(rows: Vec<Vec<KeyButton>>) -> Self {
        Self { rows }
    }

    /// Iterates all buttons in row order.
    pub fn buttons(&self) -> impl Iterator<Item = &KeyButton> {
        self.rows.iter().flatten()
    }
}

/// Handler result for the chain. `Reply(text)` carries the response body so later handlers can use it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; no response body.
    Stop,
    /// Skip this handler, try next.
    Ignore,
    /// Stop the chain and attach reply text.
    Reply(String),
}

/// Converts a transport-specific user type to core [`User`].
pub trait ToCoreUser: Send + Sync {
    fn to_core(&self) -> User;
}

/// Converts a transport-specific message type to core [`Message`].
pub trait ToCoreMessage: Send + Sync {
    fn to_core(&self) -> Message;
}

/// Converts a transport-specific callback type to core [`CallbackPress`]; `None` when the callback is unusable
/// (no data, or the keyboard message is no longer accessible).
pub trait ToCoreCallback: Send + Sync {
    fn to_core(&self) -> Option<CallbackPress>;
}

/// Single handler concept: optional before / handle / after. Chain runs all before → handle until Stop/Reply → all after (reverse).
#[async_trait]
pub trait Handler: Send + Sync {
    /// Runs before the handle phase. Return false to stop the chain.
    async fn before(&self, _update: &Update) -> crate::error::Result<bool> {
        Ok(true)
    }
    /// Processes the update. Return Stop or Reply to end the handle phase. Default: Continue.
    async fn handle(&self, _update: &Update) -> crate::error::Result<HandlerResponse> {
        Ok(HandlerResponse::Continue)
    }
    /// Runs after the handle phase (reverse order), with the final response.
    async fn after(
        &self,
        _update: &Update,
        _response: &HandlerResponse,
    ) -> crate::error::Result<()> {
        Ok(())
    }
}
