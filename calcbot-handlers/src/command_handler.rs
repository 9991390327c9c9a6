//! Text commands: `/start`, `/stop`, `/help`, `/gif`; anything else gets the unknown-command reply.

use std::sync::Arc;

use async_trait::async_trait;
use calcbot_core::{Bot, Handler, HandlerResponse, Keyboard, Result, Update};
use calculator::EMPTY_DISPLAY;
use tokio::sync::Notify;
use tracing::{info, instrument};

use crate::keyboard::calculator_keyboard;

pub const STOP_TEXT: &str = "Bot is stopping.";

pub const HELP_TEXT: &str = "Calculator bot: send /start and use the buttons under the message to type \
an expression, = evaluates it, C clears, ⌫ deletes the last character. Commands: /start /stop /help /gif";

pub const DEFAULT_GIF_URL: &str =
    "https://cdn.pixabay.com/animation/2022/12/05/15/28/15-28-43-29_512.gif";

const COMMAND_LIST: &str = "/start /stop /help /gif";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Start,
    Stop,
    Help,
    Gif,
    Unknown(String),
}

impl Command {
    /// Parses the first word of `text`; a `@botname` suffix on the command is ignored.
    pub fn parse(text: &str) -> Self {
        let word = text.split_whitespace().next().unwrap_or("");
        let name = word.split('@').next().unwrap_or(word);
        match name {
            "/start" => Command::Start,
            "/stop" => Command::Stop,
            "/help" => Command::Help,
            "/gif" => Command::Gif,
            _ => Command::Unknown(text.to_string()),
        }
    }
}

/// Answers text messages. `/start` opens a calculator message; `/stop` notifies `shutdown` after replying.
pub struct CommandHandler {
    bot: Arc<dyn Bot>,
    shutdown: Arc<Notify>,
    gif_url: String,
    keyboard: Keyboard,
}

impl CommandHandler {
    pub fn new(bot: Arc<dyn Bot>, shutdown: Arc<Notify>) -> Self {
        Self {
            bot,
            shutdown,
            gif_url: DEFAULT_GIF_URL.to_string(),
            keyboard: calculator_keyboard(),
        }
    }

    pub fn with_gif_url(mut self, gif_url: impl Into<String>) -> Self {
        self.gif_url = gif_url.into();
        self
    }
}

#[async_trait]
impl Handler for CommandHandler {
    #[instrument(skip(self, update))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let Update::Message(message) = update else {
            return Ok(HandlerResponse::Ignore);
        };
        if message.content.trim().is_empty() {
            return Ok(HandlerResponse::Ignore);
        }

        let command = Command::parse(&message.content);
        info!(
            user_id = message.user.id,
            chat_id = message.chat.id,
            command = ?command,
            "Handling command"
        );

        match command {
            Command::Start => {
                let message_id = self
                    .bot
                    .send_message_with_keyboard(&message.chat, EMPTY_DISPLAY, &self.keyboard)
                    .await?;
                info!(chat_id = message.chat.id, message_id = %message_id, "Calculator opened");
            }
            Command::Stop => {
                self.bot.send_message(&message.chat, STOP_TEXT).await?;
                info!(user_id = message.user.id, "Stop requested");
                self.shutdown.notify_one();
            }
            Command::Help => {
                self.bot.send_message(&message.chat, HELP_TEXT).await?;
            }
            Command::Gif => {
                self.bot.send_message(&message.chat, &self.gif_url).await?;
            }
            Command::Unknown(text) => {
                let reply = format!(
                    "Unknown command: {}. Available commands: {}",
                    text, COMMAND_LIST
                );
                self.bot.send_message(&message.chat, &reply).await?;
            }
        }

        Ok(HandlerResponse::Stop)
    }
}
