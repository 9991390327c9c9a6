//! Calculator keyboard presses: runs the state machine against the pressed message's text and edits it in place.

use std::sync::Arc;

use async_trait::async_trait;
use calcbot_core::{Bot, Handler, HandlerError, HandlerResponse, Keyboard, Result, Update};
use calculator::{apply, NextAction, Symbol};
use tracing::{info, instrument, warn};

use crate::keyboard::calculator_keyboard;

pub struct CalculatorHandler {
    bot: Arc<dyn Bot>,
    keyboard: Keyboard,
}

impl CalculatorHandler {
    pub fn new(bot: Arc<dyn Bot>) -> Self {
        Self {
            bot,
            keyboard: calculator_keyboard(),
        }
    }
}

#[async_trait]
impl Handler for CalculatorHandler {
    #[instrument(skip(self, update))]
    async fn handle(&self, update: &Update) -> Result<HandlerResponse> {
        let Update::Callback(press) = update else {
            return Ok(HandlerResponse::Ignore);
        };
        if press.data.is_empty() {
            return Err(HandlerError::MissingCallbackData.into());
        }

        let symbol: Symbol = match press.data.parse() {
            Ok(symbol) => symbol,
            Err(e) => {
                warn!(chat_id = press.chat.id, data = %press.data, error = %e, "Ignoring unknown button");
                return Ok(HandlerResponse::Ignore);
            }
        };

        match apply(&press.message_text, symbol) {
            NextAction::Unchanged => {
                info!(
                    chat_id = press.chat.id,
                    display = %press.message_text,
                    symbol = %symbol,
                    "Press rejected, display unchanged"
                );
            }
            NextAction::Replace(text) => {
                self.bot
                    .edit_message_with_keyboard(&press.chat, &press.message_id, &text, &self.keyboard)
                    .await?;
                info!(
                    chat_id = press.chat.id,
                    message_id = %press.message_id,
                    symbol = %symbol,
                    display = %text,
                    "Display updated"
                );
            }
        }

        Ok(HandlerResponse::Stop)
    }
}
