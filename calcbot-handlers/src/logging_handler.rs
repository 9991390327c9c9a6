//! Handler that logs every update and the chain's final response.

use async_trait::async_trait;
use calcbot_core::{Handler, HandlerResponse, Result, Update};
use tracing::{debug, info, instrument};

/// Logs each update in before() and the response in after(); always continues.
pub struct LoggingHandler;

#[async_trait]
impl Handler for LoggingHandler {
    #[instrument(skip(self, update))]
    async fn before(&self, update: &Update) -> Result<bool> {
        let user = update.user();
        match update {
            Update::Message(message) => info!(
                user_id = user.id,
                username = %user.username.as_deref().unwrap_or("unknown"),
                chat_id = message.chat.id,
                message_content = %message.content,
                "Received message"
            ),
            Update::Callback(press) => info!(
                user_id = user.id,
                username = %user.username.as_deref().unwrap_or("unknown"),
                chat_id = press.chat.id,
                message_id = %press.message_id,
                display = %press.message_text,
                symbol = %press.data,
                "Received button press"
            ),
        }
        Ok(true)
    }

    #[instrument(skip(self, update, response))]
    async fn after(&self, update: &Update, response: &HandlerResponse) -> Result<()> {
        debug!(
            update_kind = %update.kind(),
            chat_id = update.chat().id,
            response = ?response,
            "Processed update"
        );
        Ok(())
    }
}
