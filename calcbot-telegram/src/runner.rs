//! Dispatcher: converts teloxide messages and callback queries into core updates and hands them to the HandlerChain.
//! Stops on ctrl-c or when `shutdown` is notified (the `/stop` command).

use std::sync::Arc;

use anyhow::Result;
use calcbot_core::{ToCoreCallback, ToCoreMessage, Update as CoreUpdate};
use handler_chain::HandlerChain;
use teloxide::prelude::*;
use teloxide::types::CallbackQuery;
use tokio::sync::Notify;
use tracing::{error, info, instrument, warn};

use crate::adapters::{TelegramCallbackWrapper, TelegramMessageWrapper};
use crate::config::TelegramConfig;

/// Creates the teloxide Bot from config, pointing it at `telegram_api_url` when set.
pub fn build_teloxide_bot(config: &TelegramConfig) -> teloxide::Bot {
    let bot = teloxide::Bot::new(config.bot_token.clone());
    match config.telegram_api_url {
        Some(ref url_str) => match reqwest::Url::parse(url_str) {
            Ok(url) => bot.set_api_url(url),
            Err(e) => {
                error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                bot
            }
        },
        None => bot,
    }
}

/// Runs long polling until ctrl-c or `shutdown` fires.
///
/// Updates of one chat are handled in order; different chats run concurrently. Chain errors are logged
/// and the update is dropped. Every callback query is answered so the client stops its spinner.
#[instrument(skip(bot, handler_chain, shutdown))]
pub async fn run_dispatcher(
    bot: teloxide::Bot,
    handler_chain: HandlerChain,
    shutdown: Arc<Notify>,
) -> Result<()> {
    match bot.get_me().await {
        Ok(me) => info!(
            username = %me.user.username.as_deref().unwrap_or("unknown"),
            "Start listening"
        ),
        Err(e) => warn!(error = %e, "get_me failed; starting dispatcher anyway"),
    }

    let handler = dptree::entry()
        .branch(Update::filter_message().endpoint(on_message))
        .branch(Update::filter_callback_query().endpoint(on_callback));

    let mut dispatcher = Dispatcher::builder(bot, handler)
        .dependencies(dptree::deps![handler_chain])
        .enable_ctrlc_handler()
        .build();

    let shutdown_token = dispatcher.shutdown_token();
    let stop_watcher = tokio::spawn(async move {
        shutdown.notified().await;
        info!("Bot is stopping");
        match shutdown_token.shutdown() {
            Ok(stopped) => stopped.await,
            Err(e) => warn!(error = ?e, "Dispatcher was idle on shutdown"),
        }
    });

    dispatcher.dispatch().await;
    stop_watcher.abort();

    info!("Dispatcher stopped");
    Ok(())
}

async fn on_message(msg: Message, chain: HandlerChain) -> ResponseResult<()> {
    let update = CoreUpdate::Message(TelegramMessageWrapper(&msg).to_core());
    if let Err(e) = chain.handle(&update).await {
        error!(error = %e, user_id = update.user().id, "Handler chain failed");
    }
    Ok(())
}

async fn on_callback(bot: Bot, q: CallbackQuery, chain: HandlerChain) -> ResponseResult<()> {
    match TelegramCallbackWrapper(&q).to_core() {
        Some(press) => {
            let update = CoreUpdate::Callback(press);
            if let Err(e) = chain.handle(&update).await {
                error!(error = %e, user_id = update.user().id, "Handler chain failed");
            }
        }
        None => warn!(
            user_id = q.from.id.0,
            "Callback query without data or an accessible message, ignored"
        ),
    }

    bot.answer_callback_query(q.id.clone()).await?;
    Ok(())
}
