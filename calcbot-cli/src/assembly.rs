//! Assembly: wires the Telegram adapter, handlers and chain, then runs the dispatcher.

use std::sync::Arc;

use anyhow::{Context, Result};
use calcbot_core::{init_tracing, Bot};
use calcbot_handlers::{CalculatorHandler, CommandHandler, LoggingHandler};
use calcbot_telegram::{build_teloxide_bot, run_dispatcher, TelegramBotAdapter, TelegramConfig};
use handler_chain::HandlerChain;
use tokio::sync::Notify;
use tracing::{info, instrument};

/// Logging first, then commands, then calculator presses.
pub fn build_handler_chain(
    bot: Arc<dyn Bot>,
    shutdown: Arc<Notify>,
    gif_url: Option<&str>,
) -> HandlerChain {
    let mut commands = CommandHandler::new(bot.clone(), shutdown);
    if let Some(url) = gif_url {
        commands = commands.with_gif_url(url);
    }

    HandlerChain::new()
        .add_handler(Arc::new(LoggingHandler))
        .add_handler(Arc::new(commands))
        .add_handler(Arc::new(CalculatorHandler::new(bot)))
}

/// Main entry: validate config, init logging, build the chain, run until ctrl-c or `/stop`.
#[instrument(skip(config))]
pub async fn run_bot(config: TelegramConfig) -> Result<()> {
    config.validate()?;
    init_tracing(&config.log_file)
        .with_context(|| format!("Initialize logging to {}", config.log_file))?;

    info!(
        log_file = %config.log_file,
        custom_api_url = config.telegram_api_url.is_some(),
        "Initializing calculator bot"
    );

    let teloxide_bot = build_teloxide_bot(&config);
    let bot: Arc<dyn Bot> = Arc::new(TelegramBotAdapter::new(teloxide_bot.clone()));
    let shutdown = Arc::new(Notify::new());
    let chain = build_handler_chain(bot, shutdown.clone(), config.gif_url.as_deref());

    info!("Bot started successfully");
    run_dispatcher(teloxide_bot, chain, shutdown).await
}
