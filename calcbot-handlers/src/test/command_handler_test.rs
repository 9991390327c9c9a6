//! Unit tests for CommandHandler.

use std::sync::Arc;
use std::time::Duration;

use calcbot_core::{CallbackPress, Chat, Handler, HandlerResponse, Message, Update, User};
use chrono::Utc;
use tokio::sync::Notify;

use super::mock_bot::{drain, BotCall, MockBot};
use crate::{calculator_keyboard, Command, CommandHandler, DEFAULT_GIF_URL, HELP_TEXT, STOP_TEXT};

fn sample_message(content: &str) -> Update {
    Update::Message(Message {
        id: "msg-1".to_string(),
        user: User {
            id: 1,
            username: Some("testuser".to_string()),
            first_name: Some("Test".to_string()),
            last_name: None,
        },
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        content: content.to_string(),
        created_at: Utc::now(),
    })
}

fn sent(text: &str) -> BotCall {
    BotCall::Send {
        chat_id: 123,
        text: text.to_string(),
        keyboard: None,
    }
}

#[test]
fn test_command_parse() {
    assert_eq!(Command::parse("/start"), Command::Start);
    assert_eq!(Command::parse("/stop now"), Command::Stop);
    assert_eq!(Command::parse("/help@calc_bot"), Command::Help);
    assert_eq!(Command::parse("  /gif  "), Command::Gif);
    assert_eq!(
        Command::parse("hello there"),
        Command::Unknown("hello there".to_string())
    );
    assert_eq!(
        Command::parse("/starts"),
        Command::Unknown("/starts".to_string())
    );
}

/// **Test: /start sends "0" with the six-row calculator keyboard.**
#[tokio::test]
async fn test_start_opens_calculator() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = CommandHandler::new(bot, Arc::new(Notify::new()));

    let response = handler.handle(&sample_message("/start")).await.unwrap();

    assert_eq!(response, HandlerResponse::Stop);
    let calls = drain(&mut rx);
    assert_eq!(
        calls,
        vec![BotCall::Send {
            chat_id: 123,
            text: "0".to_string(),
            keyboard: Some(calculator_keyboard()),
        }]
    );
    assert_eq!(calculator_keyboard().rows.len(), 6);
}

#[tokio::test]
async fn test_help_and_gif() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = CommandHandler::new(bot, Arc::new(Notify::new()));

    handler.handle(&sample_message("/help")).await.unwrap();
    handler.handle(&sample_message("/gif")).await.unwrap();

    assert_eq!(drain(&mut rx), vec![sent(HELP_TEXT), sent(DEFAULT_GIF_URL)]);
}

#[tokio::test]
async fn test_gif_url_override() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = CommandHandler::new(bot, Arc::new(Notify::new()))
        .with_gif_url("https://example.com/cat.gif");

    handler.handle(&sample_message("/gif")).await.unwrap();

    assert_eq!(drain(&mut rx), vec![sent("https://example.com/cat.gif")]);
}

#[tokio::test]
async fn test_unknown_command_lists_commands() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = CommandHandler::new(bot, Arc::new(Notify::new()));

    handler.handle(&sample_message("2+2")).await.unwrap();

    assert_eq!(
        drain(&mut rx),
        vec![sent(
            "Unknown command: 2+2. Available commands: /start /stop /help /gif"
        )]
    );
}

/// **Test: /stop replies and notifies shutdown.**
#[tokio::test]
async fn test_stop_notifies_shutdown() {
    let (bot, mut rx) = MockBot::with_receiver();
    let shutdown = Arc::new(Notify::new());
    let handler = CommandHandler::new(bot, shutdown.clone());

    handler.handle(&sample_message("/stop")).await.unwrap();

    assert_eq!(drain(&mut rx), vec![sent(STOP_TEXT)]);
    tokio::time::timeout(Duration::from_secs(1), shutdown.notified())
        .await
        .expect("shutdown must be notified");
}

#[tokio::test]
async fn test_ignores_callbacks_and_empty_text() {
    let (bot, mut rx) = MockBot::with_receiver();
    let handler = CommandHandler::new(bot, Arc::new(Notify::new()));

    let press = Update::Callback(CallbackPress {
        id: "cb".to_string(),
        user: User::unknown(),
        chat: Chat {
            id: 123,
            chat_type: "private".to_string(),
        },
        message_id: "5".to_string(),
        message_text: "0".to_string(),
        data: "1".to_string(),
        created_at: Utc::now(),
    });

    assert_eq!(handler.handle(&press).await.unwrap(), HandlerResponse::Ignore);
    assert_eq!(
        handler.handle(&sample_message("   ")).await.unwrap(),
        HandlerResponse::Ignore
    );
    assert!(drain(&mut rx).is_empty());
}
