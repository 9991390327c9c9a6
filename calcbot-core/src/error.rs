use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcBotError {
    #[error("Bot error: {0}")]
    Bot(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),
}

#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("Callback press without data")]
    MissingCallbackData,
}

pub type Result<T> = std::result::Result<T, CalcBotError>;
