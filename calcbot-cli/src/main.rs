//! calcbot CLI: run the Telegram bot, or use the calculator offline. Config from env and optional CLI args.

use anyhow::Result;
use calcbot_cli::{eval_display, load_config, replay, run_bot, Cli, Commands};
use clap::Parser;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run { token } => {
            let config = load_config(token)?;
            run_bot(config).await
        }
        Commands::Eval { expression } => {
            init_console_tracing();
            println!("{}", eval_display(&expression));
            Ok(())
        }
        Commands::Press { from, symbols } => {
            init_console_tracing();
            for (symbol, display) in symbols.iter().zip(replay(&from, &symbols)?) {
                println!("{:>2}  {}", symbol, display);
            }
            Ok(())
        }
    }
}

/// Console-only tracing for the offline commands; `RUST_LOG=debug` shows each state machine step.
fn init_console_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "warn".to_string()))
        .with_target(false)
        .init();
}
