use clap::{Parser, Subcommand};
use std::process::ExitCode;
use std::sync::Arc;
use std::time::Duration;

use chatter_bot::application::errors::BotError;
use chatter_bot::application::messaging::MessageDispatcher;
use chatter_bot::application::services::MessageService;
use chatter_bot::domain::traits::Bot;
use chatter_bot::infrastructure::adapters::{ConsoleAdapter, TelegramAdapter};
use chatter_bot::infrastructure::config::Config;
use chatter_bot::infrastructure::storage::StateStore;

#[derive(Parser)]
#[command(name = "chatter-bot")]
#[command(about = "A keyword-driven Telegram bot with Redis-backed user stats", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Config file path
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Bot token (overrides config and TELEGRAM_TOKEN)
    #[arg(short, long)]
    token: Option<String>,

    /// Store URL (overrides config and REDIS_URL)
    #[arg(long)]
    redis_url: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Telegram bot
    Run,
    /// Chat with the bot on stdin (dev mode, no token needed)
    Console,
    /// Show version
    Version,
    /// Print the default config
    InitConfig,
}

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Run | Commands::Console => {
            let config = load_config(&cli.config, cli.token, cli.redis_url);
            let console = matches!(cli.command, Commands::Console);
            run_bot(config, console)
        }
        Commands::Version => {
            println!("chatter-bot v{}", env!("CARGO_PKG_VERSION"));
            ExitCode::SUCCESS
        }
        Commands::InitConfig => init_config(),
    }
}

/// File, then environment, then command line
fn load_config(path: &str, token: Option<String>, redis_url: Option<String>) -> Config {
    let mut config = if std::path::Path::new(path).exists() {
        Config::load(path).unwrap_or_else(|e| {
            tracing::warn!("Failed to load config: {}, using defaults", e);
            Config::default()
        })
    } else {
        Config::default()
    };
    config.apply_env();

    if let Some(token) = token {
        config.telegram.token = Some(token);
    }
    if let Some(url) = redis_url {
        config.store.url = Some(url);
    }
    config
}

fn run_bot(config: Config, console: bool) -> ExitCode {
    let rt = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            tracing::error!("Failed to start runtime: {}", e);
            return ExitCode::FAILURE;
        }
    };

    let result = rt.block_on(async {
        let run = async {
            if console {
                run_console_bot(&config).await
            } else {
                run_telegram_bot(&config).await
            }
        };

        tokio::select! {
            result = run => result,
            _ = tokio::signal::ctrl_c() => {
                tracing::info!("Interrupted, shutting down");
                Ok(())
            }
        }
    });

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("Bot error: {}", e);
            ExitCode::FAILURE
        }
    }
}

async fn connect_store(config: &Config) -> Arc<StateStore> {
    let store = StateStore::connect(&config.store).await;
    tracing::info!("Redis available: {}", store.is_available());
    tracing::info!(
        "Redis URL configured: {}",
        if config.store.url.is_some() { "Yes" } else { "No" }
    );
    Arc::new(store)
}

async fn run_telegram_bot(config: &Config) -> Result<(), BotError> {
    // Missing token is fatal before anything else is touched
    let token = config.telegram_token()?.to_string();

    tracing::info!("Starting {}", config.bot.name);
    let store = connect_store(config).await;

    let mut bot = TelegramAdapter::new(token);
    bot.fetch_bot_info().await?;
    let info = bot.bot_info();
    tracing::info!("Bot started: @{}", info.username);

    let dispatcher = MessageDispatcher::from_config(config, store, &info.username)?;

    let menu = dispatcher
        .router()
        .commands()
        .map(|c| (c.name.as_str(), c.description.as_deref().unwrap_or("")));
    if let Err(e) = bot.register_commands(menu).await {
        tracing::warn!("Failed to register commands: {}", e);
    }

    bot.start().await?;
    let service = MessageService::new(bot, dispatcher);

    let mut offset: i64 = 0;
    let poll_timeout = config.telegram.poll_timeout_seconds;
    let retry_delay = Duration::from_secs(config.telegram.retry_delay_seconds);

    tracing::info!("Starting message loop...");

    loop {
        let updates = match service.bot().get_updates(offset, poll_timeout).await {
            Ok(updates) => updates,
            Err(e) if e.is_fatal() => return Err(e),
            Err(e) => {
                tracing::error!("Failed to get updates: {}", e);
                tokio::time::sleep(retry_delay).await;
                continue;
            }
        };

        if !updates.is_empty() {
            tracing::info!("Received {} updates", updates.len());
        }
        offset = TelegramAdapter::get_next_offset(&updates, offset);

        for update in updates {
            let Some(raw) = update.message else { continue };

            let message = match raw.into_message() {
                Ok(message) => message,
                Err(e) => {
                    tracing::warn!("Skipping update {}: {}", update.update_id, e);
                    continue;
                }
            };

            if let Err(e) = service.process(&message).await {
                if e.is_fatal() {
                    return Err(e);
                }
                tracing::error!("Failed to send message: {}", e);
            }
        }
    }
}

async fn run_console_bot(config: &Config) -> Result<(), BotError> {
    let store = connect_store(config).await;
    let bot = ConsoleAdapter::new();
    bot.start().await?;

    let info = bot.bot_info();
    let dispatcher = MessageDispatcher::from_config(config, store, &info.username)?;
    let service = MessageService::new(bot, dispatcher);

    // Main loop (for console mode)
    while let Some(message) = service.bot().read_message("> ").await {
        if message.text().is_empty() {
            continue;
        }
        if let Err(e) = service.process(&message).await {
            tracing::error!("Failed to print reply: {}", e);
        }
    }

    Ok(())
}

fn init_config() -> ExitCode {
    match serde_yaml::to_string(&Config::default()) {
        Ok(yaml) => {
            println!("{}", yaml);
            println!("\nSave this to config.yaml and adjust as needed.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            tracing::error!("Failed to render config: {}", e);
            ExitCode::FAILURE
        }
    }
}
