mod bridge;
mod commands;
mod constants;
mod handlers;
mod models;
mod utils;

use poise::serenity_prelude as serenity;
use songbird::SerenityInit;
use tracing::{error, info};

use crate::{
    bridge::BridgeClient,
    commands::{get, hello, set},
    constants::{COMMAND_PREFIX, DEFAULT_AUTOMATION_URL, LOG_DIRECTIVE},
    handlers::{handle_ready, handle_voice_state_update},
    models::Data,
    utils::messages::format_error,
};

#[tokio::main]
async fn main() {
    // Load environment variables from .env file if present
    let _ = dotenvy::dotenv();

    // Initialize logging
    initialize_logging();

    // Load configuration from environment
    let config = match load_configuration() {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            std::process::exit(1);
        }
    };

    // Initialize bot data with the automation server client
    let data = Data::new(BridgeClient::new(config.automation_url));

    // Create and start the bot
    if let Err(e) = start_bot(config.discord_token, data).await {
        error!("Bot error: {}", e);
        std::process::exit(1);
    }
}

/// Configuration loaded from environment variables
struct Config {
    discord_token: String,
    automation_url: String,
}

/// Initialize the logging system
fn initialize_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(LOG_DIRECTIVE.parse().expect("valid log directive")),
        )
        .init();
}

/// Load configuration from environment variables
fn load_configuration() -> Result<Config, Box<dyn std::error::Error>> {
    let discord_token = std::env::var("DISCORD_TOKEN")
        .map_err(|_| "DISCORD_TOKEN environment variable not set. Set it with: export DISCORD_TOKEN=your_bot_token")?;

    // Optional: automation server base URL
    let automation_url = std::env::var("AUTOMATION_BASE_URL")
        .unwrap_or_else(|_| DEFAULT_AUTOMATION_URL.to_string());

    Ok(Config {
        discord_token,
        automation_url,
    })
}

/// Create and start the Discord bot
async fn start_bot(
    token: String,
    data: Data,
) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    // Create framework
    let framework = poise::Framework::builder()
        .options(poise::FrameworkOptions {
            commands: vec![set(), get(), hello()],
            prefix_options: poise::PrefixFrameworkOptions {
                prefix: Some(COMMAND_PREFIX.to_string()),
                case_insensitive_commands: true,
                ..Default::default()
            },
            on_error: |error| Box::pin(on_error(error)),
            event_handler: |ctx, event, _framework, data| {
                Box::pin(async move {
                    match event {
                        serenity::FullEvent::Ready { data_about_bot } => {
                            handle_ready(data_about_bot, data).await;
                        }
                        serenity::FullEvent::VoiceStateUpdate { old, new } => {
                            handle_voice_state_update(ctx, old.clone(), new.clone()).await;
                        }
                        _ => {}
                    }
                    Ok(())
                })
            },
            ..Default::default()
        })
        .setup(move |_ctx, _ready, _framework| {
            Box::pin(async move {
                info!("Chat commands active with prefix \"{}\"", COMMAND_PREFIX);
                Ok(data)
            })
        })
        .build();

    // Create client with required intents
    let intents = serenity::GatewayIntents::non_privileged()
        | serenity::GatewayIntents::GUILD_VOICE_STATES
        | serenity::GatewayIntents::GUILD_MEMBERS
        | serenity::GatewayIntents::MESSAGE_CONTENT;

    let mut client = serenity::ClientBuilder::new(token, intents)
        .framework(framework)
        .register_songbird()
        .await?;

    // Start the bot
    info!("Starting bot...");
    client.start().await?;

    Ok(())
}

/// Log command failures and surface them as a generic reply so no error
/// leaves an event handler unreported
async fn on_error(error: poise::FrameworkError<'_, Data, models::Error>) {
    match error {
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!("Command '{}' failed: {}", ctx.command().name, error);
            if let Err(e) = ctx
                .say(format_error("Something went wrong running that command."))
                .await
            {
                error!("Failed to report command error: {}", e);
            }
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
