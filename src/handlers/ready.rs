use poise::serenity_prelude::Ready;
use tracing::{info, warn};

use crate::bridge::BridgeResponse;
use crate::constants::BOT_STATUS_KEY;
use crate::models::Data;

/// Announce startup: log the logged-in account and flag the bot as online on
/// the automation server
pub async fn handle_ready(ready: &Ready, data: &Data) {
    info!("Ready! Logged in as {}", ready.user.name);

    if let BridgeResponse::Error { message } = data.bridge.set_value(BOT_STATUS_KEY, "true").await {
        warn!(
            "Failed to report bot status to the automation server: {}",
            message
        );
    }
}
