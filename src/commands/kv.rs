use tracing::info;

use crate::bridge::BridgeResponse;
use crate::models::{Context, Error};
use crate::utils::messages::{
    build_get_usage, build_set_usage, format_error, format_success, format_value_display,
};

/// Store a key/value pair on the automation server
#[poise::command(prefix_command)]
pub async fn set(ctx: Context<'_>, key: Option<String>, value: Vec<String>) -> Result<(), Error> {
    let Some(key) = key else {
        ctx.say(build_set_usage()).await?;
        return Ok(());
    };
    if value.is_empty() {
        ctx.say(build_set_usage()).await?;
        return Ok(());
    }

    // Re-join the remaining tokens as the value
    let value = value.join(" ");

    match ctx.data().bridge.set_value(&key, &value).await {
        BridgeResponse::Success { .. } => {
            info!("Stored key \"{}\" for user {}", key, ctx.author().id);
            ctx.say(format_success(&format!(
                "Successfully set the value for `{}`.",
                key
            )))
            .await?;
        }
        BridgeResponse::Error { message } => {
            ctx.say(format_error(&format!(
                "Failed to set value. The automation server said: {}",
                message
            )))
            .await?;
        }
    }

    Ok(())
}

/// Retrieve the value stored under a key on the automation server
#[poise::command(prefix_command)]
pub async fn get(ctx: Context<'_>, key: Option<String>) -> Result<(), Error> {
    let Some(key) = key else {
        ctx.say(build_get_usage()).await?;
        return Ok(());
    };

    match ctx.data().bridge.get_value(&key).await {
        BridgeResponse::Success { key, value } => {
            let display = format_value_display(&value.unwrap_or(serde_json::Value::Null));
            ctx.say(format!("🔍 The value for `{}` is: `{}`", key, display))
                .await?;
        }
        BridgeResponse::Error { message } => {
            ctx.say(format_error(&format!(
                "Could not get value. The automation server said: {}",
                message
            )))
            .await?;
        }
    }

    Ok(())
}
