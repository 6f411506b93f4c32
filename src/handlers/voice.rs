use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, GuildChannel, GuildId, UserId, VoiceState,
};
use tracing::error;

use crate::constants::{GENERATOR_CHANNEL_NAME, STAGING_CATEGORY_NAME, TARGET_CATEGORY_NAME};
use crate::utils::channel_utils::is_generated_room_name;

use super::channel::{create_member_room, delete_empty_room};

/// Handle voice state updates (user joins/leaves voice channels)
///
/// The leave and join sides are evaluated independently: one update can in
/// principle trigger both, and a failure on one side never blocks the other.
pub async fn handle_voice_state_update(
    ctx: &serenity::Context,
    old_state: Option<VoiceState>,
    new_state: VoiceState,
) {
    let guild_id = match new_state.guild_id {
        Some(id) => id,
        None => return,
    };

    // Handle user leaving a channel
    if let Some(old) = &old_state
        && let Some(old_channel_id) = old.channel_id
    {
        handle_user_left_channel(ctx, old_channel_id).await;
    }

    // Handle user joining a channel
    if let Some(new_channel_id) = new_state.channel_id {
        handle_user_joined_channel(ctx, new_channel_id, new_state.user_id, guild_id).await;
    }
}

/// Delete the channel a user left if it is a now-empty generated room
async fn handle_user_left_channel(ctx: &serenity::Context, channel_id: ChannelId) {
    let Some(channel) = fetch_guild_channel(ctx, channel_id).await else {
        return;
    };

    // Only generated rooms under the target category are eligible for cleanup
    if !is_generated_room_name(&channel.name) {
        return;
    }
    if !parent_category_is(ctx, &channel, TARGET_CATEGORY_NAME).await {
        return;
    }

    if let Ok(members) = channel.members(ctx)
        && members.is_empty()
    {
        delete_empty_room(ctx, &channel).await;
    }
}

/// Spawn a room for a user who joined the generator channel
async fn handle_user_joined_channel(
    ctx: &serenity::Context,
    channel_id: ChannelId,
    user_id: UserId,
    guild_id: GuildId,
) {
    let Some(channel) = fetch_guild_channel(ctx, channel_id).await else {
        return;
    };

    if channel.name != GENERATOR_CHANNEL_NAME {
        return;
    }
    if !parent_category_is(ctx, &channel, STAGING_CATEGORY_NAME).await {
        return;
    }

    if let Err(e) = create_member_room(ctx, &channel, user_id, guild_id).await {
        error!("Failed to create room for user {}: {}", user_id, e);
    }
}

/// Fetch a channel and narrow it to a guild channel
async fn fetch_guild_channel(
    ctx: &serenity::Context,
    channel_id: ChannelId,
) -> Option<GuildChannel> {
    match channel_id.to_channel(ctx).await {
        Ok(channel) => channel.guild(),
        Err(_) => None,
    }
}

/// Check whether a channel's parent category has the given name
async fn parent_category_is(
    ctx: &serenity::Context,
    channel: &GuildChannel,
    category_name: &str,
) -> bool {
    let Some(parent_id) = channel.parent_id else {
        return false;
    };

    match fetch_guild_channel(ctx, parent_id).await {
        Some(parent) => parent.kind == ChannelType::Category && parent.name == category_name,
        None => false,
    }
}
