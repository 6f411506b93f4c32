use poise::serenity_prelude::{
    self as serenity, ChannelId, ChannelType, CreateChannel, GuildChannel, GuildId, UserId,
};
use tracing::{error, info};

use crate::constants::{ROOM_USER_LIMIT, TARGET_CATEGORY_NAME};
use crate::models::Error;
use crate::utils::channel_utils::format_room_name;
use crate::utils::messages::build_missing_category_error;

/// Create a room for a user who joined the generator channel
///
/// The room is placed in the target category, copies the generator's bitrate
/// and permission overwrites, and the user is moved into it.
pub async fn create_member_room(
    ctx: &serenity::Context,
    generator_channel: &GuildChannel,
    user_id: UserId,
    guild_id: GuildId,
) -> Result<(), Error> {
    // Fetch fresh member data for the most up-to-date display name
    let member = guild_id.member(ctx, user_id).await?;
    let room_name = format_room_name(member.display_name());

    let target_category = find_category_by_name(ctx, guild_id, TARGET_CATEGORY_NAME)
        .await?
        .ok_or_else(|| build_missing_category_error(TARGET_CATEGORY_NAME))?;

    // Build the channel creation request
    let mut create_channel = CreateChannel::new(&room_name)
        .kind(ChannelType::Voice)
        .category(target_category)
        .user_limit(ROOM_USER_LIMIT)
        .permissions(generator_channel.permission_overwrites.to_vec());

    if let Some(bitrate) = generator_channel.bitrate {
        create_channel = create_channel.bitrate(bitrate);
    }

    let room = guild_id.create_channel(ctx, create_channel).await?;
    info!("Created room \"{}\" for user {}", room.name, user_id);

    // Move the user to their new room
    guild_id.move_member(ctx, user_id, room.id).await?;
    info!("Moved user {} into room {}", user_id, room.id);

    Ok(())
}

/// Delete an empty generated room
///
/// Failures are logged and swallowed so a room already deleted by a
/// concurrent update is a no-op.
pub async fn delete_empty_room(ctx: &serenity::Context, channel: &GuildChannel) {
    if let Err(e) = channel.id.delete(ctx).await {
        error!("Failed to delete room \"{}\": {}", channel.name, e);
    } else {
        info!("Deleted empty room \"{}\"", channel.name);
    }
}

/// Find a category channel by name in a guild
async fn find_category_by_name(
    ctx: &serenity::Context,
    guild_id: GuildId,
    name: &str,
) -> Result<Option<ChannelId>, Error> {
    let channels = guild_id.channels(ctx).await?;

    Ok(channels
        .values()
        .find(|channel| channel.kind == ChannelType::Category && channel.name == name)
        .map(|channel| channel.id))
}
