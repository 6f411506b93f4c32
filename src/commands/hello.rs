use std::sync::Arc;

use poise::serenity_prelude::{self as serenity, ChannelId, ChannelType, GuildChannel, GuildId};
use songbird::{
    Event as VoiceEvent, EventContext, EventHandler as VoiceEventHandler, Songbird, TrackEvent,
};
use tracing::{error, info, warn};

use crate::constants::HELLO_AUDIO_PATH;
use crate::models::{Context, Error};
use crate::utils::messages::format_error;
use crate::utils::validation::require_guild;

/// Join a voice channel and play a short greeting
///
/// The target is either the channel ID passed as argument or the channel the
/// caller is currently in.
#[poise::command(prefix_command, guild_only)]
pub async fn hello(ctx: Context<'_>, channel_id: Option<ChannelId>) -> Result<(), Error> {
    let guild_id = require_guild(ctx.guild_id())?;

    let voice_channel = match channel_id {
        Some(id) => match resolve_voice_channel(ctx, id).await {
            Some(channel) => channel,
            None => {
                ctx.say(format_error(&format!(
                    "Could not find a voice channel with ID `{}`.",
                    id
                )))
                .await?;
                return Ok(());
            }
        },
        None => {
            let current_channel_id = ctx.guild().and_then(|guild| {
                guild
                    .voice_states
                    .get(&ctx.author().id)
                    .and_then(|state| state.channel_id)
            });

            let Some(id) = current_channel_id else {
                ctx.say(
                    "You need to be in a voice channel before using this command, \
                     or pass a voice channel ID!",
                )
                .await?;
                return Ok(());
            };

            match resolve_voice_channel(ctx, id).await {
                Some(channel) => channel,
                None => {
                    ctx.say(format_error("Could not resolve your voice channel."))
                        .await?;
                    return Ok(());
                }
            }
        }
    };

    if !bot_can_join_and_speak(ctx, guild_id, &voice_channel).await? {
        ctx.say(format_error(
            "I need permissions to join and speak in that voice channel!",
        ))
        .await?;
        return Ok(());
    }

    let Some(manager) = songbird::get(ctx.serenity_context()).await else {
        error!("Voice manager was not registered at startup");
        ctx.say(format_error("There was an error trying to play the sound!"))
            .await?;
        return Ok(());
    };

    match join_and_play(&manager, guild_id, voice_channel.id).await {
        Ok(()) => {
            // Fetch fresh member data for the most up-to-date display name
            let member = guild_id.member(ctx, ctx.author().id).await?;
            ctx.say(format!(
                "Saying hello to {} at **{}**!",
                member.display_name(),
                voice_channel.name
            ))
            .await?;
        }
        Err(e) => {
            error!(
                "Failed to play greeting in channel {}: {}",
                voice_channel.id, e
            );
            ctx.say(format_error("There was an error trying to play the sound!"))
                .await?;
        }
    }

    Ok(())
}

/// Resolve a channel ID to a voice channel, if it is one
async fn resolve_voice_channel(ctx: Context<'_>, channel_id: ChannelId) -> Option<GuildChannel> {
    match channel_id.to_channel(ctx).await {
        Ok(channel) => channel
            .guild()
            .filter(|channel| channel.kind == ChannelType::Voice),
        Err(_) => None,
    }
}

/// Check that the bot may connect and speak in the given channel
async fn bot_can_join_and_speak(
    ctx: Context<'_>,
    guild_id: GuildId,
    channel: &GuildChannel,
) -> Result<bool, Error> {
    let bot_id = ctx.serenity_context().cache.current_user().id;
    let bot_member = guild_id.member(ctx, bot_id).await?;

    let permissions = {
        let guild = ctx.guild().ok_or("Guild not present in cache")?;
        guild.user_permissions_in(channel, &bot_member)
    };

    Ok(permissions.contains(serenity::Permissions::CONNECT | serenity::Permissions::SPEAK))
}

/// Join the channel and start greeting playback
///
/// The voice connection is released by `DisconnectOnDone` on both the
/// track-end and track-error paths.
async fn join_and_play(
    manager: &Arc<Songbird>,
    guild_id: GuildId,
    channel_id: ChannelId,
) -> Result<(), Error> {
    let call = manager.join(guild_id, channel_id).await?;
    let mut handler = call.lock().await;

    let track = handler.play_input(songbird::input::File::new(HELLO_AUDIO_PATH).into());

    let on_done = DisconnectOnDone {
        manager: Arc::clone(manager),
        guild_id,
    };
    track.add_event(VoiceEvent::Track(TrackEvent::End), on_done.clone())?;
    track.add_event(VoiceEvent::Track(TrackEvent::Error), on_done)?;

    Ok(())
}

/// Leaves the voice channel once greeting playback ends or fails
#[derive(Clone)]
struct DisconnectOnDone {
    manager: Arc<Songbird>,
    guild_id: GuildId,
}

#[async_trait::async_trait]
impl VoiceEventHandler for DisconnectOnDone {
    async fn act(&self, _ctx: &EventContext<'_>) -> Option<VoiceEvent> {
        info!(
            "Greeting playback finished, disconnecting from guild {}",
            self.guild_id
        );

        // A second firing after the call is already gone is a no-op
        if let Err(e) = self.manager.remove(self.guild_id).await {
            warn!(
                "Failed to leave voice channel in guild {}: {}",
                self.guild_id, e
            );
        }

        None
    }
}
