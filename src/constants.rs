/// Prefix character for chat commands
pub const COMMAND_PREFIX: &str = "!";

/// Name of the generator channel that spawns per-user rooms
pub const GENERATOR_CHANNEL_NAME: &str = "➕ Create Channel";

/// Category holding the generator channel
pub const STAGING_CATEGORY_NAME: &str = "═══════ temp voice ═══════";

/// Category receiving generated rooms
pub const TARGET_CATEGORY_NAME: &str = "════════ VOICE ════════";

/// User limit applied to generated rooms
pub const ROOM_USER_LIMIT: u32 = 4;

/// Key under which the bot reports its status to the automation server
pub const BOT_STATUS_KEY: &str = "botStatus";

/// Default base URL for the automation server
pub const DEFAULT_AUTOMATION_URL: &str = "http://127.0.0.1:1880";

/// Audio asset played by the hello command
pub const HELLO_AUDIO_PATH: &str = "audio/hello.mp3";

/// Log directive for the application
pub const LOG_DIRECTIVE: &str = "concierge_rs=info";
