/// Handler modules for Discord events
mod channel;
mod ready;
mod voice;

// Re-export main handler functions
pub use ready::handle_ready;
pub use voice::handle_voice_state_update;
