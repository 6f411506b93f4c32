// Command modules
mod hello;
mod kv;

// Re-export all commands
pub use hello::hello;
pub use kv::{get, set};
