use crate::bridge::BridgeClient;

/// Bot state shared across all handlers
#[derive(Clone)]
pub struct Data {
    /// HTTP client for the automation server
    pub bridge: BridgeClient,
}

impl Data {
    /// Create a new Data instance with the given bridge client
    pub fn new(bridge: BridgeClient) -> Self {
        Self { bridge }
    }
}

pub type Error = Box<dyn std::error::Error + Send + Sync>;
pub type Context<'a> = poise::Context<'a, Data, Error>;
