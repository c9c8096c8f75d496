//! Runtime services and shared state for ticket-bot.

use tracing::instrument;

use crate::{
    base::{
        aliases::AliasTable,
        config::Config,
        types::{Res, Void},
    },
    service::{chat::ChatClient, tracker::TrackerClient},
};

/// Runtime service context that can be shared across the application.
///
/// This struct holds the tracker client, chat client, alias table, and
/// configuration. It is designed to be trivially cloneable, allowing it to
/// be passed around without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct Runtime {
    /// The configuration for the application.
    pub config: Config,
    /// The manual name-override table.
    pub aliases: AliasTable,
    /// The ticketing client instance.
    pub tracker: TrackerClient,
    /// The chat client instance.
    pub chat: ChatClient,
}

impl Runtime {
    /// Create a new runtime instance.
    #[instrument(skip_all)]
    pub async fn new(config: Config) -> Res<Self> {
        // Load the alias overrides.
        let aliases = AliasTable::load(&config.alias_file);

        // Initialize the tracker client.
        let tracker = TrackerClient::redmine(&config)?;

        // Initialize the slack client.
        let chat = ChatClient::slack(&config, tracker.clone(), aliases.clone()).await?;

        Ok(Self { config, aliases, tracker, chat })
    }

    pub async fn start(&self) -> Void {
        self.chat.start().await
    }
}
