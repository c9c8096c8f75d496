//! Library root for `ticket-bot`.
//!
//! Ticket-bot watches Slack channels for ticket references ("#123") and
//! answers each one with an enriched notification:
//! - Fetches the referenced issue from Redmine
//! - Resolves the issue's assignee to a Slack mention where possible
//! - Posts the issue link, subject, assignee, and status back to the channel
//!
//! The bot integrates with Slack for chat and Redmine for issue data. The
//! architecture is built around extensible traits that allow for different
//! implementations of each service.

pub mod base;
pub mod interaction;
pub mod runtime;
pub mod service;

use base::{config::Config, types::Void};
use rustls::crypto;
use tracing::info;

/// Public async entry for the binary crate.
///
/// Sets up necessary services and starts the ticket-bot runtime:
/// - Initializes the crypto provider
/// - Creates the runtime context with tracker and chat clients
/// - Starts the socket listener for processing messages
pub async fn start(config: Config) -> Void {
    info!("Starting ticket-bot ...");

    // Start the crypto provider.
    crypto::ring::default_provider().install_default().unwrap();

    // Initialize the runtime.
    let runtime = runtime::Runtime::new(config).await?;

    // Start the runtime.
    runtime.start().await?;

    Ok(())
}
