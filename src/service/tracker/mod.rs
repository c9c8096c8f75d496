pub mod redmine;

use std::{ops::Deref, sync::Arc};

use async_trait::async_trait;

use crate::base::types::{Issue, Res, TrackerUser};

// Traits.

/// Generic ticketing-backend trait that clients must implement.
///
/// This trait defines the read surface the pipeline needs from a ticketing
/// system like Redmine. Implementing this trait allows different backends to
/// be used with ticket-bot.
#[async_trait]
pub trait GenericTrackerClient: Send + Sync + 'static {
    /// Fetch a single issue snapshot by its ticket id.
    ///
    /// A missing or inaccessible issue is an error; the pipeline treats it
    /// as a silent skip for that message.
    async fn get_issue(&self, id: u64) -> Res<Issue>;

    /// Fetch the full user record behind an account reference.
    ///
    /// Used to obtain the login and name parts needed for identity matching
    /// against the chat directory.
    async fn get_user(&self, id: u64) -> Res<TrackerUser>;
}

// Structs.

/// Ticketing client for the application.
///
/// It is designed to be trivially cloneable, allowing it to be passed around
/// without the need for `Arc` or `Mutex`.
#[derive(Clone)]
pub struct TrackerClient {
    inner: Arc<dyn GenericTrackerClient>,
}

impl Deref for TrackerClient {
    type Target = dyn GenericTrackerClient;

    fn deref(&self) -> &Self::Target {
        &*self.inner
    }
}

impl TrackerClient {
    pub fn new(inner: Arc<dyn GenericTrackerClient>) -> Self {
        Self { inner }
    }
}
