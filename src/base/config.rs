//! Load configuration via `config` crate with env-override support.

use std::{ops::Deref, path::PathBuf, sync::Arc};

use serde::Deserialize;

use super::types::Res;

/// Default location of the manual name-mapping file.
fn default_alias_file() -> PathBuf {
    PathBuf::from("./usermapping.json")
}

/// Default request timeout for ticketing API calls, in seconds.
fn default_redmine_timeout_secs() -> u64 {
    10
}

/// Configuration for the ticket-bot application.
#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub inner: Arc<ConfigInner>,
}

impl Deref for Config {
    type Target = ConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct ConfigInner {
    /// Slack app token (`SLACK_APP_TOKEN`).
    pub slack_app_token: String,
    /// Slack bot token (`SLACK_BOT_TOKEN`).
    pub slack_bot_token: String,
    /// Redmine endpoint URL (`REDMINE_ENDPOINT`).
    pub redmine_endpoint: String,
    /// Redmine API key (`REDMINE_API_KEY`).
    pub redmine_api_key: String,
    /// Path to the manual name-mapping JSON file (`ALIAS_FILE`).
    ///
    /// The file is a flat JSON object of display name to override name. A
    /// missing file simply disables overrides.
    #[serde(default = "default_alias_file")]
    pub alias_file: PathBuf,
    /// Fixed channel to post notifications to (`NOTIFY_CHANNEL`).
    ///
    /// When unset, notifications go back to the originating channel.
    #[serde(default)]
    pub notify_channel: Option<String>,
    /// Request timeout for Redmine API calls, in seconds (`REDMINE_TIMEOUT_SECS`).
    #[serde(default = "default_redmine_timeout_secs")]
    pub redmine_timeout_secs: u64,
}

impl Config {
    pub fn load(explicit_path: Option<&std::path::Path>) -> Res<Self> {
        let mut cfg = config::Config::builder().add_source(config::Environment::default().prefix("TICKET_BOT"));

        if let Some(p) = explicit_path {
            cfg = cfg.add_source(config::File::from(p.to_path_buf()));
        } else if std::path::Path::new(".hidden/config.toml").exists() {
            cfg = cfg.add_source(config::File::with_name(".hidden/config.toml"));
        }

        let mut inner: ConfigInner = cfg.build()?.try_deserialize()?;

        if !inner.redmine_endpoint.starts_with("http://") && !inner.redmine_endpoint.starts_with("https://") {
            return Err(anyhow::anyhow!("Redmine endpoint must be an http(s) URL."));
        }

        // Issue links are built as `<endpoint>/issues/<id>`.
        while inner.redmine_endpoint.ends_with('/') {
            inner.redmine_endpoint.pop();
        }

        if inner.redmine_timeout_secs < 1 || inner.redmine_timeout_secs > 300 {
            return Err(anyhow::anyhow!("Redmine timeout must be between 1 and 300 seconds."));
        }

        Ok(Config {
            inner: Arc::new(inner),
        })
    }
}
