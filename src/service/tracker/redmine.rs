//! Redmine integration for the ticketing side of the pipeline.
//!
//! A thin REST client over the Redmine JSON API. Only the two read endpoints
//! the pipeline needs are implemented: issue detail and user detail.

use std::{sync::Arc, time::Duration};

use async_trait::async_trait;
use serde::Deserialize;
use tracing::instrument;

use crate::base::{
    config::Config,
    types::{AccountRef, Issue, Res, TrackerUser},
};

use super::{GenericTrackerClient, TrackerClient};

// Extra methods on `TrackerClient` applied by the redmine implementation.

impl TrackerClient {
    /// Creates a new Redmine tracker client.
    pub fn redmine(config: &Config) -> Res<Self> {
        let client = RedmineClient::new(config)?;
        Ok(Self { inner: Arc::new(client) })
    }
}

// Wire types.

/// Envelope of `GET /issues/<id>.json`.
#[derive(Debug, Deserialize)]
struct IssueEnvelope {
    issue: IssueBody,
}

#[derive(Debug, Deserialize)]
struct IssueBody {
    id: u64,
    subject: String,
    status: NamedRef,
    assigned_to: Option<NamedRef>,
}

/// Redmine's `{ id, name }` sub-object.
#[derive(Debug, Deserialize)]
struct NamedRef {
    id: u64,
    name: String,
}

/// Envelope of `GET /users/<id>.json`.
#[derive(Debug, Deserialize)]
struct UserEnvelope {
    user: UserBody,
}

#[derive(Debug, Deserialize)]
struct UserBody {
    id: u64,
    login: String,
    firstname: String,
    lastname: String,
}

// Structs.

/// Redmine REST client implementation.
#[derive(Clone)]
struct RedmineClient {
    endpoint: String,
    api_key: String,
    http: reqwest::Client,
}

impl RedmineClient {
    /// Create a new Redmine client with a bounded request timeout.
    fn new(config: &Config) -> Res<Self> {
        let http = reqwest::Client::builder().timeout(Duration::from_secs(config.redmine_timeout_secs)).build()?;

        Ok(Self {
            endpoint: config.redmine_endpoint.clone(),
            api_key: config.redmine_api_key.clone(),
            http,
        })
    }

    async fn fetch<T: serde::de::DeserializeOwned>(&self, path: &str) -> Res<T> {
        let url = format!("{}/{path}", self.endpoint);

        let response = self.http.get(&url).header("X-Redmine-API-Key", &self.api_key).send().await?.error_for_status()?;

        Ok(response.json::<T>().await?)
    }
}

#[async_trait]
impl GenericTrackerClient for RedmineClient {
    #[instrument(skip(self))]
    async fn get_issue(&self, id: u64) -> Res<Issue> {
        let envelope: IssueEnvelope = self.fetch(&format!("issues/{id}.json")).await?;
        let issue = envelope.issue;

        Ok(Issue {
            id: issue.id,
            subject: issue.subject,
            status_name: issue.status.name,
            assignee: issue.assigned_to.map(|a| AccountRef {
                id: a.id,
                display_name: a.name,
            }),
        })
    }

    #[instrument(skip(self))]
    async fn get_user(&self, id: u64) -> Res<TrackerUser> {
        let envelope: UserEnvelope = self.fetch(&format!("users/{id}.json")).await?;
        let user = envelope.user;

        Ok(TrackerUser {
            id: user.id,
            login: user.login,
            first_name: user.firstname,
            last_name: user.lastname,
        })
    }
}
