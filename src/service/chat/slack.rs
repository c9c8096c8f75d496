//! Chat service integration for ticket-bot.
//!
//! This module provides functionality for interacting with chat platforms like Slack:
//! - Receiving message events over Socket Mode
//! - Posting notifications with structured fields
//! - Enumerating the workspace user directory
//!
//! It defines the Slack implementation of the `GenericChatClient` trait.

use crate::{
    base::{
        aliases::AliasTable,
        config::Config,
        types::{ChatUser, MessageEvent, Notification, Res, Void},
    },
    interaction,
    service::tracker::TrackerClient,
};
use async_trait::async_trait;
use hyper_rustls::HttpsConnector;
use hyper_util::client::legacy::connect::HttpConnector;
use slack_morphism::prelude::*;
use tracing::{debug, info, instrument};

use std::{ops::Deref, sync::Arc};

use super::{ChatClient, GenericChatClient};

// Type aliases.

type FullClient = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

// Extra methods on `ChatClient` applied by the slack implementation.

impl ChatClient {
    /// Creates a new Slack chat client.
    pub async fn slack(config: &Config, tracker: TrackerClient, aliases: AliasTable) -> Res<Self> {
        let client = SlackChatClient::new(config, tracker, aliases).await?;
        Ok(Self { inner: Arc::new(client) })
    }
}

impl From<SlackChatClient> for ChatClient {
    fn from(client: SlackChatClient) -> Self {
        Self { inner: Arc::new(client) }
    }
}

// Structs.

/// User state for the slack socket client.
struct SlackUserState {
    config: Config,
    tracker: TrackerClient,
    chat: ChatClient,
    aliases: AliasTable,
}

/// Slack client implementation.
#[derive(Clone)]
struct SlackChatClient {
    pub app_token: SlackApiToken,
    pub bot_token: SlackApiToken,
    pub bot_user_id: String,
    pub client: Arc<FullClient>,
    pub config: Config,
    pub tracker: TrackerClient,
    pub aliases: AliasTable,
}

impl Deref for SlackChatClient {
    type Target = slack_morphism::SlackClient<SlackClientHyperConnector<HttpsConnector<HttpConnector>>>;

    fn deref(&self) -> &Self::Target {
        &self.client
    }
}

impl SlackChatClient {
    /// Create a new Slack chat client.
    #[instrument(name = "SlackChatClient::new", skip_all)]
    pub async fn new(config: &Config, tracker: TrackerClient, aliases: AliasTable) -> Res<Self> {
        // Initialize tokens.

        let app_token = SlackApiToken::new(SlackApiTokenValue(config.slack_app_token.clone()));
        let bot_token = SlackApiToken::new(SlackApiTokenValue(config.slack_bot_token.clone()));

        // Initialize the Slack client.

        let https_connector = HttpsConnector::<HttpConnector>::builder().with_native_roots()?.https_only().enable_all_versions().build();
        let connector = SlackClientHyperConnector::with_connector(https_connector);
        let client = Arc::new(slack_morphism::SlackClient::new(connector));

        // Get the bot's user ID.

        let session = client.open_session(&bot_token);
        let bot_user = session.auth_test().await?;
        let bot_user_id = bot_user.user_id.0;

        info!("Slack bot user ID: {}", bot_user_id);

        Ok(Self {
            app_token,
            bot_token,
            bot_user_id,
            client,
            config: config.clone(),
            tracker,
            aliases,
        })
    }
}

#[async_trait]
impl GenericChatClient for SlackChatClient {
    fn bot_user_id(&self) -> &str {
        &self.bot_user_id
    }

    async fn start(&self) -> Void {
        // Initialize the socket mode listener.

        let socket_mode_callbacks = SlackSocketModeListenerCallbacks::new().with_push_events(handle_push_event);

        // Initialize the socket mode listener environment.

        let listener_environment = Arc::new(SlackClientEventsListenerEnvironment::new(self.client.clone()).with_user_state(SlackUserState {
            config: self.config.clone(),
            tracker: self.tracker.clone(),
            aliases: self.aliases.clone(),
            chat: ChatClient::from(self.clone()),
        }));

        let socket_mode_listener = Arc::new(SlackClientSocketModeListener::new(
            &SlackClientSocketModeConfig::new(),
            listener_environment.clone(),
            socket_mode_callbacks,
        ));

        // Register an app token to listen for events,
        socket_mode_listener.listen_for(&self.app_token).await?;

        // Start WS connections calling Slack API to get WS url for the token,
        // and wait for Ctrl-C to shutdown.
        socket_mode_listener.serve().await;

        Ok(())
    }

    #[instrument(skip(self, notification))]
    async fn post_message(&self, channel_id: &str, notification: &Notification) -> Void {
        let fields = notification
            .fields
            .iter()
            .map(|field| {
                SlackMessageAttachmentFieldObject::new()
                    .with_title(field.title.clone())
                    .with_value(field.value.clone())
                    .with_short(field.short)
            })
            .collect::<Vec<_>>();

        let attachment = SlackMessageAttachment::new().with_fields(fields);
        let content = SlackMessageContent::new().with_text(notification.text.clone()).with_attachments(vec![attachment]);

        let request = SlackApiChatPostMessageRequest::new(SlackChannelId(channel_id.to_string()), content)
            .with_as_user(true)
            .with_link_names(true);

        let session = self.client.open_session(&self.bot_token);

        let _ = session.chat_post_message(&request).await.map_err(|e| anyhow::anyhow!("Failed to post message: {}", e))?;

        Ok(())
    }

    #[instrument(skip(self))]
    async fn list_users(&self) -> Res<Vec<ChatUser>> {
        let session = self.client.open_session(&self.bot_token);

        let mut users = Vec::new();
        let mut cursor: Option<SlackCursorId> = None;

        loop {
            let mut request = SlackApiUsersListRequest::new();
            if let Some(c) = cursor.take() {
                request = request.with_cursor(c);
            }

            let response = session.users_list(&request).await.map_err(|e| anyhow::anyhow!("Failed to list users: {}", e))?;

            users.extend(response.members.into_iter().map(|member| {
                let real_name = member.profile.as_ref().and_then(|p| p.real_name.clone()).unwrap_or_default();

                ChatUser {
                    id: member.id.0,
                    handle: member.name.unwrap_or_default(),
                    real_name,
                }
            }));

            cursor = response.response_metadata.and_then(|m| m.next_cursor).filter(|c| !c.0.is_empty());
            if cursor.is_none() {
                break;
            }
        }

        Ok(users)
    }
}

// Socket mode listener callbacks for Slack.

/// Handles push events from Slack.
#[instrument(skip_all)]
async fn handle_push_event(event_callback: SlackPushEventCallback, _client: Arc<SlackHyperClient>, states: SlackClientEventsUserState) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    let event = event_callback.event;
    let states = states.read().await;
    let user_state = states.get_user_state::<SlackUserState>().ok_or(anyhow::anyhow!("Failed to get user state"))?;

    match event {
        SlackEventCallbackBody::Message(message_event) => {
            info!("Received message event ...");

            let channel_id = message_event.origin.channel.as_ref().map(|c| c.0.clone()).unwrap_or_default();
            if channel_id.is_empty() {
                return Ok(());
            }

            // The bot's own posts come back through the event stream; an empty
            // sender already covers system messages, this covers the bot itself.
            let sender_id = message_event.sender.user.as_ref().map(|u| u.0.clone()).unwrap_or_default();
            if sender_id == user_state.chat.bot_user_id() {
                return Ok(());
            }

            let text = message_event.content.as_ref().and_then(|c| c.text.clone()).unwrap_or_default();

            let event = MessageEvent { sender_id, channel_id, text };

            interaction::message_event::handle_message_event(
                event,
                user_state.config.clone(),
                user_state.tracker.clone(),
                user_state.chat.clone(),
                user_state.aliases.clone(),
            );
        }
        _ => {
            debug!("Received unhandled push event.")
        }
    }

    Ok(())
}
