use tracing::{Instrument, debug, error, instrument};

use crate::{
    base::{
        aliases::AliasTable,
        config::Config,
        types::{MessageEvent, Void},
    },
    interaction::{notification, resolve, ticket},
    service::{chat::ChatClient, tracker::TrackerClient},
};

/// Handles an inbound message event.
///
/// Spawns a task per event so one slow backend call cannot stall the
/// listener; errors are logged, never propagated back to the socket loop.
#[instrument(skip_all)]
pub fn handle_message_event(event: MessageEvent, config: Config, tracker: TrackerClient, chat: ChatClient, aliases: AliasTable) {
    tokio::spawn(async move {
        // Process the event.
        let result = process_message(event, &config, &tracker, &chat, &aliases).in_current_span().await;

        // Log any errors.
        if let Err(err) = &result {
            error!("Error while handling: {}", err);
        }
    });
}

/// Process a single message event to completion.
///
/// Each message gets at most one attempt: a parse miss or a failed issue
/// fetch drops the message silently, while assignee resolution degrades
/// instead of failing. Only a failed post surfaces as an error.
#[instrument(skip_all)]
pub async fn process_message(event: MessageEvent, config: &Config, tracker: &TrackerClient, chat: &ChatClient, aliases: &AliasTable) -> Void {
    // System and bot messages never trigger notifications.
    if event.sender_id.is_empty() {
        return Ok(());
    }

    let Some(ticket_id) = ticket::extract_ticket_id(&event.text) else {
        return Ok(());
    };

    let issue = match tracker.get_issue(ticket_id).await {
        Ok(issue) => issue,
        Err(err) => {
            debug!("Issue {} lookup failed: {}", ticket_id, err);
            return Ok(());
        }
    };

    let resolved = resolve::resolve_assignee(issue.assignee.as_ref(), tracker, chat, aliases).await;
    let notification = notification::format_notification(&issue, &config.redmine_endpoint, &resolved);

    // A fixed notification channel, when configured, overrides the
    // originating channel.
    let channel_id = config.notify_channel.as_deref().unwrap_or(&event.channel_id);

    chat.post_message(channel_id, &notification).await?;

    Ok(())
}
