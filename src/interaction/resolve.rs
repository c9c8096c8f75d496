//! Best-effort resolution of an issue assignee to a chat display token.

use tracing::debug;

use crate::{
    base::{
        aliases::AliasTable,
        types::{AccountRef, ResolvedAssignee, TrackerUser},
    },
    interaction::identity,
    service::{chat::ChatClient, tracker::TrackerClient},
};

/// Group names the chat platform treats as channel-wide broadcasts rather
/// than personal mentions.
const BROADCAST_GROUPS: [&str; 3] = ["channel", "here", "everyone"];

/// Resolve an issue's assignee reference to a display token.
///
/// Never fails: every lookup failure degrades to a plainer token instead of
/// aborting the notification.
pub async fn resolve_assignee(assignee: Option<&AccountRef>, tracker: &TrackerClient, chat: &ChatClient, aliases: &AliasTable) -> ResolvedAssignee {
    let Some(assignee) = assignee else {
        return ResolvedAssignee::Absent;
    };

    // The label to fall back on if the ticketing-user fetch fails.
    let fallback = aliases.resolve(&assignee.display_name);

    let tracker_user = match tracker.get_user(assignee.id).await {
        Ok(user) => user,
        Err(err) => {
            debug!("Ticketing user {} lookup failed: {}", assignee.id, err);

            if BROADCAST_GROUPS.contains(&fallback) {
                return ResolvedAssignee::Broadcast(fallback.to_string());
            }
            return ResolvedAssignee::Name(fallback.to_string());
        }
    };

    // A manual override on the login applies before directory matching.
    let login = aliases.resolve(&tracker_user.login).to_string();
    let tracker_user = TrackerUser {
        login: login.clone(),
        ..tracker_user
    };

    let directory = match chat.list_users().await {
        Ok(users) => users,
        Err(err) => {
            debug!("Chat directory lookup failed: {}", err);
            return ResolvedAssignee::Name(login);
        }
    };

    // First matching directory entry wins; directory order is authoritative.
    for chat_user in &directory {
        if identity::is_same_user(&tracker_user, chat_user, aliases) {
            return ResolvedAssignee::Mention(chat_user.id.clone());
        }
    }

    ResolvedAssignee::Name(login)
}
