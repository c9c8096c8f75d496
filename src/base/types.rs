use serde::{Deserialize, Serialize};

pub type Err = anyhow::Error;
pub type Res<T> = Result<T, Err>;
pub type Void = Res<()>;

/// Inbound chat message, reduced to the fields the pipeline cares about.
///
/// An empty `sender_id` marks a system or bot message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageEvent {
    pub sender_id: String,
    pub channel_id: String,
    pub text: String,
}

/// Snapshot of an issue fetched from the ticketing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Issue {
    pub id: u64,
    pub subject: String,
    pub status_name: String,
    pub assignee: Option<AccountRef>,
}

/// Minimal account reference as embedded in an issue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountRef {
    pub id: u64,
    pub display_name: String,
}

/// Full user record from the ticketing backend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrackerUser {
    pub id: u64,
    pub login: String,
    pub first_name: String,
    pub last_name: String,
}

/// One entry of the chat platform's user directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatUser {
    pub id: String,
    pub handle: String,
    pub real_name: String,
}

/// Best-effort display token for an issue assignee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ResolvedAssignee {
    /// The issue has no assignee.
    Absent,
    /// A directory match; renders as a notifying mention of the chat user id.
    Mention(String),
    /// A reserved group name; renders as a channel-wide broadcast.
    Broadcast(String),
    /// Plain display name, used when directory matching was impossible or failed.
    Name(String),
}

impl ResolvedAssignee {
    /// Render the token the way the chat platform expects it inside message text.
    pub fn render(&self) -> String {
        match self {
            Self::Absent => String::new(),
            Self::Mention(id) => format!("<@{id}>"),
            Self::Broadcast(group) => format!("<!{group}>"),
            Self::Name(name) => name.clone(),
        }
    }
}

/// Outbound notification content handed to the chat transport.
///
/// The transport decides presentation (attachment layout, colors); the
/// formatter only guarantees the text and the field ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub text: String,
    pub fields: Vec<NotificationField>,
}

/// A titled field attached to a notification.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NotificationField {
    pub title: String,
    pub value: String,
    pub short: bool,
}
