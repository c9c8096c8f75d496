//! Deterministic formatting of the outbound notification.

use crate::base::types::{Issue, Notification, NotificationField, ResolvedAssignee};

/// Build the outbound notification for an issue.
///
/// The primary line links the ticket reference back to the issue page; the
/// two short fields carry the resolved assignee (first) and the status.
pub fn format_notification(issue: &Issue, endpoint: &str, assignee: &ResolvedAssignee) -> Notification {
    let text = format!("<{endpoint}/issues/{id}|#{id}>: {subject}", id = issue.id, subject = issue.subject);

    let fields = vec![
        NotificationField {
            title: "Assignee".to_string(),
            value: assignee.render(),
            short: true,
        },
        NotificationField {
            title: "Status".to_string(),
            value: issue.status_name.clone(),
            short: true,
        },
    ];

    Notification { text, fields }
}

// Tests.
