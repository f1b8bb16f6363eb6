use notibell_bridge::connection::ConnectionState;

use crate::page::{ListEntry, Page, Toast, ToastPhase};

/// Formats the bell with its unread count, e.g. `[bell 4]`.
pub fn format_bell(page: &Page) -> String {
    match (page.has_notification_affordance(), page.badge_text()) {
        (false, _) => "[no bell]".to_owned(),
        (true, None) => "[bell]".to_owned(),
        (true, Some(count)) => format!("[bell {count}]"),
    }
}

/// Formats a notification list entry as `message -> url (time)`.
pub fn format_entry(entry: &ListEntry) -> String {
    format!("{} -> {} ({})", entry.message, entry.url, entry.time_label)
}

/// Formats a toast with its lifecycle phase.
pub fn format_toast(toast: &Toast) -> String {
    let phase = match toast.phase {
        ToastPhase::Hidden => "entering",
        ToastPhase::Shown => "shown",
        ToastPhase::Leaving => "leaving",
    };
    format!("toast #{} ({phase}): {}", toast.id.0, toast.message)
}

/// Short status line for the connection indicator.
pub fn format_connection(state: ConnectionState) -> String {
    match state {
        ConnectionState::Open => "live".to_owned(),
        other => format!("offline ({other})"),
    }
}
