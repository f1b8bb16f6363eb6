//! In-memory model of the admin page.
//!
//! Every element the notification features touch is optional: a page template
//! may or may not render a bell, a notification list, or a result table.
//! Features look their targets up and silently do nothing when a target is
//! missing.

pub mod badge;
pub mod floating_label;
pub mod list;
pub mod table_filter;
pub mod toast;

use std::collections::VecDeque;

pub use self::floating_label::{FieldEvent, MaterialField};
pub use self::table_filter::{SearchInput, Table, TableRow};
pub use self::toast::{Toast, ToastContainer, ToastId, ToastPhase};

/// Unread counter rendered next to the bell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Badge {
    /// Text as rendered. Usually a number, but not guaranteed to be one.
    pub text: String,
}

impl Badge {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Bell affordance of the page header. Anchor for the badge.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Bell {
    pub badge: Option<Badge>,
}

/// One entry of the notification dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListEntry {
    pub message: String,
    pub url: String,
    /// Relative time label. Fixed at insertion, never refreshed.
    pub time_label: String,
}

/// The notification dropdown list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationList {
    /// Whether the "no notifications" placeholder is rendered.
    pub empty_placeholder: bool,
    /// Entries, most recent first.
    pub entries: VecDeque<ListEntry>,
}

impl NotificationList {
    /// A list as rendered by the server for a user without notifications.
    pub fn empty() -> Self {
        Self {
            empty_placeholder: true,
            entries: VecDeque::new(),
        }
    }
}

/// The page document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Page {
    pub bell: Option<Bell>,
    pub notification_list: Option<NotificationList>,
    /// Shared toast container. Created lazily by the toast presenter.
    pub toast_container: Option<ToastContainer>,
    pub search_input: Option<SearchInput>,
    pub result_table: Option<Table>,
    pub material_fields: Vec<MaterialField>,
}

impl Page {
    /// The header of an admin page: bell with the server-rendered unread
    /// count (no badge when zero) and an empty notification list.
    pub fn admin_header(unread: u64) -> Self {
        let badge = (unread > 0).then(|| Badge::new(unread.to_string()));
        Self {
            bell: Some(Bell { badge }),
            notification_list: Some(NotificationList::empty()),
            ..Self::default()
        }
    }

    /// Whether the page exposes the notification bell. The channel client is
    /// only worth starting when it does.
    pub fn has_notification_affordance(&self) -> bool {
        self.bell.is_some()
    }

    /// Current badge text, if a badge is rendered.
    pub fn badge_text(&self) -> Option<&str> {
        self.bell
            .as_ref()
            .and_then(|bell| bell.badge.as_ref())
            .map(|badge| badge.text.as_str())
    }

    /// Toasts currently in the document, in insertion order.
    pub fn toasts(&self) -> &[Toast] {
        match &self.toast_container {
            Some(container) => container.toasts(),
            None => &[],
        }
    }
}
