use super::{ListEntry, Page};

/// Relative time shown on entries that arrived over the push channel.
pub const JUST_NOW: &str = "just now";

/// Puts a new entry at the top of the notification list, dropping the empty
/// placeholder on the first one.
///
/// Returns `false` when the page has no notification list.
pub fn prepend_entry(page: &mut Page, message: &str, url: &str) -> bool {
    let Some(list) = page.notification_list.as_mut() else {
        return false;
    };

    list.empty_placeholder = false;
    list.entries.push_front(ListEntry {
        message: message.to_owned(),
        url: url.to_owned(),
        time_label: JUST_NOW.to_owned(),
    });
    true
}
