//! Page side of the notification client.
//!
//! The [`Frontend`] owns the page model and applies everything to it from a
//! single task: backend events (new notification, connection state, config),
//! page input events (search box, form fields), and deferred toast work from
//! the [`scheduler::Scheduler`]. Nothing here runs in parallel, so the badge,
//! list, and toast container need no locking.

use notibell_bridge::{
    MessageFromBackend, MessageToBackend, config::ToastConfig, connection::ConnectionState,
    notification::NotificationEvent,
};
use tokio::sync::mpsc;
use tokio::time::{Duration, Instant, sleep_until};

pub mod formatting;
pub mod page;
pub mod scheduler;

use crate::page::{FieldEvent, Page, badge, floating_label, list, table_filter, toast::ToastPresenter};
use crate::scheduler::Scheduler;

/// Input coming from the page itself rather than from the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PageEvent {
    /// The admin search box changed.
    Search(String),
    /// A material form field received an event.
    Field { name: String, event: FieldEvent },
}

/// Page model plus the presenters that mutate it.
#[derive(Debug)]
pub struct Frontend {
    page: Page,
    toasts: ToastPresenter,
    scheduler: Scheduler,
    connection: ConnectionState,
}

impl Frontend {
    /// Takes over a freshly loaded page and runs the load-time setup.
    pub fn new(mut page: Page, timing: ToastConfig) -> Self {
        floating_label::setup(&mut page);
        Self {
            page,
            toasts: ToastPresenter::new(timing),
            scheduler: Scheduler::new(),
            connection: ConnectionState::Disconnected,
        }
    }

    pub fn page(&self) -> &Page {
        &self.page
    }

    pub fn connection(&self) -> ConnectionState {
        self.connection
    }

    /// Applies one backend message to the page.
    pub fn apply(&mut self, message: MessageFromBackend) {
        match message {
            MessageFromBackend::NotificationReceived(event) => self.notify(&event),
            MessageFromBackend::ConnectionStateChanged(state) => {
                log::debug!(
                    "Notification channel: {}",
                    formatting::format_connection(state)
                );
                self.connection = state;
            }
            MessageFromBackend::ConfigurationResponse(config) => {
                self.toasts.set_timing(config.toast);
            }
        }
    }

    /// Applies one page input event.
    pub fn handle_page_event(&mut self, event: PageEvent) {
        match event {
            PageEvent::Search(text) => {
                if let Some(visible) = table_filter::search(&mut self.page, &text) {
                    log::debug!("Search {text:?} matches {visible} rows");
                }
            }
            PageEvent::Field { name, event } => {
                floating_label::handle_field_event(&mut self.page, &name, event);
            }
        }
    }

    /// Runs every deferred task due at `now`.
    pub fn run_due_tasks(&mut self, now: Instant) {
        while let Some(task) = self.scheduler.pop_due(now) {
            self.toasts.handle(&mut self.page, &mut self.scheduler, task);
        }
    }

    /// List update first, then the toast, as one synchronous step.
    fn notify(&mut self, event: &NotificationEvent) {
        let count = badge::increment_badge(&mut self.page);
        list::prepend_entry(&mut self.page, &event.message, &event.url);
        let id = self
            .toasts
            .show(&mut self.page, &mut self.scheduler, &event.message);
        log::info!(
            "Notification {:?} shown as toast #{} (unread: {})",
            event.id,
            id.0,
            count.map_or_else(|| "-".to_owned(), |count| count.to_string())
        );
    }

    /// Processes backend messages, page events, and deferred tasks until the
    /// backend side of the bridge closes. Returns the final page.
    pub async fn run(
        mut self,
        mut rx: mpsc::Receiver<MessageFromBackend>,
        mut page_events: mpsc::Receiver<PageEvent>,
    ) -> Page {
        let mut page_events_open = true;
        loop {
            let deadline = self.scheduler.next_deadline();
            let wake_at = deadline.unwrap_or_else(|| Instant::now() + Duration::from_secs(3600));

            tokio::select! {
                message = rx.recv() => match message {
                    Some(message) => self.apply(message),
                    None => break,
                },
                event = page_events.recv(), if page_events_open => match event {
                    Some(event) => self.handle_page_event(event),
                    None => page_events_open = false,
                },
                _ = sleep_until(wake_at), if deadline.is_some() => {
                    self.run_due_tasks(Instant::now());
                }
            }
        }
        self.page
    }
}

/// Runs the frontend on the current thread until the backend goes away.
///
/// Asks the backend for the configuration and the connection state first;
/// toasts use the default timing until the configuration arrives.
pub fn run(
    rx: mpsc::Receiver<MessageFromBackend>,
    tx: mpsc::Sender<MessageToBackend>,
    page_events: mpsc::Receiver<PageEvent>,
    page: Page,
) -> anyhow::Result<Page> {
    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_time()
        .build()?;

    runtime.block_on(async move {
        tx.send(MessageToBackend::ConfigurationRequest).await?;
        tx.send(MessageToBackend::ConnectionStateRequest).await?;

        let frontend = Frontend::new(page, ToastConfig::default());
        let page = frontend.run(rx, page_events).await;
        log::info!("Backend closed, final state {}", formatting::format_bell(&page));
        Ok::<_, anyhow::Error>(page)
    })
}
