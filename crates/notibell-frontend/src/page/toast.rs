//! Transient alerts shown for each received notification.
//!
//! Lifecycle of a toast:
//! 1. appended to the shared container in the hidden, offset state;
//! 2. on the next animation frame it is shown, which starts the entrance
//!    transition (changing state in the same frame would not animate);
//! 3. when the dwell time since it was appended runs out, the exit
//!    transition starts;
//! 4. it is removed when the surface reports that the exit transition ended.
//!
//! Toasts never coordinate with each other; each one follows its own
//! schedule.

use std::time::Duration;

use notibell_bridge::config::ToastConfig;

use super::Page;
use crate::scheduler::{Scheduler, UiTask};

/// Identifies one toast for its whole lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ToastId(pub u64);

/// Visual state of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastPhase {
    /// Appended, still transparent and offset.
    Hidden,
    /// Visible (entrance transition running or done).
    Shown,
    /// Exit transition running.
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: ToastId,
    pub message: String,
    pub phase: ToastPhase,
}

/// Shared container all toasts are stacked in.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToastContainer {
    toasts: Vec<Toast>,
}

impl ToastContainer {
    pub fn toasts(&self) -> &[Toast] {
        &self.toasts
    }

    fn find_mut(&mut self, id: ToastId) -> Option<&mut Toast> {
        self.toasts.iter_mut().find(|toast| toast.id == id)
    }
}

/// Creates toasts and drives their lifecycle through the [`Scheduler`].
#[derive(Debug)]
pub struct ToastPresenter {
    timing: ToastConfig,
    next_id: u64,
}

impl ToastPresenter {
    pub fn new(timing: ToastConfig) -> Self {
        Self { timing, next_id: 0 }
    }

    /// Replaces the timing used for toasts shown from now on.
    pub fn set_timing(&mut self, timing: ToastConfig) {
        self.timing = timing;
    }

    /// Appends a hidden toast for `message` to the shared container (creating
    /// the container on first use) and schedules its entrance and dismissal.
    pub fn show(&mut self, page: &mut Page, scheduler: &mut Scheduler, message: &str) -> ToastId {
        self.next_id += 1;
        let id = ToastId(self.next_id);

        let container = page.toast_container.get_or_insert_with(|| {
            log::debug!("Creating toast container");
            ToastContainer::default()
        });
        container.toasts.push(Toast {
            id,
            message: message.to_owned(),
            phase: ToastPhase::Hidden,
        });

        scheduler.defer(
            Duration::from_millis(self.timing.frame_ms),
            UiTask::RevealToast(id),
        );
        scheduler.defer(
            Duration::from_millis(self.timing.dwell_ms),
            UiTask::DismissToast(id),
        );
        id
    }

    /// Applies a due lifecycle task. Tasks for toasts that are already gone
    /// are ignored.
    pub fn handle(&mut self, page: &mut Page, scheduler: &mut Scheduler, task: UiTask) {
        let Some(container) = page.toast_container.as_mut() else {
            return;
        };
        let transition = Duration::from_millis(self.timing.transition_ms);

        match task {
            UiTask::RevealToast(id) => {
                if let Some(toast) = container.find_mut(id) {
                    if toast.phase == ToastPhase::Hidden {
                        toast.phase = ToastPhase::Shown;
                        scheduler.defer(
                            transition,
                            UiTask::TransitionEnded(id, ToastPhase::Shown),
                        );
                    }
                }
            }
            UiTask::DismissToast(id) => {
                if let Some(toast) = container.find_mut(id) {
                    toast.phase = ToastPhase::Leaving;
                    scheduler.defer(
                        transition,
                        UiTask::TransitionEnded(id, ToastPhase::Leaving),
                    );
                }
            }
            // a late entrance end must not cut the exit transition short
            UiTask::TransitionEnded(_, ToastPhase::Hidden | ToastPhase::Shown) => {}
            UiTask::TransitionEnded(id, ToastPhase::Leaving) => {
                container
                    .toasts
                    .retain(|toast| toast.id != id || toast.phase != ToastPhase::Leaving);
            }
        }
    }
}
