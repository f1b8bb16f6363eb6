//! Timer queue for deferred page work.
//!
//! The frontend loop is single-threaded: instead of spawning a task per
//! timer, deferred work is queued here and drained by the same loop that
//! applies backend events, so page mutations never interleave.

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::time::Duration;

use tokio::time::Instant;

use crate::page::{ToastId, ToastPhase};

/// Deferred work item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiTask {
    /// Next animation frame after a toast was appended: start its entrance.
    RevealToast(ToastId),
    /// Dwell time elapsed: start the exit transition.
    DismissToast(ToastId),
    /// The surface finished the transition into the given phase.
    TransitionEnded(ToastId, ToastPhase),
}

#[derive(Debug)]
struct Scheduled {
    at: Instant,
    seq: u64,
    task: UiTask,
}

impl PartialEq for Scheduled {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Scheduled {}

impl PartialOrd for Scheduled {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Scheduled {
    // reversed, so the max-heap pops the earliest deadline first
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .at
            .cmp(&self.at)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}

/// Queue of tasks ordered by deadline, then by scheduling order.
#[derive(Debug, Default)]
pub struct Scheduler {
    queue: BinaryHeap<Scheduled>,
    seq: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Runs `task` once `delay` has elapsed from now.
    pub fn defer(&mut self, delay: Duration, task: UiTask) {
        self.seq += 1;
        self.queue.push(Scheduled {
            at: Instant::now() + delay,
            seq: self.seq,
            task,
        });
    }

    /// Deadline of the earliest pending task.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.queue.peek().map(|scheduled| scheduled.at)
    }

    /// Removes and returns the earliest task due at or before `now`.
    pub fn pop_due(&mut self, now: Instant) -> Option<UiTask> {
        if self.next_deadline()? > now {
            return None;
        }
        self.queue.pop().map(|scheduled| scheduled.task)
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}
