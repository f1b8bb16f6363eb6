use std::time::Duration;

/// Decides how long to wait before the next connection attempt.
pub trait ReconnectPolicy: Send {
    /// Returns the delay before reconnect attempt number `attempt`, counted
    /// from 1 since the last successful open.
    fn next_delay(&mut self, attempt: u32) -> Duration;
}

/// Constant delay, no cap on the number of attempts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedDelay(pub Duration);

impl FixedDelay {
    pub fn from_millis(millis: u64) -> Self {
        Self(Duration::from_millis(millis))
    }
}

impl Default for FixedDelay {
    fn default() -> Self {
        Self(Duration::from_secs(5))
    }
}

impl ReconnectPolicy for FixedDelay {
    fn next_delay(&mut self, _attempt: u32) -> Duration {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delay_never_grows() {
        let mut policy = FixedDelay::default();
        for attempt in [1, 2, 10, u32::MAX] {
            assert_eq!(policy.next_delay(attempt), Duration::from_secs(5));
        }
    }
}
