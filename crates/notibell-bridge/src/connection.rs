use std::fmt;

/// Lifecycle state of the push connection.
///
/// ```text
/// Disconnected -> Connecting -> Open -> ClosedPendingRetry -> Connecting -> ...
/// ```
///
/// A failed connection attempt moves straight from `Connecting` to
/// `ClosedPendingRetry`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ConnectionState {
    /// No connection was attempted yet.
    #[default]
    Disconnected,
    /// A connection attempt is in flight.
    Connecting,
    /// The connection is established and frames are being received.
    Open,
    /// The connection was closed and a reconnection is scheduled.
    ClosedPendingRetry,
}

impl ConnectionState {
    /// Returns whether moving from `self` to `next` is a valid transition.
    pub fn can_transition_to(self, next: ConnectionState) -> bool {
        use ConnectionState::*;
        matches!(
            (self, next),
            (Disconnected, Connecting)
                | (Connecting, Open)
                | (Connecting, ClosedPendingRetry)
                | (Open, ClosedPendingRetry)
                | (ClosedPendingRetry, Connecting)
        )
    }
}

impl fmt::Display for ConnectionState {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ConnectionState::Disconnected => "disconnected",
            ConnectionState::Connecting => "connecting",
            ConnectionState::Open => "open",
            ConnectionState::ClosedPendingRetry => "closed (retry pending)",
        };
        formatter.write_str(name)
    }
}
