use notibell_bridge::connection::ConnectionState;
use tokio::sync::watch;

/// The backend state shared by request handlers.
///
/// It is designed to be wrapped in thread-safe, async-friendly concurrency
/// primitives (see [`SharedState`]) so handlers can read it while the channel
/// client runs on the same runtime.
#[derive(Debug, Clone)]
pub struct State {
    /// The loaded application configuration.
    pub config: notibell_bridge::config::Config,
    /// Live view of the channel client's connection state.
    pub connection: watch::Receiver<ConnectionState>,
}

/// Thread-safe, async-friendly shared reference to the backend [`State`].
pub type SharedState = std::sync::Arc<tokio::sync::RwLock<State>>;
