//! Backend handlers for frontend-driven requests.
//!
//! Each handler reads the shared `AppContext` state and answers over the
//! bridge.

pub mod config_service;
pub mod connection_service;

/// Represents a type that is used in all handlers as an application context.
pub(crate) type AppContextHandle = std::sync::Arc<crate::app::AppContext>;
