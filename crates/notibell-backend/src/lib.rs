//! Backend runtime, notification channel client, and configuration loading.
//!
//! This crate owns the push connection lifecycle, routes bridge requests to
//! services, and keeps the state those services read.

mod app;
pub mod client;
pub mod config;
mod runtime;
mod services;
mod state;

pub use crate::runtime::run;
