//! Client-side plumbing for the weekly budget app.
//!
//! Screens stay free of transport concerns: they build an [`ApiClient`] from
//! a [`Config`], fetch weeks, tags and balances through it, and hand the
//! results to the core crate for arithmetic. [`Lifecycle`] is the explicit
//! subscription point screens use to refetch when the app returns to the
//! foreground.

pub mod api;
pub mod config;
pub mod error;
pub mod lifecycle;
pub mod log;

pub use api::ApiClient;
pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use lifecycle::{AppState, Lifecycle};
pub use log::RemoteLog;
