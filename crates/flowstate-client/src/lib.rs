//! Client for the flow runtime backend.
//!
//! The backend keeps per-session named state bundles, runs named workers
//! against that state, and serves metric and dimension catalogs. This crate
//! wraps that HTTP surface in [`SessionStateClient`].
//!
//! # Error policy
//!
//! Operations differ in what a failure means to the caller:
//!
//! - **Recover**: `get_state`, `set_state`, `get_brain_metrics`,
//!   `get_brain_dimensions`. Failures are logged and the caller gets `None`.
//! - **Propagate**: `call_worker`, `start_session`, `upload_file`. Failures
//!   are logged and returned as [`ClientError`].
//!
//! The table lives in [`Operation::policy`].

pub mod client;
pub mod config;
pub mod error;
pub mod policy;

// Re-export primary types for convenience.
pub use client::SessionStateClient;
pub use config::{ClientConfig, ConfigError, LoggingConfig};
pub use error::ClientError;
pub use policy::{ErrorPolicy, Operation};
