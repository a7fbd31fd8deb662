//! Shared wire types for the Flowstate client.
//!
//! The flow runtime backend speaks JSON over HTTP. The shapes it sends and
//! accepts live here so the client library and the CLI agree on them.
//!
//! # Modules
//!
//! - [`ids`] -- Session handle wrapper
//! - [`catalog`] -- Metric and dimension descriptors with their display label
//! - [`responses`] -- Response bodies for worker, session and upload calls

pub mod catalog;
pub mod ids;
pub mod responses;

// Re-export all public types at crate root for convenience.
pub use catalog::{Descriptor, display_label};
pub use ids::SessionId;
pub use responses::{SessionStarted, UploadReceipt, WorkerOutcome};
