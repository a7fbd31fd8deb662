//! Typed response bodies returned by the flow runtime.

use serde::{Deserialize, Serialize};

use crate::ids::SessionId;

/// Body returned by `GET worker/{session}/{worker}` on success.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkerOutcome {
    /// Confirmation text, e.g. `Worker parsing_rules executed successfully.`
    pub message: String,
}

/// Body returned by `POST start_session`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionStarted {
    /// Handle of the newly created session.
    pub session_id: SessionId,
}

/// Body returned by `POST upload_file/{session}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadReceipt {
    /// File name as received by the server.
    pub filename: String,
    /// Confirmation text.
    pub message: String,
}
