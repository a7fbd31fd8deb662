//! Per-operation error policy.
//!
//! Reads of informational data (state, catalogs) and the fire-and-forget
//! state write are [`ErrorPolicy::Recover`]: a failure is logged and the
//! caller gets `None`. Worker invocation and the session bootstrap calls are
//! [`ErrorPolicy::Propagate`]: a failure is logged and returned.
//!
//! [`Operation::policy`] is the single table of record. The client routes
//! every result through [`recover`] or [`propagate`], which read that table.

use tracing::{error, warn};

use crate::error::ClientError;

/// What happens to a failed backend call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorPolicy {
    /// Log the failure and hand the caller an absent value.
    Recover,
    /// Log the failure and return it to the caller.
    Propagate,
}

/// Every logical operation the client performs against the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    /// `GET state/{session}/{name}`
    GetState,
    /// `POST state/{session}/{name}`
    SetState,
    /// `GET worker/{session}/{worker}`
    CallWorker,
    /// `GET metrics`
    GetBrainMetrics,
    /// `GET dimensions`
    GetBrainDimensions,
    /// `POST start_session`
    StartSession,
    /// `POST upload_file/{session}`
    UploadFile,
}

impl Operation {
    /// All operations, in declaration order.
    pub const ALL: [Self; 7] = [
        Self::GetState,
        Self::SetState,
        Self::CallWorker,
        Self::GetBrainMetrics,
        Self::GetBrainDimensions,
        Self::StartSession,
        Self::UploadFile,
    ];

    /// The error policy this operation follows.
    pub const fn policy(self) -> ErrorPolicy {
        match self {
            Self::GetState | Self::SetState | Self::GetBrainMetrics | Self::GetBrainDimensions => {
                ErrorPolicy::Recover
            }
            Self::CallWorker | Self::StartSession | Self::UploadFile => ErrorPolicy::Propagate,
        }
    }

    /// Stable name used in log fields, e.g. `get_state`.
    pub const fn name(self) -> &'static str {
        match self {
            Self::GetState => "get_state",
            Self::SetState => "set_state",
            Self::CallWorker => "call_worker",
            Self::GetBrainMetrics => "get_brain_metrics",
            Self::GetBrainDimensions => "get_brain_dimensions",
            Self::StartSession => "start_session",
            Self::UploadFile => "upload_file",
        }
    }
}

impl core::fmt::Display for Operation {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.name())
    }
}

/// Settle a result for a [`ErrorPolicy::Recover`] operation.
///
/// Failures are logged at `warn` and become `None`.
pub fn recover<T>(op: Operation, result: Result<T, ClientError>) -> Option<T> {
    debug_assert_eq!(op.policy(), ErrorPolicy::Recover);
    match result {
        Ok(value) => Some(value),
        Err(e) => {
            warn!(operation = op.name(), error = %e, "backend call failed, continuing without result");
            None
        }
    }
}

/// Settle a result for a [`ErrorPolicy::Propagate`] operation.
///
/// Failures are logged at `error` and returned unchanged.
pub fn propagate<T>(op: Operation, result: Result<T, ClientError>) -> Result<T, ClientError> {
    debug_assert_eq!(op.policy(), ErrorPolicy::Propagate);
    result.inspect_err(|e| {
        error!(operation = op.name(), error = %e, "backend call failed");
    })
}
