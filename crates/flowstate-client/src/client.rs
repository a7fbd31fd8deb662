//! HTTP client for the flow runtime backend.
//!
//! [`SessionStateClient`] turns each logical operation into one HTTP round
//! trip against a fixed base address and settles the outcome through the
//! operation's [`ErrorPolicy`](crate::policy::ErrorPolicy). There is no
//! caching, no retry and no request timeout.
//!
//! # Endpoints
//!
//! | Method | Path | Operation |
//! |--------|------|-----------|
//! | `GET` | `state/{session}/{name}` | [`SessionStateClient::get_state`] |
//! | `POST` | `state/{session}/{name}` | [`SessionStateClient::set_state`] |
//! | `GET` | `worker/{session}/{worker}` | [`SessionStateClient::call_worker`] |
//! | `GET` | `metrics` | [`SessionStateClient::get_brain_metrics`] |
//! | `GET` | `dimensions` | [`SessionStateClient::get_brain_dimensions`] |
//! | `POST` | `start_session` | [`SessionStateClient::start_session`] |
//! | `POST` | `upload_file/{session}` | [`SessionStateClient::upload_file`] |

use flowstate_types::{Descriptor, SessionId, SessionStarted, UploadReceipt};
use reqwest::multipart::{Form, Part};
use reqwest::{RequestBuilder, Response, Url};
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

use crate::config::ClientConfig;
use crate::error::ClientError;
use crate::policy::{Operation, propagate, recover};

/// Request/response adapter over the flow runtime's HTTP surface.
///
/// Cheap to clone; clones share one connection pool. The base address is
/// fixed at construction.
#[derive(Debug, Clone)]
pub struct SessionStateClient {
    http: reqwest::Client,
    base_url: Url,
}

impl SessionStateClient {
    /// Build a client for the configured backend.
    ///
    /// # Errors
    ///
    /// Returns [`ClientError::Config`] if the base URL is invalid, or
    /// [`ClientError::Transport`] if the HTTP client cannot be built.
    pub fn new(config: &ClientConfig) -> Result<Self, ClientError> {
        let base_url = config.parsed_base_url()?;
        let http = reqwest::Client::builder().build()?;
        debug!(base_url = %base_url, "session state client ready");
        Ok(Self { http, base_url })
    }

    /// The backend base address.
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Read a named state bundle.
    ///
    /// Returns the decoded body unchanged, or `None` if the call failed.
    pub async fn get_state(&self, session_id: SessionId, state_name: &str) -> Option<Value> {
        let op = Operation::GetState;
        let url = self.endpoint(&["state", &session_id.to_string(), state_name]);
        recover(op, self.send_json(op, self.http.get(url)).await)
    }

    /// Replace a named state bundle.
    ///
    /// The response body is discarded and failures are only logged.
    pub async fn set_state(&self, session_id: SessionId, state_name: &str, values: &Value) {
        let op = Operation::SetState;
        let url = self.endpoint(&["state", &session_id.to_string(), state_name]);
        let result = self.send(op, self.http.post(url).json(values)).await;
        let _ = recover(op, result.map(drop));
    }

    /// Run a named worker against the session's state.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure is logged and returned.
    pub async fn call_worker(
        &self,
        session_id: SessionId,
        worker_name: &str,
    ) -> Result<Value, ClientError> {
        let op = Operation::CallWorker;
        let url = self.endpoint(&["worker", &session_id.to_string(), worker_name]);
        propagate(op, self.send_json(op, self.http.get(url)).await)
    }

    /// Fetch the metric catalog, or `None` if the call failed.
    pub async fn get_brain_metrics(&self) -> Option<Vec<Descriptor>> {
        self.catalog(Operation::GetBrainMetrics, "metrics").await
    }

    /// Fetch the dimension catalog, or `None` if the call failed.
    pub async fn get_brain_dimensions(&self) -> Option<Vec<Descriptor>> {
        self.catalog(Operation::GetBrainDimensions, "dimensions").await
    }

    /// Open a new session on the backend.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure is logged and returned.
    pub async fn start_session(&self) -> Result<SessionId, ClientError> {
        let op = Operation::StartSession;
        let url = self.endpoint(&["start_session"]);
        let result = self
            .send_json::<SessionStarted>(op, self.http.post(url))
            .await
            .map(|started| started.session_id);
        propagate(op, result)
    }

    /// Upload a file into the session as a multipart `file` part.
    ///
    /// # Errors
    ///
    /// Any transport, status or decode failure is logged and returned.
    pub async fn upload_file(
        &self,
        session_id: SessionId,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadReceipt, ClientError> {
        let op = Operation::UploadFile;
        let url = self.endpoint(&["upload_file", &session_id.to_string()]);
        let part = Part::bytes(contents).file_name(file_name.to_owned());
        let form = Form::new().part("file", part);
        propagate(op, self.send_json(op, self.http.post(url).multipart(form)).await)
    }

    async fn catalog(&self, op: Operation, resource: &str) -> Option<Vec<Descriptor>> {
        let url = self.endpoint(&[resource]);
        recover(op, self.send_json(op, self.http.get(url)).await)
    }

    /// Append percent-encoded path segments below the base path.
    ///
    /// The base URL was checked by [`ClientConfig::parsed_base_url`], so it
    /// can always carry path segments.
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send a request and fail on any non-success status.
    async fn send(&self, op: Operation, request: RequestBuilder) -> Result<Response, ClientError> {
        let request = request.build()?;
        debug!(
            operation = op.name(),
            method = %request.method(),
            url = %request.url(),
            "sending request"
        );

        let response = self.http.execute(request).await?;
        let status = response.status();
        if !status.is_success() {
            let body = response
                .text()
                .await
                .unwrap_or_else(|_| "unable to read error body".to_owned());
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        debug!(operation = op.name(), status = status.as_u16(), "backend responded");
        Ok(response)
    }

    /// Send a request and decode the JSON body.
    async fn send_json<T: DeserializeOwned>(
        &self,
        op: Operation,
        request: RequestBuilder,
    ) -> Result<T, ClientError> {
        let response = self.send(op, request).await?;
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(base: &str) -> Option<SessionStateClient> {
        SessionStateClient::new(&ClientConfig::default().with_base_url(base)).ok()
    }

    fn path(client: Option<&SessionStateClient>, segments: &[&str]) -> Option<String> {
        client.map(|c| c.endpoint(segments).path().to_owned())
    }

    #[test]
    fn default_base_builds_relative_paths() {
        let c = client("http://127.0.0.1:8000/");
        assert_eq!(
            path(c.as_ref(), &["state", "1", "x"]).as_deref(),
            Some("/state/1/x")
        );
        assert_eq!(path(c.as_ref(), &["metrics"]).as_deref(), Some("/metrics"));
    }

    #[test]
    fn base_path_prefix_is_kept() {
        let with_slash = client("http://backend/api/");
        let without_slash = client("http://backend/api");
        assert_eq!(
            path(with_slash.as_ref(), &["worker", "2", "w"]).as_deref(),
            Some("/api/worker/2/w")
        );
        assert_eq!(
            path(without_slash.as_ref(), &["worker", "2", "w"]).as_deref(),
            Some("/api/worker/2/w")
        );
    }

    #[test]
    fn segments_are_percent_encoded() {
        let c = client("http://backend/");
        assert_eq!(
            path(c.as_ref(), &["state", "1", "a/b c"]).as_deref(),
            Some("/state/1/a%2Fb%20c")
        );
    }

    #[test]
    fn invalid_base_is_config_error() {
        let result = SessionStateClient::new(&ClientConfig::default().with_base_url("ftp//x"));
        assert!(matches!(result, Err(ClientError::Config { .. })));
    }
}
