//! Subcommand execution and output rendering.
//!
//! [`execute`] maps each [`Command`] onto exactly one client call.
//! Propagated client errors bubble up through `anyhow`; recovered
//! operations that came back empty become [`Output::Absent`], which
//! [`render`] reports as a failed run.

use std::ffi::OsStr;
use std::io::Write;

use anyhow::Context;
use flowstate_client::SessionStateClient;
use flowstate_types::{Descriptor, display_label};
use serde_json::{Value, json};

use crate::cli::Command;

/// What a subcommand produced.
#[derive(Debug, PartialEq)]
pub enum Output {
    /// A JSON document to pretty-print.
    Json(Value),
    /// Plain lines, one per entry.
    Lines(Vec<String>),
    /// The call completed and has nothing to print.
    Empty,
    /// A recovered operation yielded no value.
    Absent,
}

/// Run one subcommand against the backend.
pub async fn execute(client: &SessionStateClient, command: Command) -> anyhow::Result<Output> {
    let output = match command {
        Command::StartSession => {
            let session_id = client.start_session().await?;
            Output::Json(json!({ "session_id": session_id }))
        }
        Command::GetState { session, name } => client
            .get_state(session, &name)
            .await
            .map_or(Output::Absent, Output::Json),
        Command::SetState {
            session,
            name,
            values,
        } => {
            let values: Value =
                serde_json::from_str(&values).context("state values must be valid JSON")?;
            client.set_state(session, &name, &values).await;
            Output::Empty
        }
        Command::CallWorker { session, worker } => {
            Output::Json(client.call_worker(session, &worker).await?)
        }
        Command::Metrics { labels } => catalog(client.get_brain_metrics().await, labels)?,
        Command::Dimensions { labels } => catalog(client.get_brain_dimensions().await, labels)?,
        Command::Upload { session, path } => {
            let file_name = path
                .file_name()
                .and_then(OsStr::to_str)
                .with_context(|| format!("{} has no usable file name", path.display()))?
                .to_owned();
            let contents = tokio::fs::read(&path)
                .await
                .with_context(|| format!("failed to read {}", path.display()))?;
            let receipt = client.upload_file(session, &file_name, contents).await?;
            Output::Json(serde_json::to_value(receipt)?)
        }
    };
    Ok(output)
}

fn catalog(descriptors: Option<Vec<Descriptor>>, labels: bool) -> anyhow::Result<Output> {
    let Some(descriptors) = descriptors else {
        return Ok(Output::Absent);
    };
    if labels {
        return Ok(Output::Lines(descriptors.iter().map(display_label).collect()));
    }
    Ok(Output::Json(serde_json::to_value(descriptors)?))
}

/// Write `output`. Returns `false` when there was no value to report.
pub fn render(output: &Output, out: &mut impl Write) -> std::io::Result<bool> {
    match output {
        Output::Json(value) => {
            let text = serde_json::to_string_pretty(value).map_err(std::io::Error::other)?;
            writeln!(out, "{text}")?;
        }
        Output::Lines(lines) => {
            for line in lines {
                writeln!(out, "{line}")?;
            }
        }
        Output::Empty => {}
        Output::Absent => return Ok(false),
    }
    Ok(true)
}
