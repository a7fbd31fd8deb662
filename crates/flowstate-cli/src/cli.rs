//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use flowstate_types::SessionId;

/// Flowstate - talk to a flow runtime backend from the shell
///
/// Each subcommand performs one backend call and prints the JSON result on
/// stdout. Logs go to stderr.
#[derive(Parser, Debug)]
#[command(name = "flowstate", author, version)]
pub struct Args {
    /// YAML configuration file (defaults apply when omitted)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Backend base URL for this invocation, overriding the config file
    #[arg(long, global = true)]
    pub base_url: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

/// One backend operation per subcommand.
#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Open a new session and print its id
    StartSession,

    /// Print a named state bundle
    GetState {
        /// Session id
        session: SessionId,
        /// State name
        name: String,
    },

    /// Replace a named state bundle with a JSON document
    SetState {
        /// Session id
        session: SessionId,
        /// State name
        name: String,
        /// JSON value to store
        values: String,
    },

    /// Run a named worker and print its result
    CallWorker {
        /// Session id
        session: SessionId,
        /// Worker name
        worker: String,
    },

    /// Print the metric catalog
    Metrics {
        /// Print one display label per line instead of JSON
        #[arg(long)]
        labels: bool,
    },

    /// Print the dimension catalog
    Dimensions {
        /// Print one display label per line instead of JSON
        #[arg(long)]
        labels: bool,
    },

    /// Upload a file into a session
    Upload {
        /// Session id
        session: SessionId,
        /// File to upload
        path: PathBuf,
    },
}
