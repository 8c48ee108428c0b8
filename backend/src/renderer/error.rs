use std::io;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;

/// Failures of a single renderer invocation.
///
/// Every variant is reported to HTTP clients as a 500 problem whose `detail`
/// is the `Display` text below.
#[derive(Debug, Error)]
pub enum RenderError {
    /// The temporary workspace could not be created, written or read.
    #[error("failed to stage temporary workspace at {}: {source}", .path.display())]
    Workspace {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The renderer executable could not be started.
    #[error(
        "could not start renderer '{}'; check that it is installed and on the PATH: {source}",
        .program.display()
    )]
    Launch {
        program: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The renderer ran and exited unsuccessfully.
    #[error("renderer failed ({}): {stderr}", exit_label(.code))]
    Failed { code: Option<i32>, stderr: String },

    /// The renderer exited successfully without writing the output file.
    #[error("renderer produced no output")]
    NoOutput,

    #[error("renderer did not finish within {}s and was terminated", .0.as_secs())]
    TimedOut(Duration),

    #[error("render cancelled")]
    Cancelled,
}

impl RenderError {
    pub(crate) fn workspace(path: impl Into<PathBuf>, source: io::Error) -> Self {
        RenderError::Workspace {
            path: path.into(),
            source,
        }
    }
}

fn exit_label(code: &Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {}", code),
        None => "terminated by signal".to_string(),
    }
}
