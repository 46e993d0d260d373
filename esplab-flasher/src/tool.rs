//! Boundary to the external compiler/uploader.

use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;
use std::{io, process::Stdio};

use thiserror::Error;
use tracing::{info, warn};

/// The in-flight values of one upload attempt. Only constructed after a
/// device path has been resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UploadRequest {
    /// Resolved serial device path.
    pub port: String,
    /// Fully qualified board name.
    pub board_fqbn: String,
    /// Full path to the sketch source handed to the tool.
    pub sketch_path: PathBuf,
}

/// Exit of the external tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToolExit {
    /// Exit code, if the process terminated normally.
    pub code: Option<i32>,
}

impl ToolExit {
    /// True only for a clean zero exit.
    pub fn success(self) -> bool {
        self.code == Some(0)
    }
}

#[derive(Error, Debug)]
/// Errors from running the external tool.
pub enum ToolError {
    /// The tool executable is not installed or not on PATH
    #[error("upload tool `{0}` was not found")]
    NotFound(String),
    /// The tool could not be launched
    #[error("failed to launch upload tool")]
    Launch(#[source] io::Error),
    /// The tool did not exit before the configured deadline
    #[error("upload tool did not finish within {0:?}")]
    TimedOut(Duration),
}

/// The external process boundary. Implementations run a single upload to
/// completion and report how the tool exited.
pub trait ToolInvoker {
    fn invoke(&self, request: &UploadRequest) -> impl Future<Output = Result<ToolExit, ToolError>>;
}

/// Runs `arduino-cli` (or a compatible tool) as a subprocess, inheriting
/// stdio so the tool's own build output stays visible. The wait is blocking
/// unless a deadline is configured, in which case the child is killed on
/// expiry.
#[derive(Debug, Clone)]
pub struct ArduinoCli {
    command: String,
    timeout: Option<Duration>,
}

impl ArduinoCli {
    pub fn new(command: impl Into<String>, timeout: Option<Duration>) -> Self {
        Self {
            command: command.into(),
            timeout,
        }
    }

    fn argv(request: &UploadRequest) -> Vec<OsString> {
        vec![
            OsString::from("upload"),
            OsString::from("-p"),
            OsString::from(&request.port),
            OsString::from("--fqbn"),
            OsString::from(&request.board_fqbn),
            request.sketch_path.as_os_str().to_os_string(),
        ]
    }
}

impl ToolInvoker for ArduinoCli {
    async fn invoke(&self, request: &UploadRequest) -> Result<ToolExit, ToolError> {
        info!(
            "Invoking {} upload for {} on {}",
            self.command,
            request.sketch_path.display(),
            request.port
        );

        let mut child = tokio::process::Command::new(&self.command)
            .args(Self::argv(request))
            .stdin(Stdio::null())
            .spawn()
            .map_err(|e| match e.kind() {
                io::ErrorKind::NotFound => ToolError::NotFound(self.command.clone()),
                _ => ToolError::Launch(e),
            })?;

        let status = match self.timeout {
            Some(limit) => match tokio::time::timeout(limit, child.wait()).await {
                Ok(status) => status.map_err(ToolError::Launch)?,
                Err(_) => {
                    warn!("Upload tool still running after {limit:?}, killing it");
                    let _ = child.start_kill();
                    return Err(ToolError::TimedOut(limit));
                }
            },
            None => child.wait().await.map_err(ToolError::Launch)?,
        };

        Ok(ToolExit {
            code: status.code(),
        })
    }
}
