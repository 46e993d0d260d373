//! The device-upload workflow: resolve the sketch path, locate a bridge
//! port and hand the request to the external tool.

use std::io;

use thiserror::Error;
use tracing::{error, info};

use crate::config::FlasherConfig;
use crate::ports::{self, PortDescriptor, PortScan, SystemPorts};
use crate::tool::{ArduinoCli, ToolError, ToolInvoker, UploadRequest};

/// Result of one upload attempt. Every way an attempt can end is a value
/// here; nothing on this path panics or propagates an error past the caller.
#[derive(Debug)]
pub enum UploadOutcome {
    /// The tool ran and exited with status zero.
    Success,
    /// No connected serial device matched the bridge keywords; the tool was
    /// never invoked.
    NoDevice,
    /// The tool exceeded the configured deadline and was killed.
    TimedOut,
    /// The tool failed to run, or ran and exited nonzero.
    Failure(UploadFailure),
}

impl UploadOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

#[derive(Error, Debug)]
/// Why an upload counted as failed. `ToolMissing` and `Launch` mean the tool
/// never ran; `Exited` means it ran and reported failure itself.
pub enum UploadFailure {
    #[error("upload tool `{0}` was not found")]
    ToolMissing(String),
    #[error("failed to launch upload tool: {0}")]
    Launch(io::Error),
    #[error("upload tool exited with status {code:?}")]
    Exited { code: Option<i32> },
}

/// Runs the device-upload workflow against its two collaborators: a port
/// scanner and a tool invoker. Each upload attempt is self-contained and
/// performs a fresh port scan.
#[derive(Debug)]
pub struct Uploader<S, T> {
    config: FlasherConfig,
    scanner: S,
    tool: T,
}

impl Uploader<SystemPorts, ArduinoCli> {
    /// Uploader wired to the live OS device table and `arduino-cli`.
    pub fn with_system(config: FlasherConfig, tool: ArduinoCli) -> Self {
        Self::new(config, SystemPorts, tool)
    }
}

impl<S, T> Uploader<S, T>
where
    S: PortScan,
    T: ToolInvoker,
{
    pub fn new(config: FlasherConfig, scanner: S, tool: T) -> Self {
        Self {
            config,
            scanner,
            tool,
        }
    }

    pub fn config(&self) -> &FlasherConfig {
        &self.config
    }

    pub fn tool(&self) -> &T {
        &self.tool
    }

    /// First connected device matching the configured bridge keywords.
    pub fn locate_port(&self) -> Option<PortDescriptor> {
        let found = self.scanner.scan();
        ports::first_match(&found, &self.config.bridge_keywords).cloned()
    }

    /// Uploads one sketch, waiting until the external tool exits.
    ///
    /// The sketch identifier is joined onto the configured sketch directory
    /// without an existence check; a missing file surfaces as the tool's own
    /// failure.
    pub async fn upload(&self, sketch: &str) -> UploadOutcome {
        let sketch_path = self.config.sketch_dir.join(sketch);

        let Some(port) = self.locate_port() else {
            info!("No serial device matched the bridge keywords");
            return UploadOutcome::NoDevice;
        };

        let request = UploadRequest {
            port: port.path,
            board_fqbn: self.config.board_fqbn.clone(),
            sketch_path,
        };

        match self.tool.invoke(&request).await {
            Ok(exit) if exit.success() => {
                info!("Upload of {sketch} succeeded");
                UploadOutcome::Success
            }
            Ok(exit) => {
                error!("Upload of {sketch} failed with status {:?}", exit.code);
                UploadOutcome::Failure(UploadFailure::Exited { code: exit.code })
            }
            Err(ToolError::TimedOut(limit)) => {
                error!("Upload of {sketch} timed out after {limit:?}");
                UploadOutcome::TimedOut
            }
            Err(ToolError::NotFound(tool)) => {
                error!("Upload tool `{tool}` was not found");
                UploadOutcome::Failure(UploadFailure::ToolMissing(tool))
            }
            Err(ToolError::Launch(e)) => {
                error!("Failed to launch upload tool: {e}");
                UploadOutcome::Failure(UploadFailure::Launch(e))
            }
        }
    }
}
