//! # Introduction
//!
//! This crate implements the device-upload workflow used by the esplab
//! console: locating an attached ESP32 over its USB-to-serial bridge and
//! handing a sketch to an external compiler/uploader such as `arduino-cli`.
//!
//! # Usage
//!
//! ```no_run
//! use esplab_flasher::{ArduinoCli, FlasherConfig, Uploader};
//!
//! #[tokio::main]
//! async fn main() {
//!     let tool = ArduinoCli::new("arduino-cli", None);
//!     let uploader = Uploader::with_system(FlasherConfig::default(), tool);
//!
//!     let outcome = uploader.upload("wifi_logger.ino").await;
//!     assert!(outcome.is_success());
//! }
//! ```
//!
//! Both external collaborators (the OS device table and the upload tool) sit
//! behind traits ([`PortScan`], [`ToolInvoker`]) so they can be replaced by
//! scripted implementations in tests.

mod config;
mod ports;
mod tool;
mod uploader;

pub use config::{DEFAULT_BOARD_FQBN, DEFAULT_BRIDGE_KEYWORDS, FlasherConfig};
pub use ports::{PortDescriptor, PortScan, SystemPorts, first_match};
pub use tool::{ArduinoCli, ToolError, ToolExit, ToolInvoker, UploadRequest};
pub use uploader::{UploadFailure, UploadOutcome, Uploader};
