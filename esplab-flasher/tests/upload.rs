//! Integration tests driving [`Uploader`] with scripted collaborators in
//! place of the OS device table and the external tool.

use std::io;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use esplab_flasher::{
    FlasherConfig, PortDescriptor, PortScan, ToolError, ToolExit, ToolInvoker, UploadFailure,
    UploadOutcome, UploadRequest, Uploader,
};

/// A fixed device list standing in for the OS enumeration.
struct FixedPorts(Vec<PortDescriptor>);

impl PortScan for FixedPorts {
    fn scan(&self) -> Vec<PortDescriptor> {
        self.0.clone()
    }
}

enum Script {
    Exit(Option<i32>),
    NotFound,
    Launch,
    TimedOut,
}

/// Records every request it receives and answers from a fixed script.
struct ScriptedTool {
    script: Script,
    calls: Mutex<Vec<UploadRequest>>,
}

impl ScriptedTool {
    fn new(script: Script) -> Self {
        Self {
            script,
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<UploadRequest> {
        self.calls.lock().unwrap().clone()
    }
}

impl ToolInvoker for ScriptedTool {
    async fn invoke(&self, request: &UploadRequest) -> Result<ToolExit, ToolError> {
        self.calls.lock().unwrap().push(request.clone());

        match self.script {
            Script::Exit(code) => Ok(ToolExit { code }),
            Script::NotFound => Err(ToolError::NotFound("arduino-cli".to_string())),
            Script::Launch => Err(ToolError::Launch(io::Error::other("spawn failed"))),
            Script::TimedOut => Err(ToolError::TimedOut(Duration::from_secs(30))),
        }
    }
}

fn port(path: &str, description: &str) -> PortDescriptor {
    PortDescriptor {
        path: path.to_string(),
        description: description.to_string(),
    }
}

fn config() -> FlasherConfig {
    FlasherConfig {
        sketch_dir: PathBuf::from("/home/user/sketches"),
        ..FlasherConfig::default()
    }
}

fn uploader(ports: Vec<PortDescriptor>, script: Script) -> Uploader<FixedPorts, ScriptedTool> {
    Uploader::new(config(), FixedPorts(ports), ScriptedTool::new(script))
}

#[tokio::test]
async fn empty_device_list_skips_the_tool() {
    let uploader = uploader(Vec::new(), Script::Exit(Some(0)));

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(outcome, UploadOutcome::NoDevice));
    assert!(uploader.tool().calls().is_empty());
}

#[tokio::test]
async fn unmatched_device_list_skips_the_tool() {
    let uploader = uploader(
        vec![port("/dev/ttyACM0", "Generic Modem")],
        Script::Exit(Some(0)),
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(outcome, UploadOutcome::NoDevice));
    assert!(uploader.tool().calls().is_empty());
}

#[tokio::test]
async fn successful_upload_invokes_the_tool_once_with_the_resolved_values() {
    let uploader = uploader(
        vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
        Script::Exit(Some(0)),
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(outcome.is_success());
    assert_eq!(
        uploader.tool().calls(),
        vec![UploadRequest {
            port: "/dev/ttyUSB0".to_string(),
            board_fqbn: "esp32:esp32:esp32dev".to_string(),
            sketch_path: PathBuf::from("/home/user/sketches/wifi_logger.ino"),
        }]
    );
}

#[tokio::test]
async fn first_matching_port_wins() {
    let uploader = uploader(
        vec![
            port("/dev/ttyS0", "PCI Serial Port"),
            port("/dev/ttyUSB0", "CP2102 USB to UART Bridge"),
            port("/dev/ttyUSB1", "USB2.0-Serial CH340"),
        ],
        Script::Exit(Some(0)),
    );

    uploader.upload("ble_scanner.ino").await;

    let calls = uploader.tool().calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].port, "/dev/ttyUSB0");
}

#[tokio::test]
async fn nonzero_exit_is_a_failure() {
    for code in [1, 127] {
        let uploader = uploader(
            vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
            Script::Exit(Some(code)),
        );

        let outcome = uploader.upload("wifi_logger.ino").await;

        assert!(matches!(
            outcome,
            UploadOutcome::Failure(UploadFailure::Exited { code: Some(c) }) if c == code
        ));
    }
}

#[tokio::test]
async fn exit_by_signal_is_a_failure() {
    let uploader = uploader(
        vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
        Script::Exit(None),
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(
        outcome,
        UploadOutcome::Failure(UploadFailure::Exited { code: None })
    ));
}

#[tokio::test]
async fn missing_tool_is_a_failure_with_its_own_diagnostic() {
    let uploader = uploader(
        vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
        Script::NotFound,
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(
        outcome,
        UploadOutcome::Failure(UploadFailure::ToolMissing(t)) if t == "arduino-cli"
    ));
}

#[tokio::test]
async fn launch_failure_is_a_failure() {
    let uploader = uploader(
        vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
        Script::Launch,
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(
        outcome,
        UploadOutcome::Failure(UploadFailure::Launch(_))
    ));
}

#[tokio::test]
async fn deadline_expiry_is_a_distinct_outcome() {
    let uploader = uploader(
        vec![port("/dev/ttyUSB0", "CP2102 USB to UART Bridge")],
        Script::TimedOut,
    );

    let outcome = uploader.upload("wifi_logger.ino").await;

    assert!(matches!(outcome, UploadOutcome::TimedOut));
}

#[tokio::test]
async fn locate_port_reports_the_description_of_the_match() {
    let uploader = uploader(
        vec![
            port("/dev/ttyACM0", "Generic Modem"),
            port("/dev/ttyUSB0", "USB2.0-Serial CH340"),
        ],
        Script::Exit(Some(0)),
    );

    let found = uploader.locate_port().unwrap();
    assert_eq!(found.path, "/dev/ttyUSB0");
    assert_eq!(found.description, "USB2.0-Serial CH340");
}
