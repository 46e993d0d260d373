use std::path::PathBuf;

/// Default substrings matched against OS port descriptions to recognise the
/// common USB-to-serial bridge chipsets found on ESP32 dev boards.
pub const DEFAULT_BRIDGE_KEYWORDS: &[&str] = &["USB Serial Device", "CP210", "CH340"];

/// Default upload target, the generic ESP32 dev module.
pub const DEFAULT_BOARD_FQBN: &str = "esp32:esp32:esp32dev";

/// Settings for the upload workflow, passed in at construction time.
#[derive(Debug, Clone)]
pub struct FlasherConfig {
    /// Directory the sketch identifiers are resolved against.
    pub sketch_dir: PathBuf,
    /// Fully qualified board name handed to the upload tool.
    pub board_fqbn: String,
    /// Substrings used to recognise a USB-to-serial bridge when locating the
    /// device.
    pub bridge_keywords: Vec<String>,
}

impl Default for FlasherConfig {
    fn default() -> Self {
        Self {
            sketch_dir: PathBuf::from("sketches"),
            board_fqbn: DEFAULT_BOARD_FQBN.to_string(),
            bridge_keywords: DEFAULT_BRIDGE_KEYWORDS
                .iter()
                .map(|x| x.to_string())
                .collect(),
        }
    }
}
