use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Opt {
    /// Directory containing the research sketches.
    #[arg(long, default_value = "sketches")]
    pub sketch_dir: PathBuf,

    /// Fully qualified board name passed to the upload tool.
    #[arg(long, default_value = esplab_flasher::DEFAULT_BOARD_FQBN)]
    pub fqbn: String,

    /// Upload tool executable to invoke.
    #[arg(long, default_value = "arduino-cli")]
    pub tool: String,

    /// Abort an upload that runs longer than this many seconds.
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,

    #[arg(long = "keyword", value_name = "SUBSTRING")]
    /// Substring used to recognise a USB-to-serial bridge from the port
    /// description. May be repeated; replaces the default set.
    pub keywords: Vec<String>,

    #[command(subcommand)]
    /// Optional subcommand; without one the interactive console starts.
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Command to generate shell completion
    GenerateCompletion {
        /// Specifies the target shell type for completion
        shell: clap_complete::Shell,
    },
}
