mod catalog;
mod cli;
mod menu;

use std::time::Duration;

use clap::{CommandFactory, Parser};
use cli::{Commands, Opt};
use esplab_flasher::{ArduinoCli, FlasherConfig, Uploader};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let opt = Opt::parse();

    // Default to WARN and write to stderr so log lines do not corrupt the
    // menu display; RUST_LOG overrides.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(LevelFilter::WARN.into())
                .from_env_lossy(),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init()
        .expect("Failed to register tracing_subscriber");

    if let Some(Commands::GenerateCompletion { shell }) = opt.command {
        generate_completion(shell);
        return Ok(());
    }

    let config = FlasherConfig {
        sketch_dir: opt.sketch_dir,
        board_fqbn: opt.fqbn,
        bridge_keywords: if opt.keywords.is_empty() {
            FlasherConfig::default().bridge_keywords
        } else {
            opt.keywords
        },
    };

    let tool = ArduinoCli::new(opt.tool, opt.timeout.map(Duration::from_secs));
    let uploader = Uploader::with_system(config, tool);

    let term = console::Term::stdout();
    menu::run(&term, &uploader).await
}

fn generate_completion(target: clap_complete::Shell) {
    let mut cmd = Opt::command();
    const BIN_NAME: &str = env!("CARGO_PKG_NAME");

    clap_complete::generate(target, &mut cmd, BIN_NAME, &mut std::io::stdout())
}
