mod cli;

use clap::Parser;
use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use services::QuizController;
use tracing::info;
use ui::{App, build_app_context};

use crate::cli::Cli;

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(cli.log_filter())
        .init();

    let config = cli.client_config()?;
    info!(
        base_url = %config.base_url(),
        poll_interval = ?config.poll_interval(),
        retry_cooldown = ?config.retry_cooldown(),
        "quiz client starting"
    );

    let controller = QuizController::http(&config);
    let context = build_app_context(controller);

    // On macOS, Dioxus/tao can default to an always-on-top window in some dev setups.
    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("Quiz")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
