// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use anyhow::Context;
use dioxus::prelude::*;
// Desktop specific imports for Dioxus
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state; // Application state module

use app::App;
use config::AppConfig;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    tracing::info!("Starting Business Admin GUI (Dioxus Desktop)...");

    // The embedded default configuration is critical: refuse to start without it.
    let app_config = AppConfig::load_default().context("Failed to load default configuration")?;
    tracing::info!(
        "Loaded configuration version {} (locale {:?}, empty policy {:?})",
        app_config.version,
        app_config.number_format().locale,
        app_config.number_format().empty_policy
    );

    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(app_config.app.title.clone())
            .with_inner_size(LogicalSize::new(960.0, 720.0)),
    );

    // AppConfig becomes root context; App derives the theme and form state from it.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config)
        .launch(App);

    tracing::info!("Business Admin GUI finished.");
    Ok(())
}
