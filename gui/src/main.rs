// GUI main entry point using Dioxus
#![allow(non_snake_case)] // Common for Dioxus components

use dioxus::prelude::*;
use dioxus_desktop::{Config as DesktopConfig, LogicalSize, WindowBuilder};

mod app;
mod components;
mod config;
mod state;

use app::App;
use config::AppConfig;

fn main() {
    engine::logging::init_logging("info");

    tracing::info!("Starting numextenso GUI (Dioxus Desktop)...");

    let app_config = match AppConfig::load_default() {
        Ok(cfg) => {
            tracing::info!("Loaded default configuration version {}.", cfg.version);
            cfg
        }
        Err(e) => {
            tracing::error!("Failed to load default configuration: {:#}. Exiting.", e);
            std::process::exit(1);
        }
    };

    let window = &app_config.window;
    let desktop_config = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title(window.title.clone())
            .with_inner_size(LogicalSize::new(window.width, window.height))
            .with_min_inner_size(LogicalSize::new(window.min_width, window.min_height)),
    );

    // The root component reads AppConfig back from context.
    LaunchBuilder::desktop()
        .with_cfg(desktop_config)
        .with_context(app_config.clone())
        .launch(App);

    tracing::info!("numextenso GUI finished.");
}
