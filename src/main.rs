#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::{Arc, OnceLock};

use anyhow::Context as _;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use gupshup_core::{ChatClient, ClientConfig, CloudinaryUploader, HttpApi};
use tracing_subscriber::EnvFilter;

use crate::context::SharedClient;

/// Client built before launch; the root component picks it up from here.
static CLIENT: OnceLock<SharedClient> = OnceLock::new();
/// Start in dark mode (from `--dark`)
static START_DARK: OnceLock<bool> = OnceLock::new();

pub fn launch_client() -> Option<SharedClient> {
    CLIENT.get().cloned()
}

pub fn start_dark() -> bool {
    START_DARK.get().copied().unwrap_or(false)
}

/// GupShup - one-to-one chat
#[derive(Parser, Debug)]
#[command(name = "gupshup-desktop")]
#[command(about = "GupShup desktop messaging client")]
struct Args {
    /// API base URL (overrides GUPSHUP_API_URL)
    #[arg(long, env = "GUPSHUP_API_URL")]
    api_url: Option<String>,

    /// Initial window width
    #[arg(long, default_value_t = 1100.0)]
    width: f64,

    /// Initial window height
    #[arg(long, default_value_t = 760.0)]
    height: f64,

    /// Start with the dark theme
    #[arg(long)]
    dark: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gupshup=info,gupshup_core=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = ClientConfig::from_env();
    if let Some(url) = args.api_url {
        config = config.with_api_url(url);
    }
    if config.image_host.upload_url().is_none() {
        tracing::warn!("Image host not configured, attachments will be sent as text only");
    }

    let api = HttpApi::new(&config).context("building API client")?;
    let images = CloudinaryUploader::new(&config.image_host);
    let _ = CLIENT.set(Arc::new(ChatClient::new(api, images)));
    let _ = START_DARK.set(args.dark);

    tracing::info!(api = %config.api_base_url, "Starting GupShup");

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("GupShup")
            .with_inner_size(dioxus::desktop::LogicalSize::new(args.width, args.height))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop().with_cfg(window).launch(app::App);
    Ok(())
}
