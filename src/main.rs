use anyhow::Result;
use dioxus::prelude::*;
use tracing::info;

use enroll::config::BoardConfig;
use enroll::ui_dioxus::App;

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::fmt::init();

    // Fail fast on a bad server URL override; the app reads it again on start.
    let config = BoardConfig::from_env()?;
    info!(server_url = %config.server_url, "starting enroll");

    launch(App);

    Ok(())
}
