use std::sync::Arc;

use dioxus::prelude::*;
use tracing::warn;

use crate::config::BoardConfig;
use crate::services::{BoardController, HttpActivitiesApi};
use crate::ui_dioxus::components::{ActivitiesList, Banner, SignupForm, Toolbar};
use crate::ui_dioxus::state::BoardState;

#[component]
pub fn App() -> Element {
    let controller = use_context_provider(|| {
        let config = BoardConfig::from_env().unwrap_or_else(|err| {
            warn!(error = %err, "falling back to default configuration");
            BoardConfig::default()
        });
        Arc::new(BoardController::new(Arc::new(HttpActivitiesApi::new(
            config.server_url,
        ))))
    });

    let mut board = use_signal(BoardState::new);

    // Initial catalog load on mount.
    use_future(move || {
        let controller = controller.clone();
        async move {
            let result = controller.refresh().await;
            board.write().apply_refresh(result);
        }
    });

    rsx! {
        div {
            style: "max-width: 840px; margin: 0 auto; padding: 24px; font-family: system-ui, sans-serif; color: #1f2937;",

            header {
                style: "margin-bottom: 20px;",
                h1 {
                    style: "margin: 0 0 4px 0; font-size: 1.8rem; font-weight: bold;",
                    "Activity Sign-ups"
                }
                p {
                    style: "margin: 0; color: #6b7280;",
                    "Browse the catalog and sign up for an activity"
                }
            }

            Banner { board }
            Toolbar { board }
            ActivitiesList { board }
            SignupForm { board }
        }
    }
}
