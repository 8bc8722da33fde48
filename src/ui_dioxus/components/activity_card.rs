use std::sync::Arc;

use dioxus::prelude::*;

use crate::domain::activity::Activity;
use crate::services::BoardController;
use crate::ui_dioxus::state::{schedule_notice_dismiss, BoardState};

pub const LOAD_FAILURE_TEXT: &str = "Failed to load activities. Please try again later.";

#[component]
pub fn ActivitiesList(board: Signal<BoardState>) -> Element {
    let (loading, load_failed) = {
        let state = board.read();
        (state.loading, state.load_failed)
    };

    if loading {
        return rsx! {
            div {
                id: "activities-list",
                p { style: "color: #6b7280; padding: 20px;", "Loading activities..." }
            }
        };
    }

    if load_failed {
        return rsx! {
            div {
                id: "activities-list",
                p { style: "padding: 20px;", "{LOAD_FAILURE_TEXT}" }
            }
        };
    }

    let cards: Vec<(String, Activity)> = board
        .read()
        .derived()
        .into_iter()
        .map(|(name, activity)| (name.to_string(), activity.clone()))
        .collect();

    rsx! {
        div {
            id: "activities-list",
            for card in cards {
                ActivityCard {
                    board,
                    name: card.0.clone(),
                    activity: card.1.clone(),
                }
            }
        }
    }
}

#[component]
fn ActivityCard(board: Signal<BoardState>, name: String, activity: Activity) -> Element {
    let availability = activity.availability();
    let participants = activity.participants.clone();

    rsx! {
        div {
            class: "activity-card",
            style: "padding: 16px; background: white; border: 1px solid #e5e7eb; border-radius: 8px; margin-bottom: 12px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

            h4 {
                style: "margin: 0 0 8px 0; font-size: 1.1rem; font-weight: 600;",
                "{name}"
            }
            p {
                style: "margin: 0 0 8px 0; color: #4b5563;",
                "{activity.description}"
            }
            p {
                style: "margin: 0 0 4px 0;",
                strong { "Schedule: " }
                "{activity.schedule}"
            }
            p {
                style: "margin: 0 0 12px 0;",
                strong { "Availability: " }
                "{availability}"
            }

            div {
                class: "participants-container",
                if participants.is_empty() {
                    p {
                        style: "margin: 0; color: #9ca3af;",
                        em { "No participants yet" }
                    }
                } else {
                    div {
                        class: "participants-section",
                        h5 {
                            style: "margin: 0 0 6px 0; font-size: 0.9rem;",
                            "Participants:"
                        }
                        ul {
                            class: "participants-list",
                            style: "list-style: none; margin: 0; padding: 0;",
                            for email in participants.clone() {
                                ParticipantRow {
                                    board,
                                    activity_name: name.clone(),
                                    email,
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

/// One roster row with its unregister affordance, keyed by activity and email.
#[component]
fn ParticipantRow(mut board: Signal<BoardState>, activity_name: String, email: String) -> Element {
    let controller = use_context::<Arc<BoardController>>();
    let email_label = email.clone();

    rsx! {
        li {
            style: "display: flex; justify-content: space-between; align-items: center; padding: 4px 0; border-bottom: 1px solid #f3f4f6;",
            span { class: "participant-email", "{email_label}" }
            button {
                class: "delete-btn",
                style: "border: none; background: none; color: #ef4444; cursor: pointer; font-size: 14px;",
                onclick: move |_| {
                    let controller = controller.clone();
                    let activity = activity_name.clone();
                    let email = email.clone();
                    spawn(async move {
                        let report = controller.unregister(&activity, &email).await;
                        let seq = board.write().apply_action(report);
                        schedule_notice_dismiss(board, seq);
                    });
                },
                "✕"
            }
        }
    }
}
