use std::sync::Arc;

use dioxus::prelude::*;

use crate::services::{BoardController, NoticeKind};
use crate::ui_dioxus::state::{schedule_notice_dismiss, BoardState};

#[component]
pub fn SignupForm(mut board: Signal<BoardState>) -> Element {
    let controller = use_context::<Arc<BoardController>>();
    let mut email = use_signal(String::new);
    let mut selected_activity = use_signal(String::new);

    // Selector options mirror the rendered list, same order.
    let options: Vec<String> = board
        .read()
        .derived()
        .iter()
        .map(|(name, _)| name.to_string())
        .collect();

    let submit = move |_| {
        let activity = selected_activity();
        let address = email();
        if activity.is_empty() || address.is_empty() {
            return;
        }
        let controller = controller.clone();
        spawn(async move {
            let report = controller.signup(&activity, &address).await;
            let succeeded = report.notice.kind == NoticeKind::Success;
            let seq = board.write().apply_action(report);
            schedule_notice_dismiss(board, seq);
            // The form only resets once the server has accepted the signup.
            if succeeded {
                email.set(String::new());
                selected_activity.set(String::new());
            }
        });
    };

    rsx! {
        div {
            class: "signup-form",
            style: "margin-top: 20px; padding: 16px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

            h3 {
                style: "margin: 0 0 12px 0; font-size: 1.2rem; font-weight: 600;",
                "Sign Up for an Activity"
            }

            form {
                id: "signup-form",
                prevent_default: "onsubmit",
                onsubmit: submit,
                style: "display: flex; flex-direction: column; gap: 10px;",

                label { r#for: "email", "Your Email:" }
                input {
                    id: "email",
                    r#type: "email",
                    required: true,
                    style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                    placeholder: "you@school.edu",
                    value: "{email}",
                    oninput: move |e| email.set(e.value()),
                }

                label { r#for: "activity", "Select Activity:" }
                select {
                    id: "activity",
                    required: true,
                    style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                    value: "{selected_activity}",
                    onchange: move |e| selected_activity.set(e.value()),
                    option { value: "", "-- Select an activity --" }
                    for name in options {
                        option { value: "{name}", "{name}" }
                    }
                }

                button {
                    r#type: "submit",
                    style: "align-self: flex-start; padding: 8px 20px; background: #3b82f6; color: white; border: none; border-radius: 6px; cursor: pointer;",
                    "Sign Up"
                }
            }
        }
    }
}
