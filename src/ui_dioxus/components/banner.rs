use dioxus::prelude::*;

use crate::services::NoticeKind;
use crate::ui_dioxus::state::BoardState;

/// Transient status banner. Visibility is driven entirely by the board state;
/// the dismiss timer lives with whoever showed the notice.
#[component]
pub fn Banner(board: Signal<BoardState>) -> Element {
    let notice = board.read().notice().cloned();

    match notice {
        Some(notice) => {
            let (background, color, border) = match notice.kind {
                NoticeKind::Success => ("#d1fae5", "#065f46", "#10b981"),
                NoticeKind::Error => ("#fee2e2", "#991b1b", "#ef4444"),
            };
            rsx! {
                div {
                    id: "message",
                    class: if notice.kind == NoticeKind::Success { "success" } else { "error" },
                    style: format!(
                        "padding: 12px; border-radius: 6px; margin-bottom: 16px; background: {}; color: {}; border: 1px solid {};",
                        background, color, border
                    ),
                    "{notice.text}"
                }
            }
        }
        None => rsx! {
            div { id: "message", class: "hidden", style: "display: none;" }
        },
    }
}
