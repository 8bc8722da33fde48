use dioxus::prelude::*;

use crate::domain::view::SortKey;
use crate::ui_dioxus::state::BoardState;

/// Category filter, sort selector and search box. Everything here mutates
/// the view controls only; derivation and re-render follow from the signal.
#[component]
pub fn Toolbar(mut board: Signal<BoardState>) -> Element {
    let categories = board.read().category_options();
    let selected_category = board.read().controls.selected_category.clone();
    let sort_value = board.read().controls.sort_key.as_str();
    let search_text = board.read().controls.search_text.clone();

    rsx! {
        div {
            class: "toolbar",
            style: "display: flex; gap: 12px; align-items: center; margin-bottom: 16px; padding: 12px; background: white; border-radius: 8px; box-shadow: 0 1px 3px rgba(0,0,0,0.1);",

            select {
                id: "filter-category",
                style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                value: "{selected_category}",
                onchange: move |e| board.write().controls.selected_category = e.value(),
                option { value: "", "All Categories" }
                for category in categories {
                    option { value: "{category}", "{category}" }
                }
            }

            select {
                id: "sort-activities",
                style: "padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                value: "{sort_value}",
                onchange: move |e| board.write().controls.sort_key = SortKey::parse(&e.value()),
                option { value: "none", "Sort: Default" }
                option { value: "name", "Sort: Name" }
                option { value: "time", "Sort: Time" }
            }

            input {
                id: "search-activities",
                r#type: "text",
                style: "flex: 1; padding: 8px 12px; border: 1px solid #e5e7eb; border-radius: 6px;",
                placeholder: "Search activities...",
                value: "{search_text}",
                oninput: move |e| board.write().controls.search_text = e.value(),
            }
        }
    }
}
