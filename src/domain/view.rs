use std::cmp::Ordering;

use super::activity::{Activity, Catalog};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    None,
    Name,
    Time,
}

impl SortKey {
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => SortKey::Name,
            "time" => SortKey::Time,
            _ => SortKey::None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::None => "none",
            SortKey::Name => "name",
            SortKey::Time => "time",
        }
    }
}

/// Current values of the toolbar controls. Owned by the UI layer and kept
/// across catalog refreshes so a refresh never resets the user's filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewControls {
    /// Empty string selects all categories.
    pub selected_category: String,
    pub sort_key: SortKey,
    pub search_text: String,
}

/// Project the catalog through the controls: category filter, then search,
/// then sort. Recomputed from scratch on every call; with `SortKey::None`
/// entries stay in catalog iteration order.
pub fn derive<'a>(catalog: &'a Catalog, controls: &ViewControls) -> Vec<(&'a str, &'a Activity)> {
    let mut entries: Vec<(&str, &Activity)> = catalog
        .iter()
        .map(|(name, activity)| (name.as_str(), activity))
        .collect();

    if !controls.selected_category.is_empty() {
        entries.retain(|(_, activity)| activity.category_label() == controls.selected_category);
    }

    let needle = controls.search_text.trim().to_lowercase();
    if !needle.is_empty() {
        entries.retain(|(name, activity)| {
            name.to_lowercase().contains(&needle)
                || activity.description.to_lowercase().contains(&needle)
        });
    }

    match controls.sort_key {
        SortKey::Name => entries.sort_by(|a, b| locale_cmp(a.0, b.0)),
        SortKey::Time => entries.sort_by(|a, b| locale_cmp(&a.1.schedule, &b.1.schedule)),
        SortKey::None => {}
    }

    entries
}

/// Distinct category labels across the whole catalog, sorted ascending.
/// Feeds the category filter's option list.
pub fn category_options(catalog: &Catalog) -> Vec<String> {
    let mut categories: Vec<String> = catalog
        .values()
        .map(|activity| activity.category_label().to_string())
        .collect();
    categories.sort();
    categories.dedup();
    categories
}

/// Case-insensitive lexicographic order with a case-sensitive tiebreak, so
/// "apple" sorts next to "Apple" instead of after "Zebra".
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    let folded = a
        .chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase));
    match folded {
        Ordering::Equal => a.cmp(b),
        other => other,
    }
}
