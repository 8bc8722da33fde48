use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// All activities as last fetched from the server, keyed by name.
/// Insertion order follows the server's JSON object order.
pub type Catalog = IndexMap<String, Activity>;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Activity {
    pub description: String,
    #[serde(default)]
    pub schedule: String,
    pub max_participants: u32,
    pub participants: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
}

impl Activity {
    pub fn spots_left(&self) -> u32 {
        self.max_participants
            .saturating_sub(self.participants.len() as u32)
    }

    pub fn availability(&self) -> String {
        format!("{} spots left", self.spots_left())
    }

    /// Category label for filtering and the filter option list. Falls back to
    /// the first word of the description when no category is set.
    pub fn category_label(&self) -> &str {
        match &self.category {
            Some(category) if !category.is_empty() => category,
            _ => self.description.split_whitespace().next().unwrap_or(""),
        }
    }
}
