//! Shared fixtures for unit and integration tests.

use serde_json::json;

use crate::domain::activity::Catalog;

/// A small catalog in the server's wire shape, deserialized the same way a
/// real fetch would be.
pub fn sample_catalog() -> Catalog {
    serde_json::from_value(json!({
        "Chess Club": {
            "description": "Learn strategies and compete in chess tournaments",
            "schedule": "Fridays, 3:30 PM - 5:00 PM",
            "max_participants": 12,
            "participants": ["michael@mergington.edu", "daniel@mergington.edu"],
        },
        "Programming Class": {
            "description": "Learn programming fundamentals and build software projects",
            "schedule": "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            "max_participants": 20,
            "participants": ["emma@mergington.edu"],
        },
        "Gym Class": {
            "description": "Physical education and sports activities",
            "schedule": "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            "max_participants": 30,
            "participants": [],
            "category": "Sports",
        },
    }))
    .expect("sample catalog is valid")
}
