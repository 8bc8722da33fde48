#[cfg(test)]
mod tests {
    use super::super::activity::{Activity, Catalog};
    use super::super::view::*;
    use std::cmp::Ordering;

    fn activity(description: &str, schedule: &str, category: Option<&str>) -> Activity {
        Activity {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants: 12,
            participants: Vec::new(),
            category: category.map(str::to_string),
        }
    }

    fn catalog() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.insert(
            "Chess Club".to_string(),
            activity("Chess strategy and tournaments", "Fri 3pm", None),
        );
        catalog.insert(
            "Morning Yoga".to_string(),
            activity("Stretching before class", "Mon 7am", Some("Yoga")),
        );
        catalog.insert(
            "Art Club".to_string(),
            activity("Painting and drawing", "Tue 3pm", None),
        );
        catalog.insert(
            "Evening Yoga".to_string(),
            activity("Wind down after school", "Wed 5pm", Some("Yoga")),
        );
        catalog
    }

    #[test]
    fn no_controls_keeps_catalog_order() {
        let catalog = catalog();
        let view = derive(&catalog, &ViewControls::default());
        let names: Vec<&str> = view.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Chess Club", "Morning Yoga", "Art Club", "Evening Yoga"]
        );
    }

    #[test]
    fn derivation_is_deterministic() {
        let catalog = catalog();
        let controls = ViewControls {
            selected_category: "Yoga".to_string(),
            sort_key: SortKey::Name,
            search_text: String::new(),
        };
        assert_eq!(derive(&catalog, &controls), derive(&catalog, &controls));
    }

    #[test]
    fn category_filter_matches_exactly() {
        let catalog = catalog();
        let controls = ViewControls {
            selected_category: "Yoga".to_string(),
            ..Default::default()
        };
        let view = derive(&catalog, &controls);
        assert!(!view.is_empty());
        assert!(view
            .iter()
            .all(|(_, activity)| activity.category_label() == "Yoga"));

        // Case-sensitive: "yoga" selects nothing.
        let controls = ViewControls {
            selected_category: "yoga".to_string(),
            ..Default::default()
        };
        assert!(derive(&catalog, &controls).is_empty());
    }

    #[test]
    fn search_is_case_insensitive_over_name_and_description() {
        let catalog = catalog();
        let controls = ViewControls {
            search_text: "CHESS".to_string(),
            ..Default::default()
        };
        let view = derive(&catalog, &controls);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Chess Club");

        // Matches descriptions too.
        let controls = ViewControls {
            search_text: "  painting ".to_string(),
            ..Default::default()
        };
        let view = derive(&catalog, &controls);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].0, "Art Club");
    }

    #[test]
    fn blank_search_matches_everything() {
        let catalog = catalog();
        let controls = ViewControls {
            search_text: "   ".to_string(),
            ..Default::default()
        };
        assert_eq!(derive(&catalog, &controls).len(), catalog.len());
    }

    #[test]
    fn sort_by_name_is_non_decreasing() {
        let catalog = catalog();
        let controls = ViewControls {
            sort_key: SortKey::Name,
            ..Default::default()
        };
        let view = derive(&catalog, &controls);
        let names: Vec<&str> = view.iter().map(|(name, _)| *name).collect();
        assert_eq!(
            names,
            ["Art Club", "Chess Club", "Evening Yoga", "Morning Yoga"]
        );
    }

    #[test]
    fn sort_by_time_treats_missing_schedule_as_empty() {
        let mut catalog = catalog();
        catalog.insert(
            "Drop-in Gym".to_string(),
            activity("Open gym time", "", None),
        );
        let controls = ViewControls {
            sort_key: SortKey::Time,
            ..Default::default()
        };
        let view = derive(&catalog, &controls);
        assert_eq!(view[0].0, "Drop-in Gym");
        for pair in view.windows(2) {
            assert_ne!(
                locale_cmp(&pair[0].1.schedule, &pair[1].1.schedule),
                Ordering::Greater
            );
        }
    }

    #[test]
    fn filters_apply_before_sort() {
        let catalog = catalog();
        let controls = ViewControls {
            selected_category: "Yoga".to_string(),
            sort_key: SortKey::Name,
            search_text: "yoga".to_string(),
        };
        let view = derive(&catalog, &controls);
        let names: Vec<&str> = view.iter().map(|(name, _)| *name).collect();
        assert_eq!(names, ["Evening Yoga", "Morning Yoga"]);
    }

    #[test]
    fn category_options_are_deduplicated_and_sorted() {
        let catalog = catalog();
        assert_eq!(category_options(&catalog), ["Chess", "Painting", "Yoga"]);
    }

    #[test]
    fn locale_cmp_folds_case_before_comparing() {
        assert_eq!(locale_cmp("apple", "Banana"), Ordering::Less);
        assert_eq!(locale_cmp("Zebra", "apple"), Ordering::Greater);
        assert_eq!(locale_cmp("apple", "apple"), Ordering::Equal);
        // Equal when folded, tiebreak keeps a deterministic order.
        assert_ne!(locale_cmp("Apple", "apple"), Ordering::Equal);
    }
}
