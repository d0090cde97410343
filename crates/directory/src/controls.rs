//! Browser control state and capability interfaces.
//!
//! Every control in the view that could act on the directory is gated on a
//! capability: a handler installed by the host. The browser ships none of
//! them, so the search box, the Filters and Sort buttons, and the dark-mode
//! toggle all render disabled out of the box. An inert affordance reads as
//! disabled instead of silently swallowing input.

use std::cmp::Ordering;

use bevy::prelude::*;

use crate::building::Building;

/// Decides whether a building matches a search query.
pub trait SearchHandler: Send + Sync {
    fn matches(&self, query: &str, building: &Building) -> bool;
}

/// Decides whether a building stays in the visible set.
pub trait FilterHandler: Send + Sync {
    fn retain(&self, building: &Building) -> bool;
}

/// Orders buildings in the grid.
pub trait SortHandler: Send + Sync {
    fn compare(&self, a: &Building, b: &Building) -> Ordering;
}

/// Receives dark-mode toggle presses. No dark theme ships with the
/// browser; installing a handler is what lights the moon button up.
pub trait ThemeHandler: Send + Sync {
    fn toggle(&self);
}

/// The optional handlers the view consults. All slots start empty.
#[derive(Resource, Default)]
pub struct BrowserCapabilities {
    pub search: Option<Box<dyn SearchHandler>>,
    pub filter: Option<Box<dyn FilterHandler>>,
    pub sort: Option<Box<dyn SortHandler>>,
    pub theme: Option<Box<dyn ThemeHandler>>,
}

impl BrowserCapabilities {
    /// Assemble the card list for one render: filter, then search, then
    /// sort, each step only when its handler is installed. With no
    /// handlers installed this is the whole directory in its own order.
    pub fn visible<'a>(&self, query: &str, buildings: &'a [Building]) -> Vec<&'a Building> {
        let mut out: Vec<&Building> = buildings.iter().collect();
        if let Some(filter) = &self.filter {
            out.retain(|b| filter.retain(b));
        }
        let query = query.trim();
        if !query.is_empty() {
            if let Some(search) = &self.search {
                out.retain(|b| search.matches(query, b));
            }
        }
        if let Some(sort) = &self.sort {
            out.sort_by(|a, b| sort.compare(a, b));
        }
        out
    }
}

/// Mutable control state for the view: the query text and the pending
/// focus request from the header's search button.
#[derive(Resource, Default)]
pub struct BrowserControls {
    pub query: String,
    pub request_focus: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::default_campus;

    struct NameContains;

    impl SearchHandler for NameContains {
        fn matches(&self, query: &str, building: &Building) -> bool {
            building.name.to_lowercase().contains(&query.to_lowercase())
        }
    }

    struct HasFreeRooms;

    impl FilterHandler for HasFreeRooms {
        fn retain(&self, building: &Building) -> bool {
            building.available > 0
        }
    }

    struct MostAvailableFirst;

    impl SortHandler for MostAvailableFirst {
        fn compare(&self, a: &Building, b: &Building) -> Ordering {
            b.available.cmp(&a.available)
        }
    }

    #[test]
    fn test_no_capabilities_passes_directory_through() {
        let caps = BrowserCapabilities::default();
        let campus = default_campus();
        let visible = caps.visible("", &campus);
        assert_eq!(visible.len(), campus.len());
        for (shown, original) in visible.iter().zip(&campus) {
            assert_eq!(shown.id, original.id);
        }
    }

    #[test]
    fn test_query_without_search_handler_changes_nothing() {
        let caps = BrowserCapabilities::default();
        let campus = default_campus();
        let visible = caps.visible("ainsworth", &campus);
        assert_eq!(visible.len(), campus.len());
    }

    #[test]
    fn test_visible_is_idempotent_and_leaves_directory_untouched() {
        let caps = BrowserCapabilities::default();
        let campus = default_campus();
        let before = campus.clone();
        let first: Vec<_> = caps.visible("", &campus).iter().map(|b| b.id).collect();
        let second: Vec<_> = caps.visible("", &campus).iter().map(|b| b.id).collect();
        assert_eq!(first, second);
        assert_eq!(campus, before);
    }

    #[test]
    fn test_search_handler_gates_on_query() {
        let caps = BrowserCapabilities {
            search: Some(Box::new(NameContains)),
            ..Default::default()
        };
        let campus = default_campus();

        // Empty and whitespace-only queries bypass the handler.
        assert_eq!(caps.visible("", &campus).len(), campus.len());
        assert_eq!(caps.visible("   ", &campus).len(), campus.len());

        let hits = caps.visible("biological", &campus);
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|b| b.name.starts_with("Biological")));

        assert!(caps.visible("observatory", &campus).is_empty());
    }

    #[test]
    fn test_filter_handler_narrows() {
        let caps = BrowserCapabilities {
            filter: Some(Box::new(HasFreeRooms)),
            ..Default::default()
        };
        let campus = default_campus();
        let visible = caps.visible("", &campus);
        assert_eq!(visible.len(), campus.len() - 1);
        assert!(visible.iter().all(|b| b.available > 0));
    }

    #[test]
    fn test_sort_handler_reorders() {
        let caps = BrowserCapabilities {
            sort: Some(Box::new(MostAvailableFirst)),
            ..Default::default()
        };
        let campus = default_campus();
        let visible = caps.visible("", &campus);
        assert_eq!(visible.first().unwrap().available, 35);
        for pair in visible.windows(2) {
            assert!(pair[0].available >= pair[1].available);
        }
    }

    #[test]
    fn test_handlers_compose() {
        let caps = BrowserCapabilities {
            search: Some(Box::new(NameContains)),
            filter: Some(Box::new(HasFreeRooms)),
            sort: Some(Box::new(MostAvailableFirst)),
            ..Default::default()
        };
        let campus = default_campus();
        let visible = caps.visible("building", &campus);
        // "Ainsworth Building" is filtered out (0 free); the rest sort by
        // free rooms, most first.
        assert!(!visible.is_empty());
        assert!(visible.iter().all(|b| b.available > 0));
        assert!(visible
            .iter()
            .all(|b| b.name.to_lowercase().contains("building")));
        for pair in visible.windows(2) {
            assert!(pair[0].available >= pair[1].available);
        }
    }
}
