//! Filter criteria and the pure filter over the event list.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::Event;
use crate::serde::{deserialize_optional_date, deserialize_optional_string};

/// Conjunctive filter criteria. Unset (or empty) fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarFilter {
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub category: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_string")]
    pub search: Option<String>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub start_date: Option<NaiveDate>,
    #[serde(default, deserialize_with = "deserialize_optional_date")]
    pub end_date: Option<NaiveDate>,
}

impl CalendarFilter {
    /// Create an empty filter.
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep only events of this category.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Keep only events whose title, description or location contain `search`.
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = Some(search.into());
        self
    }

    /// Keep only events starting on or after `date`.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Keep only events ending on or before `date`.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Returns true if no criterion is set.
    pub fn is_empty(&self) -> bool {
        self.category_criterion().is_none()
            && self.search_criterion().is_none()
            && self.start_date.is_none()
            && self.end_date.is_none()
    }

    /// Returns an empty filter, the "reset" of the filter bar.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    /// Returns true if `event` satisfies every set criterion.
    pub fn matches(&self, event: &Event) -> bool {
        self.category_criterion()
            .is_none_or(|category| event.category.id == category)
            && self
                .search_criterion()
                .is_none_or(|search| matches_search(event, &search.to_lowercase()))
            && self.start_date.is_none_or(|start| event.start_date >= start)
            && self.end_date.is_none_or(|end| event.end_date <= end)
    }

    fn category_criterion(&self) -> Option<&str> {
        self.category.as_deref().filter(|c| !c.is_empty())
    }

    fn search_criterion(&self) -> Option<&str> {
        self.search.as_deref().filter(|s| !s.is_empty())
    }
}

fn matches_search(event: &Event, needle: &str) -> bool {
    [&event.title, &event.description, &event.location]
        .iter()
        .any(|field| field.to_lowercase().contains(needle))
}

/// Returns the events satisfying `filter`, preserving their order.
pub fn filter_events<'a>(events: &'a [Event], filter: &CalendarFilter) -> Vec<&'a Event> {
    events.iter().filter(|event| filter.matches(event)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::EventCategory;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn category(id: &str) -> EventCategory {
        EventCategory::new(id, id, "text-gray-700", "bg-gray-100")
    }

    fn sample_events() -> Vec<Event> {
        vec![
            Event::new("1", "Budget hearing", date(2025, 1, 10), "09:00", category("meeting"))
                .with_description("Annual budget")
                .with_location("City Hall"),
            Event::new("2", "Rust Workshop", date(2025, 1, 12), "13:00", category("workshop"))
                .with_description("Hands-on session")
                .with_location("Library"),
            Event::new("3", "Community Fair", date(2025, 1, 14), "10:00", category("social"))
                .with_end_date(date(2025, 1, 16))
                .with_location("Central Park"),
            Event::new("4", "Council meeting", date(2025, 1, 20), "19:00", category("meeting"))
                .with_location("city hall annex"),
        ]
    }

    fn ids(events: &[&Event]) -> Vec<String> {
        events.iter().map(|e| e.id.clone()).collect()
    }

    #[test]
    fn test_empty_filter_returns_everything_in_order() {
        let events = sample_events();
        let filtered = filter_events(&events, &CalendarFilter::new());

        assert_eq!(filtered.len(), events.len());
        assert!(filtered.iter().zip(events.iter()).all(|(a, b)| *a == b));
    }

    #[test]
    fn test_filter_by_category() {
        let events = sample_events();
        let filtered = filter_events(&events, &CalendarFilter::new().with_category("meeting"));
        assert_eq!(ids(&filtered), vec!["1", "4"]);
    }

    #[test]
    fn test_unknown_category_matches_nothing() {
        let events = sample_events();
        let filtered = filter_events(&events, &CalendarFilter::new().with_category("gala"));
        assert!(filtered.is_empty());
    }

    #[test]
    fn test_search_is_case_insensitive_across_fields() {
        let events = sample_events();

        let by_location = filter_events(&events, &CalendarFilter::new().with_search("CITY HALL"));
        assert_eq!(ids(&by_location), vec!["1", "4"]);

        let by_description = filter_events(&events, &CalendarFilter::new().with_search("hands-on"));
        assert_eq!(ids(&by_description), vec!["2"]);

        let by_title = filter_events(&events, &CalendarFilter::new().with_search("fair"));
        assert_eq!(ids(&by_title), vec!["3"]);
    }

    #[test]
    fn test_empty_strings_are_unset() {
        let events = sample_events();
        let filter = CalendarFilter {
            category: Some(String::new()),
            search: Some(String::new()),
            start_date: None,
            end_date: None,
        };

        assert!(filter.is_empty());
        assert_eq!(filter_events(&events, &filter).len(), events.len());
    }

    #[test]
    fn test_date_bounds() {
        let events = sample_events();

        let from = filter_events(&events, &CalendarFilter::new().with_start_date(date(2025, 1, 12)));
        assert_eq!(ids(&from), vec!["2", "3", "4"]);

        // Event 3 ends on the 16th, so it is outside an end bound of the 15th.
        let until = filter_events(&events, &CalendarFilter::new().with_end_date(date(2025, 1, 15)));
        assert_eq!(ids(&until), vec!["1", "2"]);
    }

    #[test]
    fn test_criteria_compose_conjunctively() {
        let events = sample_events();
        let filter = CalendarFilter::new()
            .with_category("meeting")
            .with_search("council")
            .with_start_date(date(2025, 1, 1))
            .with_end_date(date(2025, 1, 31));

        assert_eq!(ids(&filter_events(&events, &filter)), vec!["4"]);
    }

    #[test]
    fn test_filtering_twice_equals_combined_filter() {
        let events = sample_events();
        let by_category = CalendarFilter::new().with_category("meeting");
        let by_search = CalendarFilter::new().with_search("hall");
        let combined = CalendarFilter::new()
            .with_category("meeting")
            .with_search("hall");

        let first: Vec<Event> = filter_events(&events, &by_category)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_events(&first, &by_search);

        assert_eq!(ids(&twice), ids(&filter_events(&events, &combined)));
    }

    #[test]
    fn test_filter_is_idempotent() {
        let events = sample_events();
        let filter = CalendarFilter::new().with_search("hall");
        assert_eq!(
            filter_events(&events, &filter),
            filter_events(&events, &filter)
        );
    }

    #[test]
    fn test_scenario_search_without_match_is_empty() {
        let events = vec![Event::new(
            "1",
            "Standup",
            date(2025, 1, 10),
            "09:00",
            category("meeting"),
        )];
        let filter = CalendarFilter::new().with_search("foo");
        assert!(filter_events(&events, &filter).is_empty());

        let filter = CalendarFilter::new().with_category("meeting");
        assert_eq!(ids(&filter_events(&events, &filter)), vec!["1"]);
    }

    #[test]
    fn test_deserialize_from_form_values() {
        let json = r#"{"category": "", "search": "fair", "start_date": "2025-01-01", "end_date": ""}"#;
        let filter: CalendarFilter = serde_json::from_str(json).unwrap();

        assert_eq!(filter.category, None);
        assert_eq!(filter.search.as_deref(), Some("fair"));
        assert_eq!(filter.start_date, Some(date(2025, 1, 1)));
        assert_eq!(filter.end_date, None);
        assert!(!filter.is_empty());
        assert!(filter.cleared().is_empty());
    }
}
