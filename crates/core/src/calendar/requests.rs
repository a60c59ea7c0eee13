//! Request payloads for creating and updating events.
//!
//! These are shared between the gateways and the application layer.
//! Following the Functional Core pattern, these are pure data types with no I/O.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::EventError;
use super::operations::{
    format_event_time, parse_event_time, validate_event_fields, validate_external_link,
    validate_title,
};
use super::types::{Event, EventCategory};
use crate::serde::{
    deserialize_clearable_string, deserialize_optional_date, deserialize_optional_string,
    deserialize_optional_time,
};

/// Request payload for creating a new event.
///
/// The store assigns the identifier and timestamps.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateEventRequest {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub start_date: NaiveDate,
    /// Defaults to `start_date`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_date"
    )]
    pub end_date: Option<NaiveDate>,
    pub start_time: NaiveTime,
    /// Defaults to `start_time`.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_time"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(default)]
    pub location: String,
    pub category_id: String,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub external_link: Option<String>,
}

impl CreateEventRequest {
    /// Create a single-day request.
    pub fn new(
        title: impl Into<String>,
        category_id: impl Into<String>,
        start_date: NaiveDate,
        start_time: NaiveTime,
    ) -> Self {
        Self {
            title: title.into(),
            description: String::new(),
            start_date,
            end_date: None,
            start_time,
            end_time: None,
            location: String::new(),
            category_id: category_id.into(),
            external_link: None,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Set the end date (multi-day events).
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = Some(end_date);
        self
    }

    /// Set the end time.
    pub fn with_end_time(mut self, end_time: NaiveTime) -> Self {
        self.end_time = Some(end_time);
        self
    }

    /// Set the external link.
    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    /// End date, falling back to the start date.
    pub fn effective_end_date(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// End time, falling back to the start time.
    pub fn effective_end_time(&self) -> NaiveTime {
        self.end_time.unwrap_or(self.start_time)
    }

    /// Validates the request before it is sent to the store.
    pub fn validate(&self) -> Result<(), EventError> {
        validate_event_fields(
            &self.title,
            self.start_date,
            self.effective_end_date(),
            self.start_time,
            self.effective_end_time(),
            self.external_link.as_deref(),
        )
    }

    /// Builds the stored event, as a store would after assigning an id.
    pub fn into_event(
        self,
        id: impl Into<String>,
        category: EventCategory,
        now: DateTime<Utc>,
    ) -> Event {
        let end_date = self.effective_end_date();
        let end_time = self.effective_end_time();
        Event {
            id: id.into(),
            title: self.title,
            description: self.description,
            start_date: self.start_date,
            end_date,
            start_time: format_event_time(self.start_time),
            end_time: format_event_time(end_time),
            location: self.location,
            category,
            external_link: self.external_link,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Request payload for updating an event. `None` fields are left unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateEventRequest {
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub title: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub description: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_date"
    )]
    pub start_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_date"
    )]
    pub end_date: Option<NaiveDate>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_time"
    )]
    pub start_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_time"
    )]
    pub end_time: Option<NaiveTime>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub location: Option<String>,
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_optional_string"
    )]
    pub category_id: Option<String>,
    /// `Some(None)` clears the link.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        deserialize_with = "deserialize_clearable_string"
    )]
    pub external_link: Option<Option<String>>,
}

impl UpdateEventRequest {
    /// Create an empty update request.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Set the start date.
    pub fn with_start_date(mut self, date: NaiveDate) -> Self {
        self.start_date = Some(date);
        self
    }

    /// Set the end date.
    pub fn with_end_date(mut self, date: NaiveDate) -> Self {
        self.end_date = Some(date);
        self
    }

    /// Set the start time.
    pub fn with_start_time(mut self, time: NaiveTime) -> Self {
        self.start_time = Some(time);
        self
    }

    /// Set the end time.
    pub fn with_end_time(mut self, time: NaiveTime) -> Self {
        self.end_time = Some(time);
        self
    }

    /// Set the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// Move the event to another category.
    pub fn with_category(mut self, category_id: impl Into<String>) -> Self {
        self.category_id = Some(category_id.into());
        self
    }

    /// Set the external link.
    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(Some(link.into()));
        self
    }

    /// Remove the external link.
    pub fn clear_external_link(mut self) -> Self {
        self.external_link = Some(None);
        self
    }

    /// Returns true if the request changes nothing.
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }

    /// Validates the fields this update carries on their own.
    ///
    /// Ranges are only checked when both ends are present; use
    /// [`UpdateEventRequest::validate_against`] when the stored event is known.
    pub fn validate(&self) -> Result<(), EventError> {
        if let Some(title) = &self.title {
            validate_title(title)?;
        }
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(EventError::InvalidDateRange);
            }
            if let (Some(start_time), Some(end_time)) = (self.start_time, self.end_time) {
                if end == start && end_time < start_time {
                    return Err(EventError::InvalidTimeRange);
                }
            }
        }
        if let Some(Some(link)) = &self.external_link {
            validate_external_link(link)?;
        }
        Ok(())
    }

    /// Validates the event that would result from applying this update to `existing`.
    pub fn validate_against(&self, existing: &Event) -> Result<(), EventError> {
        let start_time = match self.start_time {
            Some(time) => time,
            None => parse_event_time(&existing.start_time)?,
        };
        let end_time = match self.end_time {
            Some(time) => time,
            None => parse_event_time(&existing.end_time)?,
        };
        let link = match &self.external_link {
            Some(link) => link.as_deref(),
            None => existing.external_link.as_deref(),
        };

        validate_event_fields(
            self.title.as_deref().unwrap_or(&existing.title),
            self.start_date.unwrap_or(existing.start_date),
            self.end_date.unwrap_or(existing.end_date),
            start_time,
            end_time,
            link,
        )
    }

    /// Apply updates to an existing event. The caller stamps `updated_at`.
    pub fn apply_to(&self, event: &mut Event, category: Option<&EventCategory>) {
        if let Some(title) = &self.title {
            event.title = title.clone();
        }
        if let Some(description) = &self.description {
            event.description = description.clone();
        }
        if let Some(start_date) = self.start_date {
            event.start_date = start_date;
        }
        if let Some(end_date) = self.end_date {
            event.end_date = end_date;
        }
        if let Some(start_time) = self.start_time {
            event.start_time = format_event_time(start_time);
        }
        if let Some(end_time) = self.end_time {
            event.end_time = format_event_time(end_time);
        }
        if let Some(location) = &self.location {
            event.location = location.clone();
        }
        if let Some(category) = category {
            event.category = category.clone();
        }
        if let Some(link) = &self.external_link {
            event.external_link = link.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn time(hour: u32, min: u32) -> NaiveTime {
        NaiveTime::from_hms_opt(hour, min, 0).unwrap()
    }

    fn meeting() -> EventCategory {
        EventCategory::new("meeting", "Rapat", "text-blue-700", "bg-blue-100")
    }

    fn seminar() -> EventCategory {
        EventCategory::new("seminar", "Seminar", "text-orange-700", "bg-orange-100")
    }

    #[test]
    fn test_create_request_defaults_end_to_start() {
        let req = CreateEventRequest::new("Town hall", "meeting", date(2025, 1, 10), time(9, 0));

        assert_eq!(req.effective_end_date(), date(2025, 1, 10));
        assert_eq!(req.effective_end_time(), time(9, 0));
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_create_request_rejects_backwards_range() {
        let req = CreateEventRequest::new("Expo", "meeting", date(2025, 1, 10), time(9, 0))
            .with_end_date(date(2025, 1, 8));
        assert_eq!(req.validate(), Err(EventError::InvalidDateRange));
    }

    #[test]
    fn test_create_request_rejects_bad_link() {
        let req = CreateEventRequest::new("Expo", "meeting", date(2025, 1, 10), time(9, 0))
            .with_external_link("not a url");
        assert!(matches!(req.validate(), Err(EventError::InvalidLink(_))));
    }

    #[test]
    fn test_create_request_into_event() {
        let now = Utc::now();
        let event = CreateEventRequest::new("Expo", "meeting", date(2025, 1, 10), time(8, 30))
            .with_end_date(date(2025, 1, 12))
            .with_end_time(time(17, 0))
            .with_location("Convention Center")
            .into_event("abc", meeting(), now);

        assert_eq!(event.id, "abc");
        assert_eq!(event.start_time, "08:30");
        assert_eq!(event.end_time, "17:00");
        assert_eq!(event.end_date, date(2025, 1, 12));
        assert_eq!(event.category.id, "meeting");
        assert_eq!(event.created_at, now);
        assert_eq!(event.updated_at, now);
    }

    #[test]
    fn test_create_request_from_form_json() {
        let json = r#"{
            "title": "Workshop",
            "start_date": "2025-02-01",
            "end_date": "",
            "start_time": "13:00",
            "end_time": "",
            "category_id": "workshop",
            "external_link": ""
        }"#;
        let req: CreateEventRequest = serde_json::from_str(json).unwrap();

        assert_eq!(req.start_time, time(13, 0));
        assert_eq!(req.end_date, None);
        assert_eq!(req.end_time, None);
        assert_eq!(req.external_link, None);
        assert_eq!(req.description, "");
    }

    #[test]
    fn test_update_request_apply() {
        let mut event = Event::new("1", "Original", date(2025, 1, 10), "09:00", meeting())
            .with_external_link("https://example.org");
        let update = UpdateEventRequest::new()
            .with_title("Updated")
            .with_start_time(time(10, 15))
            .clear_external_link();

        update.apply_to(&mut event, Some(&seminar()));

        assert_eq!(event.title, "Updated");
        assert_eq!(event.start_time, "10:15");
        assert_eq!(event.end_time, "09:00");
        assert_eq!(event.category.id, "seminar");
        assert_eq!(event.external_link, None);
    }

    #[test]
    fn test_empty_update_changes_nothing() {
        let original = Event::new("1", "Original", date(2025, 1, 10), "09:00", meeting());
        let mut event = original.clone();
        let update = UpdateEventRequest::new();

        assert!(update.is_empty());
        update.apply_to(&mut event, None);
        assert_eq!(event, original);
    }

    #[test]
    fn test_update_validate_against_merges_existing() {
        let event = Event::new("1", "Expo", date(2025, 1, 10), "09:00", meeting())
            .with_end_date(date(2025, 1, 12));

        let ok = UpdateEventRequest::new().with_start_date(date(2025, 1, 11));
        assert!(ok.validate_against(&event).is_ok());

        let backwards = UpdateEventRequest::new().with_start_date(date(2025, 1, 13));
        assert_eq!(
            backwards.validate_against(&event),
            Err(EventError::InvalidDateRange)
        );
    }

    #[test]
    fn test_update_validate_checks_present_fields() {
        assert!(UpdateEventRequest::new().validate().is_ok());
        assert!(UpdateEventRequest::new().clear_external_link().validate().is_ok());
        assert!(UpdateEventRequest::new()
            .with_start_date(date(2025, 1, 13))
            .validate()
            .is_ok());

        assert_eq!(
            UpdateEventRequest::new().with_title("   ").validate(),
            Err(EventError::EmptyTitle)
        );
        assert_eq!(
            UpdateEventRequest::new().with_title("a".repeat(201)).validate(),
            Err(EventError::TitleTooLong)
        );
        assert!(matches!(
            UpdateEventRequest::new()
                .with_external_link("javascript:alert(1)")
                .validate(),
            Err(EventError::InvalidLink(_))
        ));
        assert_eq!(
            UpdateEventRequest::new()
                .with_start_date(date(2025, 1, 13))
                .with_end_date(date(2025, 1, 12))
                .validate(),
            Err(EventError::InvalidDateRange)
        );
        assert_eq!(
            UpdateEventRequest::new()
                .with_start_date(date(2025, 1, 12))
                .with_end_date(date(2025, 1, 12))
                .with_start_time(time(15, 0))
                .with_end_time(time(9, 0))
                .validate(),
            Err(EventError::InvalidTimeRange)
        );
    }

    #[test]
    fn test_update_request_serializes_cleared_link_as_null() {
        let update = UpdateEventRequest::new().clear_external_link();
        let json = serde_json::to_value(&update).unwrap();

        assert!(json.get("title").is_none());
        assert!(json["external_link"].is_null());
        assert!(json.as_object().unwrap().contains_key("external_link"));
    }
}
