use chrono::{NaiveDate, NaiveTime};
use url::Url;

use super::error::EventError;
use super::types::{Event, EventCategory};

/// Maximum title length accepted at the request boundary.
pub const MAX_TITLE_LENGTH: usize = 200;

/// Validates the fields an event is created or updated with.
///
/// Times only constrain each other when the event starts and ends on the
/// same day.
pub fn validate_event_fields(
    title: &str,
    start_date: NaiveDate,
    end_date: NaiveDate,
    start_time: NaiveTime,
    end_time: NaiveTime,
    external_link: Option<&str>,
) -> Result<(), EventError> {
    validate_title(title)?;
    if end_date < start_date {
        return Err(EventError::InvalidDateRange);
    }
    if end_date == start_date && end_time < start_time {
        return Err(EventError::InvalidTimeRange);
    }
    if let Some(link) = external_link {
        validate_external_link(link)?;
    }
    Ok(())
}

/// Rejects blank titles and titles over [`MAX_TITLE_LENGTH`] characters.
pub fn validate_title(title: &str) -> Result<(), EventError> {
    if title.trim().is_empty() {
        return Err(EventError::EmptyTitle);
    }
    if title.chars().count() > MAX_TITLE_LENGTH {
        return Err(EventError::TitleTooLong);
    }
    Ok(())
}

/// Validates a stored event, e.g. before merging an update into it.
pub fn validate_event(event: &Event) -> Result<(), EventError> {
    validate_event_fields(
        &event.title,
        event.start_date,
        event.end_date,
        parse_event_time(&event.start_time)?,
        parse_event_time(&event.end_time)?,
        event.external_link.as_deref(),
    )
}

/// Checks that a link is an absolute http(s) URL.
pub fn validate_external_link(link: &str) -> Result<(), EventError> {
    let url = Url::parse(link.trim()).map_err(|_| EventError::InvalidLink(link.to_string()))?;
    match url.scheme() {
        "http" | "https" => Ok(()),
        _ => Err(EventError::InvalidLink(link.to_string())),
    }
}

/// Finds the category an event refers to.
pub fn find_category<'a>(
    categories: &'a [EventCategory],
    category_id: &str,
) -> Result<&'a EventCategory, EventError> {
    categories
        .iter()
        .find(|category| category.id == category_id)
        .ok_or_else(|| EventError::UnknownCategory(category_id.to_string()))
}

/// Parses a store time string (`HH:MM` or `HH:MM:SS`).
pub fn parse_event_time(value: &str) -> Result<NaiveTime, EventError> {
    NaiveTime::parse_from_str(value, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(value, "%H:%M:%S"))
        .map_err(|_| EventError::InvalidTime(value.to_string()))
}

/// Formats a time the way events carry it (`HH:MM`).
pub fn format_event_time(time: NaiveTime) -> String {
    time.format("%H:%M").to_string()
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

    #[test]
    fn test_validate_event_fields_success() {
        let day = date(2025, 1, 10);
        assert!(validate_event_fields("Town hall", day, day, time(9, 0), time(9, 0), None).is_ok());
        assert!(validate_event_fields(
            "Expo",
            day,
            date(2025, 1, 12),
            time(18, 0),
            time(8, 0),
            Some("https://example.org/expo"),
        )
        .is_ok());
    }

    #[test]
    fn test_validate_event_fields_empty_title() {
        let day = date(2025, 1, 10);
        assert_eq!(
            validate_event_fields("  ", day, day, time(9, 0), time(10, 0), None),
            Err(EventError::EmptyTitle)
        );
    }

    #[test]
    fn test_validate_event_fields_title_too_long() {
        let day = date(2025, 1, 10);
        let title = "x".repeat(MAX_TITLE_LENGTH + 1);
        assert_eq!(
            validate_event_fields(&title, day, day, time(9, 0), time(10, 0), None),
            Err(EventError::TitleTooLong)
        );
    }

    #[test]
    fn test_validate_event_fields_invalid_date_range() {
        assert_eq!(
            validate_event_fields(
                "Backwards",
                date(2025, 1, 10),
                date(2025, 1, 9),
                time(9, 0),
                time(10, 0),
                None
            ),
            Err(EventError::InvalidDateRange)
        );
    }

    #[test]
    fn test_validate_event_fields_invalid_time_range() {
        let day = date(2025, 1, 10);
        assert_eq!(
            validate_event_fields("Late", day, day, time(14, 0), time(10, 0), None),
            Err(EventError::InvalidTimeRange)
        );
    }

    #[test]
    fn test_validate_external_link() {
        assert!(validate_external_link("https://example.org").is_ok());
        assert!(validate_external_link("http://example.org/path?q=1").is_ok());
        assert!(matches!(
            validate_external_link("example.org"),
            Err(EventError::InvalidLink(_))
        ));
        assert!(matches!(
            validate_external_link("ftp://example.org"),
            Err(EventError::InvalidLink(_))
        ));
    }

    #[test]
    fn test_find_category() {
        let categories = vec![
            EventCategory::new("meeting", "Rapat", "text-blue-700", "bg-blue-100"),
            EventCategory::new("seminar", "Seminar", "text-orange-700", "bg-orange-100"),
        ];

        assert_eq!(find_category(&categories, "seminar").unwrap().name, "Seminar");
        assert_eq!(
            find_category(&categories, "gala"),
            Err(EventError::UnknownCategory("gala".to_string()))
        );
    }

    #[test]
    fn test_parse_and_format_event_time() {
        assert_eq!(parse_event_time("09:30"), Ok(time(9, 30)));
        assert_eq!(parse_event_time("09:30:00"), Ok(time(9, 30)));
        assert!(parse_event_time("9.30").is_err());
        assert_eq!(format_event_time(time(7, 5)), "07:05");
    }

    #[test]
    fn test_validate_event_rejects_malformed_stored_time() {
        let category = EventCategory::new("meeting", "Rapat", "text-blue-700", "bg-blue-100");
        let event = Event::new("1", "A", date(2025, 1, 10), "nine", category);
        assert_eq!(
            validate_event(&event),
            Err(EventError::InvalidTime("nine".to_string()))
        );
    }
}
