use std::collections::BTreeMap;

use chrono::NaiveDate;

use super::dates::{is_same_month, month_grid, week_dates};
use super::types::{DayCell, Event};

/// Number of hour rows in the day view.
pub const HOURS_PER_DAY: u32 = 24;

/// Maximum events listed inside a month cell before "+N more".
pub const MONTH_CELL_LIMIT: usize = 3;

/// Returns the 24 hour labels `"00:00"` to `"23:00"`.
pub fn hour_labels() -> Vec<String> {
    (0..HOURS_PER_DAY).map(|h| format!("{h:02}:00")).collect()
}

/// Returns the events whose `[start_date, end_date]` range contains `date`.
pub fn events_for_date(events: &[Event], date: NaiveDate) -> Vec<&Event> {
    events.iter().filter(|event| event.spans(date)).collect()
}

/// Buckets the events running on `date` by the hour they start.
///
/// Every label from `"00:00"` to `"23:00"` is present, possibly empty.
/// Events whose start time has no two-digit hour in range are dropped.
pub fn hourly_buckets(events: &[Event], date: NaiveDate) -> BTreeMap<String, Vec<&Event>> {
    let mut buckets: BTreeMap<String, Vec<&Event>> =
        hour_labels().into_iter().map(|label| (label, Vec::new())).collect();

    for event in events_for_date(events, date) {
        let Some(hour) = event.start_hour() else {
            continue;
        };
        if let Some(bucket) = buckets.get_mut(&format!("{hour}:00")) {
            bucket.push(event);
        }
    }

    buckets
}

/// Sorts events by start date, then start time. Stable for ties.
pub fn sort_events_chronologically(events: &mut [Event]) {
    events.sort_by(|a, b| {
        a.start_date
            .cmp(&b.start_date)
            .then_with(|| a.start_time.cmp(&b.start_time))
    });
}

/// Builds a single cell for `date`.
pub fn build_day_cell(
    date: NaiveDate,
    anchor: NaiveDate,
    today: NaiveDate,
    events: &[Event],
) -> DayCell {
    DayCell {
        date,
        in_current_month: is_same_month(date, anchor),
        is_today: date == today,
        events: events_for_date(events, date).into_iter().cloned().collect(),
    }
}

/// Builds the 42 cells of the month view for `anchor`.
pub fn build_month_cells(anchor: NaiveDate, today: NaiveDate, events: &[Event]) -> Vec<DayCell> {
    month_grid(anchor)
        .into_iter()
        .map(|date| build_day_cell(date, anchor, today, events))
        .collect()
}

/// Builds the 7 cells of the week view for `anchor`.
pub fn build_week_days(anchor: NaiveDate, today: NaiveDate, events: &[Event]) -> Vec<DayCell> {
    week_dates(anchor)
        .into_iter()
        .map(|date| build_day_cell(date, anchor, today, events))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::types::EventCategory;

    fn make_date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn meeting() -> EventCategory {
        EventCategory::new("meeting", "Rapat", "text-blue-700", "bg-blue-100")
    }

    fn event(id: &str, date: NaiveDate, time: &str) -> Event {
        Event::new(id, format!("Event {id}"), date, time, meeting())
    }

    #[test]
    fn test_hour_labels() {
        let labels = hour_labels();
        assert_eq!(labels.len(), 24);
        assert_eq!(labels[0], "00:00");
        assert_eq!(labels[9], "09:00");
        assert_eq!(labels[23], "23:00");
    }

    #[test]
    fn test_events_for_date_is_inclusive_subset() {
        let day = make_date(2025, 1, 10);
        let events = vec![
            event("1", day, "09:00"),
            event("2", make_date(2025, 1, 8), "09:00").with_end_date(make_date(2025, 1, 10)),
            event("3", make_date(2025, 1, 10), "09:00").with_end_date(make_date(2025, 1, 12)),
            event("4", make_date(2025, 1, 11), "09:00"),
            event("5", make_date(2025, 1, 1), "09:00").with_end_date(make_date(2025, 1, 9)),
        ];

        let found: Vec<&str> = events_for_date(&events, day)
            .iter()
            .map(|e| e.id.as_str())
            .collect();

        assert_eq!(found, vec!["1", "2", "3"]);
        assert!(events_for_date(&events, day)
            .iter()
            .all(|e| events.contains(e)));
    }

    #[test]
    fn test_hourly_buckets_places_event_in_its_hour() {
        let day = make_date(2025, 1, 10);
        let events = vec![event("1", day, "09:00")];

        let buckets = hourly_buckets(&events, day);

        assert_eq!(buckets.len(), 24);
        assert_eq!(buckets["09:00"].len(), 1);
        assert_eq!(buckets["09:00"][0].id, "1");
        assert!(buckets
            .iter()
            .filter(|(label, _)| label.as_str() != "09:00")
            .all(|(_, bucket)| bucket.is_empty()));
    }

    #[test]
    fn test_hourly_buckets_drops_malformed_times() {
        let day = make_date(2025, 1, 10);
        let events = vec![
            event("bad-hour", day, "25:00"),
            event("single-digit", day, "9:00"),
            event("empty", day, ""),
            event("ok", day, "14:30:00"),
        ];

        let buckets = hourly_buckets(&events, day);
        let total: usize = buckets.values().map(Vec::len).sum();

        assert_eq!(total, 1);
        assert_eq!(buckets["14:00"][0].id, "ok");
    }

    #[test]
    fn test_hourly_buckets_ignores_other_days() {
        let events = vec![event("1", make_date(2025, 1, 11), "09:00")];
        let buckets = hourly_buckets(&events, make_date(2025, 1, 10));
        assert!(buckets.values().all(Vec::is_empty));
    }

    #[test]
    fn test_sort_events_chronologically() {
        let mut events = vec![
            event("late", make_date(2025, 1, 10), "15:00"),
            event("next-day", make_date(2025, 1, 11), "08:00"),
            event("early", make_date(2025, 1, 10), "08:00"),
            event("earlier-date", make_date(2025, 1, 2), "23:00"),
        ];

        sort_events_chronologically(&mut events);

        let ids: Vec<&str> = events.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["earlier-date", "early", "late", "next-day"]);
    }

    #[test]
    fn test_build_month_cells() {
        let anchor = make_date(2025, 1, 15);
        let today = make_date(2025, 1, 10);
        let events = vec![event("1", make_date(2025, 1, 10), "09:00")];

        let cells = build_month_cells(anchor, today, &events);

        assert_eq!(cells.len(), 42);
        assert!(!cells[0].in_current_month); // 2024-12-29
        let tenth = cells.iter().find(|c| c.date == today).unwrap();
        assert!(tenth.is_today);
        assert!(tenth.in_current_month);
        assert_eq!(tenth.events.len(), 1);
        assert_eq!(cells.iter().filter(|c| c.is_today).count(), 1);
        assert_eq!(cells.iter().filter(|c| !c.is_empty()).count(), 1);
    }

    #[test]
    fn test_build_week_days_spreads_multi_day_events() {
        let anchor = make_date(2025, 1, 15); // Wednesday
        let events = vec![event("expo", make_date(2025, 1, 14), "08:00")
            .with_end_date(make_date(2025, 1, 16))];

        let days = build_week_days(anchor, make_date(2025, 1, 1), &events);

        assert_eq!(days.len(), 7);
        let with_events: Vec<NaiveDate> = days
            .iter()
            .filter(|d| !d.is_empty())
            .map(|d| d.date)
            .collect();
        assert_eq!(
            with_events,
            vec![
                make_date(2025, 1, 14),
                make_date(2025, 1, 15),
                make_date(2025, 1, 16)
            ]
        );
    }
}
