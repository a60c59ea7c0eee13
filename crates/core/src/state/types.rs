use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::calendar::{filter_events, CalendarFilter, CalendarView, Event};

/// Everything the calendar screens render from.
///
/// The filtered list is derived state: it is rebuilt whenever events or the
/// filter change, including after deserialization, and is only readable
/// through [`CalendarState::filtered_events`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "CalendarStateFields")]
pub struct CalendarState {
    pub view: CalendarView,
    /// Anchor date of the active view.
    pub current_date: NaiveDate,
    pub selected_date: Option<NaiveDate>,
    pub events: Vec<Event>,
    filtered_events: Vec<Event>,
    pub filter: CalendarFilter,
}

/// Wire shape of [`CalendarState`]; a serialized filtered list is ignored.
#[derive(Deserialize)]
struct CalendarStateFields {
    view: CalendarView,
    current_date: NaiveDate,
    #[serde(default)]
    selected_date: Option<NaiveDate>,
    #[serde(default)]
    events: Vec<Event>,
    #[serde(default)]
    filter: CalendarFilter,
}

impl From<CalendarStateFields> for CalendarState {
    fn from(fields: CalendarStateFields) -> Self {
        let mut state = Self {
            view: fields.view,
            current_date: fields.current_date,
            selected_date: fields.selected_date,
            events: fields.events,
            filtered_events: Vec::new(),
            filter: fields.filter,
        };
        state.recompute();
        state
    }
}

impl CalendarState {
    /// Month view anchored on `today`, no events.
    pub fn new(today: NaiveDate) -> Self {
        Self {
            view: CalendarView::Month,
            current_date: today,
            selected_date: None,
            events: Vec::new(),
            filtered_events: Vec::new(),
            filter: CalendarFilter::default(),
        }
    }

    /// Events matching the active filter, in storage order.
    pub fn filtered_events(&self) -> &[Event] {
        &self.filtered_events
    }

    pub(crate) fn recompute(&mut self) {
        self.filtered_events = filter_events(&self.events, &self.filter)
            .into_iter()
            .cloned()
            .collect();
    }
}

/// The whole application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppState {
    pub user: Option<User>,
    pub calendar: CalendarState,
    pub is_loading: bool,
    pub notification: Option<String>,
}

impl AppState {
    pub fn new(today: NaiveDate) -> Self {
        Self {
            user: None,
            calendar: CalendarState::new(today),
            is_loading: false,
            notification: None,
        }
    }

    /// Returns true if the current user may edit events.
    pub fn can_edit(&self) -> bool {
        crate::auth::can_edit(self.user.as_ref())
    }

    pub fn find_event(&self, id: &str) -> Option<&Event> {
        self.calendar.events.iter().find(|event| event.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::EventCategory;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn event(id: &str, title: &str) -> Event {
        let category = EventCategory::new("meeting", "Rapat", "text-blue-700", "bg-blue-100");
        Event::new(id, title, date(2025, 1, 10), "09:00", category)
    }

    #[test]
    fn test_deserialize_rebuilds_filtered_events() {
        let mut state = AppState::new(date(2025, 1, 10));
        state.calendar.events = vec![event("1", "Rapat Kerja"), event("2", "Seminar")];
        state.calendar.filter = CalendarFilter::new().with_search("rapat");
        state.calendar.recompute();

        let mut json = serde_json::to_value(&state).unwrap();
        json["calendar"]["filtered_events"] = serde_json::json!([]);
        let restored: AppState = serde_json::from_value(json).unwrap();

        assert_eq!(restored.calendar.filtered_events().len(), 1);
        assert_eq!(restored.calendar.filtered_events()[0].id, "1");
        assert_eq!(restored, state);
    }

    #[test]
    fn test_deserialize_without_filtered_events() {
        let mut json = serde_json::to_value(AppState::new(date(2025, 1, 10))).unwrap();
        json["calendar"]
            .as_object_mut()
            .unwrap()
            .remove("filtered_events");
        json["calendar"]["events"] = serde_json::to_value(vec![event("1", "Rapat")]).unwrap();

        let restored: AppState = serde_json::from_value(json).unwrap();
        assert_eq!(restored.calendar.filtered_events().len(), 1);
    }
}
