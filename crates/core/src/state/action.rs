use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::auth::User;
use crate::calendar::{CalendarFilter, CalendarView, Event};

/// An intent to change the application state.
///
/// On the wire an action is `{"type": "SET_FILTER", "payload": {...}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "payload", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Action {
    SetUser(Option<User>),
    SetView(CalendarView),
    SetCurrentDate(NaiveDate),
    SetSelectedDate(Option<NaiveDate>),
    SetEvents(Vec<Event>),
    AddEvent(Event),
    UpdateEvent(Event),
    DeleteEvent(String),
    SetFilter(CalendarFilter),
    SetLoading(bool),
    SetNotification(Option<String>),
    /// Any unrecognized type. Applying it changes nothing.
    Unknown,
}

#[derive(Deserialize)]
struct Envelope {
    #[serde(rename = "type")]
    kind: String,
    #[serde(default)]
    payload: serde_json::Value,
}

impl Action {
    /// Returns the wire name of the action.
    pub fn kind(&self) -> &'static str {
        match self {
            Action::SetUser(_) => "SET_USER",
            Action::SetView(_) => "SET_VIEW",
            Action::SetCurrentDate(_) => "SET_CURRENT_DATE",
            Action::SetSelectedDate(_) => "SET_SELECTED_DATE",
            Action::SetEvents(_) => "SET_EVENTS",
            Action::AddEvent(_) => "ADD_EVENT",
            Action::UpdateEvent(_) => "UPDATE_EVENT",
            Action::DeleteEvent(_) => "DELETE_EVENT",
            Action::SetFilter(_) => "SET_FILTER",
            Action::SetLoading(_) => "SET_LOADING",
            Action::SetNotification(_) => "SET_NOTIFICATION",
            Action::Unknown => "UNKNOWN",
        }
    }

    /// Returns true if the action changes the events or the filter.
    pub fn affects_filtered_events(&self) -> bool {
        matches!(
            self,
            Action::SetEvents(_)
                | Action::AddEvent(_)
                | Action::UpdateEvent(_)
                | Action::DeleteEvent(_)
                | Action::SetFilter(_)
        )
    }

    /// Decodes an action from JSON.
    ///
    /// `SET_CALENDAR_VIEW` is accepted as another name for `SET_VIEW`.
    /// Unrecognized types decode to [`Action::Unknown`]. Malformed JSON, or a
    /// known type with a payload of the wrong shape, is an error.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        let Envelope { kind, payload } = serde_json::from_str(json)?;
        let action = match kind.as_str() {
            "SET_USER" => Action::SetUser(serde_json::from_value(payload)?),
            "SET_VIEW" | "SET_CALENDAR_VIEW" => Action::SetView(serde_json::from_value(payload)?),
            "SET_CURRENT_DATE" => Action::SetCurrentDate(serde_json::from_value(payload)?),
            "SET_SELECTED_DATE" => Action::SetSelectedDate(serde_json::from_value(payload)?),
            "SET_EVENTS" => Action::SetEvents(serde_json::from_value(payload)?),
            "ADD_EVENT" => Action::AddEvent(serde_json::from_value(payload)?),
            "UPDATE_EVENT" => Action::UpdateEvent(serde_json::from_value(payload)?),
            "DELETE_EVENT" => Action::DeleteEvent(serde_json::from_value(payload)?),
            "SET_FILTER" => Action::SetFilter(serde_json::from_value(payload)?),
            "SET_LOADING" => Action::SetLoading(serde_json::from_value(payload)?),
            "SET_NOTIFICATION" => Action::SetNotification(serde_json::from_value(payload)?),
            _ => Action::Unknown,
        };
        Ok(action)
    }
}
