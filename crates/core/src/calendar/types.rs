use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A tag classifying events, carrying its display styling.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventCategory {
    pub id: String,
    pub name: String,
    /// Text color (CSS class or color value).
    pub color: String,
    /// Background color (CSS class or color value).
    pub bg_color: String,
}

impl EventCategory {
    /// Creates a new category.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        color: impl Into<String>,
        bg_color: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            color: color.into(),
            bg_color: bg_color.into(),
        }
    }
}

/// A single public event on the agenda.
///
/// Times are kept as the text the store delivers (`HH:MM` or `HH:MM:SS`).
/// Requests validate them; mirrored events are taken as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    pub description: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: String,
    pub category: EventCategory,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Event {
    /// Creates a single-day event with empty description and location.
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        date: NaiveDate,
        start_time: impl Into<String>,
        category: EventCategory,
    ) -> Self {
        let start_time = start_time.into();
        let now = Utc::now();
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            start_date: date,
            end_date: date,
            end_time: start_time.clone(),
            start_time,
            location: String::new(),
            category,
            external_link: None,
            created_at: now,
            updated_at: now,
        }
    }

    /// Sets the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Sets the location.
    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    /// Sets the end date.
    pub fn with_end_date(mut self, end_date: NaiveDate) -> Self {
        self.end_date = end_date;
        self
    }

    /// Sets the end time.
    pub fn with_end_time(mut self, end_time: impl Into<String>) -> Self {
        self.end_time = end_time.into();
        self
    }

    /// Sets the external link.
    pub fn with_external_link(mut self, link: impl Into<String>) -> Self {
        self.external_link = Some(link.into());
        self
    }

    /// Sets both timestamps, as for a freshly stored event.
    pub fn with_created_at(mut self, created_at: DateTime<Utc>) -> Self {
        self.created_at = created_at;
        self.updated_at = created_at;
        self
    }

    /// Sets the updated_at timestamp.
    pub fn with_updated_at(mut self, updated_at: DateTime<Utc>) -> Self {
        self.updated_at = updated_at;
        self
    }

    /// Returns the two-digit start hour (`"00"`..=`"23"`), if the start time has one.
    pub fn start_hour(&self) -> Option<&str> {
        let hour = self.start_time.split(':').next()?;
        let valid = hour.len() == 2
            && hour.bytes().all(|b| b.is_ascii_digit())
            && hour.parse::<u8>().is_ok_and(|h| h < 24);
        valid.then_some(hour)
    }

    /// Returns the start time without seconds (`09:00:00` becomes `09:00`).
    pub fn start_time_short(&self) -> &str {
        short_time(&self.start_time)
    }

    /// Returns the end time without seconds.
    pub fn end_time_short(&self) -> &str {
        short_time(&self.end_time)
    }

    /// Returns true if the event spans more than one day.
    pub fn is_multi_day(&self) -> bool {
        self.start_date != self.end_date
    }

    /// Returns true if `date` falls within `[start_date, end_date]`.
    pub fn spans(&self, date: NaiveDate) -> bool {
        self.start_date <= date && date <= self.end_date
    }

    /// Returns true if the event is running on `today`.
    pub fn is_ongoing(&self, today: NaiveDate) -> bool {
        self.spans(today)
    }
}

fn short_time(time: &str) -> &str {
    match time.match_indices(':').nth(1) {
        Some((idx, _)) => &time[..idx],
        None => time,
    }
}

/// The three calendar presentations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarView {
    #[default]
    Month,
    Week,
    Day,
}

impl CalendarView {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarView::Month => "month",
            CalendarView::Week => "week",
            CalendarView::Day => "day",
        }
    }
}

impl std::fmt::Display for CalendarView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for CalendarView {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "month" => Ok(CalendarView::Month),
            "week" => Ok(CalendarView::Week),
            "day" => Ok(CalendarView::Day),
            other => Err(format!("unknown calendar view: {other}")),
        }
    }
}

/// One cell of a month or week grid.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DayCell {
    pub date: NaiveDate,
    pub in_current_month: bool,
    pub is_today: bool,
    pub events: Vec<Event>,
}

impl DayCell {
    /// Returns true if this day has no events.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Returns at most `limit` events, in order.
    pub fn visible(&self, limit: usize) -> &[Event] {
        &self.events[..self.events.len().min(limit)]
    }

    /// Number of events hidden when showing `limit` of them.
    pub fn overflow(&self, limit: usize) -> usize {
        self.events.len().saturating_sub(limit)
    }
}
