//! Localized labels for dates and view chrome.
//!
//! The agenda is Indonesian first; English is available for everything the
//! renderers print.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};

use super::types::CalendarView;

const WEEKDAYS_SHORT_ID: [&str; 7] = ["Min", "Sen", "Sel", "Rab", "Kam", "Jum", "Sab"];
const WEEKDAYS_SHORT_EN: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

const WEEKDAYS_LONG_ID: [&str; 7] = ["Minggu", "Senin", "Selasa", "Rabu", "Kamis", "Jumat", "Sabtu"];
const WEEKDAYS_LONG_EN: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

const MONTHS_ID: [&str; 12] = [
    "Januari",
    "Februari",
    "Maret",
    "April",
    "Mei",
    "Juni",
    "Juli",
    "Agustus",
    "September",
    "Oktober",
    "November",
    "Desember",
];
const MONTHS_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Display language.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locale {
    #[default]
    #[serde(rename = "id")]
    Indonesian,
    #[serde(rename = "en")]
    English,
}

impl Locale {
    pub fn as_str(&self) -> &'static str {
        match self {
            Locale::Indonesian => "id",
            Locale::English => "en",
        }
    }

    /// Column headers of the month and week views, Sunday first.
    pub fn weekday_headers(&self) -> [&'static str; 7] {
        match self {
            Locale::Indonesian => WEEKDAYS_SHORT_ID,
            Locale::English => WEEKDAYS_SHORT_EN,
        }
    }

    pub fn weekday_name(&self, weekday: Weekday) -> &'static str {
        let index = weekday.num_days_from_sunday() as usize;
        match self {
            Locale::Indonesian => WEEKDAYS_LONG_ID[index],
            Locale::English => WEEKDAYS_LONG_EN[index],
        }
    }

    pub fn month_name(&self, date: NaiveDate) -> &'static str {
        let index = date.month0() as usize;
        match self {
            Locale::Indonesian => MONTHS_ID[index],
            Locale::English => MONTHS_EN[index],
        }
    }

    /// Heading of the month view, e.g. `Januari 2025`.
    pub fn month_title(&self, date: NaiveDate) -> String {
        format!("{} {}", self.month_name(date), date.year())
    }

    /// Full date, e.g. `Jumat, 10 Januari 2025` or `Friday, January 10, 2025`.
    pub fn format_date_long(&self, date: NaiveDate) -> String {
        let weekday = self.weekday_name(date.weekday());
        let month = self.month_name(date);
        match self {
            Locale::Indonesian => format!("{weekday}, {} {month} {}", date.day(), date.year()),
            Locale::English => format!("{weekday}, {month} {}, {}", date.day(), date.year()),
        }
    }

    /// Short date, e.g. `10 Jan 2025`.
    pub fn format_date_short(&self, date: NaiveDate) -> String {
        let month: String = self.month_name(date).chars().take(3).collect();
        format!("{} {month} {}", date.day(), date.year())
    }

    /// Heading for a date range (week view or multi-day events).
    pub fn format_range(&self, start: NaiveDate, end: NaiveDate) -> String {
        if start == end {
            self.format_date_short(start)
        } else {
            format!(
                "{} - {}",
                self.format_date_short(start),
                self.format_date_short(end)
            )
        }
    }

    pub fn view_label(&self, view: CalendarView) -> &'static str {
        match (self, view) {
            (Locale::Indonesian, CalendarView::Month) => "Bulan",
            (Locale::Indonesian, CalendarView::Week) => "Minggu",
            (Locale::Indonesian, CalendarView::Day) => "Hari",
            (Locale::English, CalendarView::Month) => "Month",
            (Locale::English, CalendarView::Week) => "Week",
            (Locale::English, CalendarView::Day) => "Day",
        }
    }

    /// Overflow marker of a month cell.
    pub fn more_label(&self, count: usize) -> String {
        match self {
            Locale::Indonesian => format!("+{count} lainnya"),
            Locale::English => format!("+{count} more"),
        }
    }

    pub fn ongoing_label(&self) -> &'static str {
        match self {
            Locale::Indonesian => "Sedang Berlangsung",
            Locale::English => "Ongoing",
        }
    }

    pub fn today_label(&self) -> &'static str {
        match self {
            Locale::Indonesian => "Hari Ini",
            Locale::English => "Today",
        }
    }

    pub fn no_events_label(&self) -> &'static str {
        match self {
            Locale::Indonesian => "Tidak ada agenda",
            Locale::English => "No events",
        }
    }
}

impl std::fmt::Display for Locale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Locale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "id" | "id-id" | "indonesian" => Ok(Locale::Indonesian),
            "en" | "en-us" | "en-gb" | "english" => Ok(Locale::English),
            other => Err(format!("Unsupported locale: {other}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_weekday_headers_start_on_sunday() {
        assert_eq!(Locale::Indonesian.weekday_headers()[0], "Min");
        assert_eq!(Locale::Indonesian.weekday_headers()[6], "Sab");
        assert_eq!(Locale::English.weekday_headers()[0], "Sun");
    }

    #[test]
    fn test_month_title() {
        assert_eq!(Locale::Indonesian.month_title(date(2025, 8, 17)), "Agustus 2025");
        assert_eq!(Locale::English.month_title(date(2025, 8, 17)), "August 2025");
    }

    #[test]
    fn test_format_date_long() {
        // 2025-01-10 is a Friday
        assert_eq!(
            Locale::Indonesian.format_date_long(date(2025, 1, 10)),
            "Jumat, 10 Januari 2025"
        );
        assert_eq!(
            Locale::English.format_date_long(date(2025, 1, 10)),
            "Friday, January 10, 2025"
        );
    }

    #[test]
    fn test_format_range() {
        let locale = Locale::Indonesian;
        assert_eq!(locale.format_range(date(2025, 1, 10), date(2025, 1, 10)), "10 Jan 2025");
        assert_eq!(
            locale.format_range(date(2025, 5, 1), date(2025, 5, 3)),
            "1 Mei 2025 - 3 Mei 2025"
        );
    }

    #[test]
    fn test_more_label() {
        assert_eq!(Locale::Indonesian.more_label(2), "+2 lainnya");
        assert_eq!(Locale::English.more_label(5), "+5 more");
    }

    #[test]
    fn test_locale_from_str() {
        assert_eq!("id".parse::<Locale>(), Ok(Locale::Indonesian));
        assert_eq!("EN".parse::<Locale>(), Ok(Locale::English));
        assert!("fr".parse::<Locale>().is_err());
        assert_eq!(Locale::default(), Locale::Indonesian);
    }
}
