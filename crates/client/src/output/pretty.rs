//! Pretty output formatting.
//!
//! Plain-text renderings of the month, week and day views plus event and
//! category listings. All labels follow the given [`Locale`].

use agenda_core::auth::User;
use agenda_core::calendar::{
    build_month_cells, build_week_days, events_for_date, hourly_buckets, DayCell, Event,
    EventCategory, Locale, MONTH_CELL_LIMIT,
};
use chrono::{Datelike, NaiveDate};

/// Width of one month-grid column, in characters.
const CELL_WIDTH: usize = 16;

/// Format a category for display.
pub fn format_category(category: &EventCategory) -> String {
    format!("{} ({})", category.name, category.id)
}

/// Format categories for display.
pub fn format_categories(categories: &[EventCategory]) -> String {
    if categories.is_empty() {
        return "No categories found.".to_string();
    }
    let mut output = format!("CATEGORIES ({})\n", categories.len());
    output.push_str(&"-".repeat(40));
    for category in categories {
        output.push_str(&format!("\n{}", format_category(category)));
    }
    output
}

/// Time span of an event, e.g. `09:00 - 11:00`.
pub fn format_time_range(event: &Event) -> String {
    let start = event.start_time_short();
    let end = event.end_time_short();
    if end.is_empty() || end == start {
        start.to_string()
    } else {
        format!("{start} - {end}")
    }
}

/// Format an event for display.
pub fn format_event(event: &Event, locale: Locale, today: NaiveDate) -> String {
    let mut output = format!("{} [{}]", event.title, event.category.name);
    if event.is_ongoing(today) {
        output.push_str(&format!(" ({})", locale.ongoing_label()));
    }
    output.push_str(&format!("\n  ID: {}", event.id));
    output.push_str(&format!(
        "\n  Date: {}",
        locale.format_range(event.start_date, event.end_date)
    ));
    output.push_str(&format!("\n  Time: {}", format_time_range(event)));
    if !event.location.is_empty() {
        output.push_str(&format!("\n  Location: {}", event.location));
    }
    if let Some(link) = &event.external_link {
        output.push_str(&format!("\n  Link: {link}"));
    }
    if !event.description.is_empty() {
        output.push_str(&format!("\n  Description: {}", event.description));
    }
    output
}

/// Format events for display.
pub fn format_events(events: &[Event], locale: Locale, today: NaiveDate) -> String {
    if events.is_empty() {
        return format!("{}.", locale.no_events_label());
    }
    let mut output = format!("EVENTS ({})\n", events.len());
    output.push_str(&"-".repeat(40));
    for event in events {
        output.push_str(&format!("\n{}", format_event(event, locale, today)));
        output.push('\n');
    }
    output
}

/// Format the signed-in user, or the anonymous state.
pub fn format_user(user: Option<&User>) -> String {
    match user {
        Some(user) => format!(
            "{} <{}>\n  ID: {}\n  Role: {}",
            user.name, user.email, user.id, user.role
        ),
        None => "Not signed in.".to_string(),
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut truncated: String = text.chars().take(width.saturating_sub(1)).collect();
    truncated.push('~');
    truncated
}

fn pad(text: &str, width: usize) -> String {
    let text = truncate(text, width);
    let fill = width.saturating_sub(text.chars().count());
    format!("{text}{}", " ".repeat(fill))
}

fn day_number(cell: &DayCell) -> String {
    let day = cell.date.day();
    if cell.is_today {
        format!("[{day}]")
    } else if cell.in_current_month {
        day.to_string()
    } else {
        format!("({day})")
    }
}

/// Lines of one month cell: the day number, up to [`MONTH_CELL_LIMIT`]
/// titles, and the overflow marker when events are hidden.
fn month_cell_lines(cell: &DayCell, locale: Locale) -> Vec<String> {
    let mut lines = vec![day_number(cell)];
    for event in cell.visible(MONTH_CELL_LIMIT) {
        lines.push(format!("{} {}", event.start_time_short(), event.title));
    }
    let overflow = cell.overflow(MONTH_CELL_LIMIT);
    if overflow > 0 {
        lines.push(locale.more_label(overflow));
    }
    lines
}

/// Render the month view around `anchor` as a 7-column text grid.
///
/// Today is shown as `[d]`, days outside the month as `(d)`.
pub fn render_month(anchor: NaiveDate, today: NaiveDate, events: &[Event], locale: Locale) -> String {
    let separator = format!("+{}", format!("{}+", "-".repeat(CELL_WIDTH)).repeat(7));
    let mut output = format!("{}\n{separator}\n|", locale.month_title(anchor));
    for header in locale.weekday_headers() {
        output.push_str(&format!("{}|", pad(header, CELL_WIDTH)));
    }
    output.push_str(&format!("\n{separator}"));

    let cells = build_month_cells(anchor, today, events);
    for week in cells.chunks(7) {
        let columns: Vec<Vec<String>> =
            week.iter().map(|cell| month_cell_lines(cell, locale)).collect();
        let height = columns.iter().map(Vec::len).max().unwrap_or(1);
        for row in 0..height {
            output.push_str("\n|");
            for column in &columns {
                let text = column.get(row).map(String::as_str).unwrap_or("");
                output.push_str(&format!("{}|", pad(text, CELL_WIDTH)));
            }
        }
        output.push_str(&format!("\n{separator}"));
    }
    output
}

fn format_day_events(
    cell_events: &[&Event],
    locale: Locale,
    today: NaiveDate,
    output: &mut String,
) {
    if cell_events.is_empty() {
        output.push_str(&format!("\n  {}", locale.no_events_label()));
        return;
    }
    for event in cell_events {
        output.push_str(&format!(
            "\n  {:<13} {} [{}]",
            format_time_range(event),
            event.title,
            event.category.name
        ));
        if event.is_ongoing(today) {
            output.push_str(&format!(" ({})", locale.ongoing_label()));
        }
        if !event.location.is_empty() {
            output.push_str(&format!(" @ {}", event.location));
        }
    }
}

/// Render the week (Sunday to Saturday) containing `anchor`.
pub fn render_week(anchor: NaiveDate, today: NaiveDate, events: &[Event], locale: Locale) -> String {
    let days = build_week_days(anchor, today, events);
    let (first, last) = match (days.first(), days.last()) {
        (Some(first), Some(last)) => (first.date, last.date),
        _ => (anchor, anchor),
    };

    let mut output = locale.format_range(first, last);
    for day in &days {
        let marker = if day.is_today {
            format!(" ({})", locale.today_label())
        } else {
            String::new()
        };
        output.push_str(&format!("\n\n{}{marker}", locale.format_date_long(day.date)));
        let day_events: Vec<&Event> = day.events.iter().collect();
        format_day_events(&day_events, locale, today, &mut output);
    }
    output
}

/// Render `date` as 24 hour rows, each listing the events starting then.
///
/// Events with an unreadable start time are listed after the grid.
pub fn render_day(date: NaiveDate, today: NaiveDate, events: &[Event], locale: Locale) -> String {
    let mut output = locale.format_date_long(date);
    if date == today {
        output.push_str(&format!(" ({})", locale.today_label()));
    }

    let buckets = hourly_buckets(events, date);
    for (hour, bucket) in &buckets {
        output.push_str(&format!("\n{hour} |"));
        for (index, event) in bucket.iter().enumerate() {
            let prefix = if index == 0 { " " } else { "\n      | " };
            output.push_str(&format!(
                "{prefix}{} [{}]",
                event.title, event.category.name
            ));
            if event.is_ongoing(today) {
                output.push_str(&format!(" ({})", locale.ongoing_label()));
            }
        }
    }

    let untimed: Vec<&Event> = events_for_date(events, date)
        .into_iter()
        .filter(|event| event.start_hour().is_none())
        .collect();
    if !untimed.is_empty() {
        output.push_str("\n\n--");
        format_day_events(&untimed, locale, today, &mut output);
    }
    output
}
