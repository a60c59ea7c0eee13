mod dates;
mod error;
mod filter;
mod grouping;
mod labels;
mod mock_data;
mod operations;
mod requests;
mod types;

pub use dates::{
    add_days, add_months, add_weeks, end_of_month, first_weekday_of_month, is_same_date,
    is_same_month, is_today, month_grid, navigate, parse_iso_date, start_of_month, start_of_week,
    week_dates, DAYS_PER_WEEK, MONTH_GRID_CELLS,
};
pub use error::EventError;
pub use filter::{filter_events, CalendarFilter};
pub use grouping::{
    build_day_cell, build_month_cells, build_week_days, events_for_date, hour_labels,
    hourly_buckets, sort_events_chronologically, HOURS_PER_DAY, MONTH_CELL_LIMIT,
};
pub use labels::Locale;
pub use mock_data::{default_categories, generate_seed_events, generate_seed_events_at};
pub use operations::{
    find_category, format_event_time, parse_event_time, validate_event, validate_event_fields,
    validate_external_link, validate_title, MAX_TITLE_LENGTH,
};
pub use requests::{CreateEventRequest, UpdateEventRequest};
pub use types::{CalendarView, DayCell, Event, EventCategory};
