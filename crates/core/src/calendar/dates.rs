//! Calendar arithmetic for the month, week and day views.
//!
//! All functions are pure. Weeks start on Sunday, and month grids are always
//! six rows of seven days.

use chrono::{Datelike, Months, NaiveDate, TimeDelta};

use super::types::CalendarView;

/// Number of cells in a month grid (6 rows x 7 columns).
pub const MONTH_GRID_CELLS: usize = 42;

/// Number of days in a week row.
pub const DAYS_PER_WEEK: usize = 7;

/// Adds `days` to `date`, saturating at the calendar bounds.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    TimeDelta::try_days(days)
        .and_then(|delta| date.checked_add_signed(delta))
        .unwrap_or(if days < 0 {
            NaiveDate::MIN
        } else {
            NaiveDate::MAX
        })
}

/// Adds `weeks` whole weeks to `date`.
pub fn add_weeks(date: NaiveDate, weeks: i64) -> NaiveDate {
    add_days(date, weeks.saturating_mul(7))
}

/// Adds `months` calendar months to `date`.
///
/// When the day does not exist in the target month it is clamped to that
/// month's last day: Jan 31 + 1 month is Feb 28 (Feb 29 in leap years).
pub fn add_months(date: NaiveDate, months: i32) -> NaiveDate {
    let shifted = if months >= 0 {
        date.checked_add_months(Months::new(months.unsigned_abs()))
    } else {
        date.checked_sub_months(Months::new(months.unsigned_abs()))
    };
    shifted.unwrap_or(if months < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Returns the first day of `date`'s month.
pub fn start_of_month(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.day0()))
}

/// Returns the last day of `date`'s month.
pub fn end_of_month(date: NaiveDate) -> NaiveDate {
    // Only the final representable month has no successor.
    start_of_month(date)
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .unwrap_or(NaiveDate::MAX)
}

/// Day of week of the 1st of `date`'s month, 0 = Sunday.
pub fn first_weekday_of_month(date: NaiveDate) -> u32 {
    start_of_month(date).weekday().num_days_from_sunday()
}

/// Returns the Sunday on or before `date`.
pub fn start_of_week(date: NaiveDate) -> NaiveDate {
    add_days(date, -i64::from(date.weekday().num_days_from_sunday()))
}

/// Returns the 42 consecutive dates shown in the month view of `anchor`.
///
/// The grid starts on the Sunday on or before the 1st of the month and
/// spills into the following month to fill six rows.
///
/// In the first and last representable months the grid cannot extend past
/// the calendar bounds: cells that would fall outside repeat
/// [`NaiveDate::MIN`] or [`NaiveDate::MAX`], so the grid still has 42 cells
/// in non-decreasing order but is no longer strictly consecutive there.
pub fn month_grid(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(start_of_month(anchor));
    (0..MONTH_GRID_CELLS as i64)
        .map(|offset| add_days(start, offset))
        .collect()
}

/// Returns the 7 dates (Sunday to Saturday) of the week containing `anchor`.
///
/// Saturates at the calendar bounds like [`month_grid`].
pub fn week_dates(anchor: NaiveDate) -> Vec<NaiveDate> {
    let start = start_of_week(anchor);
    (0..DAYS_PER_WEEK as i64)
        .map(|offset| add_days(start, offset))
        .collect()
}

/// Returns true if both dates are the same calendar day.
pub fn is_same_date(a: NaiveDate, b: NaiveDate) -> bool {
    a == b
}

/// Returns true if `date` is `today`.
pub fn is_today(date: NaiveDate, today: NaiveDate) -> bool {
    is_same_date(date, today)
}

/// Returns true if both dates fall in the same month of the same year.
pub fn is_same_month(a: NaiveDate, b: NaiveDate) -> bool {
    a.year() == b.year() && a.month() == b.month()
}

/// Moves the anchor by `step` units of the given view (months, weeks or days).
pub fn navigate(view: CalendarView, anchor: NaiveDate, step: i32) -> NaiveDate {
    match view {
        CalendarView::Month => add_months(anchor, step),
        CalendarView::Week => add_weeks(anchor, i64::from(step)),
        CalendarView::Day => add_days(anchor, i64::from(step)),
    }
}

/// Parses an ISO `YYYY-MM-DD` date.
pub fn parse_iso_date(value: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Weekday;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn every_day(from: NaiveDate, to: NaiveDate) -> impl Iterator<Item = NaiveDate> {
        from.iter_days().take_while(move |d| *d <= to)
    }

    #[test]
    fn test_month_grid_saturates_at_calendar_bounds() {
        let last = month_grid(NaiveDate::MAX);
        assert_eq!(last.len(), MONTH_GRID_CELLS);
        assert!(last.windows(2).all(|w| w[0] <= w[1]));
        assert!(last.contains(&start_of_month(NaiveDate::MAX)));
        assert_eq!(last[MONTH_GRID_CELLS - 1], NaiveDate::MAX);
        assert_eq!(end_of_month(NaiveDate::MAX), NaiveDate::MAX);

        let first = month_grid(NaiveDate::MIN);
        assert_eq!(first.len(), MONTH_GRID_CELLS);
        assert!(first.windows(2).all(|w| w[0] <= w[1]));
        assert!(first.contains(&NaiveDate::MIN));
        assert!(first.contains(&end_of_month(NaiveDate::MIN)));

        assert_eq!(week_dates(NaiveDate::MAX).len(), DAYS_PER_WEEK);
    }

    #[test]
    fn test_month_grid_properties_hold_for_every_anchor() {
        for anchor in every_day(date(2023, 1, 1), date(2025, 12, 31)) {
            let grid = month_grid(anchor);

            assert_eq!(grid.len(), MONTH_GRID_CELLS);
            assert_eq!(grid[0].weekday(), Weekday::Sun);
            assert!(grid.windows(2).all(|w| w[1] == w[0] + TimeDelta::days(1)));
            assert!(grid.contains(&start_of_month(anchor)));
            assert!(grid.contains(&end_of_month(anchor)));
        }
    }

    #[test]
    fn test_month_grid_starts_in_previous_month() {
        // 2025-01-01 is a Wednesday
        let grid = month_grid(date(2025, 1, 15));
        assert_eq!(grid[0], date(2024, 12, 29));
        assert_eq!(grid[3], date(2025, 1, 1));
        assert_eq!(grid[41], date(2025, 2, 8));
    }

    #[test]
    fn test_month_grid_when_first_is_sunday() {
        // 2025-06-01 is a Sunday
        let grid = month_grid(date(2025, 6, 20));
        assert_eq!(grid[0], date(2025, 6, 1));
        assert_eq!(grid[41], date(2025, 7, 12));
    }

    #[test]
    fn test_week_dates_properties_hold_for_every_date() {
        for d in every_day(date(2024, 1, 1), date(2025, 12, 31)) {
            let week = week_dates(d);

            assert_eq!(week.len(), DAYS_PER_WEEK);
            assert_eq!(week[0].weekday(), Weekday::Sun);
            assert!(week.windows(2).all(|w| w[1] == w[0] + TimeDelta::days(1)));
            assert!(week.contains(&d));
        }
    }

    #[test]
    fn test_week_dates_crossing_year_boundary() {
        // 2025-01-01 is a Wednesday
        let week = week_dates(date(2025, 1, 1));
        assert_eq!(week[0], date(2024, 12, 29));
        assert_eq!(week[6], date(2025, 1, 4));
    }

    #[test]
    fn test_add_days_rolls_over_boundaries() {
        assert_eq!(add_days(date(2024, 12, 31), 1), date(2025, 1, 1));
        assert_eq!(add_days(date(2024, 3, 1), -1), date(2024, 2, 29));
        assert_eq!(add_days(date(2023, 3, 1), -1), date(2023, 2, 28));
        assert_eq!(add_days(date(2025, 1, 10), 0), date(2025, 1, 10));
    }

    #[test]
    fn test_add_days_saturates() {
        assert_eq!(add_days(NaiveDate::MAX, 1), NaiveDate::MAX);
        assert_eq!(add_days(NaiveDate::MIN, -1), NaiveDate::MIN);
        assert_eq!(add_days(date(2025, 1, 1), i64::MAX), NaiveDate::MAX);
    }

    #[test]
    fn test_add_weeks() {
        assert_eq!(add_weeks(date(2025, 1, 29), 1), date(2025, 2, 5));
        assert_eq!(add_weeks(date(2025, 1, 3), -1), date(2024, 12, 27));
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        assert_eq!(add_months(date(2025, 1, 31), 1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 1, 31), 1), date(2024, 2, 29));
        assert_eq!(add_months(date(2025, 3, 31), 1), date(2025, 4, 30));
        assert_eq!(add_months(date(2025, 3, 31), -1), date(2025, 2, 28));
        assert_eq!(add_months(date(2024, 2, 29), 12), date(2025, 2, 28));
    }

    #[test]
    fn test_add_months_rolls_over_year() {
        assert_eq!(add_months(date(2024, 12, 15), 1), date(2025, 1, 15));
        assert_eq!(add_months(date(2025, 1, 15), -1), date(2024, 12, 15));
        assert_eq!(add_months(date(2025, 1, 15), -13), date(2023, 12, 15));
    }

    #[test]
    fn test_add_months_does_not_mutate_input() {
        let original = date(2025, 1, 31);
        let _ = add_months(original, 1);
        assert_eq!(original, date(2025, 1, 31));
    }

    #[test]
    fn test_month_boundaries() {
        assert_eq!(start_of_month(date(2024, 2, 17)), date(2024, 2, 1));
        assert_eq!(end_of_month(date(2024, 2, 17)), date(2024, 2, 29));
        assert_eq!(end_of_month(date(2025, 12, 3)), date(2025, 12, 31));
        // 2025-01-01 is a Wednesday
        assert_eq!(first_weekday_of_month(date(2025, 1, 20)), 3);
    }

    #[test]
    fn test_same_date_and_month() {
        assert!(is_same_date(date(2025, 1, 10), date(2025, 1, 10)));
        assert!(!is_same_date(date(2025, 1, 10), date(2025, 1, 11)));
        assert!(is_today(date(2025, 1, 10), date(2025, 1, 10)));
        assert!(is_same_month(date(2025, 1, 1), date(2025, 1, 31)));
        assert!(!is_same_month(date(2025, 1, 1), date(2024, 1, 1)));
    }

    #[test]
    fn test_navigate_by_view() {
        let anchor = date(2025, 1, 31);
        assert_eq!(navigate(CalendarView::Month, anchor, 1), date(2025, 2, 28));
        assert_eq!(navigate(CalendarView::Week, anchor, -1), date(2025, 1, 24));
        assert_eq!(navigate(CalendarView::Day, anchor, 1), date(2025, 2, 1));
    }

    #[test]
    fn test_parse_iso_date() {
        assert_eq!(parse_iso_date("2025-01-10"), Ok(date(2025, 1, 10)));
        assert_eq!(parse_iso_date(" 2025-01-10 "), Ok(date(2025, 1, 10)));
        assert!(parse_iso_date("10/01/2025").is_err());
    }
}
