//! Calendar view CLI commands.

use agenda_core::calendar::CalendarView;
use clap::{Parser, ValueEnum};

use super::FilterArgs;

/// Render the calendar around the anchor date.
#[derive(Debug, Parser)]
pub struct ViewCommand {
    /// Which view to render.
    #[arg(value_enum, default_value = "month")]
    pub kind: ViewKind,

    /// Move the anchor this many months, weeks or days first.
    #[arg(long, default_value = "0", allow_negative_numbers = true)]
    pub step: i32,

    #[command(flatten)]
    pub filter: FilterArgs,
}

/// CLI view selector (with clap ValueEnum).
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ViewKind {
    Month,
    Week,
    Day,
}

impl From<ViewKind> for CalendarView {
    fn from(kind: ViewKind) -> Self {
        match kind {
            ViewKind::Month => CalendarView::Month,
            ViewKind::Week => CalendarView::Week,
            ViewKind::Day => CalendarView::Day,
        }
    }
}
