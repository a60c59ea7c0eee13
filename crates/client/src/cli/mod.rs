//! CLI command definitions.

pub mod auth;
pub mod categories;
pub mod events;
pub mod export;
pub mod view;

use agenda_core::calendar::{CalendarFilter, Locale};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand, ValueEnum};

/// Public events agenda.
#[derive(Debug, Parser)]
#[command(name = "agenda")]
#[command(about = "Browse and manage the public events agenda", long_about = None)]
pub struct Cli {
    /// Output format.
    #[arg(long, global = true, default_value = "pretty")]
    pub format: OutputFormat,

    /// Suppress non-essential output.
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Anchor date (YYYY-MM-DD). Defaults to today.
    #[arg(long, global = true)]
    pub date: Option<NaiveDate>,

    /// Display language (`id` or `en`).
    #[arg(long, global = true, env = "AGENDA_LOCALE")]
    pub locale: Option<Locale>,

    /// Administrator email, for commands that change events.
    #[arg(long, global = true, env = "AGENDA_EMAIL")]
    pub email: Option<String>,

    /// Administrator password.
    #[arg(long, global = true, env = "AGENDA_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Output format options.
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Raw JSON output.
    Json,
    /// Human-readable output.
    #[default]
    Pretty,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Event categories.
    Categories(categories::CategoriesCommand),
    /// Event management.
    Events(events::EventsCommand),
    /// Month, week or day view.
    View(view::ViewCommand),
    /// Export the agenda.
    Export(export::ExportCommand),
    /// Session management.
    Auth(auth::AuthCommand),
}

/// Filter options shared by listing commands.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only events of this category ID.
    #[arg(long)]
    pub category: Option<String>,
    /// Case-insensitive text in title, description or location.
    #[arg(long)]
    pub search: Option<String>,
    /// Only events starting on or after this date.
    #[arg(long)]
    pub from: Option<NaiveDate>,
    /// Only events ending on or before this date.
    #[arg(long)]
    pub to: Option<NaiveDate>,
}

impl From<FilterArgs> for CalendarFilter {
    fn from(args: FilterArgs) -> Self {
        CalendarFilter {
            category: args.category,
            search: args.search,
            start_date: args.from,
            end_date: args.to,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_events_list_with_filters() {
        let cli = Cli::try_parse_from([
            "agenda",
            "--locale",
            "en",
            "events",
            "list",
            "--category",
            "seminar",
            "--from",
            "2025-01-01",
        ])
        .unwrap();

        assert_eq!(cli.locale, Some(Locale::English));
        let Commands::Events(events::EventsCommand {
            action: events::EventsAction::List { filter },
        }) = cli.command
        else {
            panic!("expected events list");
        };
        let filter = CalendarFilter::from(filter);
        assert_eq!(filter.category.as_deref(), Some("seminar"));
        assert_eq!(filter.start_date, NaiveDate::from_ymd_opt(2025, 1, 1));
    }

    #[test]
    fn test_parse_rejects_unknown_locale() {
        assert!(Cli::try_parse_from(["agenda", "--locale", "fr", "categories", "list"]).is_err());
    }
}
