//! Event CLI commands.

use agenda_core::calendar::{parse_event_time, CreateEventRequest, UpdateEventRequest};
use chrono::{NaiveDate, NaiveTime};
use clap::{Args, Parser, Subcommand};

use super::FilterArgs;

/// Event management commands.
#[derive(Debug, Parser)]
pub struct EventsCommand {
    #[command(subcommand)]
    pub action: EventsAction,
}

/// Available event actions.
#[derive(Debug, Subcommand)]
pub enum EventsAction {
    /// List events, filtered and in chronological order.
    List {
        #[command(flatten)]
        filter: FilterArgs,
    },
    /// Show one event.
    Show {
        /// Event ID.
        id: String,
    },
    /// Create an event (administrators only).
    Create(CreateArgs),
    /// Update an event (administrators only).
    Update(UpdateArgs),
    /// Delete an event (administrators only).
    Delete {
        /// Event ID.
        id: String,
    },
}

/// Fields of a new event.
#[derive(Debug, Clone, Args)]
pub struct CreateArgs {
    /// Event title.
    #[arg(long)]
    pub title: String,
    /// Category ID.
    #[arg(long)]
    pub category: String,
    /// Start date (YYYY-MM-DD).
    #[arg(long = "on")]
    pub start_date: NaiveDate,
    /// End date (YYYY-MM-DD). Defaults to the start date.
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// Start time (HH:MM).
    #[arg(long, value_parser = parse_event_time)]
    pub start_time: NaiveTime,
    /// End time (HH:MM). Defaults to the start time.
    #[arg(long, value_parser = parse_event_time)]
    pub end_time: Option<NaiveTime>,
    /// Optional description.
    #[arg(long)]
    pub description: Option<String>,
    /// Optional location.
    #[arg(long)]
    pub location: Option<String>,
    /// Optional http(s) link.
    #[arg(long)]
    pub link: Option<String>,
}

impl From<CreateArgs> for CreateEventRequest {
    fn from(args: CreateArgs) -> Self {
        let mut request =
            CreateEventRequest::new(args.title, args.category, args.start_date, args.start_time);
        request.end_date = args.end_date;
        request.end_time = args.end_time;
        request.description = args.description.unwrap_or_default();
        request.location = args.location.unwrap_or_default();
        request.external_link = args.link.filter(|l| !l.trim().is_empty());
        request
    }
}

/// Fields to change on an existing event. Omitted fields stay unchanged.
#[derive(Debug, Clone, Args)]
pub struct UpdateArgs {
    /// Event ID.
    pub id: String,
    /// New title.
    #[arg(long)]
    pub title: Option<String>,
    /// New category ID.
    #[arg(long)]
    pub category: Option<String>,
    /// New start date.
    #[arg(long = "on")]
    pub start_date: Option<NaiveDate>,
    /// New end date.
    #[arg(long)]
    pub end_date: Option<NaiveDate>,
    /// New start time.
    #[arg(long, value_parser = parse_event_time)]
    pub start_time: Option<NaiveTime>,
    /// New end time.
    #[arg(long, value_parser = parse_event_time)]
    pub end_time: Option<NaiveTime>,
    /// New description.
    #[arg(long)]
    pub description: Option<String>,
    /// New location.
    #[arg(long)]
    pub location: Option<String>,
    /// New link. An empty value removes it.
    #[arg(long, conflicts_with = "clear_link")]
    pub link: Option<String>,
    /// Remove the link.
    #[arg(long)]
    pub clear_link: bool,
}

impl From<UpdateArgs> for UpdateEventRequest {
    fn from(args: UpdateArgs) -> Self {
        let external_link = match args.link {
            _ if args.clear_link => Some(None),
            Some(link) if link.trim().is_empty() => Some(None),
            Some(link) => Some(Some(link)),
            None => None,
        };
        UpdateEventRequest {
            title: args.title,
            description: args.description,
            start_date: args.start_date,
            end_date: args.end_date,
            start_time: args.start_time,
            end_time: args.end_time,
            location: args.location,
            category_id: args.category,
            external_link,
        }
    }
}
