//! agenda CLI entry point.

use std::path::PathBuf;

use agenda_client::cli::auth::AuthAction;
use agenda_client::cli::categories::CategoriesAction;
use agenda_client::cli::events::EventsAction;
use agenda_client::cli::export::ExportAction;
use agenda_client::cli::{Cli, Commands, FilterArgs, OutputFormat};
use agenda_client::gateway::{self, BackendMode};
use agenda_client::output::{csv, format_output, pretty, print};
use agenda_client::{App, ClientError, Config};
use agenda_core::auth::User;
use agenda_core::calendar::{
    build_month_cells, build_week_days, hourly_buckets, CalendarView, Event,
};
use agenda_core::gateway::GatewayError;
use chrono::Local;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so stdout stays clean for JSON and exports.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "agenda=info,agenda_client=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    let mut config = Config::from_env();
    if let Some(locale) = cli.locale {
        config.locale = locale;
    }

    let today = Local::now().date_naive();
    let (backend, mode) = gateway::connect(&config, today).await?;
    if mode == BackendMode::Mock && !cli.quiet {
        eprintln!("Running in mock mode: changes are not saved.");
    }

    let mut app = App::new(backend, today, config.locale);
    app.initialize().await?;
    if let Some(date) = cli.date {
        app.go_to(date);
    }

    let Cli {
        format,
        quiet,
        email,
        password,
        command,
        ..
    } = cli;
    let credentials = Credentials { email, password };

    match command {
        Commands::Categories(categories_cmd) => match categories_cmd.action {
            CategoriesAction::List => match format {
                OutputFormat::Json => println!("{}", format_output(&app.categories(), format)?),
                OutputFormat::Pretty => println!("{}", pretty::format_categories(app.categories())),
            },
        },
        Commands::Events(events_cmd) => match events_cmd.action {
            EventsAction::List { filter } => {
                app.set_filter(filter.into());
                let events = app.visible_events();
                match format {
                    OutputFormat::Json => println!("{}", format_output(&events, format)?),
                    OutputFormat::Pretty => println!(
                        "{}",
                        pretty::format_events(&events, app.locale(), app.today())
                    ),
                }
            }
            EventsAction::Show { id } => {
                let event = app
                    .event(&id)
                    .cloned()
                    .ok_or_else(|| GatewayError::event_not_found(id.as_str()))?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&event, format)?),
                    OutputFormat::Pretty => println!(
                        "{}",
                        pretty::format_event(&event, app.locale(), app.today())
                    ),
                }
            }
            EventsAction::Create(args) => {
                credentials.ensure_editor(&mut app).await?;
                let event = app.create_event(args.into()).await?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&event, format)?),
                    OutputFormat::Pretty => println!(
                        "Created:\n{}",
                        pretty::format_event(&event, app.locale(), app.today())
                    ),
                }
            }
            EventsAction::Update(args) => {
                credentials.ensure_editor(&mut app).await?;
                let id = args.id.clone();
                let event = app.update_event(&id, args.into()).await?;
                match format {
                    OutputFormat::Json => println!("{}", format_output(&event, format)?),
                    OutputFormat::Pretty => println!(
                        "Updated:\n{}",
                        pretty::format_event(&event, app.locale(), app.today())
                    ),
                }
            }
            EventsAction::Delete { id } => {
                credentials.ensure_editor(&mut app).await?;
                app.delete_event(&id).await?;
                if !quiet {
                    println!("Deleted event {id}");
                }
            }
        },
        Commands::View(view_cmd) => {
            app.set_view(view_cmd.kind.into());
            if view_cmd.step != 0 {
                app.navigate(view_cmd.step);
            }
            app.set_filter(view_cmd.filter.into());

            let calendar = &app.state().calendar;
            let anchor = calendar.current_date;
            let events = calendar.filtered_events();
            let (locale, today) = (app.locale(), app.today());
            let output = match (calendar.view, format) {
                (CalendarView::Month, OutputFormat::Pretty) => {
                    pretty::render_month(anchor, today, events, locale)
                }
                (CalendarView::Week, OutputFormat::Pretty) => {
                    pretty::render_week(anchor, today, events, locale)
                }
                (CalendarView::Day, OutputFormat::Pretty) => {
                    pretty::render_day(anchor, today, events, locale)
                }
                (CalendarView::Month, OutputFormat::Json) => {
                    format_output(&build_month_cells(anchor, today, events), format)?
                }
                (CalendarView::Week, OutputFormat::Json) => {
                    format_output(&build_week_days(anchor, today, events), format)?
                }
                (CalendarView::Day, OutputFormat::Json) => {
                    format_output(&hourly_buckets(events, anchor), format)?
                }
            };
            println!("{output}");
        }
        Commands::Export(export_cmd) => match export_cmd.action {
            ExportAction::Csv { output, filter } => {
                let events = filtered(&mut app, filter);
                let content = csv::export_csv(&events, app.locale());
                let path = output.unwrap_or_else(|| PathBuf::from(csv::csv_filename(today)));
                std::fs::write(&path, content).map_err(ClientError::from)?;
                tracing::info!(count = events.len(), path = %path.display(), "Exported CSV");
                if !quiet {
                    println!("Exported {} events to {}", events.len(), path.display());
                }
            }
            ExportAction::Print { output, filter } => {
                let events = filtered(&mut app, filter);
                let html = print::render_print_report(
                    &events,
                    app.locale(),
                    Local::now().naive_local(),
                )
                .map_err(ClientError::from)?;
                match output {
                    Some(path) => {
                        std::fs::write(&path, html).map_err(ClientError::from)?;
                        if !quiet {
                            println!("Wrote report to {}", path.display());
                        }
                    }
                    None => println!("{html}"),
                }
            }
        },
        Commands::Auth(auth_cmd) => match auth_cmd.action {
            AuthAction::Login => {
                let user = credentials.sign_in(&mut app).await?;
                let token = app.access_token().await;
                match format {
                    OutputFormat::Json => println!(
                        "{}",
                        format_output(
                            &serde_json::json!({ "user": user, "access_token": token }),
                            format
                        )?
                    ),
                    OutputFormat::Pretty => {
                        println!("Signed in:\n{}", pretty::format_user(Some(&user)));
                        if let Some(token) = token {
                            println!("\nexport AGENDA_ACCESS_TOKEN={token}");
                        }
                    }
                }
            }
            AuthAction::Whoami => {
                let user = app.state().user.as_ref();
                match format {
                    OutputFormat::Json => println!("{}", format_output(&user, format)?),
                    OutputFormat::Pretty => println!("{}", pretty::format_user(user)),
                }
            }
            AuthAction::Logout => {
                app.sign_out().await?;
                if !quiet {
                    println!("Signed out");
                }
            }
        },
    }

    Ok(())
}

/// Applies `filter` and returns the matching events in chronological order.
fn filtered(app: &mut App, filter: FilterArgs) -> Vec<Event> {
    app.set_filter(filter.into());
    app.visible_events()
}

/// Administrator credentials from flags or the environment.
struct Credentials {
    email: Option<String>,
    password: Option<String>,
}

impl Credentials {
    async fn sign_in(&self, app: &mut App) -> agenda_client::Result<User> {
        match (&self.email, &self.password) {
            (Some(email), Some(password)) => app.sign_in(email, password).await,
            _ => Err(ClientError::Config(
                "set --email and --password (or AGENDA_EMAIL and AGENDA_PASSWORD)".to_string(),
            )),
        }
    }

    /// Signs in unless a restored session can already edit.
    async fn ensure_editor(&self, app: &mut App) -> agenda_client::Result<()> {
        if !app.state().can_edit() {
            self.sign_in(app).await?;
        }
        Ok(())
    }
}
