//! Printable HTML report of the agenda, rendered with askama.

use agenda_core::calendar::{Event, Locale};
use askama::Template;
use chrono::NaiveDateTime;

use super::pretty::format_time_range;

/// One event as shown in the report.
struct PrintRow {
    category_id: String,
    category_name: String,
    title: String,
    date: String,
    time: String,
    location: String,
    description: String,
    external_link: String,
}

impl PrintRow {
    fn new(event: &Event, locale: Locale) -> Self {
        let date = if event.is_multi_day() {
            format!(
                "{} - {}",
                locale.format_date_long(event.start_date),
                locale.format_date_long(event.end_date)
            )
        } else {
            locale.format_date_long(event.start_date)
        };
        Self {
            category_id: event.category.id.clone(),
            category_name: event.category.name.clone(),
            title: event.title.clone(),
            date,
            time: format_time_range(event),
            location: event.location.clone(),
            description: event.description.clone(),
            external_link: event.external_link.clone().unwrap_or_default(),
        }
    }
}

#[derive(Template)]
#[template(path = "print.html")]
struct PrintTemplate {
    lang: &'static str,
    title: &'static str,
    subtitle: &'static str,
    printed_label: &'static str,
    printed_at: String,
    date_label: &'static str,
    time_label: &'static str,
    location_label: &'static str,
    description_label: &'static str,
    link_label: &'static str,
    summary: String,
    footer: &'static str,
    rows: Vec<PrintRow>,
}

impl PrintTemplate {
    fn new(events: &[Event], locale: Locale, printed_at: NaiveDateTime) -> Self {
        let printed_at = format!(
            "{}, {}",
            locale.format_date_long(printed_at.date()),
            printed_at.format("%H:%M")
        );
        let rows = events.iter().map(|e| PrintRow::new(e, locale)).collect();
        match locale {
            Locale::Indonesian => Self {
                lang: locale.as_str(),
                title: "Rekapan Agenda Kegiatan Publik",
                subtitle: "Sistem Informasi Agenda Terpadu",
                printed_label: "Dicetak pada",
                printed_at,
                date_label: "Tanggal",
                time_label: "Waktu",
                location_label: "Lokasi",
                description_label: "Deskripsi",
                link_label: "Tautan",
                summary: format!("Ringkasan: Total {} agenda kegiatan", events.len()),
                footer: "Sistem Informasi Agenda Terpadu - Agenda Kegiatan Publik",
                rows,
            },
            Locale::English => Self {
                lang: locale.as_str(),
                title: "Public Events Agenda Summary",
                subtitle: "Integrated Agenda Information System",
                printed_label: "Printed on",
                printed_at,
                date_label: "Date",
                time_label: "Time",
                location_label: "Location",
                description_label: "Description",
                link_label: "Link",
                summary: format!("Summary: {} events in total", events.len()),
                footer: "Integrated Agenda Information System - Public Events Agenda",
                rows,
            },
        }
    }
}

/// Renders the printable report listing every event in the given order.
pub fn render_print_report(
    events: &[Event],
    locale: Locale,
    printed_at: NaiveDateTime,
) -> askama::Result<String> {
    PrintTemplate::new(events, locale, printed_at).render()
}
