//! CSV export of the agenda.

use agenda_core::calendar::{Event, Locale};
use chrono::NaiveDate;

/// Column headers of the exported file.
pub const CSV_HEADERS: [&str; 6] = ["Judul", "Tanggal", "Jam", "Lokasi", "Kategori", "Deskripsi"];

/// Quotes a field, doubling embedded quotes.
fn quote(field: &str) -> String {
    format!("\"{}\"", field.replace('"', "\"\""))
}

fn row(fields: &[&str]) -> String {
    fields.iter().map(|f| quote(f)).collect::<Vec<_>>().join(",")
}

/// Renders `events` as CSV, one row per event in the given order.
///
/// Every field is quoted. Dates use the long format of `locale`.
pub fn export_csv(events: &[Event], locale: Locale) -> String {
    let mut lines = vec![row(&CSV_HEADERS)];
    for event in events {
        let date = locale.format_date_long(event.start_date);
        lines.push(row(&[
            &event.title,
            &date,
            event.start_time_short(),
            &event.location,
            &event.category.name,
            &event.description,
        ]));
    }
    lines.join("\n")
}

/// Name of the export file for `date`, e.g. `agenda_kegiatan_2025-01-10.csv`.
pub fn csv_filename(date: NaiveDate) -> String {
    format!("agenda_kegiatan_{}.csv", date.format("%Y-%m-%d"))
}
