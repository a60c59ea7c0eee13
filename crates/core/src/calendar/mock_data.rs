//! Default categories and seed events.
//!
//! This module contains pure functions for generating a believable agenda.
//! They are used when no backend is configured (mock mode), as the category
//! fallback when listing categories fails that way, and in tests.

use chrono::{DateTime, NaiveDate, Utc};

use super::dates::add_days;
use super::types::{Event, EventCategory};

/// The categories offered when the backend has none to give.
pub fn default_categories() -> Vec<EventCategory> {
    [
        ("meeting", "Rapat", "text-blue-700", "bg-blue-100"),
        ("conference", "Konferensi", "text-purple-700", "bg-purple-100"),
        ("workshop", "Workshop", "text-green-700", "bg-green-100"),
        ("seminar", "Seminar", "text-orange-700", "bg-orange-100"),
        ("social", "Kegiatan Sosial", "text-pink-700", "bg-pink-100"),
        ("training", "Pelatihan", "text-yellow-700", "bg-yellow-100"),
        ("other", "Lainnya", "text-gray-700", "bg-gray-100"),
    ]
    .into_iter()
    .map(|(id, name, color, bg_color)| EventCategory::new(id, name, color, bg_color))
    .collect()
}

/// Generate seed events spread around a center date.
///
/// Roughly one in five events spans several days; the rest are single-day
/// events at office hours. Events cycle through the default categories.
///
/// # Example
///
/// ```
/// use agenda_core::calendar::generate_seed_events;
/// use chrono::NaiveDate;
///
/// let center = NaiveDate::from_ymd_opt(2025, 6, 15).unwrap();
/// let events = generate_seed_events(center, 12);
///
/// assert_eq!(events.len(), 12);
/// assert!(events.iter().all(|e| e.start_date <= e.end_date));
/// ```
pub fn generate_seed_events(center_date: NaiveDate, count: u32) -> Vec<Event> {
    generate_seed_events_at(center_date, count, Utc::now())
}

/// Same as [`generate_seed_events`] with a fixed creation timestamp.
pub fn generate_seed_events_at(
    center_date: NaiveDate,
    count: u32,
    created_at: DateTime<Utc>,
) -> Vec<Event> {
    let categories = default_categories();
    let multi_day_count = count.div_ceil(5);

    let multi_day = [
        ("Pameran UMKM Daerah", "Alun-alun Kota"),
        ("Festival Budaya", "Taman Budaya"),
        ("Konferensi Pendidikan", "Gedung Serbaguna"),
    ];
    let single_day = [
        ("Rapat Koordinasi", "Ruang Rapat Utama"),
        ("Workshop Literasi Digital", "Perpustakaan Daerah"),
        ("Seminar Kesehatan", "Aula Puskesmas"),
        ("Kerja Bakti", "Balai Warga"),
        ("Pelatihan Kewirausahaan", "Gedung Pemuda"),
        ("Sosialisasi Program", "Kantor Kecamatan"),
    ];

    (0..count)
        .map(|i| {
            let index = i as usize;
            let category = categories[index % categories.len()].clone();
            let id = format!("seed-{}", i + 1);

            if i < multi_day_count {
                let (title, location) = multi_day[index % multi_day.len()];
                let start = add_days(center_date, i64::from(i) * 3 - 2);
                Event::new(id, title, start, "08:00", category)
                    .with_end_date(add_days(start, 2))
                    .with_end_time("16:00")
                    .with_location(location)
                    .with_description(format!("{title} tahunan untuk masyarakat umum."))
                    .with_created_at(created_at)
            } else {
                let (title, location) = single_day[index % single_day.len()];
                let date = add_days(center_date, i64::from(i % 14) - 7);
                let hour = 8 + i % 9;
                Event::new(id, title, date, format!("{hour:02}:00"), category)
                    .with_end_time(format!("{:02}:00", hour + 2))
                    .with_location(location)
                    .with_description(format!("{title} terbuka untuk umum."))
                    .with_created_at(created_at)
            }
        })
        .collect()
}
