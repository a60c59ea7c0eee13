use chrono::{DateTime, Duration, Utc};

use super::{Session, User};

/// Display name used when the account carries none.
pub const DEFAULT_DISPLAY_NAME: &str = "Administrator";

/// Picks the display name from account metadata.
pub fn display_name(metadata_name: Option<&str>) -> String {
    match metadata_name.map(str::trim) {
        Some(name) if !name.is_empty() => name.to_string(),
        _ => DEFAULT_DISPLAY_NAME.to_string(),
    }
}

/// Check if a session has expired.
pub fn is_session_expired(session: &Session, now: DateTime<Utc>) -> bool {
    session.expires_at.is_some_and(|expires_at| expires_at <= now)
}

/// Calculate session expiry from the issue time and the lifetime in seconds.
pub fn calculate_expiry(issued_at: DateTime<Utc>, expires_in: i64) -> DateTime<Utc> {
    issued_at + Duration::seconds(expires_in)
}

/// Returns true if the (optional) user may edit events.
///
/// No user means a public visitor.
pub fn can_edit(user: Option<&User>) -> bool {
    user.is_some_and(User::can_edit)
}
