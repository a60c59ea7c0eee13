//! Wire rows exchanged with PostgREST and GoTrue, and their conversion into
//! domain types.

use agenda_core::auth::{calculate_expiry, Session, User};
use agenda_core::calendar::{
    format_event_time, CreateEventRequest, Event, EventCategory, UpdateEventRequest,
};
use agenda_core::gateway::GatewayError;
use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Columns embedded with every event.
pub const EVENT_SELECT: &str = "*,event_categories(id,name,color,bg_color)";

/// A row of `event_categories`.
#[derive(Debug, Clone, Deserialize)]
pub struct CategoryRow {
    pub id: String,
    pub name: String,
    pub color: String,
    pub bg_color: String,
}

impl From<CategoryRow> for EventCategory {
    fn from(row: CategoryRow) -> Self {
        EventCategory::new(row.id, row.name, row.color, row.bg_color)
    }
}

/// A row of `events` with its category embedded.
#[derive(Debug, Clone, Deserialize)]
pub struct EventRow {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    pub start_time: String,
    #[serde(default)]
    pub end_time: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub category_id: Option<String>,
    #[serde(default)]
    pub external_link: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub event_categories: Option<CategoryRow>,
}

impl TryFrom<EventRow> for Event {
    type Error = GatewayError;

    fn try_from(row: EventRow) -> Result<Self, Self::Error> {
        let category = row.event_categories.ok_or_else(|| {
            GatewayError::InvalidData(format!(
                "event {} has no category (category_id: {})",
                row.id,
                row.category_id.as_deref().unwrap_or("none")
            ))
        })?;

        Ok(Event {
            end_date: row.end_date.unwrap_or(row.start_date),
            end_time: row.end_time.unwrap_or_else(|| row.start_time.clone()),
            id: row.id,
            title: row.title,
            description: row.description.unwrap_or_default(),
            start_date: row.start_date,
            start_time: row.start_time,
            location: row.location.unwrap_or_default(),
            category: category.into(),
            external_link: row.external_link.filter(|link| !link.trim().is_empty()),
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

/// Body of `POST /rest/v1/events`.
#[derive(Debug, Clone, Serialize)]
pub struct InsertEventRow<'a> {
    pub title: &'a str,
    pub description: &'a str,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
    pub start_time: String,
    pub end_time: String,
    pub location: &'a str,
    pub category_id: &'a str,
    pub external_link: Option<&'a str>,
}

impl<'a> From<&'a CreateEventRequest> for InsertEventRow<'a> {
    fn from(request: &'a CreateEventRequest) -> Self {
        Self {
            title: &request.title,
            description: &request.description,
            start_date: request.start_date,
            end_date: request.effective_end_date(),
            start_time: format_event_time(request.start_time),
            end_time: format_event_time(request.effective_end_time()),
            location: &request.location,
            category_id: &request.category_id,
            external_link: request.external_link.as_deref(),
        }
    }
}

/// Body of `PATCH /rest/v1/events`. Only provided fields are sent.
#[derive(Debug, Clone, Serialize)]
pub struct PatchEventRow<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_date: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<&'a str>,
    /// `Some(None)` is sent as `null` to clear the link.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_link: Option<Option<&'a str>>,
    pub updated_at: DateTime<Utc>,
}

impl<'a> PatchEventRow<'a> {
    pub fn new(request: &'a UpdateEventRequest, now: DateTime<Utc>) -> Self {
        Self {
            title: request.title.as_deref(),
            description: request.description.as_deref(),
            start_date: request.start_date,
            end_date: request.end_date,
            start_time: request.start_time.map(format_event_time),
            end_time: request.end_time.map(format_event_time),
            location: request.location.as_deref(),
            category_id: request.category_id.as_deref(),
            external_link: request.external_link.as_ref().map(|link| link.as_deref()),
            updated_at: now,
        }
    }
}

/// Body of `POST /auth/v1/token?grant_type=password`.
#[derive(Debug, Serialize)]
pub struct PasswordGrant<'a> {
    pub email: &'a str,
    pub password: &'a str,
}

/// A GoTrue user object.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthUserRow {
    pub id: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_metadata: UserMetadata,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserMetadata {
    #[serde(default)]
    pub name: Option<String>,
}

impl From<AuthUserRow> for User {
    fn from(row: AuthUserRow) -> Self {
        User::from_auth(
            row.id,
            row.email.unwrap_or_default(),
            row.user_metadata.name.as_deref(),
        )
    }
}

/// Successful GoTrue token response.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub expires_in: Option<i64>,
    pub user: AuthUserRow,
}

impl TokenResponse {
    pub fn into_session(self, issued_at: DateTime<Utc>) -> Session {
        Session {
            access_token: self.access_token,
            expires_at: self
                .expires_in
                .map(|seconds| calculate_expiry(issued_at, seconds)),
            user: self.user.into(),
        }
    }
}

/// Extracts a readable message from a PostgREST or GoTrue error body.
pub fn error_message(body: &str) -> String {
    let parsed: Option<serde_json::Value> = serde_json::from_str(body).ok();
    parsed
        .as_ref()
        .and_then(|value| {
            ["message", "msg", "error_description", "error"]
                .iter()
                .find_map(|key| value.get(key).and_then(|v| v.as_str()))
        })
        .map(str::to_string)
        .unwrap_or_else(|| body.trim().to_string())
}
