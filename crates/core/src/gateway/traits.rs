use async_trait::async_trait;

use crate::auth::User;
use crate::calendar::{CreateEventRequest, Event, EventCategory, UpdateEventRequest};

use super::{GatewayError, Result};

/// Event storage operations offered by the backend.
#[async_trait]
pub trait EventGateway: Send + Sync {
    /// Lists all categories ordered by name.
    async fn list_categories(&self) -> Result<Vec<EventCategory>>;

    /// Lists all events ordered by start date ascending.
    async fn list_events(&self) -> Result<Vec<Event>>;

    /// Creates an event. The store assigns its id and timestamps.
    async fn create_event(&self, request: &CreateEventRequest) -> Result<Event>;

    /// Updates an event and stamps `updated_at`.
    async fn update_event(&self, id: &str, request: &UpdateEventRequest) -> Result<Event>;

    /// Deletes an event by its id.
    async fn delete_event(&self, id: &str) -> Result<()>;
}

/// Session operations offered by the backend.
#[async_trait]
pub trait AuthGateway: Send + Sync {
    /// Returns the signed-in user, if any.
    async fn get_session(&self) -> Result<Option<User>>;

    /// Signs in with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<User>;

    /// Ends the current session.
    async fn sign_out(&self) -> Result<()>;

    /// Bearer token of the current session, for callers that persist it.
    async fn access_token(&self) -> Option<String> {
        None
    }
}

/// A backend offering both event storage and sessions.
pub trait Gateway: EventGateway + AuthGateway {}

impl<T: EventGateway + AuthGateway + ?Sized> Gateway for T {}

/// Uses `defaults` when the backend is not configured. Other failures propagate.
pub fn resolve_categories(
    result: Result<Vec<EventCategory>>,
    defaults: impl FnOnce() -> Vec<EventCategory>,
) -> Result<Vec<EventCategory>> {
    match result {
        Err(GatewayError::NotConfigured) => Ok(defaults()),
        other => other,
    }
}
