//! In-memory gateway for mock mode and tests.
//!
//! Stores categories and events in `Arc<RwLock<_>>` tables. Data is not
//! persisted and is lost when the gateway is dropped.

use std::sync::Arc;

use agenda_core::auth::{validate_credentials, User};
use agenda_core::calendar::{
    default_categories, find_category, generate_seed_events, sort_events_chronologically,
    CreateEventRequest, Event, EventCategory, UpdateEventRequest,
};
use agenda_core::gateway::{AuthGateway, EventGateway, GatewayError, Result};
use async_trait::async_trait;
use chrono::{NaiveDate, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

/// A fixed email/password pair the gateway accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

/// In-memory implementation of the gateway traits.
#[derive(Debug, Clone)]
pub struct InMemoryGateway {
    categories: Arc<RwLock<Vec<EventCategory>>>,
    events: Arc<RwLock<Vec<Event>>>,
    user: Arc<RwLock<Option<User>>>,
    /// `None` accepts any well-formed pair.
    credentials: Option<Credentials>,
}

impl Default for InMemoryGateway {
    fn default() -> Self {
        Self::new()
    }
}

impl InMemoryGateway {
    /// Creates a gateway with the default categories and no events.
    pub fn new() -> Self {
        Self::with_data(default_categories(), Vec::new())
    }

    /// Creates a gateway holding the given data.
    pub fn with_data(categories: Vec<EventCategory>, events: Vec<Event>) -> Self {
        Self {
            categories: Arc::new(RwLock::new(categories)),
            events: Arc::new(RwLock::new(events)),
            user: Arc::new(RwLock::new(None)),
            credentials: None,
        }
    }

    /// Creates a gateway seeded with sample events around `center`.
    pub fn with_demo_data(center: NaiveDate) -> Self {
        Self::with_data(default_categories(), generate_seed_events(center, 20))
    }

    /// Only accept the given credentials.
    pub fn with_credentials(mut self, email: impl Into<String>, password: impl Into<String>) -> Self {
        self.credentials = Some(Credentials {
            email: email.into(),
            password: password.into(),
        });
        self
    }

    async fn category(&self, id: &str) -> Result<EventCategory> {
        let categories = self.categories.read().await;
        Ok(find_category(&categories, id)?.clone())
    }
}

#[async_trait]
impl EventGateway for InMemoryGateway {
    async fn list_categories(&self) -> Result<Vec<EventCategory>> {
        let mut categories = self.categories.read().await.clone();
        categories.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(categories)
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        let mut events = self.events.read().await.clone();
        sort_events_chronologically(&mut events);
        Ok(events)
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        request.validate()?;
        let category = self.category(&request.category_id).await?;
        let event = request
            .clone()
            .into_event(Uuid::new_v4().to_string(), category, Utc::now());

        self.events.write().await.push(event.clone());
        Ok(event)
    }

    async fn update_event(&self, id: &str, request: &UpdateEventRequest) -> Result<Event> {
        request.validate()?;
        let category = match &request.category_id {
            Some(category_id) => Some(self.category(category_id).await?),
            None => None,
        };

        let mut events = self.events.write().await;
        let event = events
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| GatewayError::event_not_found(id))?;

        request.validate_against(event)?;
        request.apply_to(event, category.as_ref());
        event.updated_at = Utc::now();
        Ok(event.clone())
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        let mut events = self.events.write().await;
        let before = events.len();
        events.retain(|e| e.id != id);
        if events.len() == before {
            return Err(GatewayError::event_not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for InMemoryGateway {
    async fn get_session(&self) -> Result<Option<User>> {
        Ok(self.user.read().await.clone())
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        validate_credentials(email, password)
            .map_err(|e| GatewayError::Unauthorized(e.to_string()))?;

        if let Some(expected) = &self.credentials {
            if expected.email != email.trim() || expected.password != password {
                return Err(GatewayError::Unauthorized(
                    "Invalid login credentials".to_string(),
                ));
            }
        }

        let user = User::from_auth(Uuid::new_v4().to_string(), email.trim(), None);
        *self.user.write().await = Some(user.clone());
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        *self.user.write().await = None;
        Ok(())
    }
}
