//! Gateway backed by a Supabase project (PostgREST + GoTrue).

mod rows;

pub use rows::{error_message, CategoryRow, EventRow, EVENT_SELECT};

use std::sync::Arc;
use std::time::Duration;

use agenda_core::auth::{is_session_expired, Session, User};
use agenda_core::calendar::{CreateEventRequest, Event, EventCategory, UpdateEventRequest};
use agenda_core::gateway::{AuthGateway, EventGateway, GatewayError, Result};
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;
use url::Url;

use crate::config::BackendConfig;
use crate::error::ClientError;
use rows::{AuthUserRow, InsertEventRow, PasswordGrant, PatchEventRow, TokenResponse};

/// Supabase REST gateway.
#[derive(Debug, Clone)]
pub struct SupabaseGateway {
    client: reqwest::Client,
    base_url: Url,
    anon_key: String,
    session: Arc<RwLock<Option<Session>>>,
    /// Token handed in from a previous sign-in, before its user is known.
    access_token: Arc<RwLock<Option<String>>>,
}

impl SupabaseGateway {
    /// Create a gateway for the given project.
    pub fn new(backend: BackendConfig, timeout: Duration) -> std::result::Result<Self, ClientError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: backend.url,
            anon_key: backend.anon_key,
            session: Arc::new(RwLock::new(None)),
            access_token: Arc::new(RwLock::new(None)),
        })
    }

    /// Resume a session from a stored access token.
    pub async fn with_access_token(self, token: impl Into<String>) -> Self {
        *self.access_token.write().await = Some(token.into());
        self
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Build a URL for an endpoint.
    fn url(&self, path: &str) -> Result<Url> {
        self.base_url
            .join(path)
            .map_err(|e| GatewayError::Transport(format!("invalid URL for {path}: {e}")))
    }

    /// The bearer token: the session's if it is still valid, else the anon key.
    async fn bearer(&self) -> String {
        if let Some(session) = self.session.read().await.as_ref() {
            if !is_session_expired(session, Utc::now()) {
                return session.access_token.clone();
            }
            tracing::debug!("Session expired, falling back to anonymous access");
        }
        match self.access_token.read().await.as_ref() {
            Some(token) => token.clone(),
            None => self.anon_key.clone(),
        }
    }

    async fn authorized(&self, builder: RequestBuilder) -> RequestBuilder {
        let bearer = self.bearer().await;
        builder
            .header("apikey", &self.anon_key)
            .bearer_auth(bearer)
    }

    async fn send(&self, builder: RequestBuilder) -> Result<Response> {
        self.authorized(builder)
            .await
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))
    }

    /// Turns a response into the decoded body or a gateway error.
    async fn handle_response<T: DeserializeOwned>(response: Response) -> Result<T> {
        let response = Self::check_status(response).await?;
        response
            .json()
            .await
            .map_err(|e| GatewayError::InvalidData(e.to_string()))
    }

    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let message = error_message(&body);
        match status {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(GatewayError::Unauthorized(message))
            }
            _ => Err(GatewayError::Backend {
                status: status.as_u16(),
                message,
            }),
        }
    }

    /// Decodes a `return=representation` body holding exactly one event.
    fn single_event(rows: Vec<EventRow>, id: &str) -> Result<Event> {
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::event_not_found(id))
            .and_then(Event::try_from)
    }
}

#[async_trait]
impl EventGateway for SupabaseGateway {
    async fn list_categories(&self) -> Result<Vec<EventCategory>> {
        tracing::debug!("Fetching event categories");
        let request = self
            .client
            .get(self.url("rest/v1/event_categories")?)
            .query(&[("select", "*"), ("order", "name.asc")]);
        let rows: Vec<CategoryRow> = Self::handle_response(self.send(request).await?).await?;
        Ok(rows.into_iter().map(EventCategory::from).collect())
    }

    async fn list_events(&self) -> Result<Vec<Event>> {
        tracing::debug!("Fetching events");
        let request = self
            .client
            .get(self.url("rest/v1/events")?)
            .query(&[("select", EVENT_SELECT), ("order", "start_date.asc")]);
        let rows: Vec<EventRow> = Self::handle_response(self.send(request).await?).await?;
        rows.into_iter().map(Event::try_from).collect()
    }

    async fn create_event(&self, request: &CreateEventRequest) -> Result<Event> {
        request.validate()?;
        tracing::debug!(title = %request.title, "Creating event");
        let builder = self
            .client
            .post(self.url("rest/v1/events")?)
            .query(&[("select", EVENT_SELECT)])
            .header("Prefer", "return=representation")
            .json(&InsertEventRow::from(request));
        let rows: Vec<EventRow> = Self::handle_response(self.send(builder).await?).await?;
        rows.into_iter()
            .next()
            .ok_or_else(|| GatewayError::InvalidData("insert returned no rows".to_string()))
            .and_then(Event::try_from)
    }

    async fn update_event(&self, id: &str, request: &UpdateEventRequest) -> Result<Event> {
        tracing::debug!(id, "Updating event");
        request.validate()?;
        let builder = self
            .client
            .patch(self.url("rest/v1/events")?)
            .query(&[("id", format!("eq.{id}").as_str()), ("select", EVENT_SELECT)])
            .header("Prefer", "return=representation")
            .json(&PatchEventRow::new(request, Utc::now()));
        let rows: Vec<EventRow> = Self::handle_response(self.send(builder).await?).await?;
        Self::single_event(rows, id)
    }

    async fn delete_event(&self, id: &str) -> Result<()> {
        tracing::debug!(id, "Deleting event");
        let builder = self
            .client
            .delete(self.url("rest/v1/events")?)
            .query(&[("id", format!("eq.{id}").as_str()), ("select", "id")])
            .header("Prefer", "return=representation");
        let deleted: Vec<serde_json::Value> =
            Self::handle_response(self.send(builder).await?).await?;
        if deleted.is_empty() {
            return Err(GatewayError::event_not_found(id));
        }
        Ok(())
    }
}

#[async_trait]
impl AuthGateway for SupabaseGateway {
    async fn get_session(&self) -> Result<Option<User>> {
        if let Some(session) = self.session.read().await.as_ref() {
            if !is_session_expired(session, Utc::now()) {
                return Ok(Some(session.user.clone()));
            }
        }
        if self.access_token.read().await.is_none() {
            return Ok(None);
        }

        tracing::debug!("Resolving user for stored access token");
        let response = self.send(self.client.get(self.url("auth/v1/user")?)).await?;
        match Self::handle_response::<AuthUserRow>(response).await {
            Ok(row) => Ok(Some(row.into())),
            Err(GatewayError::Unauthorized(reason)) => {
                tracing::info!(%reason, "Stored access token rejected");
                *self.access_token.write().await = None;
                Ok(None)
            }
            Err(error) => Err(error),
        }
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<User> {
        tracing::debug!(email, "Signing in");
        let builder = self
            .client
            .post(self.url("auth/v1/token")?)
            .query(&[("grant_type", "password")])
            .header("apikey", &self.anon_key)
            .json(&PasswordGrant { email, password });
        let response = builder
            .send()
            .await
            .map_err(|e| GatewayError::Transport(e.to_string()))?;

        // GoTrue answers bad credentials with 400.
        let token: TokenResponse = match Self::handle_response(response).await {
            Err(GatewayError::Backend { status: 400, message }) => {
                return Err(GatewayError::Unauthorized(message))
            }
            other => other?,
        };

        let session = token.into_session(Utc::now());
        let user = session.user.clone();
        *self.session.write().await = Some(session);
        *self.access_token.write().await = None;
        Ok(user)
    }

    async fn sign_out(&self) -> Result<()> {
        let signed_in =
            self.session.read().await.is_some() || self.access_token.read().await.is_some();
        if signed_in {
            tracing::debug!("Signing out");
            let response = self.send(self.client.post(self.url("auth/v1/logout")?)).await?;
            Self::check_status(response).await?;
        }
        *self.session.write().await = None;
        *self.access_token.write().await = None;
        Ok(())
    }

    async fn access_token(&self) -> Option<String> {
        if let Some(session) = self.session.read().await.as_ref() {
            return Some(session.access_token.clone());
        }
        self.access_token.read().await.clone()
    }
}
