//! Headless application: wires a gateway to the state controller.
//!
//! Every flow follows the same shape: begin a request token, await the
//! gateway, then dispatch the outcome only if the token is still current.
//! Failures become a user-visible notification and are also returned.

use std::sync::Arc;

use agenda_core::auth::{validate_credentials, User};
use agenda_core::calendar::{
    default_categories, find_category, navigate, sort_events_chronologically, CalendarFilter,
    CalendarView, CreateEventRequest, Event, EventCategory, Locale, UpdateEventRequest,
};
use agenda_core::gateway::{resolve_categories, AuthGateway, EventGateway, Gateway, GatewayError};
use agenda_core::state::{Action, AppState, RequestKind, RequestToken, StateController};
use chrono::NaiveDate;

use crate::error::{ClientError, Result};

/// The application shell around [`StateController`].
pub struct App {
    gateway: Arc<dyn Gateway>,
    controller: StateController,
    categories: Vec<EventCategory>,
    locale: Locale,
    today: NaiveDate,
}

impl App {
    pub fn new(gateway: Arc<dyn Gateway>, today: NaiveDate, locale: Locale) -> Self {
        Self {
            gateway,
            controller: StateController::new(AppState::new(today)),
            categories: Vec::new(),
            locale,
            today,
        }
    }

    pub fn state(&self) -> &AppState {
        self.controller.state()
    }

    pub fn categories(&self) -> &[EventCategory] {
        &self.categories
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    pub fn today(&self) -> NaiveDate {
        self.today
    }

    pub fn dispatch(&mut self, action: Action) {
        self.controller.dispatch(action);
    }

    /// Invalidates outstanding requests of `kind`; their responses are dropped.
    ///
    /// Cancelling an events load also lowers the loading flag, since no
    /// response will arrive to clear it.
    pub fn cancel(&mut self, kind: RequestKind) {
        self.controller.cancel(kind);
        if kind == RequestKind::Events {
            self.controller.dispatch(Action::SetLoading(false));
        }
    }

    /// Restores the session, then loads categories and events.
    pub async fn initialize(&mut self) -> Result<()> {
        self.load_session().await?;
        self.load_categories().await?;
        self.load_events().await
    }

    pub async fn load_session(&mut self) -> Result<Option<User>> {
        let token = self.controller.begin_request(RequestKind::Session);
        let result = self.gateway.get_session().await;
        match result {
            Ok(user) => {
                self.controller
                    .dispatch_if_current(token, Action::SetUser(user.clone()));
                Ok(user)
            }
            Err(error) => Err(self.fail(token, "Gagal memuat sesi", "Failed to load session", error)),
        }
    }

    /// Loads categories, using the defaults when no backend is configured.
    pub async fn load_categories(&mut self) -> Result<()> {
        let token = self.controller.begin_request(RequestKind::Categories);
        let result = resolve_categories(self.gateway.list_categories().await, default_categories);
        match result {
            Ok(categories) => {
                if self.controller.is_current(token) {
                    self.categories = categories;
                }
                Ok(())
            }
            Err(error) => Err(self.fail(
                token,
                "Gagal memuat kategori",
                "Failed to load categories",
                error,
            )),
        }
    }

    pub async fn load_events(&mut self) -> Result<()> {
        let token = self.begin_load_events();
        let result = self.gateway.list_events().await;
        self.finish_load_events(token, result).map(|_| ())
    }

    /// Starts an events load and raises the loading flag.
    pub fn begin_load_events(&mut self) -> RequestToken {
        self.controller.dispatch(Action::SetLoading(true));
        self.controller.begin_request(RequestKind::Events)
    }

    /// Applies the outcome of an events load.
    ///
    /// Returns `Ok(false)` when a newer load superseded this one. The loading
    /// flag is then left to the newer load.
    pub fn finish_load_events(
        &mut self,
        token: RequestToken,
        result: std::result::Result<Vec<Event>, GatewayError>,
    ) -> Result<bool> {
        if !self.controller.is_current(token) {
            tracing::debug!(generation = token.generation, "Dropping superseded events load");
            return Ok(false);
        }
        self.controller.dispatch(Action::SetLoading(false));

        match result {
            Ok(events) => {
                tracing::info!(count = events.len(), "Loaded events");
                Ok(self.controller.dispatch_if_current(token, Action::SetEvents(events)))
            }
            Err(error) => Err(self.fail(token, "Gagal memuat agenda", "Failed to load events", error)),
        }
    }

    pub async fn sign_in(&mut self, email: &str, password: &str) -> Result<User> {
        validate_credentials(email, password)?;
        let token = self.controller.begin_request(RequestKind::Session);
        match self.gateway.sign_in(email, password).await {
            Ok(user) => {
                tracing::info!(email = %user.email, "Signed in");
                self.controller
                    .dispatch_if_current(token, Action::SetUser(Some(user.clone())));
                self.notify(
                    &format!("Selamat datang, {}", user.name),
                    &format!("Welcome, {}", user.name),
                );
                Ok(user)
            }
            Err(error) => Err(self.fail(token, "Login gagal", "Sign-in failed", error)),
        }
    }

    pub async fn sign_out(&mut self) -> Result<()> {
        let token = self.controller.begin_request(RequestKind::Session);
        match self.gateway.sign_out().await {
            Ok(()) => {
                tracing::info!("Signed out");
                self.controller.dispatch_if_current(token, Action::SetUser(None));
                self.notify("Berhasil keluar", "Signed out");
                Ok(())
            }
            Err(error) => Err(self.fail(token, "Gagal keluar", "Sign-out failed", error)),
        }
    }

    /// Bearer token of the current session, if the gateway has one.
    pub async fn access_token(&self) -> Option<String> {
        self.gateway.access_token().await
    }

    pub async fn create_event(&mut self, request: CreateEventRequest) -> Result<Event> {
        self.require_editor()?;
        request.validate()?;
        self.check_category(&request.category_id)?;

        let token = self.controller.begin_request(RequestKind::SaveEvent);
        match self.gateway.create_event(&request).await {
            Ok(event) => {
                tracing::info!(id = %event.id, title = %event.title, "Created event");
                self.controller
                    .dispatch_if_current(token, Action::AddEvent(event.clone()));
                self.notify("Agenda berhasil ditambahkan", "Event created");
                Ok(event)
            }
            Err(error) => Err(self.fail(
                token,
                "Gagal menyimpan agenda",
                "Failed to save event",
                error,
            )),
        }
    }

    pub async fn update_event(&mut self, id: &str, request: UpdateEventRequest) -> Result<Event> {
        self.require_editor()?;
        request.validate()?;
        if let Some(existing) = self.state().find_event(id) {
            request.validate_against(existing)?;
        }
        if let Some(category_id) = &request.category_id {
            self.check_category(category_id)?;
        }

        let token = self.controller.begin_request(RequestKind::SaveEvent);
        match self.gateway.update_event(id, &request).await {
            Ok(event) => {
                tracing::info!(id = %event.id, "Updated event");
                self.controller
                    .dispatch_if_current(token, Action::UpdateEvent(event.clone()));
                self.notify("Agenda berhasil diperbarui", "Event updated");
                Ok(event)
            }
            Err(error) => Err(self.fail(
                token,
                "Gagal menyimpan agenda",
                "Failed to save event",
                error,
            )),
        }
    }

    pub async fn delete_event(&mut self, id: &str) -> Result<()> {
        self.require_editor()?;
        let token = self.controller.begin_request(RequestKind::DeleteEvent);
        match self.gateway.delete_event(id).await {
            Ok(()) => {
                tracing::info!(id, "Deleted event");
                self.controller
                    .dispatch_if_current(token, Action::DeleteEvent(id.to_string()));
                self.notify("Agenda berhasil dihapus", "Event deleted");
                Ok(())
            }
            Err(error) => Err(self.fail(
                token,
                "Gagal menghapus agenda",
                "Failed to delete event",
                error,
            )),
        }
    }

    pub fn set_view(&mut self, view: CalendarView) {
        self.controller.dispatch(Action::SetView(view));
    }

    /// Moves the anchor one unit of the active view forward or back.
    pub fn navigate(&mut self, step: i32) {
        let calendar = &self.state().calendar;
        let next = navigate(calendar.view, calendar.current_date, step);
        self.controller.dispatch(Action::SetCurrentDate(next));
    }

    pub fn go_to(&mut self, date: NaiveDate) {
        self.controller.dispatch(Action::SetCurrentDate(date));
    }

    pub fn go_to_today(&mut self) {
        self.go_to(self.today);
    }

    /// Selecting a date also moves the anchor there.
    pub fn select_date(&mut self, date: Option<NaiveDate>) {
        if let Some(date) = date {
            self.controller.dispatch(Action::SetCurrentDate(date));
        }
        self.controller.dispatch(Action::SetSelectedDate(date));
    }

    pub fn set_filter(&mut self, filter: CalendarFilter) {
        self.controller.dispatch(Action::SetFilter(filter));
    }

    pub fn clear_filter(&mut self) {
        let cleared = self.state().calendar.filter.cleared();
        self.controller.dispatch(Action::SetFilter(cleared));
    }

    pub fn dismiss_notification(&mut self) {
        self.controller.dispatch(Action::SetNotification(None));
    }

    /// The filtered events in chronological order, as the event list shows them.
    pub fn visible_events(&self) -> Vec<Event> {
        let mut events = self.state().calendar.filtered_events().to_vec();
        sort_events_chronologically(&mut events);
        events
    }

    /// Looks an event up in the local mirror.
    pub fn event(&self, id: &str) -> Option<&Event> {
        self.state().find_event(id)
    }

    fn require_editor(&self) -> Result<()> {
        if self.state().can_edit() {
            Ok(())
        } else {
            Err(ClientError::Forbidden(
                "sign in as an administrator to change events".to_string(),
            ))
        }
    }

    /// Rejects unknown categories once categories are loaded.
    fn check_category(&self, category_id: &str) -> Result<()> {
        if !self.categories.is_empty() {
            find_category(&self.categories, category_id)?;
        }
        Ok(())
    }

    fn notify(&mut self, indonesian: &str, english: &str) {
        let message = match self.locale {
            Locale::Indonesian => indonesian,
            Locale::English => english,
        };
        self.controller
            .dispatch(Action::SetNotification(Some(message.to_string())));
    }

    /// Logs and returns `error`; only a current request may notify the user.
    fn fail(
        &mut self,
        token: RequestToken,
        indonesian: &str,
        english: &str,
        error: GatewayError,
    ) -> ClientError {
        tracing::error!(%error, kind = ?token.kind, "{english}");
        if self.controller.is_current(token) {
            self.notify(&format!("{indonesian}: {error}"), &format!("{english}: {error}"));
        }
        error.into()
    }
}
