use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use super::{reduce, Action, AppState};

/// The kinds of asynchronous requests whose responses feed the state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RequestKind {
    Session,
    Categories,
    Events,
    SaveEvent,
    DeleteEvent,
}

/// Identifies one in-flight request.
///
/// A response may only be applied while its token is the newest of its kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub kind: RequestKind,
    pub generation: u64,
}

/// Single owner of the application state.
///
/// All mutation goes through [`StateController::dispatch`]. Readers get a
/// shared reference to the current snapshot.
#[derive(Debug, Clone)]
pub struct StateController {
    state: AppState,
    generations: HashMap<RequestKind, u64>,
}

impl StateController {
    /// Takes ownership of `initial`, rebuilding its filtered events.
    pub fn new(mut initial: AppState) -> Self {
        initial.calendar.recompute();
        Self {
            state: initial,
            generations: HashMap::new(),
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Applies an action.
    pub fn dispatch(&mut self, action: Action) {
        tracing::trace!(action = action.kind(), "dispatch");
        self.state = reduce(&self.state, action);
    }

    /// Applies an action received as JSON.
    ///
    /// Malformed input is logged and ignored. Returns true if an action was
    /// decoded and applied.
    pub fn dispatch_json(&mut self, json: &str) -> bool {
        match Action::from_json(json) {
            Ok(action) => {
                self.dispatch(action);
                true
            }
            Err(error) => {
                tracing::warn!(%error, "Ignoring malformed action");
                false
            }
        }
    }

    /// Starts a request of `kind`, superseding any earlier one.
    pub fn begin_request(&mut self, kind: RequestKind) -> RequestToken {
        let generation = self.generations.entry(kind).or_insert(0);
        *generation += 1;
        RequestToken {
            kind,
            generation: *generation,
        }
    }

    /// Returns true if no newer request of the same kind began and the kind
    /// was not cancelled since `token` was issued.
    pub fn is_current(&self, token: RequestToken) -> bool {
        self.generations.get(&token.kind).copied() == Some(token.generation)
    }

    /// Applies `action` only if `token` is still current.
    pub fn dispatch_if_current(&mut self, token: RequestToken, action: Action) -> bool {
        if !self.is_current(token) {
            tracing::debug!(
                kind = ?token.kind,
                generation = token.generation,
                action = action.kind(),
                "Discarding stale response"
            );
            return false;
        }
        self.dispatch(action);
        true
    }

    /// Invalidates every outstanding request of `kind`.
    pub fn cancel(&mut self, kind: RequestKind) {
        *self.generations.entry(kind).or_insert(0) += 1;
    }
}
