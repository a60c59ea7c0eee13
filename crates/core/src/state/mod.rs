//! Application state: a flat record, replaced wholesale on every accepted
//! action, with the filtered event list derived eagerly.

mod action;
mod controller;
mod reducer;
mod types;

pub use action::Action;
pub use controller::{RequestKind, RequestToken, StateController};
pub use reducer::reduce;
pub use types::{AppState, CalendarState};
