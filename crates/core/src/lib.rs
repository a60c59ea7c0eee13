//! agenda_core - functional core for the public events agenda.
//!
//! Everything in here is pure: calendar arithmetic, filtering, the state
//! reducer and the gateway contract. I/O lives in `agenda_client`.

pub mod auth;
pub mod calendar;
pub mod gateway;
pub mod serde;
pub mod state;
