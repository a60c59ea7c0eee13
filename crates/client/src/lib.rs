//! agenda_client - Supabase gateway, headless application and CLI for the
//! public events agenda.

pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod gateway;
pub mod output;

pub use app::App;
pub use config::Config;
pub use error::{ClientError, Result};
