//! Gateway implementations and backend selection.

pub mod inmemory;
pub mod supabase;

use std::sync::Arc;

use agenda_core::gateway::Gateway;
use chrono::NaiveDate;

use crate::config::Config;
use crate::error::Result;

pub use inmemory::InMemoryGateway;
pub use supabase::SupabaseGateway;

/// Which backend the application is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BackendMode {
    Supabase,
    /// No backend configured; sample data held in memory.
    Mock,
}

/// Builds the gateway described by `config`.
///
/// Falls back to an in-memory gateway seeded around `today` when the backend
/// is not configured.
pub async fn connect(config: &Config, today: NaiveDate) -> Result<(Arc<dyn Gateway>, BackendMode)> {
    let Some(backend) = config.backend() else {
        tracing::warn!("Supabase not configured, using mock mode");
        return Ok((
            Arc::new(InMemoryGateway::with_demo_data(today)),
            BackendMode::Mock,
        ));
    };

    tracing::info!(url = %backend.url, "Using Supabase backend");
    let mut gateway = SupabaseGateway::new(backend, config.request_timeout())?;
    if let Some(token) = &config.access_token {
        gateway = gateway.with_access_token(token.clone()).await;
    }
    Ok((Arc::new(gateway), BackendMode::Supabase))
}
