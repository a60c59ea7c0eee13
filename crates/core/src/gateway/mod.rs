//! The contract between the application and its remote data store.
//!
//! The core only defines the traits and error taxonomy; implementations live
//! in the client crate.

mod error;
mod traits;

pub use error::{GatewayError, Result};
pub use traits::{resolve_categories, AuthGateway, EventGateway, Gateway};
