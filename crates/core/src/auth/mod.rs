mod error;
mod functions;
mod types;

pub use error::{validate_credentials, AuthError};
pub use functions::{
    calculate_expiry, can_edit, display_name, is_session_expired, DEFAULT_DISPLAY_NAME,
};
pub use types::{Session, User, UserRole};
