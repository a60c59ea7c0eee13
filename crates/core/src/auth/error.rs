use thiserror::Error;

/// Errors raised before credentials are sent to the backend.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("email is required")]
    MissingEmail,

    #[error("invalid email address: {0}")]
    InvalidEmail(String),

    #[error("password is required")]
    MissingPassword,
}

/// Checks a sign-in form before it is submitted.
pub fn validate_credentials(email: &str, password: &str) -> Result<(), AuthError> {
    let email = email.trim();
    if email.is_empty() {
        return Err(AuthError::MissingEmail);
    }
    match email.split_once('@') {
        Some((local, domain)) if !local.is_empty() && domain.contains('.') => {}
        _ => return Err(AuthError::InvalidEmail(email.to_string())),
    }
    if password.is_empty() {
        return Err(AuthError::MissingPassword);
    }
    Ok(())
}
