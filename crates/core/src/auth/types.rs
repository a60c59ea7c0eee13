use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::functions::display_name;

/// What a user is allowed to do.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    #[default]
    Public,
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Admin => write!(f, "admin"),
            Self::Public => write!(f, "public"),
        }
    }
}

/// The signed-in user as the application sees it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: String,
    pub email: String,
    pub role: UserRole,
    pub name: String,
}

impl User {
    /// Builds the user for an authenticated backend account.
    ///
    /// Every authenticated account administers the agenda. The display name
    /// comes from the account's `name` metadata when present.
    pub fn from_auth(
        id: impl Into<String>,
        email: impl Into<String>,
        metadata_name: Option<&str>,
    ) -> Self {
        Self {
            id: id.into(),
            email: email.into(),
            role: UserRole::Admin,
            name: display_name(metadata_name),
        }
    }

    /// Returns true if the user may create, edit and delete events.
    pub fn can_edit(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// An authenticated backend session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    pub access_token: String,
    pub user: User,
    /// `None` when the backend did not say.
    pub expires_at: Option<DateTime<Utc>>,
}
