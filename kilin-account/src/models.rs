use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use kilin_shared::Masked;

/// A registered user. Never updated after registration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub id: Uuid,
    pub email: String,
    pub name: String,
    /// Stored as entered; only hidden from logs.
    pub password: Masked<String>,
    pub created_at: DateTime<Utc>,
}

impl UserAccount {
    pub fn new(email: String, name: String, password: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            email,
            name,
            password: Masked::new(password),
            created_at: Utc::now(),
        }
    }

    pub fn start_session(&self) -> UserSession {
        UserSession {
            user_id: self.id,
            email: self.email.clone(),
            name: self.name.clone(),
            logged_in: true,
            last_login: Utc::now(),
        }
    }
}

/// The active login. At most one exists per storage namespace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserSession {
    pub user_id: Uuid,
    pub email: String,
    pub name: String,
    pub logged_in: bool,
    pub last_login: DateTime<Utc>,
}

/// Explicit handle on "who is using the app right now".
///
/// Built from the result of login/register (or restored from storage at
/// start-up) and handed to whatever needs the user, instead of those
/// components reading the stored session themselves.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SessionContext {
    session: Option<UserSession>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self::default()
    }

    pub fn authenticated(session: UserSession) -> Self {
        Self { session: Some(session) }
    }

    pub fn session(&self) -> Option<&UserSession> {
        self.session.as_ref()
    }

    pub fn user_id(&self) -> Option<Uuid> {
        self.session.as_ref().filter(|s| s.logged_in).map(|s| s.user_id)
    }

    pub fn is_authenticated(&self) -> bool {
        self.user_id().is_some()
    }

    /// Drops the session, as on logout.
    pub fn end(&mut self) {
        self.session = None;
    }
}
