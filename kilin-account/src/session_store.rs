use std::sync::Arc;
use chrono::Utc;
use tokio::sync::Mutex;
use tracing::info;

use kilin_core::latency::simulate;
use kilin_core::storage::{keys, KeyValueStore, StorageError};
use kilin_core::Latency;
use kilin_shared::models::{DomainEvent, UserLoggedInEvent, UserRegisteredEvent};
use kilin_store::collection::{append_item, load_collection, load_value, save_value};
use kilin_store::EventPublisher;

use crate::models::{SessionContext, UserAccount, UserSession};

#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("User with this email already exists: {0}")]
    DuplicateAccount(String),

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// Accounts plus the single active session, kept behind the storage port.
pub struct SessionStore {
    store: Arc<dyn KeyValueStore>,
    latency: Latency,
    events: EventPublisher,
    registration: Mutex<()>,
}

impl SessionStore {
    pub fn new(store: Arc<dyn KeyValueStore>, latency: Latency, events: EventPublisher) -> Self {
        Self { store, latency, events, registration: Mutex::new(()) }
    }

    /// Creates an account and logs it in.
    ///
    /// Emails are compared as exact strings. The duplicate check and the
    /// append run under one lock, so concurrent registrations of the same
    /// email through this store yield exactly one account.
    pub async fn register(
        &self,
        email: &str,
        name: &str,
        password: &str,
    ) -> Result<UserSession, AuthError> {
        simulate(self.latency.auth).await;

        let _registering = self.registration.lock().await;
        let accounts = self.accounts().await?;
        if accounts.iter().any(|a| a.email == email) {
            return Err(AuthError::DuplicateAccount(email.to_string()));
        }

        let account = UserAccount::new(email.to_string(), name.to_string(), password.to_string());
        append_item(self.store.as_ref(), keys::USERS, &account).await?;

        let session = account.start_session();
        save_value(self.store.as_ref(), keys::CURRENT_USER, &session).await?;

        info!("Registered user {}", account.id);
        self.events.publish(DomainEvent::UserRegistered(UserRegisteredEvent {
            user_id: account.id,
            email: account.email.clone(),
            timestamp: Utc::now().timestamp(),
        }));

        Ok(session)
    }

    /// Replaces the active session on an exact email/password match. A failed
    /// attempt leaves the stored session as it was.
    pub async fn login(&self, email: &str, password: &str) -> Result<UserSession, AuthError> {
        simulate(self.latency.auth).await;

        let accounts = self.accounts().await?;
        let account = accounts
            .iter()
            .find(|a| a.email == email && a.password.expose() == password)
            .ok_or(AuthError::InvalidCredentials)?;

        let session = account.start_session();
        save_value(self.store.as_ref(), keys::CURRENT_USER, &session).await?;

        info!("User {} logged in", account.id);
        self.events.publish(DomainEvent::UserLoggedIn(UserLoggedInEvent {
            user_id: account.id,
            timestamp: session.last_login.timestamp(),
        }));

        Ok(session)
    }

    /// Idempotent.
    pub async fn logout(&self) -> Result<(), AuthError> {
        self.store.remove(keys::CURRENT_USER).await?;
        info!("Session cleared");
        Ok(())
    }

    /// The stored session; `None` when logged out or when the stored value
    /// cannot be parsed.
    pub async fn current_user(&self) -> Result<Option<UserSession>, AuthError> {
        Ok(load_value(self.store.as_ref(), keys::CURRENT_USER).await?)
    }

    pub async fn is_logged_in(&self) -> Result<bool, AuthError> {
        Ok(self.current_user().await?.is_some_and(|s| s.logged_in))
    }

    /// Rebuilds a [`SessionContext`] from storage, e.g. at start-up.
    pub async fn restore_context(&self) -> Result<SessionContext, AuthError> {
        Ok(match self.current_user().await? {
            Some(session) => SessionContext::authenticated(session),
            None => SessionContext::anonymous(),
        })
    }

    pub async fn accounts(&self) -> Result<Vec<UserAccount>, AuthError> {
        Ok(load_collection(self.store.as_ref(), keys::USERS).await?)
    }
}
