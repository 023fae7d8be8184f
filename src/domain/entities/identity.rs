use chrono::{DateTime, Utc};
use serde::Deserialize;
use uuid::Uuid;
use validator::Validate;

/// An authentication principal held by the auth provider. Referenced, never
/// mutated, by the marketplace tables.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct Identity {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug)]
pub struct IdentityInsert {
    pub email: String,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl IdentityInsert {
    pub fn new(email: &str, password_hash: String) -> Self {
        let now = Utc::now();
        IdentityInsert {
            email: email.to_string(),
            password_hash,
            created_at: now,
            updated_at: now,
        }
    }
}

/// An authenticated session issued by the provider.
#[derive(Debug, Clone)]
pub struct Session {
    pub identity_id: Uuid,
    pub email: String,
    pub access_token: String,
    pub refresh_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Change notifications emitted by the auth provider.
#[derive(Debug, Clone)]
pub enum AuthEvent {
    SignedIn(Session),
    SignedOut,
}

/// Snapshot of the process-wide session, published over a watch channel.
/// `loading` stays true until the first session check resolves.
#[derive(Debug, Clone)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        SessionState {
            session: None,
            loading: true,
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Invalid email format"))]
    pub email: String,

    #[validate(length(min = 1, message = "Password cannot be empty"))]
    pub password: String,
}
