use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::entities::identity::{AuthEvent, Identity, Session};
use crate::entities::token::Claims;
use crate::errors::AuthError;

/// Port onto the auth provider: identity creation, password sign-in, the
/// current-session probe, and the change-notification stream.
#[async_trait]
pub trait AuthProvider: Send + Sync {
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError>;

    async fn sign_in_with_password(&self, email: &str, password: &str)
        -> Result<Session, AuthError>;

    async fn sign_out(&self) -> Result<(), AuthError>;

    async fn get_session(&self) -> Result<Option<Session>, AuthError>;

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError>;

    /// Subscribing before the first `get_session` probe is what keeps a
    /// change landing mid-probe observable.
    fn on_auth_state_change(&self) -> broadcast::Receiver<AuthEvent>;

    fn decode_access_token(&self, token: &str) -> Result<Claims, AuthError>;
}
