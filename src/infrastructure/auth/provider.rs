use async_trait::async_trait;
use tokio::sync::{broadcast, RwLock};

use crate::auth::jwt::JwtService;
use crate::auth::password::{hash_password, verify_password};
use crate::entities::identity::{AuthEvent, Identity, IdentityInsert, Session};
use crate::entities::token::Claims;
use crate::errors::{AppError, AuthError};
use crate::repositories::auth_provider::AuthProvider;
use crate::repositories::identity::IdentityRepository;
use uuid::Uuid;

const EVENT_CHANNEL_CAPACITY: usize = 16;

/// Password-backed auth provider: identities table + argon2id hashing +
/// HS512 token pairs. The current session is a process-wide singleton
/// guarded by an async lock; every change is mirrored onto the event
/// channel.
pub struct PasswordAuthProvider<R>
where
    R: IdentityRepository,
{
    pub identities: R,
    tokens: JwtService,
    events: broadcast::Sender<AuthEvent>,
    current: RwLock<Option<Session>>,
}

impl<R> PasswordAuthProvider<R>
where
    R: IdentityRepository,
{
    pub fn new(identities: R, tokens: JwtService) -> Self {
        let (events, _) = broadcast::channel(EVENT_CHANNEL_CAPACITY);
        PasswordAuthProvider {
            identities,
            tokens,
            events,
            current: RwLock::new(None),
        }
    }

    fn issue_session(&self, identity: &Identity) -> Result<Session, AuthError> {
        let access_token = self.tokens.create_jwt(identity).map_err(|e| {
            tracing::warn!("Failed to create access token: {}", e);
            AuthError::TokenCreation
        })?;
        let refresh_token = self.tokens.create_refresh_jwt(&identity.id).map_err(|e| {
            tracing::warn!("Failed to create refresh token: {}", e);
            AuthError::TokenCreation
        })?;

        Ok(Session {
            identity_id: identity.id,
            email: identity.email.clone(),
            access_token,
            refresh_token,
            expires_at: self.tokens.access_expires_at(),
        })
    }

    async fn install_session(&self, session: Session) {
        *self.current.write().await = Some(session.clone());
        let _ = self.events.send(AuthEvent::SignedIn(session));
    }
}

#[async_trait]
impl<R> AuthProvider for PasswordAuthProvider<R>
where
    R: IdentityRepository,
{
    async fn sign_up(&self, email: &str, password: &str) -> Result<Identity, AuthError> {
        let password_hash = hash_password(password)?;
        let insert = IdentityInsert::new(email, password_hash);

        let identity = self
            .identities
            .create_identity(&insert)
            .await
            .map_err(|e| match e {
                AppError::Conflict(_) => AuthError::DuplicateEmail,
                other => AuthError::ProviderError(other.to_string()),
            })?;

        // The identity is confirmed as soon as the row lands; sign the
        // caller in and notify subscribers.
        let session = self.issue_session(&identity)?;
        self.install_session(session).await;

        Ok(identity)
    }

    async fn sign_in_with_password(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Session, AuthError> {
        let identity = self
            .identities
            .get_identity_by_email(email)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let is_password_valid = verify_password(password, &identity.password_hash)
            .map_err(|_| AuthError::WrongCredentials)?;
        if !is_password_valid {
            return Err(AuthError::WrongCredentials);
        }

        let session = self.issue_session(&identity)?;
        self.install_session(session.clone()).await;

        tracing::info!("Signed in successfully");
        Ok(session)
    }

    async fn sign_out(&self) -> Result<(), AuthError> {
        *self.current.write().await = None;
        let _ = self.events.send(AuthEvent::SignedOut);
        Ok(())
    }

    async fn get_session(&self) -> Result<Option<Session>, AuthError> {
        Ok(self.current.read().await.clone())
    }

    async fn refresh_session(&self, refresh_token: &str) -> Result<Session, AuthError> {
        let decoded = self.tokens.decode_refresh_jwt(refresh_token)?;
        let identity_id =
            Uuid::parse_str(&decoded.claims.sub).map_err(|_| AuthError::InvalidUserId)?;

        let identity = self
            .identities
            .get_identity_by_id(&identity_id)
            .await
            .map_err(|_| AuthError::WrongCredentials)?
            .ok_or(AuthError::WrongCredentials)?;

        let session = self.issue_session(&identity)?;
        self.install_session(session.clone()).await;

        Ok(session)
    }

    fn on_auth_state_change(&self) -> broadcast::Receiver<AuthEvent> {
        self.events.subscribe()
    }

    fn decode_access_token(&self, token: &str) -> Result<Claims, AuthError> {
        self.tokens.decode_jwt(token).map(|data| data.claims)
    }
}
