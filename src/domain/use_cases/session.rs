use std::sync::Arc;

use tokio::sync::broadcast::error::RecvError;
use tokio::sync::watch;
use validator::Validate;

use crate::entities::identity::{AuthEvent, LoginRequest, Session, SessionState};
use crate::entities::profile::{RegisteredAccount, RegistrationRequest};
use crate::entities::token::AuthResponse;
use crate::errors::{AppError, AuthError, SignUpError};
use crate::repositories::auth_provider::AuthProvider;
use crate::repositories::employer::EmployerRepository;
use crate::repositories::job_seeker::JobSeekerRepository;
use crate::repositories::profile::ProfileRepository;
use crate::use_cases::provisioning::ProvisioningWorkflow;

/// Owns the process-wide session and fans out changes to whoever
/// subscribes, instead of letting callers read ambient global state.
pub struct SessionManager<A, P, S, E>
where
    A: AuthProvider,
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
{
    pub provider: Arc<A>,
    pub provisioning: ProvisioningWorkflow<P, S, E>,
    state_tx: Arc<watch::Sender<SessionState>>,
}

impl<A, P, S, E> SessionManager<A, P, S, E>
where
    A: AuthProvider + 'static,
    P: ProfileRepository,
    S: JobSeekerRepository,
    E: EmployerRepository,
{
    pub fn new(provider: Arc<A>, provisioning: ProvisioningWorkflow<P, S, E>) -> Self {
        let (state_tx, _) = watch::channel(SessionState::default());
        SessionManager {
            provider,
            provisioning,
            state_tx: Arc::new(state_tx),
        }
    }

    /// Resolves the resting session state. Subscribes to auth-state
    /// changes *before* probing, so a change landing mid-probe is still
    /// observed; whichever of {probe result, notification} is observed
    /// last wins. Both clear the loading flag.
    pub async fn init(&self) -> Result<(), AuthError> {
        let mut events = self.provider.on_auth_state_change();
        let state_tx = Arc::clone(&self.state_tx);

        tokio::spawn(async move {
            loop {
                let event = match events.recv().await {
                    Ok(event) => event,
                    // A lagged receiver only missed intermediate states;
                    // the next event is still authoritative.
                    Err(RecvError::Lagged(_)) => continue,
                    Err(RecvError::Closed) => break,
                };

                let session = match event {
                    AuthEvent::SignedIn(session) => Some(session),
                    AuthEvent::SignedOut => None,
                };
                // send_replace: the state must advance even while nobody
                // is subscribed yet.
                state_tx.send_replace(SessionState {
                    session,
                    loading: false,
                });
            }
        });

        let probed = self.provider.get_session().await?;
        self.state_tx.send_replace(SessionState {
            session: probed,
            loading: false,
        });

        Ok(())
    }

    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state_tx.subscribe()
    }

    pub fn current(&self) -> SessionState {
        self.state_tx.borrow().clone()
    }

    /// Creates the identity, then provisions the two-tier profile. All
    /// validation happens before the provider is touched; no step is
    /// retried on failure.
    pub async fn sign_up(
        &self,
        request: RegistrationRequest,
    ) -> Result<RegisteredAccount, SignUpError> {
        request
            .validate()
            .map_err(|e| SignUpError::Validation(AppError::from(e)))?;
        request
            .ensure_passwords_match()
            .map_err(SignUpError::Validation)?;

        let identity = self
            .provider
            .sign_up(&request.email, &request.password)
            .await
            .map_err(SignUpError::Identity)?;

        // A provisioning failure past this point leaves the identity in
        // the provider; the workflow logs it and the caller sees which
        // step broke.
        self.provisioning
            .provision(&identity, &request)
            .await
            .map_err(SignUpError::Provisioning)
    }

    pub async fn sign_in(&self, request: LoginRequest) -> Result<AuthResponse, AuthError> {
        request.validate()?;

        let session = self
            .provider
            .sign_in_with_password(&request.email, &request.password)
            .await?;

        Ok(AuthResponse::new(session.access_token, session.refresh_token))
    }

    pub async fn sign_out(&self) -> Result<(), AuthError> {
        self.provider.sign_out().await
    }

    pub async fn refresh(&self, refresh_token: &str) -> Result<AuthResponse, AuthError> {
        let session: Session = self.provider.refresh_session(refresh_token).await?;
        Ok(AuthResponse::new(session.access_token, session.refresh_token))
    }
}
