/**
 * Authentication Module
 *
 * Login, signup and logout against the auth endpoints, plus the advisory
 * role checks the UI uses to decide what to render.
 */

use tokio::runtime::Handle;
use tokio::sync::oneshot::{self, error::TryRecvError};

use crate::egui_app::api::{ApiClient, ApiError};
use crate::shared::auth::{Credentials, TokenResponse};
use crate::shared::error::SharedError;

/// Shown for any login failure; the reason is never distinguished
pub const LOGIN_FAILED_MESSAGE: &str = "Invalid email or password.";

/// Shown for any signup failure
pub const SIGNUP_FAILED_MESSAGE: &str = "Failed to create account.";

/// Which form was submitted
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    Login,
    Signup,
}

/// Result of a finished login or signup
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthOutcome {
    LoggedIn,
    SignedUp,
    Failed { mode: AuthMode, message: String },
}

impl AuthOutcome {
    pub fn is_success(&self) -> bool {
        !matches!(self, AuthOutcome::Failed { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            AuthOutcome::LoggedIn => "Login successful!",
            AuthOutcome::SignedUp => "Signup successful!",
            AuthOutcome::Failed { message, .. } => message,
        }
    }
}

/// Form-level authentication state
#[derive(Debug, Clone, Default)]
pub struct AuthState {
    pub error: Option<String>,
    pub loading: bool,
}

impl AuthState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear_error(&mut self) {
        self.error = None;
    }

    pub fn set_error(&mut self, error: String) {
        self.error = Some(error);
    }
}

type AuthReply = (AuthMode, Result<TokenResponse, ApiError>);

/// Login/signup/logout workflow
pub struct AuthWorkflow {
    api: ApiClient,
    handle: Handle,
    state: AuthState,
    pending: Option<oneshot::Receiver<AuthReply>>,
}

impl AuthWorkflow {
    pub fn new(api: ApiClient, handle: Handle) -> Self {
        Self {
            api,
            handle,
            state: AuthState::new(),
            pending: None,
        }
    }

    pub fn state(&self) -> &AuthState {
        &self.state
    }

    pub fn clear_error(&mut self) {
        self.state.clear_error();
    }

    /// Post credentials to `/auth/login`
    pub fn login(&mut self, email: &str, password: &str) -> Result<(), SharedError> {
        self.submit(AuthMode::Login, email, password)
    }

    /// Post a new account to `/auth/signup`
    pub fn signup(&mut self, email: &str, password: &str) -> Result<(), SharedError> {
        self.submit(AuthMode::Signup, email, password)
    }

    /// Forget the token. The caller re-runs role checks and reloads the list.
    pub fn logout(&mut self) {
        if let Err(e) = self.api.tokens().remove() {
            tracing::error!(error = %e, "failed to remove persisted token");
        }
        self.state = AuthState::new();
        tracing::info!("logged out");
    }

    pub fn is_logged_in(&self) -> bool {
        self.api.tokens().is_logged_in()
    }

    pub fn is_admin(&self) -> bool {
        self.api.tokens().is_admin()
    }

    fn submit(&mut self, mode: AuthMode, email: &str, password: &str) -> Result<(), SharedError> {
        if self.state.loading {
            tracing::debug!(?mode, "auth submit ignored, request in flight");
            return Ok(());
        }
        let email = email.trim();
        if email.is_empty() || password.is_empty() {
            let error = SharedError::validation("email", "Email and password are required");
            self.state.set_error("Email and password are required".to_string());
            return Err(error);
        }

        self.state.loading = true;
        self.state.error = None;

        let credentials = Credentials::new(email, password);
        let api = self.api.clone();
        let (tx, rx) = oneshot::channel();
        self.handle.spawn(async move {
            let result = match mode {
                AuthMode::Login => api.login(&credentials).await,
                AuthMode::Signup => api.signup(&credentials).await,
            };
            let _ = tx.send((mode, result));
        });
        self.pending = Some(rx);
        Ok(())
    }

    /// Collect a finished request, without blocking
    pub fn poll(&mut self) -> Option<AuthOutcome> {
        let receiver = self.pending.as_mut()?;
        match receiver.try_recv() {
            Ok((mode, result)) => {
                self.pending = None;
                Some(self.apply(mode, result))
            }
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Closed) => {
                self.pending = None;
                self.state.loading = false;
                tracing::error!("auth task ended without a result");
                None
            }
        }
    }

    /// Wait for the in-flight request, if any
    pub async fn wait(&mut self) -> Option<AuthOutcome> {
        let receiver = self.pending.take()?;
        match receiver.await {
            Ok((mode, result)) => Some(self.apply(mode, result)),
            Err(_) => {
                self.state.loading = false;
                tracing::error!("auth task ended without a result");
                None
            }
        }
    }

    fn apply(&mut self, mode: AuthMode, result: Result<TokenResponse, ApiError>) -> AuthOutcome {
        self.state.loading = false;
        match result {
            Ok(response) => {
                if let Err(e) = self.api.tokens().set(response.token) {
                    // The in-memory token still applies for this session
                    tracing::error!(error = %e, "failed to persist token");
                }
                self.state.error = None;
                tracing::info!(?mode, "authentication successful");
                match mode {
                    AuthMode::Login => AuthOutcome::LoggedIn,
                    AuthMode::Signup => AuthOutcome::SignedUp,
                }
            }
            Err(e) => {
                tracing::error!(?mode, error = %e, "authentication failed");
                let message = match mode {
                    AuthMode::Login => LOGIN_FAILED_MESSAGE,
                    AuthMode::Signup => SIGNUP_FAILED_MESSAGE,
                }
                .to_string();
                self.state.set_error(message.clone());
                AuthOutcome::Failed { mode, message }
            }
        }
    }
}
