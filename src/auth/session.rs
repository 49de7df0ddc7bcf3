//! Session state for the 5paisa API.
//!
//! A [`Session`] tracks where one logical session sits in the
//! authentication state machine and holds the tokens that authorize
//! business calls. State is only ever advanced by the auth service after a
//! response has been classified — a cancelled or failed dispatch leaves the
//! session untouched.

use secrecy::{ExposeSecret, SecretString};
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::models::ClientCode;

/// Position of a session in the authentication state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionPhase {
    /// No authentication flow has completed
    #[default]
    Unauthenticated,
    /// A TOTP request token has been obtained but not yet exchanged
    RequestTokenObtained,
    /// An access token is held but the client code is not yet known
    AccessTokenObtained,
    /// Fully authenticated; business calls may be issued
    Authenticated,
    /// A login attempt was rejected; terminal
    Failed,
}

impl SessionPhase {
    /// Returns `true` if business envelopes may be built in this phase.
    pub fn allows_business_calls(&self) -> bool {
        matches!(
            self,
            SessionPhase::Authenticated | SessionPhase::AccessTokenObtained
        )
    }
}

/// One logical API session.
///
/// `Session` is a cheap clonable handle; clones share the same underlying
/// state. Each logical session must have its own `Session` — sharing one
/// between two racing authentication attempts is not supported.
#[derive(Clone)]
pub struct Session {
    inner: Arc<RwLock<SessionInner>>,
}

#[derive(Default)]
struct SessionInner {
    phase: SessionPhase,
    client_code: Option<ClientCode>,
    access_token: Option<SecretString>,
    jwt_token: Option<SecretString>,
}

/// A point-in-time copy of the session facts the envelope builder needs.
#[derive(Debug, Clone)]
pub(crate) struct SessionSnapshot {
    pub phase: SessionPhase,
    pub client_code: Option<ClientCode>,
}

impl Session {
    /// Create a fresh, unauthenticated session. A pre-known client code
    /// (from [`Credentials::with_client_code`](super::Credentials::with_client_code))
    /// may be carried in.
    pub(crate) fn new(client_code: Option<ClientCode>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(SessionInner {
                client_code,
                ..SessionInner::default()
            })),
        }
    }

    /// Current phase of the session.
    pub async fn phase(&self) -> SessionPhase {
        self.inner.read().await.phase
    }

    /// Client code, once known.
    pub async fn client_code(&self) -> Option<ClientCode> {
        self.inner.read().await.client_code.clone()
    }

    /// Returns `true` once an authentication flow has completed.
    pub async fn is_authenticated(&self) -> bool {
        self.inner.read().await.phase == SessionPhase::Authenticated
    }

    pub(crate) async fn snapshot(&self) -> SessionSnapshot {
        let inner = self.inner.read().await;
        SessionSnapshot {
            phase: inner.phase,
            client_code: inner.client_code.clone(),
        }
    }

    /// The bearer token for authorized calls: the access token when one was
    /// exchanged, otherwise the JWT from a password login.
    pub(crate) async fn bearer_token(&self) -> Option<String> {
        let inner = self.inner.read().await;
        inner
            .access_token
            .as_ref()
            .or(inner.jwt_token.as_ref())
            .map(|token| token.expose_secret().to_string())
    }

    /// Record a successful password login.
    pub(crate) async fn complete_login(
        &self,
        client_code: ClientCode,
        jwt_token: Option<String>,
        access_token: Option<String>,
    ) {
        let mut inner = self.inner.write().await;
        inner.client_code = Some(client_code);
        inner.jwt_token = jwt_token.map(SecretString::from);
        if let Some(token) = access_token {
            inner.access_token = Some(SecretString::from(token));
        }
        inner.phase = SessionPhase::Authenticated;
        tracing::info!("session authenticated via password login");
    }

    /// Record a successful TOTP request-token step.
    pub(crate) async fn complete_request_token(&self) {
        let mut inner = self.inner.write().await;
        inner.phase = SessionPhase::RequestTokenObtained;
        tracing::debug!("request token obtained");
    }

    /// Record a successful access-token exchange. The client code from the
    /// response is adopted unless one is already known.
    pub(crate) async fn complete_token_exchange(
        &self,
        access_token: String,
        client_code: Option<ClientCode>,
    ) {
        let mut inner = self.inner.write().await;
        inner.access_token = Some(SecretString::from(access_token));
        if inner.client_code.is_none() {
            inner.client_code = client_code;
        }
        inner.phase = if inner.client_code.is_some() {
            SessionPhase::Authenticated
        } else {
            SessionPhase::AccessTokenObtained
        };
        tracing::info!(phase = ?inner.phase, "access token recorded");
    }

    /// Adopt a caller-supplied access token without contacting the server.
    pub(crate) async fn adopt_token(&self, access_token: String) {
        let mut inner = self.inner.write().await;
        inner.access_token = Some(SecretString::from(access_token));
        inner.phase = SessionPhase::Authenticated;
        tracing::info!("session authenticated via injected access token");
    }

    /// Record a rejected login. Terminal.
    pub(crate) async fn fail(&self) {
        let mut inner = self.inner.write().await;
        inner.phase = SessionPhase::Failed;
        tracing::warn!("session marked failed");
    }

    /// Expose the bearer token to the caller, e.g. for handing a session to
    /// another process.
    pub async fn access_token(&self) -> Option<String> {
        self.inner
            .read()
            .await
            .access_token
            .as_ref()
            .map(|token| token.expose_secret().to_string())
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Tokens must never reach logs; phase and client code are safe.
        match self.inner.try_read() {
            Ok(inner) => f
                .debug_struct("Session")
                .field("phase", &inner.phase)
                .field("client_code", &inner.client_code)
                .field("access_token", &"[REDACTED]")
                .field("jwt_token", &"[REDACTED]")
                .finish(),
            Err(_) => f.debug_struct("Session").finish_non_exhaustive(),
        }
    }
}
