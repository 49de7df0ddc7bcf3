//! Authentication flows.
//!
//! `AuthService` drives the session state machine. It is the only code
//! that mutates a [`Session`](crate::Session), and it only does so after a
//! response has been classified, so a cancelled request leaves the session
//! where it was.

use serde::Deserialize;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::envelope::endpoints;
use crate::models::ClientCode;
use crate::{Error, Result};

/// Service for the three authentication flows and direct token injection.
///
/// # Example
///
/// ```no_run
/// # async fn example(client: fivepaisa_rs::FivePaisaClient) -> fivepaisa_rs::Result<()> {
/// // Password login:
/// client.auth().login("user@example.com", "password", "19900101").await?;
///
/// // Or the TOTP flow, in one step:
/// let access_token = client.auth().totp_session("51234567", "123456", "7777").await?;
/// # Ok(())
/// # }
/// ```
pub struct AuthService {
    inner: Arc<ClientInner>,
}

#[derive(Debug, Deserialize)]
struct LoginResponseBody {
    #[serde(rename = "Message", default)]
    message: String,
    #[serde(rename = "ClientCode", default)]
    client_code: String,
    #[serde(rename = "JWTToken", default)]
    jwt_token: Option<String>,
    #[serde(rename = "AccessToken", default)]
    access_token: Option<String>,
}

impl AuthService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Log in with the user's email, password, and date of birth
    /// (`YYYYMMDD`). All three travel encrypted with the credential cipher.
    ///
    /// On success the session becomes authenticated and records the client
    /// code and session token from the response. On rejection the session
    /// is marked failed and the server's message is surfaced as
    /// [`Error::Auth`].
    pub async fn login(&self, email: &str, password: &str, dob: &str) -> Result<()> {
        let envelope = self
            .inner
            .builder
            .login(&endpoints::LOGIN, email, password, dob)?;
        let body: LoginResponseBody = self.inner.send(&endpoints::LOGIN, &envelope).await?;

        if !body.message.is_empty() {
            self.inner.session.fail().await;
            return Err(Error::Auth(body.message));
        }
        if body.client_code.is_empty() || body.client_code == "INVALID CODE" {
            self.inner.session.fail().await;
            return Err(Error::Auth("invalid client code in login response".into()));
        }

        self.inner
            .session
            .complete_login(
                ClientCode::new(body.client_code),
                body.jwt_token,
                body.access_token,
            )
            .await;
        Ok(())
    }

    /// Obtain a request token from the client code, a TOTP from the
    /// authenticator app, and the account PIN.
    pub async fn request_token(&self, client_code: &str, totp: &str, pin: &str) -> Result<String> {
        let envelope = self
            .inner
            .builder
            .totp_login(&endpoints::TOTP_LOGIN, client_code, totp, pin);
        let grant = self
            .inner
            .send_token(&endpoints::TOTP_LOGIN, &envelope, "RequestToken")
            .await?;
        self.inner.session.complete_request_token().await;
        Ok(grant.token)
    }

    /// Exchange a request token for an access token. The client code from
    /// the response is adopted if none is known yet.
    pub async fn access_token(&self, request_token: &str) -> Result<String> {
        let envelope = self
            .inner
            .builder
            .access_token(&endpoints::ACCESS_TOKEN, request_token);
        let grant = self
            .inner
            .send_token(&endpoints::ACCESS_TOKEN, &envelope, "AccessToken")
            .await?;
        self.inner
            .session
            .complete_token_exchange(grant.token.clone(), grant.client_code.map(ClientCode::new))
            .await;
        Ok(grant.token)
    }

    /// Run the full TOTP flow: request token, then access token. The first
    /// failing step aborts with that step's error.
    pub async fn totp_session(&self, client_code: &str, totp: &str, pin: &str) -> Result<String> {
        let request_token = self.request_token(client_code, totp, pin).await?;
        self.access_token(&request_token).await
    }

    /// Exchange an OAuth request token for an access token. Functionally
    /// identical to [`access_token`](Self::access_token); the OAuth flow
    /// only differs in how the request token was obtained.
    pub async fn oauth_session(&self, request_token: &str) -> Result<String> {
        self.access_token(request_token).await
    }

    /// Adopt an access token obtained elsewhere, without contacting the
    /// server. The token is trusted as-is.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidToken`] for an empty token.
    pub async fn set_access_token(&self, access_token: &str) -> Result<()> {
        if access_token.trim().is_empty() {
            return Err(Error::InvalidToken);
        }
        self.inner.session.adopt_token(access_token.to_string()).await;
        Ok(())
    }
}
