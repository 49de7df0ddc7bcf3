//! HTTP client and request dispatcher for the 5paisa API.

use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;
use std::sync::Arc;

use crate::api::{AuthService, IdeasService, MarketService, OrdersService, PortfolioService};
use crate::auth::{Credentials, Session};
use crate::envelope::{Endpoint, Envelope, EnvelopeBuilder, ResponseEnvelope};
use crate::{Error, Result};

use super::config::ClientConfig;

/// The main client for interacting with the 5paisa API.
///
/// A client owns one logical session. Construct it with your app
/// credentials, authenticate through [`auth()`](Self::auth), then use the
/// business services.
///
/// # Example
///
/// ```no_run
/// use fivepaisa_rs::{Credentials, FivePaisaClient};
///
/// # async fn example() -> fivepaisa_rs::Result<()> {
/// let credentials = Credentials::new(
///     "5P50xxxxxxx", "5300", "AppUserId", "AppPassword", "UserKey", "EncryptionKey",
/// );
/// let client = FivePaisaClient::new(credentials)?;
///
/// client.auth().login("user@example.com", "password", "19900101").await?;
///
/// let holdings = client.portfolio().holdings().await?;
/// println!("{} holdings", holdings.len());
/// # Ok(())
/// # }
/// ```
pub struct FivePaisaClient {
    pub(crate) inner: Arc<ClientInner>,
}

pub(crate) struct ClientInner {
    pub(crate) http: reqwest::Client,
    pub(crate) config: ClientConfig,
    pub(crate) session: Session,
    pub(crate) builder: EnvelopeBuilder,
}

impl FivePaisaClient {
    /// Create a new client with the default configuration.
    pub fn new(credentials: Credentials) -> Result<Self> {
        Self::with_config(credentials, ClientConfig::default())
    }

    /// Create a new client with a custom configuration.
    pub fn with_config(credentials: Credentials, config: ClientConfig) -> Result<Self> {
        let http = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(&config.user_agent)
            .build()?;

        let credentials = Arc::new(credentials);
        let session = Session::new(credentials.client_code().cloned());

        Ok(Self {
            inner: Arc::new(ClientInner {
                http,
                config,
                session,
                builder: EnvelopeBuilder::new(credentials),
            }),
        })
    }

    /// Get the authentication service.
    pub fn auth(&self) -> AuthService {
        AuthService::new(self.inner.clone())
    }

    /// Get the portfolio service (holdings, positions, margin).
    pub fn portfolio(&self) -> PortfolioService {
        PortfolioService::new(self.inner.clone())
    }

    /// Get the orders service.
    pub fn orders(&self) -> OrdersService {
        OrdersService::new(self.inner.clone())
    }

    /// Get the market data service.
    pub fn market(&self) -> MarketService {
        MarketService::new(self.inner.clone())
    }

    /// Get the trader-ideas service.
    pub fn ideas(&self) -> IdeasService {
        IdeasService::new(self.inner.clone())
    }

    /// Get a handle to the session.
    pub fn session(&self) -> &Session {
        &self.inner.session
    }
}

impl ClientInner {
    /// Send an envelope and deserialize the response body. This is the
    /// transport primitive every classification strategy builds on: one
    /// POST, JSON in and out, bearer token attached when the endpoint
    /// requires it. Never retries.
    pub(crate) async fn send<B: Serialize, T: DeserializeOwned>(
        &self,
        endpoint: &Endpoint,
        envelope: &Envelope<B>,
    ) -> Result<T> {
        let url = format!("{}{}", self.config.base_url, endpoint.path);
        tracing::debug!(request_code = endpoint.request_code, "dispatching");

        let mut request = self.http.post(&url).json(envelope);
        if endpoint.requires_auth {
            if let Some(token) = self.session.bearer_token().await {
                request = request.bearer_auth(token);
            }
        }

        let response = request.send().await?.error_for_status()?;
        let wrapper: ResponseEnvelope<T> = response.json().await?;
        Ok(wrapper.body)
    }

    /// List classification: success iff the named array field is non-empty;
    /// an empty or missing array surfaces the body's `Message` as
    /// [`Error::NoData`].
    pub(crate) async fn send_rows<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        envelope: &Envelope<B>,
        field: &'static str,
    ) -> Result<Vec<Value>> {
        let body: Value = self.send(endpoint, envelope).await?;
        let rows = body.get(field).and_then(Value::as_array);
        match rows {
            Some(rows) if !rows.is_empty() => Ok(rows.clone()),
            _ => Err(Error::NoData(message_of(&body))),
        }
    }

    /// Token classification: success iff the named token field is a
    /// non-empty string. The server's client code rides along when present.
    pub(crate) async fn send_token<B: Serialize>(
        &self,
        endpoint: &Endpoint,
        envelope: &Envelope<B>,
        field: &'static str,
    ) -> Result<TokenGrant> {
        let body: Value = self.send(endpoint, envelope).await?;
        let token = body
            .get(field)
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty());
        match token {
            Some(token) => Ok(TokenGrant {
                token: token.to_string(),
                client_code: body
                    .get("ClientCode")
                    .and_then(Value::as_str)
                    .filter(|code| !code.is_empty())
                    .map(String::from),
            }),
            None => {
                let message = message_of(&body);
                Err(Error::Auth(if message.is_empty() {
                    format!("no {field} in response")
                } else {
                    message
                }))
            }
        }
    }

    /// Authorized GET against the historical-candle host. The payload is
    /// returned as raw JSON; candle parsing is out of scope.
    pub(crate) async fn get_historical(&self, path_and_query: &str) -> Result<Value> {
        let url = format!("{}{}", self.config.historical_base_url, path_and_query);
        tracing::debug!("fetching historical data");

        let mut request = self.http.get(&url);
        if let Some(token) = self.session.bearer_token().await {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?.error_for_status()?;
        Ok(response.json().await?)
    }
}

/// A token issued by one of the token endpoints.
pub(crate) struct TokenGrant {
    pub token: String,
    pub client_code: Option<String>,
}

fn message_of(body: &Value) -> String {
    body.get("Message")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string()
}

impl Clone for FivePaisaClient {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl std::fmt::Debug for FivePaisaClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FivePaisaClient")
            .field("config", &self.inner.config)
            .finish()
    }
}
