//! Application credentials for the 5paisa API.

use secrecy::{ExposeSecret, SecretString};

use crate::models::ClientCode;

/// The vendor app keys issued by 5paisa, supplied once at client
/// construction and never mutated.
///
/// The `password` here is the *app* password from the developer console,
/// not a user's login password; the user's credentials go through
/// [`AuthService::login`](crate::api::AuthService::login) instead. The
/// encryption key is the shared secret the credential cipher derives its
/// AES key from.
///
/// # Example
///
/// ```
/// use fivepaisa_rs::Credentials;
///
/// let credentials = Credentials::new(
///     "5P50xxxxxxx",
///     "5300",
///     "AppUserId",
///     "AppPassword",
///     "UserKey",
///     "EncryptionKey",
/// );
/// ```
pub struct Credentials {
    app_name: String,
    app_source: String,
    user_id: String,
    password: SecretString,
    user_key: String,
    encryption_key: SecretString,
    client_code: Option<ClientCode>,
}

impl Credentials {
    /// Create a credential set from the developer-console app keys.
    pub fn new(
        app_name: impl Into<String>,
        app_source: impl Into<String>,
        user_id: impl Into<String>,
        password: impl Into<String>,
        user_key: impl Into<String>,
        encryption_key: impl Into<String>,
    ) -> Self {
        Self {
            app_name: app_name.into(),
            app_source: app_source.into(),
            user_id: user_id.into(),
            password: SecretString::from(password.into()),
            user_key: user_key.into(),
            encryption_key: SecretString::from(encryption_key.into()),
            client_code: None,
        }
    }

    /// Attach a pre-known client code, skipping the need to learn it from a
    /// login response.
    pub fn with_client_code(mut self, client_code: impl Into<ClientCode>) -> Self {
        self.client_code = Some(client_code.into());
        self
    }

    pub(crate) fn app_name(&self) -> &str {
        &self.app_name
    }

    pub(crate) fn app_source(&self) -> &str {
        &self.app_source
    }

    pub(crate) fn user_id(&self) -> &str {
        &self.user_id
    }

    pub(crate) fn password(&self) -> &str {
        self.password.expose_secret()
    }

    pub(crate) fn user_key(&self) -> &str {
        &self.user_key
    }

    pub(crate) fn encryption_key(&self) -> &str {
        self.encryption_key.expose_secret()
    }

    pub(crate) fn client_code(&self) -> Option<&ClientCode> {
        self.client_code.as_ref()
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("app_name", &self.app_name)
            .field("app_source", &self.app_source)
            .field("user_id", &self.user_id)
            .field("password", &"[REDACTED]")
            .field("user_key", &self.user_key)
            .field("encryption_key", &"[REDACTED]")
            .field("client_code", &self.client_code)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_redacts_secrets() {
        let credentials = Credentials::new("app", "src", "uid", "app-pass", "ukey", "enc-key");
        let debug_str = format!("{:?}", credentials);
        assert!(!debug_str.contains("app-pass"));
        assert!(!debug_str.contains("enc-key"));
        assert!(debug_str.contains("REDACTED"));
    }

    #[test]
    fn test_client_code_attachment() {
        let credentials =
            Credentials::new("app", "src", "uid", "pw", "ukey", "ekey").with_client_code("51234567");
        assert_eq!(credentials.client_code().unwrap().as_str(), "51234567");
    }
}
