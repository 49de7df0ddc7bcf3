//! Authentication for the 5paisa API.
//!
//! Three flows produce an authorized session:
//!
//! 1. **Password login** — the user's email, password, and date of birth,
//!    encrypted with the [`cipher`], exchanged for a JWT.
//! 2. **TOTP flow** — client code + TOTP + PIN yields a request token,
//!    which is then exchanged for an access token.
//! 3. **OAuth flow** — a request token obtained out-of-band is exchanged
//!    for an access token.
//!
//! A caller who already holds a valid access token can also inject it
//! directly. The flows themselves live on
//! [`AuthService`](crate::api::AuthService); this module holds the session
//! state they drive and the credential cipher they use.

pub mod cipher;
mod credentials;
mod session;

pub use credentials::Credentials;
pub use session::{Session, SessionPhase};

pub(crate) use session::SessionSnapshot;
