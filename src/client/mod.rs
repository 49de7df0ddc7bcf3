//! HTTP client and service layer for the 5paisa API.
//!
//! This module provides the main entry point [`FivePaisaClient`].
//!
//! # Example
//!
//! ```no_run
//! use fivepaisa_rs::{Credentials, FivePaisaClient};
//!
//! # async fn example() -> fivepaisa_rs::Result<()> {
//! let credentials = Credentials::new(
//!     "5P50xxxxxxx", "5300", "AppUserId", "AppPassword", "UserKey", "EncryptionKey",
//! );
//! let client = FivePaisaClient::new(credentials)?;
//! client.auth().login("user@example.com", "password", "19900101").await?;
//! # Ok(())
//! # }
//! ```

mod config;
mod http;

pub use config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_HISTORICAL_BASE_URL};
pub use http::FivePaisaClient;

pub(crate) use http::ClientInner;
