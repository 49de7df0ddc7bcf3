//! # fivepaisa-rs
//!
//! A Rust client for the 5paisa brokerage trading API.
//!
//! This crate covers session management and the trading surface of the
//! OpenAPI: authentication, portfolio queries, order placement and
//! management, market snapshots, and historical candles.
//!
//! ## Features
//!
//! - **Authentication**: password login, TOTP+PIN request-token flow, and
//!   OAuth request-token exchange, plus direct token injection
//! - **Credential cipher**: the PBKDF2 + AES-256-CBC scheme the login
//!   endpoint requires
//! - **Orders**: place, modify, and cancel regular and bracket/cover
//!   orders
//! - **Portfolio**: holdings, positions, and margin
//! - **Market data**: feed snapshots, depth, and historical candles
//! - **Type safety**: envelopes are built fresh per call from immutable
//!   templates, and business calls are rejected before any network traffic
//!   when the session is not authenticated
//! - **Async-first**: built on Tokio and reqwest
//!
//! ## Quick start
//!
//! ```rust,no_run
//! use fivepaisa_rs::{Credentials, FivePaisaClient};
//!
//! #[tokio::main]
//! async fn main() -> fivepaisa_rs::Result<()> {
//!     let credentials = Credentials::new(
//!         "5P50xxxxxxx",   // app name
//!         "5300",          // app source
//!         "AppUserId",
//!         "AppPassword",
//!         "UserKey",
//!         "EncryptionKey",
//!     );
//!     let client = FivePaisaClient::new(credentials)?;
//!
//!     // Authenticate with the user's credentials
//!     client.auth().login("user@example.com", "password", "19900101").await?;
//!
//!     // Fetch holdings
//!     let holdings = client.portfolio().holdings().await?;
//!     println!("Found {} holdings", holdings.len());
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Order placement
//!
//! ```rust,no_run
//! use fivepaisa_rs::{Credentials, FivePaisaClient};
//! use fivepaisa_rs::models::{OrderTicket, OrderSide, Exchange};
//! use rust_decimal_macros::dec;
//!
//! #[tokio::main]
//! async fn main() -> fivepaisa_rs::Result<()> {
//!     # let credentials = Credentials::new("a", "b", "c", "d", "e", "f");
//!     let client = FivePaisaClient::new(credentials)?;
//!     client.auth().totp_session("51234567", "123456", "7777").await?;
//!
//!     let ticket = OrderTicket::builder()
//!         .side(OrderSide::Buy)
//!         .scrip_code(1660)
//!         .qty(10)
//!         .price(dec!(262.80))
//!         .exchange(Exchange::Nse)
//!         .build()?;
//!
//!     let response = client.orders().place(&ticket).await?;
//!     println!("broker order id: {}", response.broker_order_id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Sessions
//!
//! One [`FivePaisaClient`] owns one logical session. The session moves
//! through an explicit state machine (see [`SessionPhase`]) and business
//! calls are refused with a precondition error until an authentication
//! flow completes. Run several sessions in one process by constructing
//! several clients — templates are shared read-only, session state never
//! is.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![deny(unsafe_code)]

pub mod api;
pub mod auth;
pub mod client;
mod envelope;
pub mod error;
pub mod models;

// Re-export primary types at crate root for convenience
pub use auth::{Credentials, Session, SessionPhase};
pub use client::{ClientConfig, FivePaisaClient};
pub use error::{Error, Result};
pub use models::{ClientCode, ExchangeOrderId, RemoteOrderId, ScripCode};

/// Prelude module for convenient imports.
///
/// ```rust
/// use fivepaisa_rs::prelude::*;
/// ```
pub mod prelude {
    pub use crate::api::{AuthService, IdeasService, MarketService, OrdersService, PortfolioService};
    pub use crate::auth::{Credentials, Session, SessionPhase};
    pub use crate::client::{ClientConfig, FivePaisaClient};
    pub use crate::error::{Error, Result};
    pub use crate::models::{
        AfterHours, BocoTicket, BuySell, ClientCode, Exchange, ExchangeOrderId, ExchangeSegment,
        OrderFor, OrderModification, OrderRef, OrderResponse, OrderSide, OrderTicket,
        OrderValidity, RemoteOrderId, ScripCode,
    };
}
