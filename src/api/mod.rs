//! API service modules for 5paisa endpoints.
//!
//! Each service provides methods for one subset of the API. Services are
//! cheap to create; they share the client's dispatcher and session.

mod auth;
mod ideas;
mod market;
mod orders;
mod portfolio;

pub use auth::AuthService;
pub use ideas::IdeasService;
pub use market::MarketService;
pub use orders::OrdersService;
pub use portfolio::PortfolioService;
