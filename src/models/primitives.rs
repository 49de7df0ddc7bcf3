//! Primitive types and newtypes for type-safe API interactions.
//!
//! This module provides strongly-typed wrappers around the identifiers the
//! API passes around as bare strings and numbers, so they cannot be mixed
//! up at compile time.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A strongly-typed 5paisa client code.
///
/// # Example
///
/// ```
/// use fivepaisa_rs::ClientCode;
///
/// let client_code = ClientCode::new("51234567");
/// println!("Client: {}", client_code);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClientCode(String);

impl ClientCode {
    /// Create a new client code from a string.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the client code as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClientCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ClientCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ClientCode {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ClientCode {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A numeric scrip (instrument) code.
///
/// Scrip codes identify instruments on an exchange, e.g. `1660` for ITC on
/// the NSE cash segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ScripCode(u32);

impl ScripCode {
    /// Create a new scrip code.
    pub fn new(code: u32) -> Self {
        Self(code)
    }

    /// Get the raw numeric code.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for ScripCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for ScripCode {
    fn from(code: u32) -> Self {
        Self(code)
    }
}

/// An order identifier assigned by the exchange.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExchangeOrderId(String);

impl ExchangeOrderId {
    /// Create a new exchange order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ExchangeOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for ExchangeOrderId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<String> for ExchangeOrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl From<&str> for ExchangeOrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

/// A remote order identifier assigned by the caller at placement time,
/// used to query status and trade information.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RemoteOrderId(String);

impl RemoteOrderId {
    /// Create a new remote order ID.
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Get the order ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for RemoteOrderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RemoteOrderId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for RemoteOrderId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_code() {
        let code = ClientCode::new("51234567");
        assert_eq!(code.as_str(), "51234567");
        assert_eq!(code.to_string(), "51234567");
    }

    #[test]
    fn test_scrip_code() {
        let scrip: ScripCode = 1660.into();
        assert_eq!(scrip.value(), 1660);
        assert_eq!(scrip.to_string(), "1660");
    }

    #[test]
    fn test_scrip_code_serializes_as_number() {
        let json = serde_json::to_string(&ScripCode::new(2885)).unwrap();
        assert_eq!(json, "2885");
    }

    #[test]
    fn test_exchange_order_id() {
        let id = ExchangeOrderId::new("1100000017367518");
        assert_eq!(id.as_str(), "1100000017367518");
    }
}
