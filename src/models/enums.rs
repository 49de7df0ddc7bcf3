//! Enumeration types mapping to the API's wire codes.
//!
//! The API encodes most enumerations as single letters (`"N"` for NSE,
//! `"C"` for the cash segment) or small integers (order validity). These
//! types keep the codes out of call sites while serializing to the exact
//! wire values.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Exchange on which an instrument trades.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Exchange {
    /// National Stock Exchange
    #[default]
    #[serde(rename = "N")]
    Nse,
    /// Bombay Stock Exchange
    #[serde(rename = "B")]
    Bse,
    /// Multi Commodity Exchange
    #[serde(rename = "M")]
    Mcx,
}

impl Exchange {
    /// The single-letter wire code for this exchange.
    pub fn code(&self) -> &'static str {
        match self {
            Exchange::Nse => "N",
            Exchange::Bse => "B",
            Exchange::Mcx => "M",
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Exchange segment an order is routed to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ExchangeSegment {
    /// Cash (equity) segment
    #[default]
    #[serde(rename = "C")]
    Cash,
    /// Derivatives segment
    #[serde(rename = "D")]
    Derivative,
    /// Currency segment
    #[serde(rename = "U")]
    Currency,
}

impl ExchangeSegment {
    /// The single-letter wire code for this segment.
    pub fn code(&self) -> &'static str {
        match self {
            ExchangeSegment::Cash => "C",
            ExchangeSegment::Derivative => "D",
            ExchangeSegment::Currency => "U",
        }
    }
}

impl fmt::Display for ExchangeSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Side of a regular order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderSide {
    /// Buy order
    #[serde(rename = "BUY")]
    Buy,
    /// Sell order
    #[serde(rename = "SELL")]
    Sell,
}

impl fmt::Display for OrderSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSide::Buy => f.write_str("BUY"),
            OrderSide::Sell => f.write_str("SELL"),
        }
    }
}

/// Side of a bracket/cover order. The bracket endpoint uses single-letter
/// codes rather than the full words regular orders use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuySell {
    /// Buy
    #[serde(rename = "B")]
    Buy,
    /// Sell
    #[serde(rename = "S")]
    Sell,
}

/// What an order-family request does with the order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OrderFor {
    /// Place a fresh order
    #[serde(rename = "P")]
    Place,
    /// Modify a pending order
    #[serde(rename = "M")]
    Modify,
    /// Cancel a pending order
    #[serde(rename = "C")]
    Cancel,
    /// Subsequent leg of a bracket/cover order
    #[serde(rename = "S")]
    Subsequent,
}

/// How long an order remains valid. Serialized as the API's numeric codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OrderValidity {
    /// Valid for the trading day
    #[default]
    Day,
    /// Good till date
    GoodTillDate,
    /// Good till cancelled
    GoodTillCancelled,
    /// Immediate or cancel
    Ioc,
    /// Valid until end of session
    EndOfSession,
    /// Valid till date
    ValidTillDate,
    /// Fill or kill
    FillOrKill,
}

impl OrderValidity {
    /// The numeric wire code for this validity.
    pub fn code(&self) -> u8 {
        match self {
            OrderValidity::Day => 0,
            OrderValidity::GoodTillDate => 1,
            OrderValidity::GoodTillCancelled => 2,
            OrderValidity::Ioc => 3,
            OrderValidity::EndOfSession => 4,
            OrderValidity::ValidTillDate => 5,
            OrderValidity::FillOrKill => 6,
        }
    }
}

impl Serialize for OrderValidity {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.code())
    }
}

/// Whether an order was placed after market hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum AfterHours {
    /// Placed during normal market hours
    #[default]
    #[serde(rename = "N")]
    No,
    /// Placed after market close, to be submitted at next open
    #[serde(rename = "Y")]
    Yes,
}

impl AfterHours {
    /// Returns `true` for after-hours placement.
    pub fn is_after_hours(&self) -> bool {
        matches!(self, AfterHours::Yes)
    }
}
