//! Order models: tickets the caller fills in, and the response shape the
//! order endpoints return.
//!
//! A [`OrderTicket`] describes one regular order; [`BocoTicket`] describes a
//! bracket/cover compound order (entry + stop-loss + target in a single
//! request). Both are plain value objects — the envelope builder merges them
//! onto the order request family at dispatch time.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::enums::{AfterHours, BuySell, Exchange, ExchangeSegment, OrderFor, OrderSide, OrderValidity};
use super::primitives::{ExchangeOrderId, RemoteOrderId, ScripCode};
use crate::{Error, Result};

/// A regular order, validated and ready to dispatch.
///
/// Use [`OrderTicket::builder`] to construct one. Optional fields carry the
/// API's documented defaults: NSE cash segment, market order, delivery
/// (non-intraday), day validity, normal market hours.
///
/// # Example
///
/// ```
/// use fivepaisa_rs::models::{OrderTicket, OrderSide};
/// use rust_decimal_macros::dec;
///
/// let ticket = OrderTicket::builder()
///     .side(OrderSide::Buy)
///     .scrip_code(1660)
///     .qty(10)
///     .price(dec!(262.80))
///     .build()
///     .unwrap();
/// assert!(!ticket.at_market);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct OrderTicket {
    /// Buy or sell
    pub side: OrderSide,
    /// Instrument to trade
    pub scrip_code: ScripCode,
    /// Quantity to trade
    pub qty: u32,
    /// Exchange to route to
    pub exchange: Exchange,
    /// Exchange segment
    pub segment: ExchangeSegment,
    /// Limit price; zero means "at market"
    pub price: Decimal,
    /// Whether to execute at market price
    pub at_market: bool,
    /// Whether this is a stop-loss order
    pub is_stop_loss: bool,
    /// Trigger price for stop-loss orders
    pub stop_loss_price: Decimal,
    /// Valid-till-date order
    pub is_vtd: bool,
    /// Immediate-or-cancel order
    pub ioc: bool,
    /// Intraday (true) or delivery (false)
    pub is_intraday: bool,
    /// After-market placement flag
    pub after_hours: AfterHours,
    /// Quantity disclosed to the exchange; defaults to the full quantity
    pub disclosed_qty: Option<u32>,
    /// Order validity
    pub validity: OrderValidity,
    /// Caller-assigned identifier for later status lookups
    pub remote_order_id: Option<RemoteOrderId>,
}

impl OrderTicket {
    /// Start building an order ticket.
    pub fn builder() -> OrderTicketBuilder {
        OrderTicketBuilder::default()
    }
}

/// Builder for [`OrderTicket`] with validation.
#[derive(Debug, Default, Clone)]
pub struct OrderTicketBuilder {
    side: Option<OrderSide>,
    scrip_code: Option<ScripCode>,
    qty: Option<u32>,
    exchange: Exchange,
    segment: ExchangeSegment,
    price: Option<Decimal>,
    at_market: Option<bool>,
    stop_loss_price: Option<Decimal>,
    is_vtd: bool,
    ioc: bool,
    is_intraday: bool,
    after_hours: AfterHours,
    disclosed_qty: Option<u32>,
    validity: OrderValidity,
    remote_order_id: Option<RemoteOrderId>,
}

impl OrderTicketBuilder {
    /// Set the order side.
    pub fn side(mut self, side: OrderSide) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the scrip code.
    pub fn scrip_code(mut self, scrip_code: impl Into<ScripCode>) -> Self {
        self.scrip_code = Some(scrip_code.into());
        self
    }

    /// Set the quantity.
    pub fn qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the exchange (defaults to NSE).
    pub fn exchange(mut self, exchange: Exchange) -> Self {
        self.exchange = exchange;
        self
    }

    /// Set the exchange segment (defaults to cash).
    pub fn segment(mut self, segment: ExchangeSegment) -> Self {
        self.segment = segment;
        self
    }

    /// Set a limit price. Also turns off `at_market` unless the caller
    /// overrides it explicitly.
    pub fn price(mut self, price: Decimal) -> Self {
        self.price = Some(price);
        self
    }

    /// Force market/limit execution.
    pub fn at_market(mut self, at_market: bool) -> Self {
        self.at_market = Some(at_market);
        self
    }

    /// Make this a stop-loss order with the given trigger price.
    pub fn stop_loss(mut self, trigger: Decimal) -> Self {
        self.stop_loss_price = Some(trigger);
        self
    }

    /// Mark as valid-till-date.
    pub fn vtd(mut self, is_vtd: bool) -> Self {
        self.is_vtd = is_vtd;
        self
    }

    /// Mark as immediate-or-cancel.
    pub fn ioc(mut self, ioc: bool) -> Self {
        self.ioc = ioc;
        self
    }

    /// Mark as intraday (default is delivery).
    pub fn intraday(mut self, is_intraday: bool) -> Self {
        self.is_intraday = is_intraday;
        self
    }

    /// Flag the order as placed after market hours.
    pub fn after_hours(mut self, after_hours: AfterHours) -> Self {
        self.after_hours = after_hours;
        self
    }

    /// Set the disclosed quantity (defaults to the full quantity).
    pub fn disclosed_qty(mut self, qty: u32) -> Self {
        self.disclosed_qty = Some(qty);
        self
    }

    /// Set the order validity (defaults to day).
    pub fn validity(mut self, validity: OrderValidity) -> Self {
        self.validity = validity;
        self
    }

    /// Attach a caller-assigned remote order ID.
    pub fn remote_order_id(mut self, id: impl Into<RemoteOrderId>) -> Self {
        self.remote_order_id = Some(id.into());
        self
    }

    /// Build the ticket, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the side, scrip code, or a
    /// non-zero quantity is missing.
    pub fn build(self) -> Result<OrderTicket> {
        let side = self
            .side
            .ok_or_else(|| Error::precondition("order side is required (BUY or SELL)"))?;
        let scrip_code = self
            .scrip_code
            .ok_or_else(|| Error::precondition("scrip code is required"))?;
        let qty = self
            .qty
            .filter(|q| *q > 0)
            .ok_or_else(|| Error::precondition("a non-zero quantity is required"))?;

        let price = self.price.unwrap_or(Decimal::ZERO);
        // A limit price implies a limit order; an explicit at_market wins.
        let at_market = self.at_market.unwrap_or_else(|| price.is_zero());
        let stop_loss_price = self.stop_loss_price.unwrap_or(Decimal::ZERO);

        Ok(OrderTicket {
            side,
            scrip_code,
            qty,
            exchange: self.exchange,
            segment: self.segment,
            price,
            at_market,
            is_stop_loss: !stop_loss_price.is_zero(),
            stop_loss_price,
            is_vtd: self.is_vtd,
            ioc: self.ioc,
            is_intraday: self.is_intraday,
            after_hours: self.after_hours,
            disclosed_qty: self.disclosed_qty,
            validity: self.validity,
            remote_order_id: self.remote_order_id,
        })
    }
}

/// Modification of a pending order.
///
/// Only the fields that are `Some` are changed; the rest keep their values
/// from the original placement.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderModification {
    /// Exchange order ID of the pending order
    pub exchange_order_id: ExchangeOrderId,
    /// New quantity
    pub qty: Option<u32>,
    /// New limit price
    pub price: Option<Decimal>,
    /// Quantity already traded; incorrect values lead to rejection
    pub traded_qty: u32,
    /// New scrip code (must match the original order)
    pub scrip_code: Option<ScripCode>,
    /// Intraday/delivery switch
    pub is_intraday: Option<bool>,
    /// Exchange the order rests on
    pub exchange: Exchange,
    /// Exchange segment
    pub segment: ExchangeSegment,
}

impl OrderModification {
    /// Create a modification for the given exchange order ID.
    pub fn for_order(exchange_order_id: impl Into<ExchangeOrderId>) -> Self {
        Self {
            exchange_order_id: exchange_order_id.into(),
            qty: None,
            price: None,
            traded_qty: 0,
            scrip_code: None,
            is_intraday: None,
            exchange: Exchange::default(),
            segment: ExchangeSegment::default(),
        }
    }
}

/// A bracket/cover compound order: an entry leg plus a stop-loss leg and a
/// profit-target leg submitted in one request.
#[derive(Debug, Clone, PartialEq)]
pub struct BocoTicket {
    /// Buy or sell (single-letter codes on this endpoint)
    pub side: BuySell,
    /// Instrument to trade
    pub scrip_code: ScripCode,
    /// Quantity to trade
    pub qty: u32,
    /// Limit price of the entry leg
    pub limit_price_initial: Decimal,
    /// Trigger price of the entry leg
    pub trigger_price_initial: Decimal,
    /// Limit price of the profit-target leg
    pub limit_price_profit: Decimal,
    /// Trigger price of the stop-loss leg
    pub trigger_price_sl: Decimal,
    /// Exchange to route to
    pub exchange: Exchange,
    /// Exchange segment
    pub segment: ExchangeSegment,
    /// Place, modify, or cancel
    pub request_type: OrderFor,
    /// Whether the entry leg executes at market
    pub at_market: bool,
    /// Trailing stop-loss increment; zero disables trailing
    pub trailing_sl: Decimal,
    /// Absolute stop-loss; zero disables
    pub stop_loss: Decimal,
    /// Quantity disclosed to the exchange
    pub disclosed_qty: Option<u32>,
    /// Exchange order ID, required when modifying
    pub exchange_order_id: Option<ExchangeOrderId>,
    /// Quantity already traded, required when modifying
    pub traded_qty: u32,
}

impl BocoTicket {
    /// Start building a bracket/cover order ticket.
    pub fn builder() -> BocoTicketBuilder {
        BocoTicketBuilder::default()
    }
}

/// Builder for [`BocoTicket`] with validation.
#[derive(Debug, Default, Clone)]
pub struct BocoTicketBuilder {
    side: Option<BuySell>,
    scrip_code: Option<ScripCode>,
    qty: Option<u32>,
    limit_price_initial: Option<Decimal>,
    trigger_price_initial: Option<Decimal>,
    limit_price_profit: Option<Decimal>,
    trigger_price_sl: Option<Decimal>,
    exchange: Exchange,
    segment: ExchangeSegment,
    request_type: Option<OrderFor>,
    at_market: bool,
    trailing_sl: Option<Decimal>,
    stop_loss: Option<Decimal>,
    disclosed_qty: Option<u32>,
    exchange_order_id: Option<ExchangeOrderId>,
    traded_qty: u32,
}

impl BocoTicketBuilder {
    /// Set the order side.
    pub fn side(mut self, side: BuySell) -> Self {
        self.side = Some(side);
        self
    }

    /// Set the scrip code.
    pub fn scrip_code(mut self, scrip_code: impl Into<ScripCode>) -> Self {
        self.scrip_code = Some(scrip_code.into());
        self
    }

    /// Set the quantity.
    pub fn qty(mut self, qty: u32) -> Self {
        self.qty = Some(qty);
        self
    }

    /// Set the entry-leg limit price.
    pub fn limit_price_initial(mut self, price: Decimal) -> Self {
        self.limit_price_initial = Some(price);
        self
    }

    /// Set the entry-leg trigger price.
    pub fn trigger_price_initial(mut self, price: Decimal) -> Self {
        self.trigger_price_initial = Some(price);
        self
    }

    /// Set the profit-target limit price.
    pub fn limit_price_profit(mut self, price: Decimal) -> Self {
        self.limit_price_profit = Some(price);
        self
    }

    /// Set the stop-loss trigger price.
    pub fn trigger_price_sl(mut self, price: Decimal) -> Self {
        self.trigger_price_sl = Some(price);
        self
    }

    /// Set the exchange (defaults to NSE).
    pub fn exchange(mut self, exchange: Exchange) -> Self {
        self.exchange = exchange;
        self
    }

    /// Set the exchange segment (defaults to cash).
    pub fn segment(mut self, segment: ExchangeSegment) -> Self {
        self.segment = segment;
        self
    }

    /// Place, modify, or cancel (defaults to place).
    pub fn request_type(mut self, request_type: OrderFor) -> Self {
        self.request_type = Some(request_type);
        self
    }

    /// Execute the entry leg at market.
    pub fn at_market(mut self, at_market: bool) -> Self {
        self.at_market = at_market;
        self
    }

    /// Enable a trailing stop-loss.
    pub fn trailing_sl(mut self, increment: Decimal) -> Self {
        self.trailing_sl = Some(increment);
        self
    }

    /// Set an absolute stop-loss.
    pub fn stop_loss(mut self, stop_loss: Decimal) -> Self {
        self.stop_loss = Some(stop_loss);
        self
    }

    /// Set the disclosed quantity.
    pub fn disclosed_qty(mut self, qty: u32) -> Self {
        self.disclosed_qty = Some(qty);
        self
    }

    /// Set the exchange order ID (required for modification).
    pub fn exchange_order_id(mut self, id: impl Into<ExchangeOrderId>) -> Self {
        self.exchange_order_id = Some(id.into());
        self
    }

    /// Set the already-traded quantity (required for modification).
    pub fn traded_qty(mut self, qty: u32) -> Self {
        self.traded_qty = qty;
        self
    }

    /// Build the ticket, validating required fields.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Precondition`] if the side, scrip code, quantity, or
    /// any of the three leg prices are missing, or if a modification lacks
    /// an exchange order ID.
    pub fn build(self) -> Result<BocoTicket> {
        let side = self
            .side
            .ok_or_else(|| Error::precondition("bracket order side is required (B or S)"))?;
        let scrip_code = self
            .scrip_code
            .ok_or_else(|| Error::precondition("scrip code is required"))?;
        let qty = self
            .qty
            .filter(|q| *q > 0)
            .ok_or_else(|| Error::precondition("a non-zero quantity is required"))?;
        let limit_price_initial = self
            .limit_price_initial
            .ok_or_else(|| Error::precondition("entry-leg limit price is required"))?;
        let trigger_price_initial = self
            .trigger_price_initial
            .ok_or_else(|| Error::precondition("entry-leg trigger price is required"))?;
        let limit_price_profit = self
            .limit_price_profit
            .ok_or_else(|| Error::precondition("profit-target limit price is required"))?;
        let trigger_price_sl = self
            .trigger_price_sl
            .ok_or_else(|| Error::precondition("stop-loss trigger price is required"))?;

        let request_type = self.request_type.unwrap_or(OrderFor::Place);
        if matches!(request_type, OrderFor::Modify) && self.exchange_order_id.is_none() {
            return Err(Error::precondition(
                "modifying a bracket order requires the exchange order ID",
            ));
        }

        Ok(BocoTicket {
            side,
            scrip_code,
            qty,
            limit_price_initial,
            trigger_price_initial,
            limit_price_profit,
            trigger_price_sl,
            exchange: self.exchange,
            segment: self.segment,
            request_type,
            at_market: self.at_market,
            trailing_sl: self.trailing_sl.unwrap_or(Decimal::ZERO),
            stop_loss: self.stop_loss.unwrap_or(Decimal::ZERO),
            disclosed_qty: self.disclosed_qty,
            exchange_order_id: self.exchange_order_id,
            traded_qty: self.traded_qty,
        })
    }
}

/// Reference to a previously placed order, used by the order-status and
/// trade-information endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRef {
    /// Exchange the order was routed to
    #[serde(rename = "Exch")]
    pub exchange: Exchange,
    /// Exchange segment
    #[serde(rename = "ExchType")]
    pub segment: ExchangeSegment,
    /// Instrument
    #[serde(rename = "ScripCode")]
    pub scrip_code: ScripCode,
    /// Caller-assigned remote order ID from placement
    #[serde(rename = "RemoteOrderID")]
    pub remote_order_id: RemoteOrderId,
}

/// Response body of the order placement/modify/cancel endpoints.
///
/// The HTTP call completing does not mean the order was accepted: the RMS
/// response code and status carry partial-failure information the caller
/// must interpret.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct OrderResponse {
    /// Broker-assigned order ID
    #[serde(rename = "BrokerOrderID", default)]
    pub broker_order_id: i64,
    /// Client the order belongs to
    #[serde(rename = "ClientCode", default)]
    pub client_code: String,
    /// Exchange code ("N" or "B")
    #[serde(rename = "Exch", default)]
    pub exchange: String,
    /// Exchange-assigned order ID
    #[serde(rename = "ExchOrderID", default)]
    pub exchange_order_id: String,
    /// Exchange segment code
    #[serde(rename = "ExchType", default)]
    pub segment: String,
    /// Local order ID
    #[serde(rename = "LocalOrderID", default)]
    pub local_order_id: i64,
    /// Human-readable status message
    #[serde(rename = "Message", default)]
    pub message: String,
    /// Risk-management-system response code
    #[serde(rename = "RMSResponseCode", default)]
    pub rms_response_code: i64,
    /// Instrument
    #[serde(rename = "ScripCode", default)]
    pub scrip_code: i64,
    /// Numeric order status
    #[serde(rename = "Status", default)]
    pub status: i64,
    /// Server timestamp, in the API's `/Date(...)/` form
    #[serde(rename = "Time", default)]
    pub time: String,
}
