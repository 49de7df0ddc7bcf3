//! Orders service: placement, modification, cancellation, bracket/cover
//! orders, and order/trade queries.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::envelope::endpoints;
use crate::models::{BocoTicket, OrderFor, OrderModification, OrderRef, OrderResponse, OrderTicket};
use crate::{Error, Result};

/// Service for order operations.
///
/// Placement, modification, and cancellation return the raw
/// [`OrderResponse`] for inspection: the HTTP call completing does not mean
/// the order was accepted — the RMS response code and status carry
/// partial-failure information only the caller can interpret.
///
/// # Example
///
/// ```no_run
/// use fivepaisa_rs::models::{OrderTicket, OrderSide};
/// use rust_decimal_macros::dec;
///
/// # async fn example(client: fivepaisa_rs::FivePaisaClient) -> fivepaisa_rs::Result<()> {
/// let ticket = OrderTicket::builder()
///     .side(OrderSide::Buy)
///     .scrip_code(1660)
///     .qty(10)
///     .price(dec!(262.80))
///     .build()?;
///
/// let response = client.orders().place(&ticket).await?;
/// println!("broker order {} rms={}", response.broker_order_id, response.rms_response_code);
/// # Ok(())
/// # }
/// ```
pub struct OrdersService {
    inner: Arc<ClientInner>,
}

impl OrdersService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the order book.
    pub async fn book(&self) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .generic(&endpoints::ORDER_BOOK, &snapshot)?;
        self.inner
            .send_rows(&endpoints::ORDER_BOOK, &envelope, "OrderBookDetail")
            .await
    }

    /// Fetch the trade book.
    pub async fn trade_book(&self) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .generic(&endpoints::TRADE_BOOK, &snapshot)?;
        self.inner
            .send_rows(&endpoints::TRADE_BOOK, &envelope, "TradeBookDetail")
            .await
    }

    /// Place a fresh order.
    pub async fn place(&self, ticket: &OrderTicket) -> Result<OrderResponse> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .place_order(&endpoints::ORDER_REQUEST, &snapshot, ticket)?;
        self.inner.send(&endpoints::ORDER_REQUEST, &envelope).await
    }

    /// Modify a pending order.
    pub async fn modify(&self, modification: &OrderModification) -> Result<OrderResponse> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .modify_order(&endpoints::ORDER_REQUEST, &snapshot, modification)?;
        self.inner.send(&endpoints::ORDER_REQUEST, &envelope).await
    }

    /// Cancel a pending order. `traded_qty` must match the quantity already
    /// traded or the exchange rejects the cancellation.
    pub async fn cancel(&self, exchange_order_id: &str, traded_qty: u32) -> Result<OrderResponse> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self.inner.builder.cancel_order(
            &endpoints::ORDER_REQUEST,
            &snapshot,
            exchange_order_id,
            traded_qty,
        )?;
        self.inner.send(&endpoints::ORDER_REQUEST, &envelope).await
    }

    /// Place a bracket/cover order.
    pub async fn boco(&self, ticket: &BocoTicket) -> Result<OrderResponse> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .boco_order(&endpoints::BOCO_ORDER, &snapshot, ticket)?;
        self.inner.send(&endpoints::BOCO_ORDER, &envelope).await
    }

    /// Modify a pending bracket/cover order. The ticket must carry the
    /// exchange order ID of the pending order.
    pub async fn modify_boco(&self, ticket: &BocoTicket) -> Result<OrderResponse> {
        if ticket.exchange_order_id.is_none() {
            return Err(Error::precondition(
                "modifying a bracket order requires the exchange order ID",
            ));
        }
        let mut ticket = ticket.clone();
        ticket.request_type = OrderFor::Modify;

        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .boco_order(&endpoints::BOCO_ORDER, &snapshot, &ticket)?;
        self.inner.send(&endpoints::BOCO_ORDER, &envelope).await
    }

    /// Query the status of previously placed orders.
    pub async fn status(&self, orders: Vec<OrderRef>) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .order_status(&endpoints::ORDER_STATUS, &snapshot, orders)?;
        self.inner
            .send_rows(&endpoints::ORDER_STATUS, &envelope, "OrdStatusResLst")
            .await
    }

    /// Fetch trade information for a set of orders.
    pub async fn trade_info(&self, trades: Vec<OrderRef>) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .trade_info(&endpoints::TRADE_INFO, &snapshot, trades)?;
        self.inner
            .send_rows(&endpoints::TRADE_INFO, &envelope, "TradeDetail")
            .await
    }
}
