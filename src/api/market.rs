//! Market data service: feed snapshots, depth, and historical candles.
//!
//! Feed and depth payloads are tabular vendor data; the client passes the
//! request rows through and hands the response rows back without
//! interpreting them.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::envelope::endpoints;
use crate::Result;

/// Service for market data queries.
///
/// # Example
///
/// ```no_run
/// use serde_json::json;
///
/// # async fn example(client: fivepaisa_rs::FivePaisaClient) -> fivepaisa_rs::Result<()> {
/// let feed = client.market().feed(vec![
///     json!({"Exch": "N", "ExchType": "C", "Symbol": "ITC", "Expiry": "", "StrikePrice": "0", "OptionType": ""}),
/// ]).await?;
/// # Ok(())
/// # }
/// ```
pub struct MarketService {
    inner: Arc<ClientInner>,
}

impl MarketService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch a market-feed snapshot for the given scrips.
    pub async fn feed(&self, scrips: Vec<Value>) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .market_feed(&endpoints::MARKET_FEED, &snapshot, scrips)?;
        self.inner
            .send_rows(&endpoints::MARKET_FEED, &envelope, "Data")
            .await
    }

    /// Fetch a market-feed snapshot addressed by scrip code rather than
    /// symbol.
    pub async fn feed_by_scrip(&self, scrips: Vec<Value>) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self.inner.builder.market_feed(
            &endpoints::MARKET_FEED_BY_SCRIP,
            &snapshot,
            scrips,
        )?;
        self.inner
            .send_rows(&endpoints::MARKET_FEED_BY_SCRIP, &envelope, "Data")
            .await
    }

    /// Fetch market depth for the given scrips. The body is returned raw.
    pub async fn depth(&self, scrips: Vec<Value>) -> Result<Value> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .market_depth(&endpoints::MARKET_DEPTH, &snapshot, scrips)?;
        self.inner.send(&endpoints::MARKET_DEPTH, &envelope).await
    }

    /// Fetch historical candles. `timeframe` is one of the vendor's
    /// interval strings (`"1m"`, `"5m"`, `"1d"`, ...); `from` and `to` are
    /// `YYYY-MM-DD` dates. The candle payload is returned raw.
    pub async fn historical(
        &self,
        exchange: &str,
        segment: &str,
        scrip_code: u32,
        timeframe: &str,
        from: &str,
        to: &str,
    ) -> Result<Value> {
        // Same precondition as envelope-based business calls: candles are
        // served only to an authenticated session.
        let snapshot = self.inner.session.snapshot().await;
        self.inner.builder.business_client_code(&snapshot)?;

        let path = format!(
            "/{exchange}/{segment}/{scrip_code}/{timeframe}?from={from}&end={to}"
        );
        self.inner.get_historical(&path).await
    }
}
