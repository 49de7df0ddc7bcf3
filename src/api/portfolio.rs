//! Portfolio service: holdings, positions, and margin.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::envelope::endpoints;
use crate::Result;

/// Service for account portfolio queries.
///
/// All three endpoints are list-classified: an empty result set surfaces
/// the server's message as [`Error::NoData`](crate::Error::NoData).
///
/// # Example
///
/// ```no_run
/// # async fn example(client: fivepaisa_rs::FivePaisaClient) -> fivepaisa_rs::Result<()> {
/// let holdings = client.portfolio().holdings().await?;
/// for holding in &holdings {
///     println!("{}", holding);
/// }
/// # Ok(())
/// # }
/// ```
pub struct PortfolioService {
    inner: Arc<ClientInner>,
}

impl PortfolioService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch the client's holdings.
    pub async fn holdings(&self) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self.inner.builder.generic(&endpoints::HOLDINGS, &snapshot)?;
        self.inner
            .send_rows(&endpoints::HOLDINGS, &envelope, "Data")
            .await
    }

    /// Fetch net positions.
    pub async fn positions(&self) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self.inner.builder.generic(&endpoints::POSITIONS, &snapshot)?;
        self.inner
            .send_rows(&endpoints::POSITIONS, &envelope, "NetPositionDetail")
            .await
    }

    /// Fetch equity margin details.
    pub async fn margin(&self) -> Result<Vec<Value>> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self.inner.builder.generic(&endpoints::MARGIN, &snapshot)?;
        self.inner
            .send_rows(&endpoints::MARGIN, &envelope, "EquityMargin")
            .await
    }
}
