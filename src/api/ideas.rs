//! Trader-ideas service.

use serde_json::Value;
use std::sync::Arc;

use crate::client::ClientInner;
use crate::envelope::endpoints;
use crate::Result;

/// Service for the vendor's trader-ideas feeds. The payloads are editorial
/// content; both calls return the body raw.
pub struct IdeasService {
    inner: Arc<ClientInner>,
}

impl IdeasService {
    pub(crate) fn new(inner: Arc<ClientInner>) -> Self {
        Self { inner }
    }

    /// Fetch buy ideas.
    pub async fn buy(&self) -> Result<Value> {
        self.fetch("B").await
    }

    /// Fetch trade ideas.
    pub async fn trade(&self) -> Result<Value> {
        self.fetch("T").await
    }

    async fn fetch(&self, request_type: &'static str) -> Result<Value> {
        let snapshot = self.inner.session.snapshot().await;
        let envelope = self
            .inner
            .builder
            .ideas(&endpoints::IDEAS, &snapshot, request_type)?;
        self.inner.send(&endpoints::IDEAS, &envelope).await
    }
}
