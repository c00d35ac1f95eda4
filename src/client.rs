//! High-level client — `KubecoinClient`, the session factory.

use crate::domain::wallet::{HealthResponse, WalletSnapshot};
use crate::error::SdkError;
use crate::http::KubecoinHttp;
use crate::session::{ExchangeSession, SessionConfig};
use crate::shared::WalletId;

use std::sync::Arc;

/// The primary entry point for the KubeCoin SDK.
///
/// Holds the HTTP client and the session cadence; sessions are created per
/// wallet with [`session`](Self::session) and torn down with
/// [`ExchangeSession::stop`].
#[derive(Clone)]
pub struct KubecoinClient {
    http: Arc<KubecoinHttp>,
    session_config: SessionConfig,
}

impl KubecoinClient {
    pub fn builder() -> KubecoinClientBuilder {
        KubecoinClientBuilder::default()
    }

    /// Activate a trading session for a wallet. Polling starts immediately;
    /// must be called from within a tokio runtime.
    pub fn session(&self, wallet_id: impl Into<WalletId>) -> ExchangeSession<KubecoinHttp> {
        ExchangeSession::start(
            Arc::clone(&self.http),
            wallet_id.into(),
            self.session_config.clone(),
        )
    }

    /// One-shot wallet fetch, outside any session. The broker creates the
    /// wallet on first fetch.
    pub async fn wallet(&self, wallet_id: impl Into<WalletId>) -> Result<WalletSnapshot, SdkError> {
        let resp = self.http.get_wallet(&wallet_id.into()).await?;
        Ok(WalletSnapshot::from(resp))
    }

    /// Probe the broker's liveness endpoint.
    pub async fn health(&self) -> Result<HealthResponse, SdkError> {
        Ok(self.http.get_health().await?)
    }

    pub fn http(&self) -> &KubecoinHttp {
        &self.http
    }
}

// ═════════════════════════════════════════════════════════════════════════════
// Builder
// ═════════════════════════════════════════════════════════════════════════════

pub struct KubecoinClientBuilder {
    base_url: String,
    session_config: SessionConfig,
}

impl Default for KubecoinClientBuilder {
    fn default() -> Self {
        Self {
            base_url: crate::network::DEFAULT_API_URL.to_string(),
            session_config: SessionConfig::default(),
        }
    }
}

impl KubecoinClientBuilder {
    pub fn base_url(mut self, url: &str) -> Self {
        self.base_url = url.to_string();
        self
    }

    /// Override the timer cadence used by sessions created from this client.
    pub fn session_config(mut self, config: SessionConfig) -> Self {
        self.session_config = config;
        self
    }

    pub fn build(self) -> Result<KubecoinClient, SdkError> {
        Ok(KubecoinClient {
            http: Arc::new(KubecoinHttp::new(&self.base_url)?),
            session_config: self.session_config,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let client = KubecoinClient::builder().build().unwrap();
        assert_eq!(client.http().base_url(), crate::network::DEFAULT_API_URL);
    }

    #[test]
    fn test_builder_custom_base_url() {
        let client = KubecoinClient::builder()
            .base_url("http://broker.kube.local:5000/")
            .build()
            .unwrap();
        assert_eq!(client.http().base_url(), "http://broker.kube.local:5000");
    }
}
