//! Low-level HTTP client — `KubecoinHttp`.
//!
//! One method per broker endpoint. Returns wire types; conversion to domain
//! types happens at the session boundary. Requests carry a single bounded
//! transport timeout and are never retried here — the sync poller's next
//! tick is the retry for polls, and action dispatch failures are reported
//! once to the user.

use crate::domain::trading::wire::{ActionRequest, ActionResponse, TradeRequest};
use crate::domain::wallet::wire::{HealthResponse, WalletResponse};
use crate::error::HttpError;
use crate::shared::WalletId;

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;

/// The transport timeout; covers the slow mining endpoint.
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Low-level HTTP client for the KubeCoin broker REST API.
#[derive(Clone)]
pub struct KubecoinHttp {
    base_url: String,
    client: Client,
}

impl KubecoinHttp {
    pub fn new(base_url: &str) -> Result<Self, HttpError> {
        let client = Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .pool_max_idle_per_host(10)
            .build()?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    // ── Wallet ───────────────────────────────────────────────────────────

    /// Fetch wallet state; the broker creates the wallet on first fetch.
    pub async fn get_wallet(&self, wallet: &WalletId) -> Result<WalletResponse, HttpError> {
        let url = format!("{}/api/data/{}", self.base_url, wallet);
        self.get(&url).await
    }

    // ── Actions ──────────────────────────────────────────────────────────

    pub async fn post_buy(&self, request: &TradeRequest) -> Result<ActionResponse, HttpError> {
        let url = format!("{}/api/buy", self.base_url);
        self.post(&url, request).await
    }

    pub async fn post_sell(&self, request: &TradeRequest) -> Result<ActionResponse, HttpError> {
        let url = format!("{}/api/sell", self.base_url);
        self.post(&url, request).await
    }

    pub async fn post_mine(&self, request: &ActionRequest) -> Result<ActionResponse, HttpError> {
        let url = format!("{}/api/mine", self.base_url);
        self.post(&url, request).await
    }

    pub async fn post_reset(&self, request: &ActionRequest) -> Result<ActionResponse, HttpError> {
        let url = format!("{}/api/reset", self.base_url);
        self.post(&url, request).await
    }

    // ── Health ───────────────────────────────────────────────────────────

    /// The broker's liveness probe. A sick pod answers 500.
    pub async fn get_health(&self) -> Result<HealthResponse, HttpError> {
        let url = format!("{}/health", self.base_url);
        self.get(&url).await
    }

    // ── Internal HTTP methods ────────────────────────────────────────────

    async fn get<T: DeserializeOwned>(&self, url: &str) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::GET, url, None::<&()>).await
    }

    async fn post<T: DeserializeOwned, B: Serialize>(
        &self,
        url: &str,
        body: &B,
    ) -> Result<T, HttpError> {
        self.do_request(reqwest::Method::POST, url, Some(body)).await
    }

    async fn do_request<T: DeserializeOwned, B: Serialize>(
        &self,
        method: reqwest::Method,
        url: &str,
        body: Option<&B>,
    ) -> Result<T, HttpError> {
        let mut req = self.client.request(method, url);
        if let Some(b) = body {
            req = req.json(b);
        }

        let resp = match req.send().await {
            Ok(resp) => resp,
            Err(e) if e.is_timeout() => return Err(HttpError::Timeout),
            Err(e) => return Err(HttpError::Reqwest(e)),
        };
        let status = resp.status();

        if status.is_success() {
            return Ok(resp.json::<T>().await?);
        }

        let status_code = status.as_u16();
        let body_text = resp.text().await.unwrap_or_default();
        tracing::debug!(status = status_code, url, "request refused");

        match status_code {
            404 => Err(HttpError::NotFound(body_text)),
            400..=499 => Err(HttpError::BadRequest(body_text)),
            _ => Err(HttpError::ServerError {
                status: status_code,
                body: body_text,
            }),
        }
    }
}
