//! The broker seam the session engine drives.

use crate::domain::trading::wire::{ActionRequest, ActionResponse, TradeRequest};
use crate::domain::trading::ActionKind;
use crate::domain::wallet::wire::WalletResponse;
use crate::error::HttpError;
use crate::http::KubecoinHttp;
use crate::shared::WalletId;

use rust_decimal::Decimal;
use std::future::Future;

/// Everything the session engine needs from the broker.
///
/// `KubecoinHttp` is the production implementation; tests script their own.
/// All methods are single-shot: no retries happen behind this seam.
pub trait ExchangeBackend: Send + Sync + 'static {
    /// Fetch the authoritative wallet state.
    fn fetch_wallet(
        &self,
        wallet: &WalletId,
    ) -> impl Future<Output = Result<WalletResponse, HttpError>> + Send;

    /// Submit a buy or sell at the given amount and price.
    fn submit_trade(
        &self,
        wallet: &WalletId,
        kind: ActionKind,
        amount: Decimal,
        price: Decimal,
    ) -> impl Future<Output = Result<ActionResponse, HttpError>> + Send;

    /// Kick off a mining run; cost and reward are server-determined.
    fn submit_mine(
        &self,
        wallet: &WalletId,
    ) -> impl Future<Output = Result<ActionResponse, HttpError>> + Send;

    /// Reset the wallet to its starting balance. Unconditional.
    fn submit_reset(
        &self,
        wallet: &WalletId,
    ) -> impl Future<Output = Result<ActionResponse, HttpError>> + Send;
}

impl ExchangeBackend for KubecoinHttp {
    async fn fetch_wallet(&self, wallet: &WalletId) -> Result<WalletResponse, HttpError> {
        self.get_wallet(wallet).await
    }

    async fn submit_trade(
        &self,
        wallet: &WalletId,
        kind: ActionKind,
        amount: Decimal,
        price: Decimal,
    ) -> Result<ActionResponse, HttpError> {
        let request = TradeRequest {
            id: wallet.clone(),
            amount,
            price,
        };
        match kind {
            ActionKind::Buy => self.post_buy(&request).await,
            ActionKind::Sell => self.post_sell(&request).await,
        }
    }

    async fn submit_mine(&self, wallet: &WalletId) -> Result<ActionResponse, HttpError> {
        let request = ActionRequest { id: wallet.clone() };
        self.post_mine(&request).await
    }

    async fn submit_reset(&self, wallet: &WalletId) -> Result<ActionResponse, HttpError> {
        let request = ActionRequest { id: wallet.clone() };
        self.post_reset(&request).await
    }
}
