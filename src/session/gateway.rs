//! The trade gateway: local pre-validation, dispatch, notify, resync.
//!
//! Validation here is advisory — the broker is the sole source of truth and
//! may still reject a locally-valid request. Nothing is applied optimistically:
//! the wallet snapshot only ever changes through a sync, so a rejected or
//! failed dispatch has nothing to roll back.

use super::{ExchangeBackend, ExchangeSession};
use crate::domain::notify::Notice;
use crate::domain::trading::{ActionKind, TradeIntent};
use crate::error::{HttpError, SdkError};

use rust_decimal::Decimal;

const TRADE_FAILED: &str = "Transaction failed. Please try again.";
const MINING_STARTED: &str = "Mining in progress... This may take a moment.";
const MINING_COMPLETE: &str = "Mining complete! Earned 1 KubeCoin";
const MINING_FAILED: &str = "Mining failed. Please try again.";
const RESET_COMPLETE: &str = "Account reset successfully! Balance restored to $1000.";
const RESET_FAILED: &str = "Bailout failed. Please try again.";

impl<B: ExchangeBackend> ExchangeSession<B> {
    /// Buy `amount` coins at `price` — the price the caller is looking at,
    /// not a re-fetched one.
    pub async fn buy(&self, amount: Decimal, price: Decimal) -> Result<(), SdkError> {
        self.submit(ActionKind::Buy, amount, price).await
    }

    /// Sell `amount` coins at `price`.
    pub async fn sell(&self, amount: Decimal, price: Decimal) -> Result<(), SdkError> {
        self.submit(ActionKind::Sell, amount, price).await
    }

    /// Validate against the latest snapshot, dispatch to the broker, and on
    /// acceptance trigger an immediate out-of-band wallet resync.
    pub async fn submit(
        &self,
        kind: ActionKind,
        amount: Decimal,
        price: Decimal,
    ) -> Result<(), SdkError> {
        let intent = TradeIntent::new(kind, amount, price);
        let wallet = self.wallet().await;
        if let Err(err) = intent.validate(&wallet) {
            self.notify(Notice::error(err.to_string())).await;
            return Err(err.into());
        }

        tracing::info!(
            wallet = %self.wallet_id(),
            %kind,
            %amount,
            %price,
            "dispatching trade"
        );
        let result = self
            .backend
            .submit_trade(self.wallet_id(), kind, amount, price)
            .await;

        match result {
            Ok(resp) if resp.is_success() => {
                self.confirm(intent.confirmation()).await;
                Ok(())
            }
            Ok(resp) => self.reject(resp.message, TRADE_FAILED).await,
            Err(err) => self.report_failure(err, TRADE_FAILED).await,
        }
    }

    /// Kick off a server-side mining run. No local pre-validation: the cost
    /// is fixed and server-determined.
    pub async fn mine(&self) -> Result<(), SdkError> {
        self.notify(Notice::info(MINING_STARTED)).await;
        tracing::info!(wallet = %self.wallet_id(), "dispatching mine");

        match self.backend.submit_mine(self.wallet_id()).await {
            Ok(resp) if resp.is_success() => {
                self.confirm(MINING_COMPLETE).await;
                Ok(())
            }
            Ok(resp) => self.reject(resp.message, MINING_FAILED).await,
            Err(err) => self.report_failure(err, MINING_FAILED).await,
        }
    }

    /// Emergency bailout: reset the wallet to its starting balance.
    /// Unconditional — no local pre-validation.
    pub async fn reset(&self) -> Result<(), SdkError> {
        tracing::info!(wallet = %self.wallet_id(), "dispatching reset");

        match self.backend.submit_reset(self.wallet_id()).await {
            Ok(resp) if resp.is_success() => {
                self.confirm(RESET_COMPLETE).await;
                Ok(())
            }
            Ok(resp) => self.reject(resp.message, RESET_FAILED).await,
            Err(err) => self.report_failure(err, RESET_FAILED).await,
        }
    }

    // ── Outcome plumbing ─────────────────────────────────────────────────

    async fn confirm(&self, message: impl Into<String>) {
        self.notify(Notice::success(message)).await;
        self.resync().await;
    }

    /// The broker refused: surface its message verbatim when present.
    async fn reject(&self, message: Option<String>, fallback: &str) -> Result<(), SdkError> {
        let text = message.clone().unwrap_or_else(|| fallback.to_string());
        self.notify(Notice::error(text)).await;
        Err(SdkError::Rejected { message })
    }

    /// Split transport failures from domain rejections that arrived as
    /// error statuses with a JSON body.
    async fn report_failure(&self, err: HttpError, fallback: &str) -> Result<(), SdkError> {
        if err.is_rejection() {
            self.reject(err.backend_message(), fallback).await
        } else {
            tracing::warn!(wallet = %self.wallet_id(), error = %err, "dispatch failed");
            self.notify(Notice::error(fallback)).await;
            Err(SdkError::Network(err))
        }
    }
}
