//! Wire types for trading requests and responses (REST).

use crate::shared::WalletId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Request body for `POST /api/buy` and `POST /api/sell`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TradeRequest {
    pub id: WalletId,
    pub amount: Decimal,
    pub price: Decimal,
}

/// Request body for `POST /api/mine` and `POST /api/reset`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionRequest {
    pub id: WalletId,
}

/// Outcome flag in broker action responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionStatus {
    Success,
    Error,
}

/// Broker response to any action endpoint.
///
/// Failures normally arrive as a non-2xx status with the same body shape;
/// `message` is surfaced to the user verbatim when present.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ActionResponse {
    pub status: ActionStatus,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub pod_id: Option<String>,
}

impl ActionResponse {
    pub fn is_success(&self) -> bool {
        self.status == ActionStatus::Success
    }
}
