//! Wire types for wallet responses (REST).

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// REST response for `GET /api/data/{wallet_id}`.
///
/// The broker creates the wallet on first fetch, so this never 404s for a
/// well-formed id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletResponse {
    pub balance: Decimal,
    pub coins: Decimal,
    /// Hostname of the serving backend pod.
    #[serde(default)]
    pub pod_id: String,
}

/// REST response for `GET /health` (the broker's liveness probe).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub pod_id: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_wallet_response_from_broker_json() {
        let json = r#"{"balance": 500.0, "coins": 2.0, "pod_id": "pod-a"}"#;
        let resp: WalletResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.balance, dec!(500));
        assert_eq!(resp.coins, dec!(2));
        assert_eq!(resp.pod_id, "pod-a");
    }

    #[test]
    fn test_wallet_response_missing_pod_id_defaults() {
        let json = r#"{"balance": 1000.0, "coins": 0.0}"#;
        let resp: WalletResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.pod_id, "");
    }

    #[test]
    fn test_health_response_from_broker_json() {
        let json = r#"{"status": "healthy", "pod_id": "pod-b"}"#;
        let resp: HealthResponse = serde_json::from_str(json).unwrap();
        assert_eq!(resp.status, "healthy");
        assert_eq!(resp.pod_id, "pod-b");
    }
}
