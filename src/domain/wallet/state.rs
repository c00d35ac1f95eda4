//! Wallet state container — app-owned, SDK-provided update logic.

use super::wire::WalletResponse;
use rust_decimal::Decimal;

/// In-memory mirror of the wallet row for the active session.
///
/// Replaced wholesale by each successful sync; the broker is the sole source
/// of truth and these values are never mutated locally. Balance and coins
/// are non-negative because the broker enforces it — the mirror does not
/// re-validate.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WalletSnapshot {
    pub balance: Decimal,
    pub coins: Decimal,
    /// Hostname of the backend pod that served the last sync.
    pub pod_id: String,
}

impl WalletSnapshot {
    /// Total portfolio value at the given coin price.
    pub fn portfolio_value(&self, price: Decimal) -> Decimal {
        self.balance + self.coins * price
    }
}

impl From<WalletResponse> for WalletSnapshot {
    fn from(resp: WalletResponse) -> Self {
        Self {
            balance: resp.balance,
            coins: resp.coins,
            pod_id: resp.pod_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_default_is_empty_wallet() {
        let snapshot = WalletSnapshot::default();
        assert_eq!(snapshot.balance, Decimal::ZERO);
        assert_eq!(snapshot.coins, Decimal::ZERO);
        assert_eq!(snapshot.pod_id, "");
    }

    #[test]
    fn test_from_wire_response() {
        let snapshot = WalletSnapshot::from(WalletResponse {
            balance: dec!(500),
            coins: dec!(2),
            pod_id: "pod-a".to_string(),
        });
        assert_eq!(snapshot.balance, dec!(500));
        assert_eq!(snapshot.coins, dec!(2));
        assert_eq!(snapshot.pod_id, "pod-a");
    }

    #[test]
    fn test_portfolio_value() {
        let snapshot = WalletSnapshot {
            balance: dec!(100),
            coins: dec!(3),
            pod_id: String::new(),
        };
        assert_eq!(snapshot.portfolio_value(dec!(10.50)), dec!(131.50));
    }
}
