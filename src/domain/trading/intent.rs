//! Trade intent — one user action, pre-validated against the local mirror.

use super::ActionKind;
use crate::domain::wallet::WalletSnapshot;
use crate::error::ValidationError;
use crate::shared::fmt;
use rust_decimal::Decimal;

/// A buy or sell captured at submission time.
///
/// Transient: lives for one dispatch call. The price is whatever the caller
/// saw when submitting — it is sent along so the broker settles at the
/// displayed rate, not at a re-fetched one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TradeIntent {
    pub kind: ActionKind,
    pub amount: Decimal,
    pub price: Decimal,
}

impl TradeIntent {
    pub fn new(kind: ActionKind, amount: Decimal, price: Decimal) -> Self {
        Self {
            kind,
            amount,
            price,
        }
    }

    /// Total cost (buy) or revenue (sell) at the submitted price.
    pub fn notional(&self) -> Decimal {
        self.amount * self.price
    }

    /// Advisory pre-check against the wallet mirror. The broker remains the
    /// sole source of truth and may still reject a locally-valid intent.
    pub fn validate(&self, wallet: &WalletSnapshot) -> Result<(), ValidationError> {
        if self.amount <= Decimal::ZERO {
            return Err(ValidationError::NonPositiveAmount);
        }
        match self.kind {
            ActionKind::Buy => {
                let cost = self.notional();
                if cost > wallet.balance {
                    return Err(ValidationError::InsufficientBalance {
                        cost,
                        balance: wallet.balance,
                    });
                }
            }
            ActionKind::Sell => {
                if self.amount > wallet.coins {
                    return Err(ValidationError::InsufficientCoins {
                        coins: wallet.coins,
                    });
                }
            }
        }
        Ok(())
    }

    /// User-facing confirmation text for an accepted trade, e.g.
    /// `Bought 5 KubeCoins for $50.00 @ $10.00/coin!`
    pub fn confirmation(&self) -> String {
        let verb = match self.kind {
            ActionKind::Buy => "Bought",
            ActionKind::Sell => "Sold",
        };
        format!(
            "{} {} KubeCoins for {} @ {}/coin!",
            verb,
            fmt::qty(&self.amount),
            fmt::usd(&self.notional()),
            fmt::usd(&self.price),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn wallet(balance: Decimal, coins: Decimal) -> WalletSnapshot {
        WalletSnapshot {
            balance,
            coins,
            pod_id: "pod-a".to_string(),
        }
    }

    #[test]
    fn test_rejects_zero_and_negative_amounts() {
        let w = wallet(dec!(1000), dec!(10));
        for kind in [ActionKind::Buy, ActionKind::Sell] {
            let zero = TradeIntent::new(kind, dec!(0), dec!(10));
            assert_eq!(zero.validate(&w), Err(ValidationError::NonPositiveAmount));
            let neg = TradeIntent::new(kind, dec!(-1), dec!(10));
            assert_eq!(neg.validate(&w), Err(ValidationError::NonPositiveAmount));
        }
    }

    #[test]
    fn test_buy_rejected_iff_cost_exceeds_balance() {
        let w = wallet(dec!(100), dec!(0));

        // 10 × 12 = 120 > 100 → rejected
        let over = TradeIntent::new(ActionKind::Buy, dec!(10), dec!(12));
        assert_eq!(
            over.validate(&w),
            Err(ValidationError::InsufficientBalance {
                cost: dec!(120),
                balance: dec!(100),
            })
        );

        // Exactly the balance is spendable
        let exact = TradeIntent::new(ActionKind::Buy, dec!(10), dec!(10));
        assert_eq!(exact.validate(&w), Ok(()));

        let under = TradeIntent::new(ActionKind::Buy, dec!(5), dec!(10));
        assert_eq!(under.validate(&w), Ok(()));
    }

    #[test]
    fn test_sell_rejected_iff_amount_exceeds_coins() {
        let w = wallet(dec!(0), dec!(3));

        let over = TradeIntent::new(ActionKind::Sell, dec!(5), dec!(10));
        assert_eq!(
            over.validate(&w),
            Err(ValidationError::InsufficientCoins { coins: dec!(3) })
        );

        // Selling the whole holding is allowed
        let exact = TradeIntent::new(ActionKind::Sell, dec!(3), dec!(10));
        assert_eq!(exact.validate(&w), Ok(()));
    }

    #[test]
    fn test_sell_ignores_balance() {
        let w = wallet(dec!(0), dec!(10));
        let intent = TradeIntent::new(ActionKind::Sell, dec!(10), dec!(99));
        assert_eq!(intent.validate(&w), Ok(()));
    }

    #[test]
    fn test_confirmation_text() {
        let buy = TradeIntent::new(ActionKind::Buy, dec!(5), dec!(10));
        assert_eq!(
            buy.confirmation(),
            "Bought 5 KubeCoins for $50.00 @ $10.00/coin!"
        );

        let sell = TradeIntent::new(ActionKind::Sell, dec!(2.5), dec!(12.40));
        assert_eq!(
            sell.confirmation(),
            "Sold 2.5 KubeCoins for $31.00 @ $12.40/coin!"
        );
    }
}
