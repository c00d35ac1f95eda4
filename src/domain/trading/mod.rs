//! Trading domain: action kinds, broker requests, and local pre-validation.

pub mod intent;
pub mod wire;

pub use intent::TradeIntent;
pub use wire::{ActionRequest, ActionResponse, ActionStatus, TradeRequest};

use serde::{Deserialize, Serialize};

/// Trade direction: buy coins with USD, or sell coins for USD.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ActionKind {
    Buy,
    Sell,
}

impl std::fmt::Display for ActionKind {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            ActionKind::Buy => write!(f, "Buy"),
            ActionKind::Sell => write!(f, "Sell"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_action_kind_serde() {
        let buy: ActionKind = serde_json::from_str("\"buy\"").unwrap();
        assert_eq!(buy, ActionKind::Buy);
        let sell: ActionKind = serde_json::from_str("\"sell\"").unwrap();
        assert_eq!(sell, ActionKind::Sell);
    }
}
