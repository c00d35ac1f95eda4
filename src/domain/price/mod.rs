//! Price domain: the locally simulated KubeCoin market feed.
//!
//! The demo broker has no market of its own — the "live" exchange rate is a
//! bounded random walk generated client-side. The walk is independent of the
//! backend; only the trade endpoints ever see a price, and then only the one
//! the user submitted.

pub mod sim;
pub mod state;

pub use sim::PriceSimulator;
pub use state::{PriceStats, PriceWindow};

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

/// Lower clamp of the simulated price.
pub const PRICE_FLOOR: Decimal = dec!(5);

/// Upper clamp of the simulated price.
pub const PRICE_CEIL: Decimal = dec!(20);

/// Starting price when the walk has no history yet.
pub const PRICE_SEED: Decimal = dec!(10);

/// Largest single-step perturbation, drawn uniformly from `[-MAX_STEP, +MAX_STEP]`.
pub const MAX_STEP: f64 = 0.4;

/// Number of points the chart window holds.
pub const WINDOW_POINTS: usize = 20;
