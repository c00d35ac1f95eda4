//! Price state containers — app-owned, SDK-provided update logic.

use super::WINDOW_POINTS;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use std::collections::VecDeque;

/// Rolling window of recent simulated prices, oldest first.
///
/// Fixed capacity: pushing at capacity evicts the oldest point, so the chart
/// always shows the most recent `WINDOW_POINTS` ticks.
#[derive(Debug, Clone)]
pub struct PriceWindow {
    points: VecDeque<Decimal>,
    max_size: usize,
}

impl Default for PriceWindow {
    fn default() -> Self {
        Self::new(WINDOW_POINTS)
    }
}

impl PriceWindow {
    pub fn new(max_size: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(max_size),
            max_size,
        }
    }

    /// Push a new point, evicting the oldest if at capacity.
    pub fn push(&mut self, point: Decimal) {
        if self.points.len() >= self.max_size {
            self.points.pop_front();
        }
        self.points.push_back(point);
    }

    /// The most recent point — the "current price".
    pub fn latest(&self) -> Option<Decimal> {
        self.points.back().copied()
    }

    /// The oldest point still in the window.
    pub fn oldest(&self) -> Option<Decimal> {
        self.points.front().copied()
    }

    pub fn points(&self) -> &VecDeque<Decimal> {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Change of the current price relative to the oldest point in the
    /// window. Zeroed until two points exist, matching the chart's "flat
    /// until there is history" behavior.
    pub fn stats(&self) -> PriceStats {
        if self.points.len() < 2 {
            return PriceStats::default();
        }
        let current = self.latest().unwrap_or_default();
        let oldest = self.oldest().unwrap_or_default();
        let change = current - oldest;
        let percent = if oldest.is_zero() {
            Decimal::ZERO
        } else {
            (change / oldest * dec!(100)).round_dp(2)
        };
        PriceStats {
            change,
            percent,
            rising: change >= Decimal::ZERO,
        }
    }
}

/// Derived view of the window: absolute and percent change, direction flag.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PriceStats {
    pub change: Decimal,
    /// Percent change relative to the oldest point, rounded to two decimals.
    pub percent: Decimal,
    /// `true` when the change is non-negative.
    pub rising: bool,
}

impl Default for PriceStats {
    fn default() -> Self {
        Self {
            change: Decimal::ZERO,
            percent: Decimal::ZERO,
            rising: true,
        }
    }
}
