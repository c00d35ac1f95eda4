//! Bounded random-walk price generation.

use super::state::PriceWindow;
use super::{MAX_STEP, PRICE_CEIL, PRICE_FLOOR, PRICE_SEED, WINDOW_POINTS};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Generates the simulated KubeCoin price as a bounded random walk.
///
/// Each step perturbs the previous point by a uniform draw from
/// `[-MAX_STEP, +MAX_STEP]` and clamps the result to
/// `[PRICE_FLOOR, PRICE_CEIL]`.
///
/// Generic over the randomness source: a seeded RNG makes the whole walk
/// reproducible, which is how the tests pin down the window contents.
#[derive(Debug)]
pub struct PriceSimulator<R: Rng = StdRng> {
    rng: R,
}

impl PriceSimulator<StdRng> {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }
}

impl Default for PriceSimulator<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> PriceSimulator<R> {
    /// Build a simulator over an explicit randomness source.
    pub fn from_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Produce the next point of the walk. `last` is the previous point;
    /// `None` starts the walk from the seed value.
    pub fn next_point(&mut self, last: Option<Decimal>) -> Decimal {
        let draw: f64 = self.rng.gen_range(-MAX_STEP..=MAX_STEP);
        let delta = Decimal::from_f64_retain(draw).unwrap_or_default();
        let base = last.unwrap_or(PRICE_SEED);
        (base + delta).clamp(PRICE_FLOOR, PRICE_CEIL)
    }

    /// Generate a fully populated window so the chart never starts empty.
    pub fn seed_window(&mut self) -> PriceWindow {
        let mut window = PriceWindow::default();
        for _ in 0..WINDOW_POINTS {
            let next = self.next_point(window.latest());
            window.push(next);
        }
        window
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha8Rng;

    fn seeded(seed: u64) -> PriceSimulator<ChaCha8Rng> {
        PriceSimulator::from_rng(ChaCha8Rng::seed_from_u64(seed))
    }

    #[test]
    fn test_all_points_within_bounds() {
        let mut sim = seeded(7);
        let mut last = None;
        for _ in 0..1_000 {
            let point = sim.next_point(last);
            assert!(point >= PRICE_FLOOR, "point {point} below floor");
            assert!(point <= PRICE_CEIL, "point {point} above ceiling");
            last = Some(point);
        }
    }

    #[test]
    fn test_step_size_bounded() {
        let mut sim = seeded(11);
        let max_step = Decimal::from_f64_retain(MAX_STEP).unwrap();
        let mut last = PRICE_SEED;
        for _ in 0..500 {
            let point = sim.next_point(Some(last));
            // Clamping can only shrink a step, never grow it.
            assert!((point - last).abs() <= max_step);
            last = point;
        }
    }

    #[test]
    fn test_clamped_at_ceiling() {
        let mut sim = seeded(3);
        for _ in 0..100 {
            assert!(sim.next_point(Some(PRICE_CEIL)) <= PRICE_CEIL);
            assert!(sim.next_point(Some(PRICE_FLOOR)) >= PRICE_FLOOR);
        }
    }

    #[test]
    fn test_seed_window_fills_to_capacity() {
        let mut sim = seeded(42);
        let window = sim.seed_window();
        assert_eq!(window.len(), WINDOW_POINTS);
        for point in window.points() {
            assert!(*point >= PRICE_FLOOR && *point <= PRICE_CEIL);
        }
    }

    #[test]
    fn test_same_seed_reproduces_the_walk() {
        let a = seeded(42).seed_window();
        let b = seeded(42).seed_window();
        let a_points: Vec<_> = a.points().iter().copied().collect();
        let b_points: Vec<_> = b.points().iter().copied().collect();
        assert_eq!(a_points, b_points);
    }

    #[test]
    fn test_different_seeds_diverge() {
        let a = seeded(1).seed_window();
        let b = seeded(2).seed_window();
        assert_ne!(
            a.points().iter().copied().collect::<Vec<_>>(),
            b.points().iter().copied().collect::<Vec<_>>()
        );
    }
}
