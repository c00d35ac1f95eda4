//! Wallet domain: the in-memory mirror of the authoritative broker row.

pub mod state;
pub mod wire;

pub use state::WalletSnapshot;
pub use wire::{HealthResponse, WalletResponse};
