//! Domain modules organized as vertical slices.
//!
//! Each sub-module contains:
//! - `mod.rs` — Rich domain types (validated, business-logic-ready)
//! - `wire.rs` — Raw serde structs matching broker responses
//! - `state.rs` — State containers with update methods (for poll-driven data)

pub mod notify;
pub mod price;
pub mod trading;
pub mod wallet;
