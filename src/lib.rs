//! # KubeCoin SDK
//!
//! A Rust client for the KubeCoin Exchange demo broker: a locally simulated
//! market feed plus a wallet mirror kept in sync with the authoritative
//! backend by polling.
//!
//! ## Architecture
//!
//! The SDK is organized in layers:
//!
//! 1. **Core** — Shared newtypes, domain models, wire types
//! 2. **HTTP API** — `KubecoinHttp` with one method per broker endpoint
//! 3. **Session engine** — `ExchangeSession`: price simulation, wallet sync
//!    polling, trade gateway, notifications, connectivity
//! 4. **High-Level Client** — `KubecoinClient`, the session factory
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use kubecoin_sdk::prelude::*;
//!
//! let client = KubecoinClient::builder()
//!     .base_url("http://broker.kubecoin.local")
//!     .build()?;
//!
//! let session = client.session("Student1");
//! let price = session.current_price().await;
//! session.buy(Decimal::from(5), price).await?;
//! session.stop().await;
//! ```

// ── Layer 1: Core ────────────────────────────────────────────────────────────

/// Shared newtypes and display formatting used across all domains.
pub mod shared;

/// Domain modules (vertical slices): types, wire types, state containers.
pub mod domain;

/// Unified SDK error types.
pub mod error;

/// Network URL constants.
pub mod network;

// ── Layer 2: HTTP API ────────────────────────────────────────────────────────

/// HTTP client for the broker REST API.
pub mod http;

// ── Layer 3: Session engine ──────────────────────────────────────────────────

/// `ExchangeSession` — timers, wallet sync, trade gateway, notifications.
pub mod session;

// ── Layer 4: High-Level Client ───────────────────────────────────────────────

/// `KubecoinClient` — the primary entry point.
pub mod client;

// ── Prelude ──────────────────────────────────────────────────────────────────

pub mod prelude {
    // Shared newtypes
    pub use crate::shared::WalletId;

    // Domain types — wallet
    pub use crate::domain::wallet::{WalletResponse, WalletSnapshot};

    // Domain types — trading
    pub use crate::domain::trading::{ActionKind, ActionResponse, ActionStatus, TradeIntent};

    // Domain types — price simulation
    pub use crate::domain::price::{PriceSimulator, PriceStats, PriceWindow};

    // Domain types — notifications
    pub use crate::domain::notify::{Notice, NoticeSlot, Severity};

    // Errors
    pub use crate::error::{HttpError, SdkError, ValidationError};

    // Network
    pub use crate::network::DEFAULT_API_URL;

    // HTTP client
    pub use crate::http::KubecoinHttp;

    // Session engine
    pub use crate::session::{Connectivity, ExchangeBackend, ExchangeSession, SessionConfig};

    // High-level client
    pub use crate::client::{KubecoinClient, KubecoinClientBuilder};
}
