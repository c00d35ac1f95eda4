//! The session engine — `ExchangeSession`.
//!
//! One background tokio task per session owns every timer and every state
//! write: the price tick, the wallet sync poll, and the notice auto-dismiss
//! deadline. The public handle exposes read accessors, the trade gateway,
//! and an explicit `stop()`, so teardown is deterministic rather than left
//! to whatever owns the handle.

pub mod backend;
mod gateway;
mod state;

pub use backend::ExchangeBackend;
pub use state::Connectivity;

use crate::domain::notify::Notice;
use crate::domain::price::{PriceSimulator, PriceStats, PriceWindow, PRICE_SEED};
use crate::domain::wallet::WalletSnapshot;
use crate::shared::WalletId;
use state::SharedState;

use rand::rngs::StdRng;
use rust_decimal::Decimal;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

/// Timer cadence for a session. The defaults mirror the exchange UI:
/// a price tick every 3 s, a wallet sync every 2 s, notices shown for 4 s.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    pub poll_interval: Duration,
    pub price_interval: Duration,
    pub notice_ttl: Duration,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            poll_interval: Duration::from_millis(2000),
            price_interval: Duration::from_millis(3000),
            notice_ttl: Duration::from_millis(4000),
        }
    }
}

// ─── Commands from public API to background task ─────────────────────────────

enum Command {
    /// Sync the wallet now, out of band of the poll schedule.
    Resync,
    Notify(Notice),
    DismissNotice,
    Stop,
}

// ─── Public session handle ───────────────────────────────────────────────────

/// A live trading session for one wallet.
///
/// Created via [`crate::client::KubecoinClient::session`] (or
/// [`ExchangeSession::start`] with a custom backend). Must be started from
/// within a tokio runtime. Dropping the handle aborts the background task;
/// prefer [`stop`](Self::stop) for a graceful shutdown.
pub struct ExchangeSession<B: ExchangeBackend> {
    wallet_id: WalletId,
    backend: Arc<B>,
    shared: Arc<SharedState>,
    cmd_tx: mpsc::Sender<Command>,
    task: Option<JoinHandle<()>>,
}

impl<B: ExchangeBackend> ExchangeSession<B> {
    /// Activate a session: seed the price window, then spawn the background
    /// task that polls the wallet (first sync fires immediately) and
    /// advances the simulated price.
    pub fn start(backend: Arc<B>, wallet_id: WalletId, config: SessionConfig) -> Self {
        let mut sim = PriceSimulator::new();
        let shared = Arc::new(SharedState::new(sim.seed_window()));

        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        let task_state = TaskState {
            backend: Arc::clone(&backend),
            wallet_id: wallet_id.clone(),
            config,
            shared: Arc::clone(&shared),
            cmd_rx,
            sim,
        };
        let task = tokio::spawn(run_task(task_state));

        tracing::info!(wallet = %wallet_id, "exchange session started");
        Self {
            wallet_id,
            backend,
            shared,
            cmd_tx,
            task: Some(task),
        }
    }

    pub fn wallet_id(&self) -> &WalletId {
        &self.wallet_id
    }

    // ── State accessors ──────────────────────────────────────────────────

    /// The latest synced wallet snapshot (zeros until the first sync lands).
    pub async fn wallet(&self) -> WalletSnapshot {
        self.shared.wallet.read().await.clone()
    }

    /// The rolling window of simulated prices, oldest first.
    pub async fn prices(&self) -> PriceWindow {
        self.shared.prices.read().await.clone()
    }

    /// The most recent simulated price.
    pub async fn current_price(&self) -> Decimal {
        self.shared
            .prices
            .read()
            .await
            .latest()
            .unwrap_or(PRICE_SEED)
    }

    /// Change of the current price across the window.
    pub async fn price_stats(&self) -> PriceStats {
        self.shared.prices.read().await.stats()
    }

    /// Balance plus holdings valued at the current simulated price.
    pub async fn portfolio_value(&self) -> Decimal {
        let wallet = self.wallet().await;
        wallet.portfolio_value(self.current_price().await)
    }

    /// Outcome of the most recent completed sync attempt.
    pub fn connectivity(&self) -> Connectivity {
        self.shared.connectivity()
    }

    /// The currently displayed notice, if any.
    pub async fn notice(&self) -> Option<Notice> {
        self.shared.notice.read().await.current().cloned()
    }

    // ── Commands ─────────────────────────────────────────────────────────

    /// Clear the current notice immediately, cancelling its dismiss timer.
    pub async fn dismiss_notice(&self) {
        let _ = self.cmd_tx.send(Command::DismissNotice).await;
    }

    /// Force a wallet sync now instead of waiting for the next poll tick.
    pub async fn resync(&self) {
        let _ = self.cmd_tx.send(Command::Resync).await;
    }

    pub(crate) async fn notify(&self, notice: Notice) {
        let _ = self.cmd_tx.send(Command::Notify(notice)).await;
    }

    /// End the session: stops both timers and releases the background task.
    /// After this returns no tick can touch the session's state again.
    pub async fn stop(mut self) {
        let _ = self.cmd_tx.send(Command::Stop).await;
        if let Some(task) = self.task.take() {
            let _ = tokio::time::timeout(Duration::from_secs(5), task).await;
        }
        tracing::info!(wallet = %self.wallet_id, "exchange session stopped");
    }
}

impl<B: ExchangeBackend> Drop for ExchangeSession<B> {
    fn drop(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

// ─── Background task ─────────────────────────────────────────────────────────

struct TaskState<B> {
    backend: Arc<B>,
    wallet_id: WalletId,
    config: SessionConfig,
    shared: Arc<SharedState>,
    cmd_rx: mpsc::Receiver<Command>,
    sim: PriceSimulator<StdRng>,
}

async fn run_task<B: ExchangeBackend>(state: TaskState<B>) {
    let TaskState {
        backend,
        wallet_id,
        config,
        shared,
        mut cmd_rx,
        mut sim,
    } = state;

    // The poll interval's first tick completes immediately, so the session
    // syncs on activation rather than waiting out a full period. The price
    // window is pre-seeded, so its timer skips the immediate tick.
    let mut poll_interval = tokio::time::interval(config.poll_interval);
    let mut price_interval = tokio::time::interval(config.price_interval);
    price_interval.reset();

    // Resettable one-shot deadline for notice auto-dismiss. Parked far in
    // the future while no notice is showing.
    let far_future = tokio::time::Instant::now() + Duration::from_secs(86400);
    let notice_sleep = tokio::time::sleep_until(far_future);
    tokio::pin!(notice_sleep);
    let mut notice_deadline: Option<tokio::time::Instant> = None;

    loop {
        tokio::select! {
            // ── a) Wallet sync poll ──────────────────────────────────────
            _ = poll_interval.tick() => {
                sync_wallet(backend.as_ref(), &wallet_id, &shared).await;
            }

            // ── b) Price tick ────────────────────────────────────────────
            _ = price_interval.tick() => {
                let mut prices = shared.prices.write().await;
                let next = sim.next_point(prices.latest());
                prices.push(next);
                tracing::trace!(price = %next, "price tick");
            }

            // ── c) Command from public API ───────────────────────────────
            cmd = cmd_rx.recv() => {
                match cmd {
                    Some(Command::Resync) => {
                        sync_wallet(backend.as_ref(), &wallet_id, &shared).await;
                    }
                    Some(Command::Notify(notice)) => {
                        shared.notice.write().await.show(notice);
                        let deadline = tokio::time::Instant::now() + config.notice_ttl;
                        notice_deadline = Some(deadline);
                        notice_sleep.as_mut().reset(deadline);
                    }
                    Some(Command::DismissNotice) => {
                        shared.notice.write().await.dismiss();
                        notice_deadline = None;
                        notice_sleep.as_mut().reset(far_future);
                    }
                    // Handle dropped without stop() — clean exit either way.
                    Some(Command::Stop) | None => return,
                }
            }

            // ── d) Notice auto-dismiss ───────────────────────────────────
            () = &mut notice_sleep, if notice_deadline.is_some() => {
                shared.notice.write().await.dismiss();
                notice_deadline = None;
                notice_sleep.as_mut().reset(far_future);
            }
        }
    }
}

/// One sync attempt: fetch, then fold the outcome into shared state.
/// Failures leave the snapshot stale and flip the connectivity flag; the
/// next poll tick is the retry.
async fn sync_wallet<B: ExchangeBackend>(backend: &B, wallet_id: &WalletId, shared: &SharedState) {
    let result = backend.fetch_wallet(wallet_id).await;
    match &result {
        Ok(resp) => {
            tracing::debug!(wallet = %wallet_id, pod = %resp.pod_id, "wallet synced");
        }
        Err(err) => {
            tracing::warn!(wallet = %wallet_id, error = %err, "wallet sync failed");
        }
    }
    shared.apply_sync(result).await;
}
