//! Shared session state, read by the presentation layer while the
//! background task writes it.

use crate::domain::notify::NoticeSlot;
use crate::domain::price::PriceWindow;
use crate::domain::wallet::wire::WalletResponse;
use crate::domain::wallet::WalletSnapshot;
use crate::error::HttpError;

use async_lock::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};

/// Binary connectivity indicator: a projection of the most recent completed
/// sync attempt, nothing more. Success clears it, failure sets it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Connectivity {
    Ok,
    Error,
}

impl Connectivity {
    pub fn is_error(&self) -> bool {
        matches!(self, Connectivity::Error)
    }
}

pub(crate) struct SharedState {
    pub(crate) wallet: RwLock<WalletSnapshot>,
    pub(crate) prices: RwLock<PriceWindow>,
    pub(crate) notice: RwLock<NoticeSlot>,
    sync_ok: AtomicBool,
}

impl SharedState {
    pub(crate) fn new(window: PriceWindow) -> Self {
        Self {
            wallet: RwLock::new(WalletSnapshot::default()),
            prices: RwLock::new(window),
            notice: RwLock::new(NoticeSlot::new()),
            // The banner stays hidden until a sync has actually failed.
            sync_ok: AtomicBool::new(true),
        }
    }

    pub(crate) fn connectivity(&self) -> Connectivity {
        if self.sync_ok.load(Ordering::SeqCst) {
            Connectivity::Ok
        } else {
            Connectivity::Error
        }
    }

    /// Fold a sync attempt into the session state.
    ///
    /// Success replaces the whole snapshot in one write — balance, coins,
    /// and pod id change together or not at all. Failure leaves the stale
    /// snapshot visible and only flips the connectivity flag.
    pub(crate) async fn apply_sync(&self, result: Result<WalletResponse, HttpError>) {
        match result {
            Ok(resp) => {
                *self.wallet.write().await = WalletSnapshot::from(resp);
                self.sync_ok.store(true, Ordering::SeqCst);
            }
            Err(_) => {
                self.sync_ok.store(false, Ordering::SeqCst);
            }
        }
    }
}
