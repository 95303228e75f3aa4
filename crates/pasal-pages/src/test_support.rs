//! Shared test doubles: a recording `InventoryApi` and a recording
//! `PageShell`, plus the scheduler barrier the paused-clock tests use.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use pasal_api::error::{ApiError, ApiResult, StatusCode};
use pasal_api::InventoryApi;
use pasal_core::Item;

use crate::shell::PageShell;

// =============================================================================
// Mock Inventory API
// =============================================================================

/// In-memory `InventoryApi` recording every call. Search answers with a
/// fixed item list for any query; either operation can be switched to
/// fail with a 500.
pub struct MockInventory {
    items: Vec<Item>,
    search_fails: AtomicBool,
    delete_fails: AtomicBool,
    search_calls: Mutex<Vec<(String, String)>>,
    delete_calls: Mutex<Vec<Vec<String>>>,
}

impl MockInventory {
    /// Creates a mock answering every search with `items`.
    pub fn with_items(items: Vec<Item>) -> Arc<Self> {
        Arc::new(MockInventory {
            items,
            search_fails: AtomicBool::new(false),
            delete_fails: AtomicBool::new(false),
            search_calls: Mutex::new(Vec::new()),
            delete_calls: Mutex::new(Vec::new()),
        })
    }

    /// Makes subsequent searches fail. Calls are still recorded.
    pub fn fail_searches(&self) {
        self.search_fails.store(true, Ordering::SeqCst);
    }

    /// Makes subsequent deletes fail. Calls are still recorded.
    pub fn fail_deletes(&self) {
        self.delete_fails.store(true, Ordering::SeqCst);
    }

    /// Every `(path, query)` searched, in call order.
    pub fn search_calls(&self) -> Vec<(String, String)> {
        self.search_calls.lock().unwrap().clone()
    }

    /// Every id list posted for deletion, in call order.
    pub fn delete_calls(&self) -> Vec<Vec<String>> {
        self.delete_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl InventoryApi for MockInventory {
    async fn search(&self, path: &str, query: &str) -> ApiResult<Vec<Item>> {
        self.search_calls
            .lock()
            .unwrap()
            .push((path.to_string(), query.to_string()));

        if self.search_fails.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(self.items.clone())
    }

    async fn delete_items(&self, ids: &[String]) -> ApiResult<()> {
        self.delete_calls.lock().unwrap().push(ids.to_vec());

        if self.delete_fails.load(Ordering::SeqCst) {
            return Err(ApiError::Status {
                status: StatusCode::INTERNAL_SERVER_ERROR,
            });
        }
        Ok(())
    }
}

// =============================================================================
// Recording Shell
// =============================================================================

/// `PageShell` double recording every dialog and reload, answering each
/// confirm with a fixed choice.
pub struct RecordingShell {
    confirm_answer: bool,
    alerts: Mutex<Vec<String>>,
    confirms: Mutex<Vec<String>>,
    reloads: AtomicUsize,
}

impl RecordingShell {
    /// A shell whose user accepts every confirm.
    pub fn accepting() -> Self {
        RecordingShell::with_answer(true)
    }

    /// A shell whose user declines every confirm.
    pub fn declining() -> Self {
        RecordingShell::with_answer(false)
    }

    fn with_answer(confirm_answer: bool) -> Self {
        RecordingShell {
            confirm_answer,
            alerts: Mutex::new(Vec::new()),
            confirms: Mutex::new(Vec::new()),
            reloads: AtomicUsize::new(0),
        }
    }

    /// Every alert message shown, in order.
    pub fn alerts(&self) -> Vec<String> {
        self.alerts.lock().unwrap().clone()
    }

    /// Every confirm prompt shown, in order.
    pub fn confirms(&self) -> Vec<String> {
        self.confirms.lock().unwrap().clone()
    }

    /// How many reloads were requested.
    pub fn reloads(&self) -> usize {
        self.reloads.load(Ordering::SeqCst)
    }
}

impl PageShell for RecordingShell {
    fn alert(&self, message: &str) {
        self.alerts.lock().unwrap().push(message.to_string());
    }

    fn confirm(&self, message: &str) -> bool {
        self.confirms.lock().unwrap().push(message.to_string());
        self.confirm_answer
    }

    fn reload(&self) {
        self.reloads.fetch_add(1, Ordering::SeqCst);
    }
}

// =============================================================================
// Scheduler Barrier
// =============================================================================

/// Lets every ready task on the current-thread test runtime run to its
/// next await point. Paused-clock tests call this after queueing
/// commands (so the actor arms its timers before the clock moves) and
/// after advancing (so fires and fetches drain through the pipeline).
pub async fn settle() {
    for _ in 0..32 {
        tokio::task::yield_now().await;
    }
}
