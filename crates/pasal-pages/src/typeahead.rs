//! # Typeahead
//!
//! Search-as-you-type suggestions for any input bound to a query
//! endpoint. Keystrokes are debounced; a fired query hits the endpoint
//! with the input's current trimmed text; results replace the
//! suggestion list.
//!
//! ## Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Typeahead Flow                                   │
//! │                                                                         │
//! │  keystrokes ──► Debouncer (250ms) ──► Fire                              │
//! │                                        │                                │
//! │                     trimmed empty? ────┤ yes → nothing (list stays)     │
//! │                                        │ no                             │
//! │                                        ▼                                │
//! │                          seq += 1, GET <endpoint>?q=<text>              │
//! │                                        │                                │
//! │                 response arrives ──────┤ seq stale? → dropped           │
//! │                                        │ error?     → swallowed         │
//! │                                        ▼                                │
//! │                          suggestions = one per item,                    │
//! │                          "<sku> | <name> | <supplier>"                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Stale Responses
//! Responses are sequence-stamped: only the reply to the most recently
//! issued query is applied. Without this, a slow response to "ap" could
//! arrive after the response to "apple" and overwrite the fresher list.
//! Failed fetches are swallowed either way; the list simply stays stale.

use std::sync::Arc;
use std::time::Duration;

use serde::Serialize;
use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};
use ts_rs::TS;

use pasal_api::error::ApiResult;
use pasal_api::{InventoryApi, ITEMS_SEARCH_PATH};
use pasal_core::Item;

use crate::debounce::Debouncer;
use crate::error::{PageError, PageResult};

// =============================================================================
// Constants
// =============================================================================

/// Quiet period after the last keystroke before a query fires.
pub const DEFAULT_TYPEAHEAD_WAIT_MS: u64 = 250;

/// Command channel capacity.
const CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Suggestion
// =============================================================================

/// One entry of the suggestion list, carrying the auxiliary item data
/// the cart needs if the suggestion is committed.
#[derive(Debug, Clone, PartialEq, Serialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Suggestion {
    /// Display text: `"<sku> | <name> | <supplier>"`.
    pub label: String,

    /// Item sku.
    pub sku: String,

    /// Item sale price.
    pub price: f64,

    /// Item tax rate percentage.
    pub tax_rate: f64,
}

impl From<&Item> for Suggestion {
    fn from(item: &Item) -> Self {
        Suggestion {
            label: item.suggestion_label(),
            sku: item.sku.clone(),
            price: item.sale_price,
            tax_rate: item.tax_rate,
        }
    }
}

// =============================================================================
// Typeahead State
// =============================================================================

/// The pure suggestion-list state: issued-query sequence plus the
/// current list. The cart page embeds one of these for its add-item
/// input; the standalone [`Typeahead`] actor wraps one for lone inputs.
#[derive(Debug, Default)]
pub struct TypeaheadState {
    /// Sequence number of the most recently issued query.
    seq: u64,
    /// Current suggestion list.
    suggestions: Vec<Suggestion>,
}

impl TypeaheadState {
    /// Creates an empty state.
    pub fn new() -> Self {
        TypeaheadState::default()
    }

    /// Called when the debounce fires: trims the input text and, if
    /// anything is left, issues a new query sequence number.
    ///
    /// Returns `None` for empty text; the suggestion list is untouched
    /// and no request should be made.
    pub fn next_query(&mut self, text: &str) -> Option<(u64, String)> {
        let query = text.trim();
        if query.is_empty() {
            return None;
        }
        self.seq += 1;
        Some((self.seq, query.to_string()))
    }

    /// Applies a query response. Returns `false` (list untouched) when
    /// `seq` is not the most recently issued query.
    pub fn apply(&mut self, seq: u64, items: &[Item]) -> bool {
        if seq != self.seq {
            return false;
        }
        self.suggestions = items.iter().map(Suggestion::from).collect();
        true
    }

    /// The current suggestion list.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }
}

// =============================================================================
// Typeahead Configuration
// =============================================================================

/// Configuration for a standalone typeahead binding.
#[derive(Debug, Clone)]
pub struct TypeaheadConfig {
    /// Endpoint path the input is bound to.
    pub endpoint: String,
    /// Quiet period after the last keystroke.
    pub wait: Duration,
}

impl Default for TypeaheadConfig {
    fn default() -> Self {
        TypeaheadConfig {
            endpoint: ITEMS_SEARCH_PATH.to_string(),
            wait: Duration::from_millis(DEFAULT_TYPEAHEAD_WAIT_MS),
        }
    }
}

impl TypeaheadConfig {
    /// Creates a config for the given endpoint path with the default
    /// quiet period.
    pub fn new(endpoint: impl Into<String>) -> Self {
        TypeaheadConfig {
            endpoint: endpoint.into(),
            ..TypeaheadConfig::default()
        }
    }
}

// =============================================================================
// Typeahead Actor
// =============================================================================

/// Standalone typeahead controller for one bound input (the inventory
/// list's search box, for example). The cart page does not use this
/// actor; it embeds [`TypeaheadState`] in its own event loop.
pub struct Typeahead {
    config: TypeaheadConfig,
    api: Arc<dyn InventoryApi>,
}

/// Handle for driving a typeahead controller.
#[derive(Clone)]
pub struct TypeaheadHandle {
    cmd_tx: mpsc::Sender<TypeaheadCommand>,
}

/// Commands for the typeahead controller.
#[derive(Debug)]
enum TypeaheadCommand {
    /// The bound input's text changed.
    Input { text: String },
    /// Debounce elapsed; query with the current text.
    Fire,
    /// A query response arrived.
    Fetched {
        seq: u64,
        result: ApiResult<Vec<Item>>,
    },
    /// Snapshot the current suggestion list.
    Suggestions {
        reply: oneshot::Sender<Vec<Suggestion>>,
    },
    /// Stop the controller.
    Shutdown,
}

impl TypeaheadHandle {
    /// Forwards a text change from the bound input.
    pub async fn input(&self, text: impl Into<String>) -> PageResult<()> {
        self.send(TypeaheadCommand::Input { text: text.into() }).await
    }

    /// Returns the current suggestion list.
    pub async fn suggestions(&self) -> PageResult<Vec<Suggestion>> {
        let (reply, rx) = oneshot::channel();
        self.send(TypeaheadCommand::Suggestions { reply }).await?;
        rx.await.map_err(|_| PageError::ControllerGone)
    }

    /// Stops the controller.
    pub async fn shutdown(&self) -> PageResult<()> {
        self.send(TypeaheadCommand::Shutdown).await
    }

    async fn send(&self, cmd: TypeaheadCommand) -> PageResult<()> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| PageError::ControllerGone)
    }
}

impl Typeahead {
    /// Creates a typeahead controller.
    pub fn new(config: TypeaheadConfig, api: Arc<dyn InventoryApi>) -> Self {
        Typeahead { config, api }
    }

    /// Starts the controller and returns a handle.
    pub fn start(self) -> TypeaheadHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let events_tx = cmd_tx.clone();

        tokio::spawn(async move {
            self.run(cmd_rx, events_tx).await;
        });

        TypeaheadHandle { cmd_tx }
    }

    /// Main controller loop.
    async fn run(
        self,
        mut cmd_rx: mpsc::Receiver<TypeaheadCommand>,
        events_tx: mpsc::Sender<TypeaheadCommand>,
    ) {
        info!(endpoint = %self.config.endpoint, "typeahead started");

        let mut state = TypeaheadState::new();
        let mut text = String::new();
        let mut debounce = Debouncer::new(self.config.wait, events_tx.clone());

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                TypeaheadCommand::Input { text: current } => {
                    text = current;
                    debounce.call(TypeaheadCommand::Fire);
                }
                TypeaheadCommand::Fire => {
                    if let Some((seq, query)) = state.next_query(&text) {
                        debug!(seq, query = %query, "suggestion query");
                        let api = Arc::clone(&self.api);
                        let endpoint = self.config.endpoint.clone();
                        let events = events_tx.clone();
                        tokio::spawn(async move {
                            let result = api.search(&endpoint, &query).await;
                            let _ = events.send(TypeaheadCommand::Fetched { seq, result }).await;
                        });
                    }
                }
                TypeaheadCommand::Fetched { seq, result } => match result {
                    Ok(items) => {
                        if state.apply(seq, &items) {
                            debug!(count = items.len(), "suggestions updated");
                        } else {
                            debug!(seq, "stale suggestions dropped");
                        }
                    }
                    Err(error) => {
                        debug!(%error, "suggestion fetch failed");
                    }
                },
                TypeaheadCommand::Suggestions { reply } => {
                    let _ = reply.send(state.suggestions().to_vec());
                }
                TypeaheadCommand::Shutdown => {
                    info!("typeahead shutting down");
                    break;
                }
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
