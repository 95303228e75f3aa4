//! # Cart Page Controller
//!
//! The create-order page: one actor owning the cart table, the add-item
//! typeahead, the totals readouts, and the payment-method toggle. Every
//! DOM event the shell forwards becomes a command on one queue, so
//! handlers run to completion in order exactly like single-threaded
//! event dispatch.
//!
//! ## Debounce Slots
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Cart Page Timers                                 │
//! │                                                                         │
//! │  add input (typing)   250ms ──► suggestion query                        │
//! │  add input (commit)   150ms ──► selection lookup ──► insert/merge row   │
//! │  quantity (per row)   100ms ──► totals recompute                        │
//! │  discount              80ms ──► totals recompute                        │
//! │                                                                         │
//! │  remove row           none  ──► totals recompute immediately           │
//! │  payment method       none  ──► visibility + recompute immediately     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Display State
//! The totals readouts are stored display strings, rewritten only by a
//! recompute. A quantity edit therefore shows its old totals until the
//! quiet period elapses, exactly as the rendered page would.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use tokio::sync::{mpsc, oneshot};
use tracing::{debug, info};

use pasal_api::error::ApiResult;
use pasal_api::{InventoryApi, ITEMS_SEARCH_PATH};
use pasal_core::{candidate_sku, Cart, CartRow, FieldVisibility, Item};

use crate::debounce::Debouncer;
use crate::error::{PageError, PageResult};
use crate::typeahead::{TypeaheadState, DEFAULT_TYPEAHEAD_WAIT_MS};
use crate::view::CartView;

// =============================================================================
// Constants
// =============================================================================

/// Quiet period after a committed add-input value before the selection
/// lookup fires.
pub const DEFAULT_SELECTION_WAIT_MS: u64 = 150;

/// Quiet period after a quantity keystroke before totals recompute.
pub const DEFAULT_QUANTITY_WAIT_MS: u64 = 100;

/// Quiet period after a discount keystroke before totals recompute.
pub const DEFAULT_DISCOUNT_WAIT_MS: u64 = 80;

/// Command channel capacity.
const CHANNEL_CAPACITY: usize = 256;

// =============================================================================
// Configuration
// =============================================================================

/// Configuration for a cart page controller.
#[derive(Debug, Clone)]
pub struct CartPageConfig {
    /// Endpoint path the add-item typeahead is bound to.
    pub typeahead_path: String,

    /// Quiet period for suggestion queries.
    pub typeahead_wait: Duration,

    /// Quiet period for the selection lookup after a commit.
    pub selection_wait: Duration,

    /// Quiet period for per-row quantity edits.
    pub quantity_wait: Duration,

    /// Quiet period for discount edits.
    pub discount_wait: Duration,

    /// Rows already on the page when the controller starts
    /// (server-rendered order being edited).
    pub initial_rows: Vec<CartRow>,

    /// Initially selected payment method form value.
    pub payment_method: String,
}

impl Default for CartPageConfig {
    fn default() -> Self {
        CartPageConfig {
            typeahead_path: ITEMS_SEARCH_PATH.to_string(),
            typeahead_wait: Duration::from_millis(DEFAULT_TYPEAHEAD_WAIT_MS),
            selection_wait: Duration::from_millis(DEFAULT_SELECTION_WAIT_MS),
            quantity_wait: Duration::from_millis(DEFAULT_QUANTITY_WAIT_MS),
            discount_wait: Duration::from_millis(DEFAULT_DISCOUNT_WAIT_MS),
            initial_rows: Vec::new(),
            payment_method: "cash".to_string(),
        }
    }
}

impl CartPageConfig {
    /// Sets the rows already on the page.
    pub fn initial_rows(mut self, rows: Vec<CartRow>) -> Self {
        self.initial_rows = rows;
        self
    }

    /// Sets the initially selected payment method.
    pub fn payment_method(mut self, value: impl Into<String>) -> Self {
        self.payment_method = value.into();
        self
    }
}

// =============================================================================
// Page State
// =============================================================================

/// Everything the cart template renders, owned by the actor task.
struct PageState {
    cart: Cart,
    typeahead: TypeaheadState,
    add_input: String,
    discount_input: String,
    paid_amount: String,
    payment_method: String,
    subtotal_text: String,
    tax_text: String,
    discount_text: String,
    total_text: String,
}

impl PageState {
    fn new(config: &CartPageConfig) -> Self {
        let mut state = PageState {
            cart: Cart::from_rows(config.initial_rows.clone()),
            typeahead: TypeaheadState::new(),
            add_input: String::new(),
            discount_input: String::new(),
            paid_amount: String::new(),
            payment_method: config.payment_method.clone(),
            subtotal_text: String::new(),
            tax_text: String::new(),
            discount_text: String::new(),
            total_text: String::new(),
        };
        state.recompute();
        state
    }

    /// Recomputes the totals from current row text and rewrites the
    /// readouts. For cash orders the paid amount is overwritten with the
    /// new total, clobbering anything the cashier typed there.
    fn recompute(&mut self) {
        let totals = self.cart.totals(&self.discount_input);
        self.subtotal_text = totals.subtotal_text();
        self.tax_text = totals.tax_text();
        self.discount_text = totals.discount_text();
        self.total_text = totals.total_text();

        if self.payment_method == "cash" {
            self.paid_amount = totals.total_text();
        }

        debug!(
            subtotal = totals.subtotal,
            tax = totals.tax,
            discount = totals.discount,
            total = totals.total,
            "totals recomputed"
        );
    }

    fn view(&self) -> CartView {
        CartView {
            rows: self.cart.rows().to_vec(),
            suggestions: self.typeahead.suggestions().to_vec(),
            add_input: self.add_input.clone(),
            discount_input: self.discount_input.clone(),
            paid_amount: self.paid_amount.clone(),
            payment_method: self.payment_method.clone(),
            visibility: FieldVisibility::for_value(&self.payment_method),
            subtotal: self.subtotal_text.clone(),
            tax: self.tax_text.clone(),
            discount: self.discount_text.clone(),
            total: self.total_text.clone(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Commands for the cart page controller. The first group are shell
/// events; the `*Fire` and `*Fetched` groups are internal deliveries
/// from debounce timers and fetch tasks.
#[derive(Debug)]
enum CartCommand {
    /// The add-item input's text changed.
    AddInputChanged { text: String },
    /// The add-item input was committed (suggestion picked or enter).
    AddInputCommitted,
    /// A row's quantity input changed.
    QuantityChanged { sku: String, text: String },
    /// A row's remove button was clicked.
    RemoveRowClicked { sku: String },
    /// The discount input's text changed.
    DiscountChanged { text: String },
    /// The paid-amount input's text changed.
    PaidAmountChanged { text: String },
    /// The payment method selection changed.
    PaymentMethodChanged { value: String },
    /// Snapshot the current view.
    View { reply: oneshot::Sender<CartView> },
    /// Stop the controller.
    Shutdown,

    /// Typeahead debounce elapsed.
    TypeaheadFire,
    /// Selection debounce elapsed.
    SelectionFire,
    /// A row's quantity debounce elapsed.
    QuantityFire { sku: String },
    /// Discount debounce elapsed.
    DiscountFire,
    /// A suggestion query response arrived.
    SuggestionsFetched {
        seq: u64,
        result: ApiResult<Vec<Item>>,
    },
    /// A selection lookup response arrived. `raw` is the input text the
    /// lookup was fired with.
    SelectionFetched {
        raw: String,
        result: ApiResult<Vec<Item>>,
    },
}

// =============================================================================
// Cart Page Actor
// =============================================================================

/// The cart page controller.
pub struct CartPage {
    config: CartPageConfig,
    api: Arc<dyn InventoryApi>,
}

/// Handle for driving a cart page controller.
#[derive(Clone)]
pub struct CartPageHandle {
    cmd_tx: mpsc::Sender<CartCommand>,
}

impl CartPageHandle {
    /// Forwards an `input` event on the add-item field.
    pub async fn input_add_item(&self, text: impl Into<String>) -> PageResult<()> {
        self.send(CartCommand::AddInputChanged { text: text.into() }).await
    }

    /// Forwards a `change` event on the add-item field.
    pub async fn commit_add_item(&self) -> PageResult<()> {
        self.send(CartCommand::AddInputCommitted).await
    }

    /// Forwards an `input` event on a row's quantity field.
    pub async fn input_quantity(
        &self,
        sku: impl Into<String>,
        text: impl Into<String>,
    ) -> PageResult<()> {
        self.send(CartCommand::QuantityChanged {
            sku: sku.into(),
            text: text.into(),
        })
        .await
    }

    /// Forwards a click on a row's remove button.
    pub async fn click_remove(&self, sku: impl Into<String>) -> PageResult<()> {
        self.send(CartCommand::RemoveRowClicked { sku: sku.into() }).await
    }

    /// Forwards an `input` event on the discount field.
    pub async fn input_discount(&self, text: impl Into<String>) -> PageResult<()> {
        self.send(CartCommand::DiscountChanged { text: text.into() }).await
    }

    /// Forwards an `input` event on the paid-amount field.
    pub async fn input_paid_amount(&self, text: impl Into<String>) -> PageResult<()> {
        self.send(CartCommand::PaidAmountChanged { text: text.into() }).await
    }

    /// Forwards a `change` event on the payment method select.
    pub async fn change_payment_method(&self, value: impl Into<String>) -> PageResult<()> {
        self.send(CartCommand::PaymentMethodChanged { value: value.into() }).await
    }

    /// Returns a snapshot of everything the template renders.
    pub async fn view(&self) -> PageResult<CartView> {
        let (reply, rx) = oneshot::channel();
        self.send(CartCommand::View { reply }).await?;
        rx.await.map_err(|_| PageError::ControllerGone)
    }

    /// Stops the controller.
    pub async fn shutdown(&self) -> PageResult<()> {
        self.send(CartCommand::Shutdown).await
    }

    async fn send(&self, cmd: CartCommand) -> PageResult<()> {
        self.cmd_tx
            .send(cmd)
            .await
            .map_err(|_| PageError::ControllerGone)
    }
}

impl CartPage {
    /// Creates a cart page controller.
    pub fn new(config: CartPageConfig, api: Arc<dyn InventoryApi>) -> Self {
        CartPage { config, api }
    }

    /// Starts the controller and returns a handle.
    pub fn start(self) -> CartPageHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(CHANNEL_CAPACITY);
        let events_tx = cmd_tx.clone();

        tokio::spawn(async move {
            self.run(cmd_rx, events_tx).await;
        });

        CartPageHandle { cmd_tx }
    }

    /// Main controller loop.
    async fn run(
        self,
        mut cmd_rx: mpsc::Receiver<CartCommand>,
        events_tx: mpsc::Sender<CartCommand>,
    ) {
        info!(
            rows = self.config.initial_rows.len(),
            payment = %self.config.payment_method,
            "cart page started"
        );

        let mut state = PageState::new(&self.config);

        let mut typeahead_debounce =
            Debouncer::new(self.config.typeahead_wait, events_tx.clone());
        let mut selection_debounce =
            Debouncer::new(self.config.selection_wait, events_tx.clone());
        let mut discount_debounce =
            Debouncer::new(self.config.discount_wait, events_tx.clone());
        let mut quantity_debounces: HashMap<String, Debouncer<CartCommand>> = HashMap::new();

        while let Some(cmd) = cmd_rx.recv().await {
            match cmd {
                CartCommand::AddInputChanged { text } => {
                    state.add_input = text;
                    typeahead_debounce.call(CartCommand::TypeaheadFire);
                }
                CartCommand::AddInputCommitted => {
                    selection_debounce.call(CartCommand::SelectionFire);
                }
                CartCommand::QuantityChanged { sku, text } => {
                    if state.cart.set_quantity_text(&sku, &text) {
                        quantity_debounces
                            .entry(sku.clone())
                            .or_insert_with(|| {
                                Debouncer::new(self.config.quantity_wait, events_tx.clone())
                            })
                            .call(CartCommand::QuantityFire { sku });
                    }
                }
                CartCommand::RemoveRowClicked { sku } => {
                    let removed = state.cart.remove(&sku);
                    quantity_debounces.remove(&sku);
                    debug!(sku = %sku, removed, "row removed");
                    state.recompute();
                }
                CartCommand::DiscountChanged { text } => {
                    state.discount_input = text;
                    discount_debounce.call(CartCommand::DiscountFire);
                }
                CartCommand::PaidAmountChanged { text } => {
                    state.paid_amount = text;
                }
                CartCommand::PaymentMethodChanged { value } => {
                    debug!(value = %value, "payment method changed");
                    state.payment_method = value;
                    state.recompute();
                }
                CartCommand::View { reply } => {
                    let _ = reply.send(state.view());
                }
                CartCommand::Shutdown => {
                    info!("cart page shutting down");
                    break;
                }

                CartCommand::TypeaheadFire => {
                    if let Some((seq, query)) = state.typeahead.next_query(&state.add_input) {
                        debug!(seq, query = %query, "suggestion query");
                        let api = Arc::clone(&self.api);
                        let endpoint = self.config.typeahead_path.clone();
                        let events = events_tx.clone();
                        tokio::spawn(async move {
                            let result = api.search(&endpoint, &query).await;
                            let _ = events
                                .send(CartCommand::SuggestionsFetched { seq, result })
                                .await;
                        });
                    }
                }
                CartCommand::SelectionFire => {
                    let raw = state.add_input.trim().to_string();
                    if raw.is_empty() {
                        continue;
                    }
                    let query = candidate_sku(&raw).to_string();
                    debug!(query = %query, "selection lookup");
                    let api = Arc::clone(&self.api);
                    let events = events_tx.clone();
                    tokio::spawn(async move {
                        // Selection lookups always hit the items endpoint,
                        // whatever the input's typeahead binding.
                        let result = api.search(ITEMS_SEARCH_PATH, &query).await;
                        let _ = events
                            .send(CartCommand::SelectionFetched { raw, result })
                            .await;
                    });
                }
                CartCommand::QuantityFire { sku } => {
                    debug!(sku = %sku, "quantity settled");
                    state.recompute();
                }
                CartCommand::DiscountFire => {
                    state.recompute();
                }
                CartCommand::SuggestionsFetched { seq, result } => match result {
                    Ok(items) => {
                        if state.typeahead.apply(seq, &items) {
                            debug!(count = items.len(), "suggestions updated");
                        } else {
                            debug!(seq, "stale suggestions dropped");
                        }
                    }
                    Err(error) => {
                        debug!(%error, "suggestion fetch failed");
                    }
                },
                CartCommand::SelectionFetched { raw, result } => match result {
                    Ok(items) => {
                        let sku = candidate_sku(&raw);
                        if let Some(item) =
                            items.iter().find(|i| i.matches_selection(sku, &raw))
                        {
                            let outcome = state.cart.add_or_merge(
                                &item.sku,
                                &item.name,
                                item.sale_price,
                                item.tax_rate,
                                1.0,
                            );
                            debug!(sku = %item.sku, ?outcome, "item committed");
                            state.add_input.clear();
                            state.recompute();
                        } else {
                            debug!(raw = %raw, "no matching item");
                        }
                    }
                    Err(error) => {
                        debug!(%error, "selection fetch failed");
                    }
                },
            }
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
