//! # Cart Store
//!
//! Sole authority over the persisted shopping cart.
//!
//! ## Cart Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  View Action              Store Operation          Persisted Change     │
//! │  ───────────              ───────────────          ────────────────     │
//! │                                                                         │
//! │  Click Add to Cart ──────► add(product) ─────────► line +1 / append    │
//! │                                                                         │
//! │  Change Quantity ────────► set_quantity(id, n) ──► line.quantity = n   │
//! │                                                     (n ≤ 0 removes)    │
//! │  Click Remove ───────────► remove(id) ───────────► line deleted        │
//! │                                                                         │
//! │  Click Checkout ─────────► begin_checkout() ─────► cart emptied        │
//! │                                                                         │
//! │  Render Cart Page ───────► items() ──────────────► (read only)         │
//! │                                                                         │
//! │  Every mutation: decode slot → modify → write slot → notify            │
//! │  subscribers (in registration order) → emit analytics event.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Execution Model
//! Single-threaded and synchronous: one user action at a time drives one
//! operation to completion, so the decode-modify-write sequence inside each
//! mutator cannot interleave with another operation. The store re-reads the
//! slot on every access instead of caching; views keep only transient
//! snapshots for rendering.
//!
//! ## Notification Scope
//! The observer registry covers this store instance only. Another process
//! sharing the same backing storage must watch the storage itself; no
//! cross-context delivery is attempted here.

use tracing::{debug, warn};

use ecommsim_core::{CartLine, CartTotals, Product};

use crate::analytics::{AnalyticsEvent, AnalyticsSink, EventLine, EventName, NoopSink};
use crate::config::StoreConfig;
use crate::error::StoreResult;
use crate::storage::StorageBackend;

// =============================================================================
// Subscriptions
// =============================================================================

/// Handle identifying a registered change subscriber.
pub type SubscriptionId = u64;

/// A registered change callback.
struct Subscriber {
    id: SubscriptionId,
    callback: Box<dyn Fn()>,
}

// =============================================================================
// Cart Store
// =============================================================================

/// The persisted cart and everything that reacts to it.
///
/// ## Invariants
/// - Lines are unique by product id; adding an existing product increments
///   its quantity instead of appending
/// - Every stored quantity is at least 1; a quantity reaching zero removes
///   the line
/// - Insertion order is preserved for display
///
/// ## Example
/// ```rust
/// use ecommsim_store::{Catalog, CartStore, MemoryStorage};
///
/// let catalog = Catalog::demo();
/// let mut store = CartStore::new(MemoryStorage::new());
///
/// let backpack = catalog.get_by_id("3").unwrap();
/// store.add(backpack)?;
/// store.add(backpack)?;
///
/// assert_eq!(store.items()[0].quantity, 2);
/// # Ok::<(), ecommsim_store::StoreError>(())
/// ```
pub struct CartStore<S: StorageBackend> {
    storage: S,
    config: StoreConfig,
    sink: Box<dyn AnalyticsSink>,
    subscribers: Vec<Subscriber>,
    next_subscription: SubscriptionId,
}

impl<S: StorageBackend> CartStore<S> {
    /// Creates a store over the given backend with default configuration and
    /// no analytics.
    pub fn new(storage: S) -> Self {
        CartStore {
            storage,
            config: StoreConfig::default(),
            sink: Box::new(NoopSink),
            subscribers: Vec::new(),
            next_subscription: 0,
        }
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: StoreConfig) -> Self {
        self.config = config;
        self
    }

    /// Injects an analytics sink.
    pub fn with_sink(mut self, sink: Box<dyn AnalyticsSink>) -> Self {
        self.sink = sink;
        self
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the current cart lines, decoded from the storage slot.
    ///
    /// ## Behavior
    /// - Absent slot: empty cart
    /// - Malformed payload: logged at WARN, empty cart, never an error
    /// - Backend read failure: logged at WARN, empty cart
    ///
    /// No partial recovery is attempted on a malformed payload; the whole
    /// collection is replaced by the next successful write.
    pub fn items(&self) -> Vec<CartLine> {
        let payload = match self.storage.get(&self.config.slot_key) {
            Ok(Some(payload)) => payload,
            Ok(None) => return Vec::new(),
            Err(e) => {
                warn!(slot = %self.config.slot_key, error = %e, "cart slot unreadable, treating as empty");
                return Vec::new();
            }
        };

        match serde_json::from_str(&payload) {
            Ok(lines) => lines,
            Err(e) => {
                warn!(slot = %self.config.slot_key, error = %e, "malformed cart payload, treating as empty");
                Vec::new()
            }
        }
    }

    /// Derived totals for the current cart.
    pub fn totals(&self) -> CartTotals {
        CartTotals::from(self.items().as_slice())
    }

    // =========================================================================
    // Mutations
    // =========================================================================

    /// Adds one unit of a product to the cart.
    ///
    /// ## Behavior
    /// - Product already in cart: its quantity increases by 1
    /// - Otherwise: a new line is appended at quantity 1, snapshotting every
    ///   product field
    ///
    /// Persists, notifies subscribers, and emits an `add_to_cart` event for
    /// the one added unit.
    pub fn add(&mut self, product: &Product) -> StoreResult<()> {
        debug!(product_id = %product.id, "add to cart");

        let mut lines = self.items();
        match lines.iter_mut().find(|line| line.product.id == product.id) {
            Some(line) => line.quantity += 1,
            None => lines.push(CartLine::new(product)),
        }

        self.persist(&lines)?;
        self.notify_all();
        self.emit(EventName::AddToCart, vec![EventLine::from_product(product, 1)]);
        Ok(())
    }

    /// Removes a line from the cart by product id.
    ///
    /// ## Behavior
    /// Always persists and notifies, even when no line matched (removal is
    /// idempotent). The `remove_from_cart` event is emitted only when a line
    /// was actually removed, carrying the quantity it had at removal.
    pub fn remove(&mut self, product_id: &str) -> StoreResult<()> {
        debug!(product_id = %product_id, "remove from cart");

        let mut lines = self.items();
        let removed = lines
            .iter()
            .position(|line| line.product.id == product_id)
            .map(|index| lines.remove(index));

        self.persist(&lines)?;
        self.notify_all();
        if let Some(line) = removed {
            self.emit(EventName::RemoveFromCart, vec![EventLine::from(&line)]);
        }
        Ok(())
    }

    /// Sets the quantity of an existing line.
    ///
    /// ## Behavior
    /// - `quantity >= 1`: the line is set to exactly that quantity
    /// - `quantity <= 0`: a removal request that routes through
    ///   [`Self::remove`], analytics event included
    /// - No line with that id: a complete no-op (no write, no notification)
    pub fn set_quantity(&mut self, product_id: &str, quantity: i64) -> StoreResult<()> {
        debug!(product_id = %product_id, quantity = %quantity, "set cart quantity");

        let mut lines = self.items();
        let index = match lines.iter().position(|line| line.product.id == product_id) {
            Some(index) => index,
            None => {
                debug!(product_id = %product_id, "set_quantity on missing line, ignoring");
                return Ok(());
            }
        };

        if quantity <= 0 {
            return self.remove(product_id);
        }

        // Saturates far beyond any realistic cart quantity.
        lines[index].quantity = u32::try_from(quantity).unwrap_or(u32::MAX);

        self.persist(&lines)?;
        self.notify_all();
        Ok(())
    }

    /// Empties the cart.
    ///
    /// Persists the empty collection and notifies; emits no analytics event.
    pub fn clear(&mut self) -> StoreResult<()> {
        debug!("clear cart");

        self.persist(&[])?;
        self.notify_all();
        Ok(())
    }

    /// Starts a simulated checkout.
    ///
    /// ## Behavior
    /// - Empty cart: a complete no-op (nothing to check out)
    /// - Otherwise: the cart is emptied and persisted, subscribers are
    ///   notified, and a `begin_checkout` event carrying the full line list
    ///   is emitted
    ///
    /// There is no payment step; checkout in this storefront ends here.
    pub fn begin_checkout(&mut self) -> StoreResult<()> {
        let lines = self.items();
        if lines.is_empty() {
            debug!("begin_checkout on empty cart, ignoring");
            return Ok(());
        }

        debug!(line_count = lines.len(), "begin checkout");

        self.persist(&[])?;
        self.notify_all();
        self.emit(
            EventName::BeginCheckout,
            lines.iter().map(EventLine::from).collect(),
        );
        Ok(())
    }

    /// Reports that the cart was viewed.
    ///
    /// Read-only: emits a `view_cart` event with the current lines and
    /// subtotal; does not persist or notify.
    pub fn record_cart_view(&self) {
        let lines = self.items();
        debug!(line_count = lines.len(), "cart viewed");
        self.emit(
            EventName::ViewCart,
            lines.iter().map(EventLine::from).collect(),
        );
    }

    // =========================================================================
    // Subscriptions
    // =========================================================================

    /// Registers a change callback, returning a handle for unsubscribing.
    ///
    /// Callbacks carry no payload: a notified subscriber re-reads
    /// [`Self::items`] for fresh state. Subscribers are invoked synchronously,
    /// in registration order, once per mutating operation.
    pub fn subscribe(&mut self, callback: impl Fn() + 'static) -> SubscriptionId {
        let id = self.next_subscription;
        self.next_subscription += 1;
        self.subscribers.push(Subscriber {
            id,
            callback: Box::new(callback),
        });
        debug!(subscription = id, "subscriber registered");
        id
    }

    /// Removes a change callback. Returns whether it was registered.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|subscriber| subscriber.id != id);
        let removed = self.subscribers.len() != before;
        debug!(subscription = id, removed, "subscriber unregistered");
        removed
    }

    // =========================================================================
    // Internals
    // =========================================================================

    /// Serializes the lines and writes them to the storage slot.
    fn persist(&mut self, lines: &[CartLine]) -> StoreResult<()> {
        let payload = serde_json::to_string(lines)?;
        self.storage.set(&self.config.slot_key, &payload)
    }

    /// Invokes every subscriber, in registration order.
    fn notify_all(&self) {
        for subscriber in &self.subscribers {
            (subscriber.callback)();
        }
    }

    /// Builds and records an analytics event (fire-and-forget).
    fn emit(&self, name: EventName, items: Vec<EventLine>) {
        let event = AnalyticsEvent::new(name, self.config.currency_code.clone(), items);
        self.sink.record(event);
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::AnalyticsEvent;
    use crate::storage::{FileStorage, MemoryStorage};
    use ecommsim_core::Price;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    /// Sink test double that keeps every recorded event.
    #[derive(Default)]
    struct RecordingSink {
        events: RefCell<Vec<AnalyticsEvent>>,
    }

    impl AnalyticsSink for Rc<RecordingSink> {
        fn record(&self, event: AnalyticsEvent) {
            self.events.borrow_mut().push(event);
        }
    }

    fn test_product(id: &str, price_cents: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: format!("Description {}", id),
            price: Price::from_cents(price_cents),
            category: "Accessories".to_string(),
            image_url: format!("https://placehold.co/600x800.png?p={}", id),
            images: None,
            rating: Some(4.8),
            reviews: Some(210),
            featured: Some(true),
        }
    }

    fn store_with_sink() -> (CartStore<MemoryStorage>, Rc<RecordingSink>) {
        let sink = Rc::new(RecordingSink::default());
        let store = CartStore::new(MemoryStorage::new()).with_sink(Box::new(Rc::clone(&sink)));
        (store, sink)
    }

    // -------------------------------------------------------------------------
    // Reads
    // -------------------------------------------------------------------------

    #[test]
    fn test_items_empty_when_slot_absent() {
        let store = CartStore::new(MemoryStorage::new());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_items_empty_on_malformed_payload() {
        let mut storage = MemoryStorage::new();
        storage.set("eCommSimCart", "{truncated...").unwrap();

        let store = CartStore::new(storage);
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_items_empty_on_zero_quantity_payload() {
        // A stored quantity of 0 violates the cart invariant: the payload is
        // malformed as a whole, so the cart reads back empty.
        let mut storage = MemoryStorage::new();
        storage
            .set(
                "eCommSimCart",
                r#"[{"id":"1","name":"n","description":"d","price":9.99,"category":"c","imageUrl":"i","quantity":0}]"#,
            )
            .unwrap();

        let store = CartStore::new(storage);
        assert!(store.items().is_empty());
    }

    // -------------------------------------------------------------------------
    // Add
    // -------------------------------------------------------------------------

    #[test]
    fn test_add_new_product() {
        let (mut store, _) = store_with_sink();
        let product = test_product("1", 4999);

        store.add(&product).unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product, product);
        assert_eq!(items[0].quantity, 1);
    }

    #[test]
    fn test_add_existing_product_increments_quantity() {
        let (mut store, _) = store_with_sink();
        let product = test_product("1", 4999);

        store.add(&product).unwrap();
        store.add(&product).unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
        // Every other field is untouched
        assert_eq!(items[0].product, product);
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let (mut store, _) = store_with_sink();
        store.add(&test_product("2", 2499)).unwrap();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("2", 2499)).unwrap();

        let items = store.items();
        let ids: Vec<&str> = items.iter().map(|line| line.product.id.as_str()).collect();
        assert_eq!(ids, vec!["2", "1"]);
    }

    #[test]
    fn test_add_emits_add_event_per_unit() {
        let (mut store, sink) = store_with_sink();
        let product = test_product("3", 7999);

        store.add(&product).unwrap();
        store.add(&product).unwrap();

        let events = sink.events.borrow();
        assert_eq!(events.len(), 2);
        for event in events.iter() {
            assert_eq!(event.name, EventName::AddToCart);
            assert_eq!(event.currency, "USD");
            assert_eq!(event.value, Price::from_cents(7999));
            assert_eq!(event.items.len(), 1);
            assert_eq!(event.items[0].id, "3");
            assert_eq!(event.items[0].quantity, 1);
        }
    }

    // -------------------------------------------------------------------------
    // Remove
    // -------------------------------------------------------------------------

    #[test]
    fn test_remove_deletes_line() {
        let (mut store, _) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("2", 2499)).unwrap();

        store.remove("1").unwrap();

        let items = store.items();
        assert_eq!(items.len(), 1);
        assert!(items.iter().all(|line| line.product.id != "1"));
    }

    #[test]
    fn test_remove_missing_notifies_but_emits_nothing() {
        let (mut store, sink) = store_with_sink();
        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));

        store.remove("missing").unwrap();

        assert_eq!(notified.get(), 1);
        assert!(sink.events.borrow().is_empty());
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let (mut store, _) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();

        store.remove("1").unwrap();
        let after_first = store.items();
        store.remove("1").unwrap();

        assert_eq!(store.items(), after_first);
        assert!(after_first.is_empty());
    }

    #[test]
    fn test_remove_event_carries_quantity_at_removal() {
        let (mut store, sink) = store_with_sink();
        let product = test_product("1", 4999);
        store.add(&product).unwrap();
        store.set_quantity("1", 5).unwrap();

        store.remove("1").unwrap();

        let events = sink.events.borrow();
        let last = events.last().unwrap();
        assert_eq!(last.name, EventName::RemoveFromCart);
        assert_eq!(last.items[0].quantity, 5);
        assert_eq!(last.value, Price::from_cents(24995));
    }

    // -------------------------------------------------------------------------
    // Set quantity
    // -------------------------------------------------------------------------

    #[test]
    fn test_set_quantity_exact() {
        let (mut store, _) = store_with_sink();
        let product = test_product("1", 4999);
        store.add(&product).unwrap();

        store.set_quantity("1", 7).unwrap();

        let items = store.items();
        assert_eq!(items[0].quantity, 7);
        // No other field changes
        assert_eq!(items[0].product, product);
    }

    #[test]
    fn test_set_quantity_zero_removes() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();

        store.set_quantity("1", 0).unwrap();

        assert!(store.items().is_empty());
        let events = sink.events.borrow();
        assert_eq!(events.last().unwrap().name, EventName::RemoveFromCart);
    }

    #[test]
    fn test_set_quantity_negative_removes() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();

        store.set_quantity("1", -1).unwrap();

        assert!(store.items().is_empty());
        let events = sink.events.borrow();
        assert_eq!(events.last().unwrap().name, EventName::RemoveFromCart);
    }

    #[test]
    fn test_set_quantity_missing_is_complete_noop() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();

        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));
        let events_before = sink.events.borrow().len();

        store.set_quantity("missing", 3).unwrap();
        store.set_quantity("missing", 0).unwrap();

        assert_eq!(notified.get(), 0);
        assert_eq!(sink.events.borrow().len(), events_before);
        assert_eq!(store.items().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Clear & checkout
    // -------------------------------------------------------------------------

    #[test]
    fn test_clear_empties_cart_and_notifies() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("2", 2499)).unwrap();

        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));
        let events_before = sink.events.borrow().len();

        store.clear().unwrap();

        assert!(store.items().is_empty());
        assert_eq!(notified.get(), 1);
        // Clearing is not an analytics event
        assert_eq!(sink.events.borrow().len(), events_before);
    }

    #[test]
    fn test_begin_checkout_emits_and_clears() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("2", 2499)).unwrap();
        store.set_quantity("1", 2).unwrap();

        store.begin_checkout().unwrap();

        assert!(store.items().is_empty());
        let events = sink.events.borrow();
        let last = events.last().unwrap();
        assert_eq!(last.name, EventName::BeginCheckout);
        assert_eq!(last.items.len(), 2);
        assert_eq!(last.value, Price::from_cents(12497)); // 2×49.99 + 24.99
    }

    #[test]
    fn test_begin_checkout_empty_is_noop() {
        let (mut store, sink) = store_with_sink();
        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));

        store.begin_checkout().unwrap();

        assert_eq!(notified.get(), 0);
        assert!(sink.events.borrow().is_empty());
    }

    #[test]
    fn test_record_cart_view() {
        let (mut store, sink) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();
        store.set_quantity("1", 3).unwrap();

        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));

        store.record_cart_view();

        let events = sink.events.borrow();
        let last = events.last().unwrap();
        assert_eq!(last.name, EventName::ViewCart);
        assert_eq!(last.value, Price::from_cents(14997));
        // Read-only: no notification, no mutation
        assert_eq!(notified.get(), 0);
        assert_eq!(store.items().len(), 1);
    }

    // -------------------------------------------------------------------------
    // Subscriptions
    // -------------------------------------------------------------------------

    #[test]
    fn test_subscribers_run_in_registration_order() {
        let (mut store, _) = store_with_sink();
        let order = Rc::new(RefCell::new(Vec::new()));

        let first = Rc::clone(&order);
        store.subscribe(move || first.borrow_mut().push("first"));
        let second = Rc::clone(&order);
        store.subscribe(move || second.borrow_mut().push("second"));

        store.add(&test_product("1", 4999)).unwrap();

        assert_eq!(*order.borrow(), vec!["first", "second"]);
    }

    #[test]
    fn test_unsubscribe_stops_callbacks() {
        let (mut store, _) = store_with_sink();
        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        let subscription = store.subscribe(move || counter.set(counter.get() + 1));

        store.add(&test_product("1", 4999)).unwrap();
        assert_eq!(notified.get(), 1);

        assert!(store.unsubscribe(subscription));
        assert!(!store.unsubscribe(subscription));

        store.add(&test_product("1", 4999)).unwrap();
        assert_eq!(notified.get(), 1);
    }

    #[test]
    fn test_one_notification_per_mutation() {
        let (mut store, _) = store_with_sink();
        let notified = Rc::new(Cell::new(0u32));
        let counter = Rc::clone(&notified);
        store.subscribe(move || counter.set(counter.get() + 1));

        store.add(&test_product("1", 4999)).unwrap(); // 1
        store.set_quantity("1", 3).unwrap(); // 2
        store.remove("1").unwrap(); // 3
        store.clear().unwrap(); // 4

        assert_eq!(notified.get(), 4);
    }

    // -------------------------------------------------------------------------
    // Persistence & scenarios
    // -------------------------------------------------------------------------

    #[test]
    fn test_scripted_session() {
        let (mut store, _) = store_with_sink();
        let product = test_product("3", 7999);

        store.add(&product).unwrap();
        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].product.id, "3");
        assert_eq!(items[0].quantity, 1);
        assert_eq!(items[0].product.price, Price::from_cents(7999));

        store.add(&product).unwrap();
        assert_eq!(store.items()[0].quantity, 2);

        store.set_quantity("3", 5).unwrap();
        assert_eq!(store.items()[0].quantity, 5);

        store.remove("3").unwrap();
        assert!(store.items().is_empty());
    }

    #[test]
    fn test_cart_survives_store_restart() {
        let dir = tempfile::tempdir().unwrap();

        let storage = FileStorage::new(dir.path()).unwrap();
        let mut store = CartStore::new(storage);
        store.add(&test_product("1", 4999)).unwrap();
        store.set_quantity("1", 2).unwrap();
        drop(store);

        let storage = FileStorage::new(dir.path()).unwrap();
        let store = CartStore::new(storage);
        let items = store.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].quantity, 2);
    }

    #[test]
    fn test_persisted_payload_shape() {
        let dir = tempfile::tempdir().unwrap();
        let mut store = CartStore::new(FileStorage::new(dir.path()).unwrap());
        store.add(&test_product("3", 7999)).unwrap();

        let payload = std::fs::read_to_string(dir.path().join("eCommSimCart.json")).unwrap();
        let value: serde_json::Value = serde_json::from_str(&payload).unwrap();

        let line = &value.as_array().unwrap()[0];
        assert_eq!(line["id"], "3");
        assert_eq!(line["price"], serde_json::json!(79.99));
        assert_eq!(line["imageUrl"], "https://placehold.co/600x800.png?p=3");
        assert_eq!(line["quantity"], 1);
        // Product fields and quantity share one flat object
        assert!(line.get("product").is_none());
    }

    #[test]
    fn test_totals() {
        let (mut store, _) = store_with_sink();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("1", 4999)).unwrap();
        store.add(&test_product("2", 2499)).unwrap();

        let totals = store.totals();
        assert_eq!(totals.line_count, 2);
        assert_eq!(totals.total_quantity, 3);
        assert_eq!(totals.subtotal, Price::from_cents(12497));
    }
}
