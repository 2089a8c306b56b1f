//! # ecommsim-store: Cart Store & Persistence for eCommSim
//!
//! This crate owns the persisted shopping cart and everything that reacts to
//! it: the storage slot, the observer registry, the analytics sink, and the
//! fixed product catalog.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      eCommSim Data Flow                                 │
//! │                                                                         │
//! │  View action (add to cart, change quantity, checkout)                  │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  ecommsim-store (THIS CRATE)                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐   ┌───────────┐   ┌───────────┐   ┌─────────┐  │   │
//! │  │   │ CartStore │──►│ Storage   │   │ Observer  │   │Analytics│  │   │
//! │  │   │ (cart.rs) │   │ Backend   │   │ Registry  │   │  Sink   │  │   │
//! │  │   │           │   │(one slot) │   │(fan-out)  │   │ (fire & │  │   │
//! │  │   └───────────┘   └───────────┘   └───────────┘   │ forget) │  │   │
//! │  │         ▲                                          └─────────┘  │   │
//! │  │   ┌─────┴─────┐                                                 │   │
//! │  │   │  Catalog  │  fixed product list (lookup / featured)        │   │
//! │  │   └───────────┘                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Subscribed views re-read items() and re-render                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`cart`] - The [`CartStore`] and its operations
//! - [`storage`] - The [`StorageBackend`] slot abstraction and backends
//! - [`analytics`] - Event records and the [`AnalyticsSink`] capability
//! - [`catalog`] - The fixed product list
//! - [`config`] - Slot key and currency configuration
//! - [`error`] - Store error types
//!
//! ## Usage
//!
//! ```rust
//! use ecommsim_store::{Catalog, CartStore, MemoryStorage};
//!
//! let catalog = Catalog::demo();
//! let mut store = CartStore::new(MemoryStorage::new());
//!
//! if let Some(scarf) = catalog.get_by_id("5") {
//!     store.add(scarf)?;
//! }
//! assert_eq!(store.totals().total_quantity, 1);
//! # Ok::<(), ecommsim_store::StoreError>(())
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod analytics;
pub mod cart;
pub mod catalog;
pub mod config;
pub mod error;
pub mod storage;

// =============================================================================
// Re-exports
// =============================================================================

pub use analytics::{AnalyticsEvent, AnalyticsSink, EventLine, EventName, NoopSink, TracingSink};
pub use cart::{CartStore, SubscriptionId};
pub use catalog::Catalog;
pub use config::{StoreConfig, CART_STORAGE_KEY};
pub use error::{StoreError, StoreResult};
pub use storage::{FileStorage, MemoryStorage, StorageBackend};
