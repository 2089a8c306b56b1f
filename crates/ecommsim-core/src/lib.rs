//! # ecommsim-core: Pure Domain Types for eCommSim
//!
//! This crate is the **heart** of the eCommSim storefront core. It contains
//! the domain model as plain types with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       eCommSim Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                  Web View Layer (outside this repo)             │   │
//! │  │    Catalog Page ──► Product Detail ──► Cart Page               │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ exported TypeScript bindings           │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ ecommsim-core (THIS CRATE) ★                    │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   price   │  │   types   │  │   types   │  │   types   │  │   │
//! │  │   │   Price   │  │  Product  │  │ CartLine  │  │CartTotals │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE TYPES                │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                 ecommsim-store (persistence layer)              │   │
//! │  │        storage slot, observer fan-out, analytics sink           │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`price`] - Decimal `Price` type (never floating-point arithmetic)
//! - [`types`] - Domain types (`Product`, `CartLine`, `CartTotals`)
//!
//! ## Design Principles
//!
//! 1. **Pure Types**: No side effects, no ambient state
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Exact Money**: Prices are decimals, serialized as plain JSON numbers
//! 4. **Wire Fidelity**: Serialized shapes match the persisted cart payload
//!    field for field (camelCase, optional fields omitted when absent)
//!
//! ## Example Usage
//!
//! ```rust
//! use ecommsim_core::{CartLine, Price, Product};
//!
//! let product = Product {
//!     id: "3".to_string(),
//!     name: "Aqua Adventure Backpack".to_string(),
//!     description: "A durable and stylish backpack.".to_string(),
//!     price: Price::from_cents(7999), // $79.99
//!     category: "Accessories".to_string(),
//!     image_url: "https://placehold.co/600x800.png?p=3".to_string(),
//!     images: None,
//!     rating: Some(4.8),
//!     reviews: Some(210),
//!     featured: Some(true),
//! };
//!
//! let line = CartLine::new(&product);
//! assert_eq!(line.quantity, 1);
//! assert_eq!(line.line_total(), Price::from_cents(7999));
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod price;
pub mod types;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use ecommsim_core::Price` instead of
// `use ecommsim_core::price::Price`

pub use price::Price;
pub use types::{CartLine, CartTotals, Product};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Currency code attached to analytics events (ISO 4217).
///
/// The storefront is single-currency; every price in the catalog and every
/// monetary value reported to the analytics sink is denominated in this
/// currency unless a store is configured otherwise.
pub const DEFAULT_CURRENCY: &str = "USD";
