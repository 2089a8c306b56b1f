//! # Domain Types
//!
//! Core domain types for the eCommSim storefront.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │   CartTotals    │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (String)    │   │  product (flat) │   │  line_count     │       │
//! │  │  name           │   │  quantity ≥ 1   │   │  total_quantity │       │
//! │  │  price (Price)  │   │                 │   │  subtotal       │       │
//! │  │  category       │   │                 │   │                 │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Snapshot Pattern
//! A `CartLine` carries a full copy of the product it was created from, not a
//! reference into the catalog. The persisted cart therefore stays renderable
//! on its own: every line has the name, price, and image needed for display.

use serde::{Deserialize, Deserializer, Serialize};
use ts_rs::TS;

use crate::price::Price;

// =============================================================================
// Product
// =============================================================================

/// A product in the storefront catalog.
///
/// Products are immutable: the catalog builds them once at startup and hands
/// out references. Optional fields are omitted from the serialized form when
/// absent, matching the persisted payload shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Unique identifier within the catalog.
    pub id: String,

    /// Display name shown on listing and detail pages.
    pub name: String,

    /// Long-form description for the detail page.
    pub description: String,

    /// Unit price (non-negative).
    #[ts(type = "number")]
    pub price: Price,

    /// Category label ("Apparel", "Accessories", ...).
    ///
    /// Kept as an open string: an unrecognized category in a persisted cart
    /// must not fail decoding and wipe the whole cart.
    pub category: String,

    /// Primary image reference.
    pub image_url: String,

    /// Optional gallery images for the detail page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub images: Option<Vec<String>>,

    /// Optional average rating (0–5).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub rating: Option<f32>,

    /// Optional review count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub reviews: Option<u32>,

    /// Optional featured flag; featured products surface on the home page.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[ts(optional)]
    pub featured: Option<bool>,
}

impl Product {
    /// Whether the product is flagged as featured.
    #[inline]
    pub fn is_featured(&self) -> bool {
        self.featured.unwrap_or(false)
    }
}

// =============================================================================
// Cart Line
// =============================================================================

/// A line in the shopping cart: a product snapshot plus a quantity.
///
/// ## Invariants
/// - `quantity >= 1` while the line exists; a line reaching zero is removed
///   from the cart, never stored at zero (enforced on deserialization too)
/// - Lines are unique by product id within a cart
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartLine {
    /// Product data frozen at the time the line was created.
    #[serde(flatten)]
    #[ts(flatten)]
    pub product: Product,

    /// Quantity in the cart (always at least 1).
    #[serde(deserialize_with = "deserialize_quantity")]
    pub quantity: u32,
}

impl CartLine {
    /// Creates a new line for a product at quantity 1.
    pub fn new(product: &Product) -> Self {
        CartLine {
            product: product.clone(),
            quantity: 1,
        }
    }

    /// Line total (unit price × quantity).
    #[inline]
    pub fn line_total(&self) -> Price {
        self.product.price.line_total(self.quantity)
    }
}

/// Rejects a stored quantity of zero.
///
/// A payload with `"quantity": 0` violates the cart invariant and is treated
/// as malformed, which the store recovers from by substituting an empty cart.
fn deserialize_quantity<'de, D>(deserializer: D) -> Result<u32, D::Error>
where
    D: Deserializer<'de>,
{
    let quantity = u32::deserialize(deserializer)?;
    if quantity == 0 {
        return Err(serde::de::Error::custom("quantity must be at least 1"));
    }
    Ok(quantity)
}

// =============================================================================
// Cart Totals
// =============================================================================

/// Derived cart summary for display and analytics.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "camelCase")]
pub struct CartTotals {
    /// Number of distinct lines.
    pub line_count: usize,

    /// Sum of all line quantities.
    pub total_quantity: u64,

    /// Sum of all line totals.
    #[ts(type = "number")]
    pub subtotal: Price,
}

impl From<&[CartLine]> for CartTotals {
    fn from(lines: &[CartLine]) -> Self {
        CartTotals {
            line_count: lines.len(),
            total_quantity: lines.iter().map(|line| u64::from(line.quantity)).sum(),
            subtotal: lines.iter().map(CartLine::line_total).sum(),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
