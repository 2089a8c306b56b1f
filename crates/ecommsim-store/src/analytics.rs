//! # Analytics Events
//!
//! Structured event records describing cart activity, handed to an injected
//! sink for downstream tracking.
//!
//! ## Event Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Analytics Event Flow                                 │
//! │                                                                         │
//! │  CartStore mutation                                                     │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AnalyticsEvent { name, currency, value, items, recorded_at }           │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  AnalyticsSink::record(event)   ← fire-and-forget                      │
//! │       │                                                                 │
//! │       ├──► NoopSink      (default: drop it)                            │
//! │       └──► TracingSink   (demo: log the event as JSON)                 │
//! │                                                                         │
//! │  Sink failures never reach the store: the trait is infallible by       │
//! │  signature, so a real integration must swallow its own errors.         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use ecommsim_core::{CartLine, Price, Product};

// =============================================================================
// Event Names
// =============================================================================

/// The cart activity an event describes.
///
/// Serialized names follow the common ecommerce tracking vocabulary
/// (`add_to_cart`, `begin_checkout`, ...), so a downstream tag manager can
/// forward records unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventName {
    /// A product was added to the cart (quantity delta 1).
    AddToCart,
    /// A line was removed from the cart.
    RemoveFromCart,
    /// The cart was viewed.
    ViewCart,
    /// A (simulated) checkout started.
    BeginCheckout,
}

impl EventName {
    /// The wire name of the event (`"add_to_cart"`, ...).
    pub fn as_str(&self) -> &'static str {
        match self {
            EventName::AddToCart => "add_to_cart",
            EventName::RemoveFromCart => "remove_from_cart",
            EventName::ViewCart => "view_cart",
            EventName::BeginCheckout => "begin_checkout",
        }
    }
}

// =============================================================================
// Event Records
// =============================================================================

/// One line entry inside an analytics event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventLine {
    pub id: String,
    pub name: String,
    pub category: String,
    pub price: Price,
    pub quantity: u32,
}

impl EventLine {
    /// Builds an entry from a product at an explicit quantity.
    pub fn from_product(product: &Product, quantity: u32) -> Self {
        EventLine {
            id: product.id.clone(),
            name: product.name.clone(),
            category: product.category.clone(),
            price: product.price,
            quantity,
        }
    }
}

impl From<&CartLine> for EventLine {
    fn from(line: &CartLine) -> Self {
        EventLine::from_product(&line.product, line.quantity)
    }
}

/// A structured record describing one piece of cart activity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalyticsEvent {
    /// What happened.
    pub name: EventName,

    /// ISO 4217 currency code for `value` and the line prices.
    pub currency: String,

    /// Total monetary value of the listed lines (Σ price × quantity).
    pub value: Price,

    /// The lines the event covers: the affected line for add/remove, the
    /// whole cart for view/checkout.
    pub items: Vec<EventLine>,

    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,
}

impl AnalyticsEvent {
    /// Builds an event, deriving `value` from the line entries.
    pub fn new(name: EventName, currency: impl Into<String>, items: Vec<EventLine>) -> Self {
        let value = items
            .iter()
            .map(|item| item.price.line_total(item.quantity))
            .sum();
        AnalyticsEvent {
            name,
            currency: currency.into(),
            value,
            items,
            recorded_at: Utc::now(),
        }
    }
}

// =============================================================================
// Sink
// =============================================================================

/// Capability for receiving analytics events.
///
/// Recording is fire-and-forget: the signature is infallible, and the cart
/// store never inspects what a sink does with a record.
pub trait AnalyticsSink {
    /// Records one event.
    fn record(&self, event: AnalyticsEvent);
}

/// Sink that discards every event.
///
/// The default for stores constructed without an explicit sink, and handy in
/// tests that don't care about tracking.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSink;

impl AnalyticsSink for NoopSink {
    fn record(&self, _event: AnalyticsEvent) {}
}

/// Sink that logs each event through `tracing` at INFO.
///
/// Used by the demo binary; stands in for a real tag-manager push.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingSink;

impl AnalyticsSink for TracingSink {
    fn record(&self, event: AnalyticsEvent) {
        // The record always serializes; fall back to Debug just in case.
        match serde_json::to_string(&event) {
            Ok(json) => info!(name = event.name.as_str(), payload = %json, "analytics event"),
            Err(_) => info!(name = event.name.as_str(), payload = ?event, "analytics event"),
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn test_product(id: &str, price_cents: u64) -> Product {
        Product {
            id: id.to_string(),
            name: format!("Product {}", id),
            description: String::new(),
            price: Price::from_cents(price_cents),
            category: "Apparel".to_string(),
            image_url: String::new(),
            images: None,
            rating: None,
            reviews: None,
            featured: None,
        }
    }

    #[test]
    fn test_event_name_wire_values() {
        assert_eq!(
            serde_json::to_string(&EventName::AddToCart).unwrap(),
            "\"add_to_cart\""
        );
        assert_eq!(
            serde_json::to_string(&EventName::BeginCheckout).unwrap(),
            "\"begin_checkout\""
        );
        assert_eq!(EventName::RemoveFromCart.as_str(), "remove_from_cart");
        assert_eq!(EventName::ViewCart.as_str(), "view_cart");
    }

    #[test]
    fn test_event_value_is_sum_of_line_totals() {
        let items = vec![
            EventLine::from_product(&test_product("1", 4999), 2),
            EventLine::from_product(&test_product("2", 1999), 1),
        ];
        let event = AnalyticsEvent::new(EventName::ViewCart, "USD", items);

        assert_eq!(event.value, Price::from_cents(11997));
        assert_eq!(event.currency, "USD");
        assert_eq!(event.items.len(), 2);
    }

    #[test]
    fn test_event_value_empty_cart() {
        let event = AnalyticsEvent::new(EventName::ViewCart, "USD", Vec::new());
        assert!(event.value.is_zero());
    }

    #[test]
    fn test_event_line_from_cart_line() {
        let mut line = CartLine::new(&test_product("3", 7999));
        line.quantity = 4;

        let entry = EventLine::from(&line);
        assert_eq!(entry.id, "3");
        assert_eq!(entry.quantity, 4);
        assert_eq!(entry.price, Price::from_cents(7999));
    }
}
