//! # Store Configuration
//!
//! Configuration for the cart store.
//!
//! ## Configuration Surface
//! Deliberately small: the slot key the cart persists under, and the currency
//! code stamped onto analytics events. Everything else (storage location,
//! analytics destination) is injected as a capability, not configured here.

use ecommsim_core::DEFAULT_CURRENCY;

/// Well-known storage slot holding the serialized cart.
///
/// The web view layer reads the same slot name, so changing this orphans any
/// previously persisted cart.
pub const CART_STORAGE_KEY: &str = "eCommSimCart";

/// Cart store configuration.
///
/// ## Example
/// ```rust
/// use ecommsim_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .slot_key("testCart")
///     .currency_code("EUR");
/// ```
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Storage slot the serialized cart is written to.
    /// Default: [`CART_STORAGE_KEY`]
    pub slot_key: String,

    /// ISO 4217 currency code attached to analytics events.
    /// Default: `"USD"`
    pub currency_code: String,
}

impl StoreConfig {
    /// Creates a configuration with defaults.
    pub fn new() -> Self {
        StoreConfig {
            slot_key: CART_STORAGE_KEY.to_string(),
            currency_code: DEFAULT_CURRENCY.to_string(),
        }
    }

    /// Sets the storage slot key.
    pub fn slot_key(mut self, key: impl Into<String>) -> Self {
        self.slot_key = key.into();
        self
    }

    /// Sets the analytics currency code.
    pub fn currency_code(mut self, code: impl Into<String>) -> Self {
        self.currency_code = code.into();
        self
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.slot_key, "eCommSimCart");
        assert_eq!(config.currency_code, "USD");
    }

    #[test]
    fn test_builder_setters() {
        let config = StoreConfig::new().slot_key("testCart").currency_code("EUR");
        assert_eq!(config.slot_key, "testCart");
        assert_eq!(config.currency_code, "EUR");
    }
}
