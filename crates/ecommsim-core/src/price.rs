//! # Price Module
//!
//! Provides the `Price` type for handling monetary values safely.
//!
//! ## Why Decimal Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In JavaScript/floating point:                                          │
//! │    0.1 + 0.2 = 0.30000000000000004  ❌ WRONG!                           │
//! │                                                                         │
//! │  OUR SOLUTION: Exact Decimals                                           │
//! │    Price wraps rust_decimal::Decimal, so 24.99 + 19.99 = 44.98         │
//! │    exactly, with no binary-float drift in cart subtotals.              │
//! │                                                                         │
//! │  WIRE FORMAT CONSTRAINT                                                 │
//! │    The persisted cart payload carries prices as plain JSON numbers     │
//! │    (e.g. 79.99), so Price serializes through the decimal float        │
//! │    bridge rather than as a string.                                     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use ecommsim_core::price::Price;
//!
//! // Create from cents (preferred)
//! let price = Price::from_cents(4999); // $49.99
//!
//! // Arithmetic operations
//! let doubled = price * 2;                          // $99.98
//! let total = price + Price::from_cents(500);       // $54.99
//! assert_eq!(price.line_total(3), Price::from_cents(14997));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

// =============================================================================
// Price Type
// =============================================================================

/// A non-negative monetary value in the currency's standard unit.
///
/// ## Design Decisions
/// - **Decimal**: exact base-10 arithmetic, no binary-float drift
/// - **Single field tuple struct**: zero-cost abstraction over `Decimal`
/// - **Non-negative**: catalog prices are never below zero; deserialization
///   rejects negative numbers so a corrupted payload fails decoding instead
///   of smuggling a negative price into the cart
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Price(Decimal);

impl Price {
    /// Creates a Price from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use ecommsim_core::price::Price;
    ///
    /// let price = Price::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.to_string(), "$10.99");
    /// ```
    ///
    /// ## Why Cents?
    /// An unsigned integer constructor makes the non-negative invariant hold
    /// by type, and keeps call sites free of float literals.
    #[inline]
    pub fn from_cents(cents: u64) -> Self {
        Price(Decimal::new(cents as i64, 2))
    }

    /// Creates a Price from an already-validated decimal amount.
    ///
    /// Returns `None` if the amount is negative.
    #[inline]
    pub fn from_amount(amount: Decimal) -> Option<Self> {
        if amount.is_sign_negative() {
            None
        } else {
            Some(Price(amount))
        }
    }

    /// Returns the underlying decimal amount (e.g. `79.99`).
    #[inline]
    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Zero price.
    #[inline]
    pub fn zero() -> Self {
        Price(Decimal::ZERO)
    }

    /// Checks if the price is zero.
    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Multiplies the unit price by a quantity.
    ///
    /// ## Example
    /// ```rust
    /// use ecommsim_core::price::Price;
    ///
    /// let unit_price = Price::from_cents(2499); // $24.99
    /// assert_eq!(unit_price.line_total(3), Price::from_cents(7497));
    /// ```
    #[inline]
    pub fn line_total(&self, quantity: u32) -> Self {
        Price(self.0 * Decimal::from(quantity))
    }
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows the price in a human-readable format.
///
/// ## Note
/// This is for logs and the demo binary. The view layer formats prices
/// itself to handle localization.
impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "${:.2}", self.0)
    }
}

/// Default price is zero.
impl Default for Price {
    fn default() -> Self {
        Price::zero()
    }
}

/// Addition of two Price values.
impl Add for Price {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Price(self.0 + other.0)
    }
}

/// Addition assignment (+=).
impl AddAssign for Price {
    #[inline]
    fn add_assign(&mut self, other: Self) {
        self.0 += other.0;
    }
}

/// Multiplication by a quantity.
impl Mul<u32> for Price {
    type Output = Self;

    #[inline]
    fn mul(self, quantity: u32) -> Self {
        self.line_total(quantity)
    }
}

/// Summation, for cart subtotals.
impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Self {
        iter.fold(Price::zero(), Add::add)
    }
}

// =============================================================================
// Serde
// =============================================================================
// The persisted payload carries `price` as a bare JSON number. Serialization
// goes through rust_decimal's float bridge; deserialization additionally
// rejects negative values so they surface as a decode failure.

impl Serialize for Price {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        rust_decimal::serde::float::serialize(&self.0, serializer)
    }
}

impl<'de> Deserialize<'de> for Price {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let amount = rust_decimal::serde::float::deserialize(deserializer)?;
        Price::from_amount(amount)
            .ok_or_else(|| serde::de::Error::custom("price must be non-negative"))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
