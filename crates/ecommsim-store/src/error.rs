//! # Store Error Types
//!
//! Error types for cart store operations.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  Backend failure (I/O, quota)                                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  StoreError (this module) ← Adds the slot name for context             │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Caller decides how to surface it (the demo binary logs and exits)     │
//! │                                                                         │
//! │  NOT an error: a malformed persisted payload. Reads recover locally    │
//! │  by substituting an empty cart, so decode failures never reach the     │
//! │  caller.                                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

/// Cart store operation errors.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The storage backend failed to read or write a slot.
    ///
    /// ## When This Occurs
    /// - The backing file cannot be created or written
    /// - The data directory disappeared out from under the store
    #[error("storage failed for slot '{slot}': {message}")]
    Storage { slot: String, message: String },

    /// The cart could not be encoded for persistence.
    ///
    /// ## When This Occurs
    /// Practically never: the cart types always serialize. Kept as a typed
    /// variant rather than a panic so the contract holds even if the payload
    /// types grow.
    #[error("failed to encode cart: {0}")]
    Encode(#[from] serde_json::Error),
}

impl StoreError {
    /// Creates a Storage error for a given slot.
    pub fn storage(slot: impl Into<String>, message: impl ToString) -> Self {
        StoreError::Storage {
            slot: slot.into(),
            message: message.to_string(),
        }
    }
}

/// Result type for store operations.
pub type StoreResult<T> = Result<T, StoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
