//! # Error Types
//!
//! Domain-specific error types for kasir-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  kasir-core errors (this file)                                         │
//! │  ├── CoreError        - Business rule violations                       │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  kasir-store errors (separate crate)                                   │
//! │  └── StoreError       - File operation failures                        │
//! │                                                                         │
//! │  CLI errors (in app)                                                   │
//! │  └── AppError         - What the operator sees                         │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → StoreError → AppError → Console   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use thiserror::Error;

use crate::money::Money;

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
///
/// None of these are fatal: the menu loop reports them and returns to the
/// menu, leaving the catalog untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CoreError {
    /// No item in the catalog has this code.
    #[error("Item not found: {0}")]
    ItemNotFound(String),

    /// An item with this code already exists (codes compare case-insensitively).
    #[error("Item code '{0}' already exists")]
    DuplicateCode(String),

    /// Requested quantity exceeds what is still available.
    ///
    /// ## User Workflow
    /// ```text
    /// Stock A1: 5
    ///      │
    ///      ▼
    /// Line 1: A1 × 3  → accepted, available 2
    ///      │
    ///      ▼
    /// Line 2: A1 × 3  → InsufficientStock { available: 2, requested: 3 }
    /// ```
    #[error("Insufficient stock for {code}: available {available}, requested {requested}")]
    InsufficientStock {
        code: String,
        available: i64,
        requested: i64,
    },

    /// A stock adjustment would leave the item below zero.
    #[error("Stock for {code} cannot go negative: current {current}, change {delta}")]
    NegativeStock { code: String, current: i64, delta: i64 },

    /// Tendered amount does not cover the cart total.
    #[error("Payment {tendered} is less than total {total}")]
    PaymentBelowTotal { total: Money, tendered: Money },

    /// A line subtotal or the cart total would not fit in [`Money`].
    #[error("Amount too large for {code} x{quantity}")]
    AmountTooLarge { code: String, quantity: i64 },

    /// Sale finished without any lines.
    #[error("Cart is empty, transaction cancelled")]
    EmptyCart,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by the pure validators in [`crate::validation`]; the console
/// layer answers them by asking again.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Numeric value is below the allowed minimum.
    #[error("{field} must be at least {min}")]
    BelowMinimum { field: String, min: String },

    /// Numeric value is above the allowed maximum.
    #[error("{field} must be at most {max}")]
    AboveMaximum { field: String, max: String },

    /// Invalid format (e.g. letters where a number was expected).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = CoreError::InsufficientStock {
            code: "A1".to_string(),
            available: 2,
            requested: 3,
        };
        assert_eq!(
            err.to_string(),
            "Insufficient stock for A1: available 2, requested 3"
        );

        let err = CoreError::NegativeStock {
            code: "A1".to_string(),
            current: 4,
            delta: -5,
        };
        assert_eq!(
            err.to_string(),
            "Stock for A1 cannot go negative: current 4, change -5"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "code".to_string(),
        };
        assert_eq!(err.to_string(), "code is required");

        let err = ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: "1".to_string(),
        };
        assert_eq!(err.to_string(), "quantity must be at least 1");
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
    }
}
