//! # Validation Module
//!
//! Pure validation predicates for operator input.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Console prompt (apps/cli)                                    │
//! │  ├── Reads one line                                                    │
//! │  ├── Calls a parser/validator from THIS MODULE                         │
//! │  └── On Err: prints the message and asks again (forever)               │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: Catalog / Cart operations                                    │
//! │  └── Re-check the same rules before mutating                           │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use kasir_core::validation::{parse_int, validate_code};
//!
//! assert!(validate_code("A1").is_ok());
//! assert_eq!(parse_int("quantity", " 3 ", Some(1), None).unwrap(), 3);
//! assert!(parse_int("quantity", "0", Some(1), None).is_err());
//! ```

use crate::error::ValidationError;
use crate::money::Money;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

const MAX_NAME_LEN: usize = 100;

// =============================================================================
// String Validators
// =============================================================================

/// Validates a non-empty free-text answer and returns it trimmed.
pub fn validate_required(field: &str, input: &str) -> ValidationResult<String> {
    let value = input.trim();
    if value.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }
    Ok(value.to_string())
}

/// Validates an item code: any text that is not blank.
///
/// ```rust
/// use kasir_core::validation::validate_code;
///
/// assert!(validate_code("PEN-01").is_ok());
/// assert!(validate_code("A 1").is_ok());
/// assert!(validate_code("  ").is_err());
/// ```
pub fn validate_code(code: &str) -> ValidationResult<()> {
    validate_required("code", code).map(|_| ())
}

/// Validates an item name (1 to 100 characters after trimming).
pub fn validate_item_name(name: &str) -> ValidationResult<()> {
    let name = validate_required("name", name)?;

    if name.chars().count() > MAX_NAME_LEN {
        return Err(ValidationError::TooLong {
            field: "name".to_string(),
            max: MAX_NAME_LEN,
        });
    }

    Ok(())
}

// =============================================================================
// Numeric Validators
// =============================================================================

/// Prices may be zero (free items) but never negative.
pub fn validate_price(price: Money) -> ValidationResult<()> {
    if price.is_negative() {
        return Err(ValidationError::BelowMinimum {
            field: "price".to_string(),
            min: "0".to_string(),
        });
    }
    Ok(())
}

/// Stock may be zero but never negative.
pub fn validate_stock(stock: i64) -> ValidationResult<()> {
    if stock < 0 {
        return Err(ValidationError::BelowMinimum {
            field: "stock".to_string(),
            min: "0".to_string(),
        });
    }
    Ok(())
}

/// A cart line needs at least one unit.
pub fn validate_quantity(qty: i64) -> ValidationResult<()> {
    if qty < 1 {
        return Err(ValidationError::BelowMinimum {
            field: "quantity".to_string(),
            min: "1".to_string(),
        });
    }
    Ok(())
}

// =============================================================================
// Parsers
// =============================================================================

/// Parses a whole number and checks optional inclusive bounds.
pub fn parse_int(
    field: &str,
    input: &str,
    min: Option<i64>,
    max: Option<i64>,
) -> ValidationResult<i64> {
    let value: i64 = input
        .trim()
        .parse()
        .map_err(|_| ValidationError::InvalidFormat {
            field: field.to_string(),
            reason: "must be a whole number".to_string(),
        })?;

    if let Some(min) = min.filter(|min| value < *min) {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: min.to_string(),
        });
    }
    if let Some(max) = max.filter(|max| value > *max) {
        return Err(ValidationError::AboveMaximum {
            field: field.to_string(),
            max: max.to_string(),
        });
    }

    Ok(value)
}

/// Parses a decimal amount and checks an optional lower bound.
pub fn parse_money(field: &str, input: &str, min: Option<Money>) -> ValidationResult<Money> {
    let value = Money::parse(input).map_err(|err| match err {
        ValidationError::InvalidFormat { reason, .. } => ValidationError::InvalidFormat {
            field: field.to_string(),
            reason,
        },
        other => other,
    })?;

    if let Some(min) = min.filter(|min| value < *min) {
        return Err(ValidationError::BelowMinimum {
            field: field.to_string(),
            min: min.to_string(),
        });
    }

    Ok(value)
}

// =============================================================================
// Unit Tests
// =============================================================================
