//! # Application Error Type
//!
//! Unified error type for menu actions.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow in Kasir POS                              │
//! │                                                                         │
//! │  Operator picks "3) Update item"                                       │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  ┌──────────────────────────────────────────────────────────────────┐  │
//! │  │  Menu Action                                                     │  │
//! │  │  Result<(), AppError>                                            │  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  File Error? ──── StoreError::Io { path, .. } ─────┐             │  │
//! │  │         │                                          │             │  │
//! │  │         ▼                                          ▼             │  │
//! │  │  Rule Broken? ─── CoreError::NegativeStock ────── AppError ────►│  │
//! │  │         │                                                        │  │
//! │  │         ▼                                                        │  │
//! │  │  Success ──────────────────────────────────────────────────────►│  │
//! │  └──────────────────────────────────────────────────────────────────┘  │
//! │                                                                         │
//! │  Menu loop prints "[!] Stock for A1 cannot go negative: ..."           │
//! │  and shows the menu again. Only INPUT_CLOSED ends the loop.            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;
use std::io;

use kasir_core::{CoreError, ValidationError};
use kasir_store::StoreError;

/// Error returned from menu actions and startup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppError {
    /// Machine-readable error code, used in logs
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,
}

/// Error codes for failed actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    /// Item code not in the catalog
    NotFound,

    /// Input validation failed
    ValidationError,

    /// A business rule rejected the action
    BusinessLogic,

    /// Cart operation failed (e.g. checkout with nothing in it)
    CartError,

    /// Insufficient stock
    InsufficientStock,

    /// Payment below the total
    PaymentError,

    /// Catalog or ledger file could not be read or written
    StorageError,

    /// Configuration could not be loaded
    ConfigError,

    /// Standard input closed or terminal I/O failed
    InputClosed,
}

impl ErrorCode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorCode::NotFound => "NOT_FOUND",
            ErrorCode::ValidationError => "VALIDATION_ERROR",
            ErrorCode::BusinessLogic => "BUSINESS_LOGIC",
            ErrorCode::CartError => "CART_ERROR",
            ErrorCode::InsufficientStock => "INSUFFICIENT_STOCK",
            ErrorCode::PaymentError => "PAYMENT_ERROR",
            ErrorCode::StorageError => "STORAGE_ERROR",
            ErrorCode::ConfigError => "CONFIG_ERROR",
            ErrorCode::InputClosed => "INPUT_CLOSED",
        }
    }
}

impl AppError {
    /// Creates a new application error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        AppError {
            code,
            message: message.into(),
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: &str) -> Self {
        AppError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        AppError::new(ErrorCode::ValidationError, message)
    }

    /// Standard input reached end of file.
    pub fn input_closed() -> Self {
        AppError::new(ErrorCode::InputClosed, "Input closed")
    }

    /// True when the menu loop can't continue.
    pub fn is_fatal(&self) -> bool {
        self.code == ErrorCode::InputClosed
    }
}

/// Converts store errors to application errors.
impl From<StoreError> for AppError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Core(e) => AppError::from(e),
            other => AppError::new(ErrorCode::StorageError, other.to_string()),
        }
    }
}

/// Converts core errors to application errors.
impl From<CoreError> for AppError {
    fn from(err: CoreError) -> Self {
        let message = err.to_string();
        match err {
            CoreError::ItemNotFound(code) => AppError::not_found("Item", &code),
            CoreError::DuplicateCode(_) => AppError::validation(message),
            CoreError::InsufficientStock { .. } => {
                AppError::new(ErrorCode::InsufficientStock, message)
            }
            CoreError::NegativeStock { .. } => AppError::new(ErrorCode::BusinessLogic, message),
            CoreError::PaymentBelowTotal { .. } => AppError::new(ErrorCode::PaymentError, message),
            CoreError::AmountTooLarge { .. } => AppError::new(ErrorCode::CartError, message),
            CoreError::EmptyCart => AppError::new(ErrorCode::CartError, message),
            CoreError::Validation(e) => AppError::from(e),
        }
    }
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::validation(err.to_string())
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        AppError::new(ErrorCode::ConfigError, format!("Invalid configuration: {}", err))
    }
}

impl From<io::Error> for AppError {
    fn from(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            return AppError::input_closed();
        }
        AppError::new(ErrorCode::InputClosed, format!("Terminal I/O failed: {}", err))
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for AppError {}

/// Result alias for menu actions.
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;
    use kasir_core::Money;
    use std::path::Path;

    #[test]
    fn test_core_errors_map_to_codes() {
        let err = AppError::from(CoreError::ItemNotFound("X9".into()));
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(err.message, "Item not found: X9");

        let err = AppError::from(CoreError::EmptyCart);
        assert_eq!(err.code, ErrorCode::CartError);

        let err = AppError::from(CoreError::AmountTooLarge {
            code: "G1".into(),
            quantity: 1000,
        });
        assert_eq!(err.code, ErrorCode::CartError);
        assert_eq!(err.message, "Amount too large for G1 x1000");

        let err = AppError::from(CoreError::PaymentBelowTotal {
            total: Money::from_major(15_000),
            tendered: Money::from_major(10_000),
        });
        assert_eq!(err.code, ErrorCode::PaymentError);
        assert!(!err.is_fatal());
    }

    #[test]
    fn test_store_core_error_is_unwrapped() {
        let err = AppError::from(StoreError::Core(CoreError::InsufficientStock {
            code: "A1".into(),
            available: 2,
            requested: 3,
        }));
        assert_eq!(err.code, ErrorCode::InsufficientStock);
    }

    #[test]
    fn test_store_io_error_keeps_path() {
        let err = AppError::from(StoreError::io(
            Path::new("/data/catalog.json"),
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        ));
        assert_eq!(err.code, ErrorCode::StorageError);
        assert!(err.message.contains("/data/catalog.json"));
    }

    #[test]
    fn test_eof_is_fatal() {
        let err = AppError::from(io::Error::from(io::ErrorKind::UnexpectedEof));
        assert!(err.is_fatal());
        assert_eq!(err.code.as_str(), "INPUT_CLOSED");
    }
}
