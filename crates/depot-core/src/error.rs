//! # Error Types
//!
//! Domain-specific error types for depot-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  ValidationError  - bad constructor / setter arguments (Product::new,   │
//! │                     Product::set_quantity)                              │
//! │  OperationError   - a purchase the product refuses (Product::buy)       │
//! │  CoreError        - store-level failures; wraps ValidationError and     │
//! │                     carries the OperationError of a refused order line  │
//! │                                                                         │
//! │  Flow: ValidationError / OperationError → CoreError → CLI message       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. Include context in error messages (product name, line number)
//! 3. Errors are enum variants, never String
//! 4. The core raises; only the CLI displays

use thiserror::Error;

use crate::product::ProductId;

// =============================================================================
// Core Error
// =============================================================================

/// Store-level errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// The store holds no product with this id.
    ///
    /// ## When This Occurs
    /// - `Store::remove_product` with an id that was never added
    /// - Removing the same product twice
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// A line of a multi-line order was refused by its product.
    ///
    /// ## Partial Application
    /// ```text
    /// order([line 1, line 2, line 3])
    ///      │
    ///      ├── line 1: buy OK  ──► stock debited (stays debited)
    ///      │
    ///      ├── line 2: buy ERR ──► OrderLineFailed { line: 2, .. }
    ///      │
    ///      └── line 3: never attempted
    /// ```
    #[error("Order line {line} ({product}): {source}")]
    OrderLineFailed {
        /// 1-based position in the shopping list.
        line: usize,
        product: String,
        #[source]
        source: OperationError,
    },

    /// A line of a multi-line order names a product this store does not hold.
    #[error("Order line {line}: product {product_id} is not in this store")]
    UnknownOrderProduct { line: usize, product_id: ProductId },

    /// Store-wide stock no longer fits in an `i64`.
    #[error("Total quantity in store overflows")]
    QuantityOverflow,

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

impl CoreError {
    /// Returns the product-level refusal behind this error, if any.
    pub fn operation(&self) -> Option<&OperationError> {
        match self {
            CoreError::OrderLineFailed { source, .. } => Some(source),
            _ => None,
        }
    }
}

// =============================================================================
// Operation Error
// =============================================================================

/// A purchase refused by a product.
///
/// A refused purchase never changes the product's stock or activity.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OperationError {
    /// Product is deactivated (sold out or manually withdrawn).
    #[error("{name} is not active")]
    ProductInactive { name: String },

    /// Insufficient stock to complete the purchase.
    ///
    /// ## User Workflow
    /// ```text
    /// Order line (qty: 6)
    ///      │
    ///      ▼
    /// Check stock: available=5
    ///      │
    ///      ▼
    /// InsufficientStock { name: "Widget", available: 5, requested: 6 }
    ///      │
    ///      ▼
    /// Menu shows: "Error placing order: ... not enough stock"
    /// ```
    #[error("Not enough stock for {name}: available {available}, requested {requested}")]
    InsufficientStock {
        name: String,
        available: i64,
        requested: i64,
    },

    /// Purchase quantity is zero or negative.
    #[error("Quantity must be positive, got {requested}")]
    NonPositiveQuantity { requested: i64 },

    /// `price × quantity`, or the order total including it, does not fit in
    /// the money representation.
    #[error("Total for {name} overflows")]
    TotalOverflow { name: String },
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Raised by product constructors and setters before any state changes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Field value is too long.
    #[error("{field} must be at most {max} characters")]
    TooLong { field: String, max: usize },

    /// Value must be zero or greater.
    #[error("{field} cannot be negative")]
    MustBeNonNegative { field: String },
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
        let err = OperationError::InsufficientStock {
            name: "Widget".to_string(),
            available: 5,
            requested: 6,
        };
        assert_eq!(
            err.to_string(),
            "Not enough stock for Widget: available 5, requested 6"
        );

        let err = OperationError::ProductInactive {
            name: "Widget".to_string(),
        };
        assert_eq!(err.to_string(), "Widget is not active");

        let err = OperationError::TotalOverflow {
            name: "Widget".to_string(),
        };
        assert_eq!(err.to_string(), "Total for Widget overflows");
        assert_eq!(
            CoreError::QuantityOverflow.to_string(),
            "Total quantity in store overflows"
        );
    }

    #[test]
    fn test_validation_error_messages() {
        let err = ValidationError::Required {
            field: "name".to_string(),
        };
        assert_eq!(err.to_string(), "name is required");

        let err = ValidationError::MustBeNonNegative {
            field: "quantity".to_string(),
        };
        assert_eq!(err.to_string(), "quantity cannot be negative");
    }

    #[test]
    fn test_order_line_message_names_line_and_reason() {
        let err = CoreError::OrderLineFailed {
            line: 2,
            product: "Gadget".to_string(),
            source: OperationError::InsufficientStock {
                name: "Gadget".to_string(),
                available: 1,
                requested: 3,
            },
        };
        assert_eq!(
            err.to_string(),
            "Order line 2 (Gadget): Not enough stock for Gadget: available 1, requested 3"
        );
        assert!(matches!(
            err.operation(),
            Some(OperationError::InsufficientStock { requested: 3, .. })
        ));
    }

    #[test]
    fn test_validation_converts_to_core_error() {
        let validation_err = ValidationError::Required {
            field: "name".to_string(),
        };
        let core_err: CoreError = validation_err.into();
        assert!(matches!(core_err, CoreError::Validation(_)));
        assert!(core_err.operation().is_none());
    }
}
