//! # depot-core: Pure Business Logic for Depot
//!
//! This crate is the **heart** of Depot. It owns the product catalog and the
//! order-processing rules, with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                          Depot Architecture                             │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    depot-cli (text menu)                        │   │
//! │  │    List products ──► Total quantity ──► Make an order          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ active_products / total_quantity /     │
//! │                                │ order                                  │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ depot-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  product  │  │   store   │  │   money   │  │ validation│  │   │
//! │  │   │  Product  │  │   Store   │  │   Money   │  │   rules   │  │   │
//! │  │   │ ProductId │  │ OrderLine │  │           │  │           │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO LOGGING • NO GLOBAL STATE                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`product`] - A single stocked product and its purchase rule
//! - [`store`] - The owned product collection and multi-line orders
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`error`] - Domain error types
//! - [`validation`] - Constructor and setter rules
//!
//! ## Example Usage
//!
//! ```rust
//! use depot_core::{Money, OrderLine, Product, Store};
//!
//! let widget = Product::new("Widget", Money::from_major_minor(10, 0), 5).unwrap();
//! let widget_id = widget.id();
//! let mut store = Store::new(vec![widget]);
//!
//! let total = store.order(&[OrderLine::new(widget_id, 5)]).unwrap();
//! assert_eq!(total.cents(), 5000);
//! assert!(store.active_products().is_empty());
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod money;
pub mod product;
pub mod store;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use depot_core::Money` instead of
// `use depot_core::money::Money`

pub use error::{CoreError, CoreResult, OperationError, ValidationError};
pub use money::Money;
pub use product::{Product, ProductId, ProductSeed};
pub use store::{OrderLine, Store};

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Maximum length of a product name, in characters.
pub const MAX_PRODUCT_NAME_LEN: usize = 200;
