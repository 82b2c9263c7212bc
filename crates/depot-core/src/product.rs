//! # Product
//!
//! A single stocked product: its price, its stock on hand and whether it can
//! currently be bought.
//!
//! ## Activity Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   Product::new(qty > 0) ──► ACTIVE ◄──── activate() ────┐               │
//! │                               │                         │               │
//! │                               │ buy() empties stock     │               │
//! │                               │ set_quantity(0)         │               │
//! │                               │ deactivate()            │               │
//! │                               ▼                         │               │
//! │   Product::new(qty = 0) ──► INACTIVE ───────────────────┘               │
//! │                                                                         │
//! │  Deactivation on depletion is automatic; reactivation is always an      │
//! │  explicit caller decision, even with zero stock.                        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use crate::error::{OperationError, ValidationError};
use crate::money::Money;
use crate::validation::{
    validate_price, validate_product_name, validate_stock_quantity, ValidationResult,
};

// =============================================================================
// Product Id
// =============================================================================

/// Identity of a product inside a [`Store`](crate::Store).
///
/// Names are not unique, so stores and shopping lists refer to products by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct ProductId(Uuid);

impl ProductId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A product available in a store.
///
/// ## Invariants
/// - `quantity` is never negative
/// - Any `buy` or `set_quantity` that leaves zero stock also leaves the
///   product inactive
/// - A refused `buy` changes nothing
#[derive(Debug, Serialize)]
pub struct Product {
    id: ProductId,
    name: String,
    price: Money,
    quantity: i64,
    active: bool,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Product {
    /// Creates a product with an initial stock level.
    ///
    /// A product created with zero stock starts inactive.
    ///
    /// ## Errors
    /// [`ValidationError`] if the name is blank or too long, the price is
    /// negative, or the quantity is negative.
    ///
    /// ## Example
    /// ```rust
    /// use depot_core::{Money, Product};
    ///
    /// let pixel = Product::new("Google Pixel 7", Money::from_major_minor(500, 0), 250).unwrap();
    /// assert!(pixel.is_active());
    ///
    /// let sold_out = Product::new("Pager", Money::from_cents(999), 0).unwrap();
    /// assert!(!sold_out.is_active());
    /// ```
    pub fn new(name: impl Into<String>, price: Money, quantity: i64) -> ValidationResult<Self> {
        let name = name.into();
        validate_product_name(&name)?;
        validate_price(price)?;
        validate_stock_quantity(quantity)?;

        let now = Utc::now();
        Ok(Product {
            id: ProductId::new(),
            name,
            price,
            quantity,
            active: quantity > 0,
            created_at: now,
            updated_at: now,
        })
    }

    #[inline]
    pub fn id(&self) -> ProductId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Unit price.
    #[inline]
    pub fn price(&self) -> Money {
        self.price
    }

    /// Current stock on hand.
    #[inline]
    pub fn quantity(&self) -> i64 {
        self.quantity
    }

    /// Replaces the stock level.
    ///
    /// Setting zero deactivates the product. Setting a nonzero value leaves
    /// the active flag as it was.
    pub fn set_quantity(&mut self, quantity: i64) -> ValidationResult<()> {
        validate_stock_quantity(quantity)?;

        self.quantity = quantity;
        if quantity == 0 {
            self.active = false;
        }
        self.touch();
        Ok(())
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Makes the product purchasable again. No stock check is made.
    pub fn activate(&mut self) {
        self.active = true;
        self.touch();
    }

    pub fn deactivate(&mut self) {
        self.active = false;
        self.touch();
    }

    /// One-line summary: `"<name>, Price: <price>, Quantity: <quantity>"`.
    pub fn show(&self) -> String {
        self.to_string()
    }

    /// What buying `quantity` units would cost, without buying them.
    ///
    /// ## Flow
    /// ```text
    /// quote(qty)
    ///   │
    ///   ├── inactive?        → ProductInactive
    ///   ├── qty <= 0?        → NonPositiveQuantity
    ///   ├── qty > stock?     → InsufficientStock
    ///   ├── price × qty too large? → TotalOverflow
    ///   │
    ///   └── price × qty
    /// ```
    pub fn quote(&self, quantity: i64) -> Result<Money, OperationError> {
        if !self.active {
            return Err(OperationError::ProductInactive {
                name: self.name.clone(),
            });
        }

        if quantity <= 0 {
            return Err(OperationError::NonPositiveQuantity {
                requested: quantity,
            });
        }

        if quantity > self.quantity {
            return Err(OperationError::InsufficientStock {
                name: self.name.clone(),
                available: self.quantity,
                requested: quantity,
            });
        }

        self.price
            .checked_multiply_quantity(quantity)
            .ok_or_else(|| OperationError::TotalOverflow {
                name: self.name.clone(),
            })
    }

    /// Buys `quantity` units and returns what they cost.
    ///
    /// Refuses exactly when [`Product::quote`] does. Otherwise debits stock
    /// and deactivates the product if that empties it.
    pub fn buy(&mut self, quantity: i64) -> Result<Money, OperationError> {
        let total = self.quote(quantity)?;

        self.quantity -= quantity;
        if self.quantity == 0 {
            self.active = false;
        }
        self.touch();
        Ok(total)
    }

    #[inline]
    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    /// When stock or activity last changed.
    #[inline]
    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    fn touch(&mut self) {
        self.updated_at = Utc::now();
    }
}

impl fmt::Display for Product {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, Price: {}, Quantity: {}",
            self.name, self.price, self.quantity
        )
    }
}

// =============================================================================
// Product Seed
// =============================================================================

/// Unvalidated product data, as read from a catalog file.
///
/// ```json
/// { "name": "Google Pixel 7", "price_cents": 50000, "quantity": 250 }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProductSeed {
    pub name: String,
    pub price_cents: i64,
    pub quantity: i64,
}

impl ProductSeed {
    pub fn new(name: impl Into<String>, price_cents: i64, quantity: i64) -> Self {
        ProductSeed {
            name: name.into(),
            price_cents,
            quantity,
        }
    }
}

impl TryFrom<ProductSeed> for Product {
    type Error = ValidationError;

    fn try_from(seed: ProductSeed) -> Result<Self, Self::Error> {
        Product::new(seed.name, Money::from_cents(seed.price_cents), seed.quantity)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
