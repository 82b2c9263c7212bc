//! # Store
//!
//! An ordered, exclusively owned collection of [`Product`]s and the
//! multi-line order operation.
//!
//! ## Order Processing
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Shopping list                     Store                                │
//! │  ─────────────                     ─────                                │
//! │                                                                         │
//! │  line 1 (pixel, 2) ──► find(pixel) ──► Product::buy(2) ──► sum checked  │
//! │  line 2 (bose, 1)  ──► find(bose)  ──► Product::buy(1) ──► sum checked  │
//! │  line 3 (mac, 9)   ──► find(mac)   ──► Product::buy(9) ──► ERR          │
//! │                                                                         │
//! │  NOT transactional: lines 1 and 2 stay debited when line 3 fails.       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use crate::error::{CoreError, CoreResult, OperationError};
use crate::money::Money;
use crate::product::{Product, ProductId};

// =============================================================================
// Order Line
// =============================================================================

/// One line of a shopping list: which product, and how many.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrderLine {
    pub product_id: ProductId,
    pub quantity: i64,
}

impl OrderLine {
    pub fn new(product_id: ProductId, quantity: i64) -> Self {
        OrderLine {
            product_id,
            quantity,
        }
    }
}

// =============================================================================
// Store
// =============================================================================

/// A store's inventory.
///
/// ## Invariants
/// - Insertion order is preserved
/// - Duplicate names are allowed; products are told apart by [`ProductId`]
/// - [`Store::active_products`] never yields an inactive product
#[derive(Debug, Default)]
pub struct Store {
    products: Vec<Product>,
}

impl Store {
    /// Creates a store that owns `products` as its initial inventory.
    pub fn new(products: Vec<Product>) -> Self {
        Store { products }
    }

    /// Appends a product and returns the id to refer to it by.
    pub fn add_product(&mut self, product: Product) -> ProductId {
        let id = product.id();
        self.products.push(product);
        id
    }

    /// Removes the first product with this id and hands it back.
    ///
    /// ## Errors
    /// [`CoreError::ProductNotFound`] if the store holds no such product.
    pub fn remove_product(&mut self, id: ProductId) -> CoreResult<Product> {
        let index = self
            .products
            .iter()
            .position(|p| p.id() == id)
            .ok_or(CoreError::ProductNotFound(id))?;
        Ok(self.products.remove(index))
    }

    /// Sum of stock over every product, active or not.
    ///
    /// ## Errors
    /// [`CoreError::QuantityOverflow`] if the sum does not fit in an `i64`.
    pub fn total_quantity(&self) -> CoreResult<i64> {
        self.products
            .iter()
            .try_fold(0i64, |sum, p| sum.checked_add(p.quantity()))
            .ok_or(CoreError::QuantityOverflow)
    }

    /// Replaces the stock level of one product.
    ///
    /// ## Errors
    /// - [`CoreError::ProductNotFound`] if the store holds no such product
    /// - [`CoreError::Validation`] if `quantity` is negative
    pub fn set_quantity(&mut self, id: ProductId, quantity: i64) -> CoreResult<()> {
        let product = self.find_mut(id).ok_or(CoreError::ProductNotFound(id))?;
        product.set_quantity(quantity)?;
        Ok(())
    }

    /// Active products, in insertion order.
    pub fn active_products(&self) -> Vec<&Product> {
        self.products.iter().filter(|p| p.is_active()).collect()
    }

    /// Every product, active or not, in insertion order.
    pub fn products(&self) -> impl Iterator<Item = &Product> {
        self.products.iter()
    }

    pub fn find(&self, id: ProductId) -> Option<&Product> {
        self.products.iter().find(|p| p.id() == id)
    }

    pub fn find_mut(&mut self, id: ProductId) -> Option<&mut Product> {
        self.products.iter_mut().find(|p| p.id() == id)
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Buys every line of `shopping_list` in order and returns the total.
    ///
    /// Stops at the first line that cannot be bought. Lines before it have
    /// already been debited and are not rolled back. An empty list costs zero.
    ///
    /// ## Errors
    /// - [`CoreError::UnknownOrderProduct`] if a line names a product this
    ///   store does not hold
    /// - [`CoreError::OrderLineFailed`] carrying the product's
    ///   [`OperationError`], including [`OperationError::TotalOverflow`]
    ///   when the running total would overflow. The overflowing line itself
    ///   is not debited.
    pub fn order(&mut self, shopping_list: &[OrderLine]) -> CoreResult<Money> {
        let mut total = Money::zero();

        for (index, line) in shopping_list.iter().enumerate() {
            let number = index + 1;
            let product = self
                .find_mut(line.product_id)
                .ok_or(CoreError::UnknownOrderProduct {
                    line: number,
                    product_id: line.product_id,
                })?;

            total = add_line(total, product, line.quantity).map_err(|source| {
                CoreError::OrderLineFailed {
                    line: number,
                    product: product.name().to_string(),
                    source,
                }
            })?;
        }

        Ok(total)
    }
}

/// Buys one order line and returns the new running total.
fn add_line(total: Money, product: &mut Product, quantity: i64) -> Result<Money, OperationError> {
    let cost = product.quote(quantity)?;
    let next = total
        .checked_add(cost)
        .ok_or_else(|| OperationError::TotalOverflow {
            name: product.name().to_string(),
        })?;
    product.buy(quantity)?;
    Ok(next)
}

// =============================================================================
// Unit Tests
// =============================================================================
