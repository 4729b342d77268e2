//! Cart store.
//!
//! Holds the lines a shopper intends to buy, in insertion order, one line per id.
//! The total is always derived from the lines, never stored.

use tracing::info;

use crate::Price;

mod item;
pub use item::CartItem;

mod error;
pub use error::CartError;

/// The shopping cart of one session.
#[derive(Debug, Default)]
pub struct Cart {
    items: Vec<CartItem>,
}

/// Public API
impl Cart {
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    pub fn get(&self, id: &str) -> Option<&CartItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Number of units across all lines.
    pub fn item_count(&self) -> u64 {
        self.items.iter().map(|item| u64::from(item.quantity())).sum()
    }

    /// Sum of unit price times quantity over every line.
    pub fn total(&self) -> Price {
        self.items.iter().map(CartItem::subtotal).sum()
    }

    /// Add a line, merging quantities into an existing line with the same id.
    /// A merge that would overflow the line quantity is rejected.
    pub fn add(&mut self, item: CartItem) -> Result<(), CartError> {
        match self.position(item.id()) {
            Some(idx) => {
                let existing = &mut self.items[idx];
                existing.merge_quantity(item.quantity())?;
                info!(
                    id = %existing.id(),
                    quantity = existing.quantity(),
                    "cart line merged"
                );
            }
            None => {
                info!(
                    id = %item.id(),
                    name = item.line().display_name(),
                    quantity = item.quantity(),
                    "cart line added"
                );
                self.items.push(item);
            }
        }
        Ok(())
    }

    /// Set the quantity of a line. Quantities below 1 are rejected; use [`Cart::remove`]
    /// to drop a line.
    pub fn update_quantity(&mut self, id: &str, quantity: u32) -> Result<(), CartError> {
        let idx = self
            .position(id)
            .ok_or_else(|| CartError::LineNotFound(id.to_string()))?;

        if quantity < 1 {
            return Err(CartError::QuantityBelowMinimum {
                id: id.to_string(),
                requested: quantity,
            });
        }

        self.items[idx].set_quantity(quantity);
        info!(id, quantity, "cart quantity updated");
        Ok(())
    }

    /// Remove a line. Removing an unknown id is a no-op.
    pub fn remove(&mut self, id: &str) -> Option<CartItem> {
        let idx = self.position(id)?;
        info!(id, "cart line removed");
        Some(self.items.remove(idx))
    }

    pub fn clear(&mut self) {
        info!(lines = self.items.len(), "cart cleared");
        self.items.clear();
    }
}

/// Private API
impl Cart {
    fn position(&self, id: &str) -> Option<usize> {
        self.items.iter().position(|item| item.id() == id)
    }
}
