use super::CartError;
use crate::Price;
use crate::model::{CartLine, CatalogCake, CustomCake, LineId};

/// One purchasable entry of the cart.
/// The quantity is always at least 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    id: LineId,
    quantity: u32,
    line: CartLine,
}

impl CartItem {
    /// A single unit of a catalog cake, keyed by the cake id.
    pub fn catalog(cake: &'static CatalogCake) -> Self {
        Self {
            id: cake.id.to_string(),
            quantity: 1,
            line: CartLine::Catalog(cake),
        }
    }

    /// A single unit of a custom cake under a freshly synthesized id.
    pub fn custom(id: impl Into<LineId>, cake: CustomCake) -> Self {
        Self {
            id: id.into(),
            quantity: 1,
            line: CartLine::Custom(cake),
        }
    }

    /// Quantities below 1 are clamped to 1.
    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity.max(1);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn quantity(&self) -> u32 {
        self.quantity
    }

    pub fn line(&self) -> &CartLine {
        &self.line
    }

    pub fn unit_price(&self) -> Price {
        self.line.unit_price()
    }

    pub fn subtotal(&self) -> Price {
        self.line.unit_price() * self.quantity
    }

    pub(super) fn merge_quantity(&mut self, added: u32) -> Result<(), CartError> {
        self.quantity = self
            .quantity
            .checked_add(added)
            .ok_or_else(|| CartError::QuantityOverflow {
                id: self.id.clone(),
                quantity: self.quantity,
                added,
            })?;
        Ok(())
    }

    pub(super) fn set_quantity(&mut self, quantity: u32) {
        debug_assert!(quantity >= 1);
        self.quantity = quantity;
    }
}
