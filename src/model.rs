//! Core domain types for the bakery storefront.

use std::fmt;

use crate::Price;

/// Identifier of a catalog cake.
pub type CakeId = &'static str;

/// Identifier of a cart line: the catalog cake id, or a synthesized id for custom cakes.
pub type LineId = String;

/// Catalog grouping of a cake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Signature,
    Seasonal,
    Custom,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Category::Signature => "signature",
            Category::Seasonal => "seasonal",
            Category::Custom => "custom",
        };
        f.write_str(name)
    }
}

/// A pre-defined cake from the static catalog.
#[derive(Debug, PartialEq, Eq)]
pub struct CatalogCake {
    pub id: CakeId,
    pub name: &'static str,
    pub description: &'static str,
    pub price: Price,
    pub image: &'static str,
    pub category: Category,
}

/// One choice of a customization layer (a base, a filling or a topping).
#[derive(Debug, PartialEq, Eq)]
pub struct CakeOption {
    pub id: &'static str,
    pub name: &'static str,
    pub price: Price,
}

/// A cake assembled by the shopper from one option per layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomCake {
    pub base: &'static CakeOption,
    pub filling: &'static CakeOption,
    pub topping: &'static CakeOption,
    /// Sum of the three option prices, fixed when the cake is assembled.
    pub price: Price,
}

impl CustomCake {
    pub fn new(
        base: &'static CakeOption,
        filling: &'static CakeOption,
        topping: &'static CakeOption,
    ) -> Self {
        Self {
            base,
            filling,
            topping,
            price: base.price + filling.price + topping.price,
        }
    }

    pub fn description(&self) -> String {
        format!(
            "Base: {}, Filling: {}, Topping: {}",
            self.base.name, self.filling.name, self.topping.name
        )
    }
}

/// What a cart line is selling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CartLine {
    Catalog(&'static CatalogCake),
    Custom(CustomCake),
}

impl CartLine {
    pub fn unit_price(&self) -> Price {
        match self {
            CartLine::Catalog(cake) => cake.price,
            CartLine::Custom(cake) => cake.price,
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            CartLine::Catalog(cake) => cake.name,
            CartLine::Custom(_) => "Custom Cake",
        }
    }

    /// Layer breakdown of a custom line. Catalog lines have none.
    pub fn description(&self) -> Option<String> {
        match self {
            CartLine::Catalog(_) => None,
            CartLine::Custom(cake) => Some(cake.description()),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, CartLine::Custom(_))
    }
}
