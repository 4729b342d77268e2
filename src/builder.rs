//! Custom cake builder: one selection per layer, priced as the sum of the selections.

use thiserror::Error;
use uuid::Uuid;

use crate::Price;
use crate::cart::CartItem;
use crate::catalog::{self, Layer};
use crate::model::{CakeOption, CustomCake};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    #[error("no {layer} option named '{id}'")]
    UnknownOption { layer: Layer, id: String },

    #[error("no {0} selected")]
    Incomplete(Layer),
}

/// Selections of an in-progress customization session.
#[derive(Debug, Default, Clone)]
pub struct CustomCakeBuilder {
    base: Option<&'static CakeOption>,
    filling: Option<&'static CakeOption>,
    topping: Option<&'static CakeOption>,
}

impl CustomCakeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select an option for a layer, replacing any previous selection.
    pub fn select(&mut self, layer: Layer, option_id: &str) -> Result<(), BuilderError> {
        let option =
            catalog::find_option(layer, option_id).ok_or_else(|| BuilderError::UnknownOption {
                layer,
                id: option_id.to_string(),
            })?;
        *self.slot_mut(layer) = Some(option);
        Ok(())
    }

    pub fn selection(&self, layer: Layer) -> Option<&'static CakeOption> {
        match layer {
            Layer::Base => self.base,
            Layer::Filling => self.filling,
            Layer::Topping => self.topping,
        }
    }

    /// Running price; layers without a selection count as zero.
    pub fn price(&self) -> Price {
        Layer::ALL
            .into_iter()
            .filter_map(|layer| self.selection(layer))
            .map(|option| option.price)
            .sum()
    }

    /// Whether every layer has a selection.
    pub fn is_ready(&self) -> bool {
        Layer::ALL
            .into_iter()
            .all(|layer| self.selection(layer).is_some())
    }

    pub fn build(&self) -> Result<CustomCake, BuilderError> {
        let pick = |layer| self.selection(layer).ok_or(BuilderError::Incomplete(layer));
        Ok(CustomCake::new(
            pick(Layer::Base)?,
            pick(Layer::Filling)?,
            pick(Layer::Topping)?,
        ))
    }

    /// Build the cake and wrap it in a single-unit cart line with a fresh id.
    pub fn to_cart_item(&self) -> Result<CartItem, BuilderError> {
        let cake = self.build()?;
        Ok(CartItem::custom(format!("custom-{}", Uuid::new_v4()), cake))
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    fn slot_mut(&mut self, layer: Layer) -> &mut Option<&'static CakeOption> {
        match layer {
            Layer::Base => &mut self.base,
            Layer::Filling => &mut self.filling,
            Layer::Topping => &mut self.topping,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn full_builder() -> CustomCakeBuilder {
        let mut builder = CustomCakeBuilder::new();
        builder.select(Layer::Base, "chocolate").unwrap();
        builder.select(Layer::Filling, "cream").unwrap();
        builder.select(Layer::Topping, "sprinkles").unwrap();
        builder
    }

    #[test]
    fn empty_builder_costs_nothing() {
        let builder = CustomCakeBuilder::new();
        assert_eq!(builder.price(), Price::ZERO);
        assert!(!builder.is_ready());
    }

    #[test]
    fn price_sums_selected_layers() {
        let builder = full_builder();
        assert_eq!(builder.price(), Price::from_whole(23));
        assert!(builder.is_ready());
    }

    #[test]
    fn partial_selection_prices_missing_layers_as_zero() {
        let mut builder = CustomCakeBuilder::new();
        builder.select(Layer::Base, "red-velvet").unwrap();
        builder.select(Layer::Topping, "fruit").unwrap();

        assert_eq!(builder.price(), Price::from_whole(24));
        assert!(!builder.is_ready());
    }

    #[test]
    fn reselecting_replaces_previous_choice() {
        let mut builder = full_builder();
        builder.select(Layer::Base, "vanilla").unwrap();
        assert_eq!(builder.price(), Price::from_whole(20));
    }

    #[test]
    fn unknown_option_keeps_selection() {
        let mut builder = full_builder();
        let result = builder.select(Layer::Filling, "custard");

        assert_eq!(
            result,
            Err(BuilderError::UnknownOption {
                layer: Layer::Filling,
                id: "custard".to_string()
            })
        );
        assert_eq!(builder.selection(Layer::Filling).unwrap().id, "cream");
    }

    #[test]
    fn build_reports_first_missing_layer() {
        let mut builder = CustomCakeBuilder::new();
        builder.select(Layer::Base, "vanilla").unwrap();

        assert_eq!(
            builder.build(),
            Err(BuilderError::Incomplete(Layer::Filling))
        );
        assert!(builder.to_cart_item().is_err());
    }

    #[test]
    fn cart_item_has_custom_id_and_single_unit() {
        let item = full_builder().to_cart_item().unwrap();

        assert!(item.id().starts_with("custom-"));
        assert_eq!(item.quantity(), 1);
        assert!(item.line().is_custom());
        assert_eq!(item.unit_price(), Price::from_whole(23));
    }

    #[test]
    fn successive_cart_items_get_distinct_ids() {
        let builder = full_builder();
        let first = builder.to_cart_item().unwrap();
        let second = builder.to_cart_item().unwrap();
        assert_ne!(first.id(), second.id());
    }

    #[test]
    fn reset_clears_selections() {
        let mut builder = full_builder();
        builder.reset();
        assert!(builder.selection(Layer::Base).is_none());
        assert_eq!(builder.price(), Price::ZERO);
    }
}
