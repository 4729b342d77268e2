pub mod auth;
pub mod builder;
pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod config;
pub mod model;
pub mod price;
pub mod script;
pub mod storefront;

pub use cart::{Cart, CartItem};
pub use checkout::{CheckoutFlow, OrderConfirmation, OrderSubmitter, SimulatedSubmitter};
pub use config::ShopConfig;
pub use model::{CartLine, CatalogCake, CustomCake, LineId};
pub use price::Price;
pub use storefront::{ShopperAction, Storefront, View};
