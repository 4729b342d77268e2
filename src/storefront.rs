//! Application session.
//!
//! The storefront owns every store of one shopping session (cart, auth, cake
//! builder, checkout) and the current view. Shopper actions are applied one at a
//! time; a failed action is logged and leaves the session as it was.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;
use tokio_stream::{Stream, StreamExt};
use tracing::info;

use crate::auth::AuthSession;
use crate::builder::{BuilderError, CustomCakeBuilder};
use crate::cart::{Cart, CartError, CartItem};
use crate::catalog::{self, Layer};
use crate::checkout::{
    CheckoutError, CheckoutFlow, FieldValue, OrderConfirmation, OrderSubmitter, Step,
};
use crate::config::ShopConfig;
use crate::model::LineId;

/// Addressable views of the storefront.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Catalog,
    Customize,
    Cart,
    Checkout,
    Login,
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            View::Catalog => "catalog",
            View::Customize => "customize",
            View::Cart => "cart",
            View::Checkout => "checkout",
            View::Login => "login",
        };
        f.write_str(name)
    }
}

impl FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "catalog" | "home" => Ok(View::Catalog),
            "customize" | "create" => Ok(View::Customize),
            "cart" => Ok(View::Cart),
            "checkout" => Ok(View::Checkout),
            "login" => Ok(View::Login),
            other => Err(other.to_string()),
        }
    }
}

/// Everything a shopper can do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShopperAction {
    AddCatalogCake { cake_id: String },
    SelectOption { layer: Layer, option_id: String },
    AddCustomCake,
    UpdateQuantity { id: LineId, quantity: u32 },
    RemoveItem { id: LineId },
    ClearCart,
    Navigate(View),
    StartCheckout,
    SetField { step: Step, field: String, value: FieldValue },
    /// "Continue", or "Place Order" on the billing step.
    Continue,
    Back,
    Login { email: String },
    Logout,
}

impl ShopperAction {
    fn name(&self) -> &'static str {
        match self {
            ShopperAction::AddCatalogCake { .. } => "add cake",
            ShopperAction::SelectOption { .. } => "select option",
            ShopperAction::AddCustomCake => "add custom cake",
            ShopperAction::UpdateQuantity { .. } => "update quantity",
            ShopperAction::RemoveItem { .. } => "remove item",
            ShopperAction::ClearCart => "clear cart",
            ShopperAction::Navigate(_) => "navigate",
            ShopperAction::StartCheckout => "start checkout",
            ShopperAction::SetField { .. } => "set field",
            ShopperAction::Continue => "continue",
            ShopperAction::Back => "back",
            ShopperAction::Login { .. } => "login",
            ShopperAction::Logout => "logout",
        }
    }
}

/// Top-level error returned by [`Storefront::apply`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StorefrontError {
    #[error("no cake with id '{0}' in the catalog")]
    UnknownCake(String),

    #[error("no checkout in progress")]
    NoCheckout,

    #[error("cannot start checkout with an empty cart")]
    EmptyCart,

    #[error("cart: {0}")]
    Cart(#[from] CartError),

    #[error("custom cake: {0}")]
    Builder(#[from] BuilderError),

    #[error("checkout: {0}")]
    Checkout(#[from] CheckoutError),
}

/// One shopping session.
pub struct Storefront<S> {
    config: ShopConfig,
    submitter: S,
    cart: Cart,
    auth: AuthSession,
    builder: CustomCakeBuilder,
    checkout: Option<CheckoutFlow>,
    view: View,
    confirmations: Vec<OrderConfirmation>,
}

/// Public API
impl<S: OrderSubmitter> Storefront<S> {
    pub fn new(config: ShopConfig, submitter: S) -> Self {
        Self {
            config,
            submitter,
            cart: Cart::new(),
            auth: AuthSession::new(),
            builder: CustomCakeBuilder::new(),
            checkout: None,
            view: View::default(),
            confirmations: Vec::new(),
        }
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn auth(&self) -> &AuthSession {
        &self.auth
    }

    pub fn builder(&self) -> &CustomCakeBuilder {
        &self.builder
    }

    pub fn checkout(&self) -> Option<&CheckoutFlow> {
        self.checkout.as_ref()
    }

    pub fn view(&self) -> View {
        self.view
    }

    /// Orders placed during this session, oldest first.
    pub fn confirmations(&self) -> &[OrderConfirmation] {
        &self.confirmations
    }

    /// Run the session over a stream of shopper actions.
    pub async fn run(&mut self, mut actions: impl Stream<Item = ShopperAction> + Unpin) {
        while let Some(action) = actions.next().await {
            // a rejected action never ends the session
            let _ = self.apply(action).await;
        }
    }

    /// Apply a single shopper action on top of the current session state.
    pub async fn apply(&mut self, action: ShopperAction) -> Result<(), StorefrontError> {
        let name = action.name();
        let result = self.dispatch(action).await;
        match &result {
            Ok(()) => info!(view = %self.view, cart_total = %self.cart.total(), "{name} applied"),
            Err(e) => info!(view = %self.view, reason = %e, "{name} skipped"),
        }
        result
    }
}

/// Private API
impl<S: OrderSubmitter> Storefront<S> {
    async fn dispatch(&mut self, action: ShopperAction) -> Result<(), StorefrontError> {
        match action {
            ShopperAction::AddCatalogCake { cake_id } => {
                let cake = catalog::find_cake(&cake_id)
                    .ok_or(StorefrontError::UnknownCake(cake_id))?;
                self.cart.add(CartItem::catalog(cake))?;
            }
            ShopperAction::SelectOption { layer, option_id } => {
                self.builder.select(layer, &option_id)?;
            }
            ShopperAction::AddCustomCake => {
                let item = self.builder.to_cart_item()?;
                self.cart.add(item)?;
                self.builder.reset();
                self.view = View::Cart;
            }
            ShopperAction::UpdateQuantity { id, quantity } => {
                self.cart.update_quantity(&id, quantity)?;
            }
            ShopperAction::RemoveItem { id } => {
                self.cart.remove(&id);
            }
            ShopperAction::ClearCart => self.cart.clear(),
            ShopperAction::Navigate(View::Checkout) | ShopperAction::StartCheckout => {
                self.start_checkout()?;
            }
            ShopperAction::Navigate(view) => self.view = view,
            ShopperAction::SetField { step, field, value } => {
                self.active_checkout()?.set_field(step, &field, value)?;
            }
            ShopperAction::Continue => self.continue_checkout().await?,
            ShopperAction::Back => {
                self.active_checkout()?.back()?;
            }
            ShopperAction::Login { email } => {
                self.auth.login(email);
                self.view = View::Catalog;
            }
            ShopperAction::Logout => self.auth.logout(),
        }
        Ok(())
    }

    /// Entering checkout resumes an open flow, or starts a fresh one when the
    /// cart has something in it.
    fn start_checkout(&mut self) -> Result<(), StorefrontError> {
        if self.checkout.as_ref().is_none_or(CheckoutFlow::is_complete) {
            if self.cart.is_empty() {
                return Err(StorefrontError::EmptyCart);
            }
            self.checkout = Some(CheckoutFlow::new());
        }
        self.view = View::Checkout;
        Ok(())
    }

    /// Checkout actions only apply while the checkout view is showing.
    fn active_checkout(&mut self) -> Result<&mut CheckoutFlow, StorefrontError> {
        if self.view != View::Checkout {
            return Err(StorefrontError::NoCheckout);
        }
        self.checkout.as_mut().ok_or(StorefrontError::NoCheckout)
    }

    async fn continue_checkout(&mut self) -> Result<(), StorefrontError> {
        if self.view != View::Checkout {
            return Err(StorefrontError::NoCheckout);
        }
        let flow = self.checkout.as_mut().ok_or(StorefrontError::NoCheckout)?;

        if flow.current_step() != Some(Step::Billing) {
            flow.advance()?;
            return Ok(());
        }

        let confirmation = flow.place_order(&mut self.cart, &self.submitter).await?;
        info!(
            order = %confirmation.order_number,
            email = %confirmation.email,
            "showing order confirmation"
        );
        self.confirmations.push(confirmation);

        tokio::time::sleep(self.config.confirmation_display).await;
        self.checkout = None;
        self.view = View::Catalog;
        Ok(())
    }
}
