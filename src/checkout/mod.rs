//! Checkout flow.
//!
//! A linear wizard (contact, delivery, payment, billing) that collects form data
//! and, from the billing step, places the order. Placing the order generates an
//! order number, awaits the submitter, empties the cart and ends in `Complete`.

use tracing::{error, info};

use crate::cart::Cart;

mod step;
pub use step::Step;

mod form;
pub use form::{BillingInfo, CheckoutForm, ContactInfo, DeliveryInfo, FieldValue, PaymentInfo};

mod order;
pub use order::{Order, OrderConfirmation, OrderLine, OrderNumber};
#[cfg(test)]
pub(crate) use order::is_order_number;

mod submit;
pub use submit::{OrderSubmitter, SimulatedSubmitter, SubmissionError};

mod error;
pub use error::CheckoutError;

/// Where the wizard currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlowState {
    InProgress(Step),
    Complete,
}

/// One checkout session. The form is discarded with the flow.
#[derive(Debug)]
pub struct CheckoutFlow {
    state: FlowState,
    form: CheckoutForm,
}

/// Public API
impl CheckoutFlow {
    pub fn new() -> Self {
        Self {
            state: FlowState::InProgress(Step::Contact),
            form: CheckoutForm::default(),
        }
    }

    pub fn state(&self) -> FlowState {
        self.state
    }

    /// Current step, `None` once the order is placed.
    pub fn current_step(&self) -> Option<Step> {
        match self.state {
            FlowState::InProgress(step) => Some(step),
            FlowState::Complete => None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.state == FlowState::Complete
    }

    pub fn form(&self) -> &CheckoutForm {
        &self.form
    }

    /// Completion badge of a step. Independent of the current position.
    pub fn is_step_complete(&self, step: Step) -> bool {
        self.form.is_complete(step)
    }

    pub fn set_field(
        &mut self,
        step: Step,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), CheckoutError> {
        self.in_progress()?;
        self.form.set(step, field, value)
    }

    /// "Continue": move to the next step once the current one is filled in.
    pub fn advance(&mut self) -> Result<Step, CheckoutError> {
        let current = self.in_progress()?;
        let next = current.next().ok_or(CheckoutError::FinalStep(current))?;

        if !self.form.is_complete(current) {
            return Err(CheckoutError::StepIncomplete(current));
        }

        self.state = FlowState::InProgress(next);
        info!(from = %current, to = %next, "checkout advanced");
        Ok(next)
    }

    /// "Back": move to the previous step. Entered data is kept.
    pub fn back(&mut self) -> Result<Step, CheckoutError> {
        let current = self.in_progress()?;
        let previous = current.previous().ok_or(CheckoutError::AtFirstStep)?;

        self.state = FlowState::InProgress(previous);
        info!(from = %current, to = %previous, "checkout went back");
        Ok(previous)
    }

    /// "Place Order" from the billing step. The cart must not be empty.
    ///
    /// On success the cart is cleared and the flow is `Complete`. On failure the
    /// error is logged and cart, form and step are left as they were.
    pub async fn place_order<S: OrderSubmitter>(
        &mut self,
        cart: &mut Cart,
        submitter: &S,
    ) -> Result<OrderConfirmation, CheckoutError> {
        let current = self.in_progress()?;
        if current != Step::Billing {
            return Err(CheckoutError::NotAtFinalStep(current));
        }
        if !self.form.is_complete(current) {
            return Err(CheckoutError::StepIncomplete(current));
        }
        if cart.is_empty() {
            return Err(CheckoutError::EmptyCart);
        }

        let order = Order::from_cart(OrderNumber::generate(), &self.form.contact.email, cart);
        info!(order = %order.number, lines = order.lines.len(), total = %order.total, "placing order");

        match submitter.submit(&order).await {
            Ok(confirmation) => {
                cart.clear();
                self.state = FlowState::Complete;
                info!(order = %confirmation.order_number, email = %confirmation.email, "order placed");
                Ok(confirmation)
            }
            Err(e) => {
                error!(order = %order.number, reason = %e, "order submission failed");
                Err(e.into())
            }
        }
    }
}

/// Private API
impl CheckoutFlow {
    fn in_progress(&self) -> Result<Step, CheckoutError> {
        self.current_step().ok_or(CheckoutError::AlreadyComplete)
    }
}

impl Default for CheckoutFlow {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Price;
    use crate::cart::CartItem;
    use crate::catalog;
    use std::time::Duration;

    // test utils

    struct FailingSubmitter;

    impl OrderSubmitter for FailingSubmitter {
        async fn submit(&self, _order: &Order) -> Result<OrderConfirmation, SubmissionError> {
            Err(SubmissionError::Unavailable("backend down".to_string()))
        }
    }

    fn instant() -> SimulatedSubmitter {
        SimulatedSubmitter::new(Duration::ZERO)
    }

    fn cart_with_cake() -> Cart {
        let mut cart = Cart::new();
        cart.add(CartItem::catalog(catalog::find_cake("1").unwrap()))
            .unwrap();
        cart
    }

    fn fill_contact(flow: &mut CheckoutFlow) {
        flow.set_field(Step::Contact, "email", "jane@example.com").unwrap();
        flow.set_field(Step::Contact, "phone", "555-0100").unwrap();
    }

    fn fill_delivery(flow: &mut CheckoutFlow) {
        for (field, value) in [
            ("first_name", "Jane"),
            ("last_name", "Doe"),
            ("address", "1 Baker Street"),
            ("city", "Springfield"),
            ("postal_code", "12345"),
            ("delivery_date", "2026-11-01"),
            ("delivery_time", "morning"),
        ] {
            flow.set_field(Step::Delivery, field, value).unwrap();
        }
    }

    fn fill_payment(flow: &mut CheckoutFlow) {
        for (field, value) in [
            ("card_number", "4242 4242 4242 4242"),
            ("card_name", "Jane Doe"),
            ("expiry", "12/29"),
            ("cvv", "123"),
        ] {
            flow.set_field(Step::Payment, field, value).unwrap();
        }
    }

    /// A flow sitting on the billing step with every step filled in.
    fn at_billing() -> CheckoutFlow {
        let mut flow = CheckoutFlow::new();
        fill_contact(&mut flow);
        flow.advance().unwrap();
        fill_delivery(&mut flow);
        flow.advance().unwrap();
        fill_payment(&mut flow);
        flow.advance().unwrap();
        flow
    }

    #[test]
    fn new_flow_starts_at_contact() {
        let flow = CheckoutFlow::new();
        assert_eq!(flow.state(), FlowState::InProgress(Step::Contact));
        assert!(!flow.is_complete());
    }

    // Navigation

    #[test]
    fn advance_requires_filled_step() {
        let mut flow = CheckoutFlow::new();
        flow.set_field(Step::Contact, "email", "jane@example.com").unwrap();

        assert_eq!(
            flow.advance(),
            Err(CheckoutError::StepIncomplete(Step::Contact))
        );
        assert_eq!(flow.current_step(), Some(Step::Contact));
    }

    #[test]
    fn advance_walks_steps_in_order() {
        let flow = at_billing();
        assert_eq!(flow.current_step(), Some(Step::Billing));
    }

    #[test]
    fn advance_at_billing_is_rejected() {
        let mut flow = at_billing();
        assert_eq!(
            flow.advance(),
            Err(CheckoutError::FinalStep(Step::Billing))
        );
    }

    #[test]
    fn back_disabled_at_first_step() {
        let mut flow = CheckoutFlow::new();
        assert_eq!(flow.back(), Err(CheckoutError::AtFirstStep));
        assert_eq!(flow.current_step(), Some(Step::Contact));
    }

    #[test]
    fn back_keeps_entered_data() {
        let mut flow = CheckoutFlow::new();
        fill_contact(&mut flow);
        flow.advance().unwrap();
        flow.set_field(Step::Delivery, "city", "Springfield").unwrap();

        assert_eq!(flow.back(), Ok(Step::Contact));
        assert_eq!(flow.form().delivery.city, "Springfield");
        assert!(flow.is_step_complete(Step::Contact));
    }

    #[test]
    fn completion_badge_can_run_ahead_of_position() {
        let mut flow = CheckoutFlow::new();
        fill_payment(&mut flow);

        assert_eq!(flow.current_step(), Some(Step::Contact));
        assert!(flow.is_step_complete(Step::Payment));
        assert!(!flow.is_step_complete(Step::Delivery));
    }

    // Billing rules

    #[test]
    fn billing_same_as_delivery_is_complete() {
        let flow = at_billing();
        assert!(flow.form().billing.same_as_delivery);
        assert!(flow.is_step_complete(Step::Billing));
    }

    #[test]
    fn billing_separate_address_needs_all_fields() {
        let mut flow = at_billing();
        flow.set_field(Step::Billing, "same_as_delivery", false).unwrap();
        flow.set_field(Step::Billing, "first_name", "Jane").unwrap();
        assert!(!flow.is_step_complete(Step::Billing));
    }

    // Placing orders

    #[tokio::test]
    async fn place_order_clears_cart_and_completes() {
        let mut cart = cart_with_cake();
        assert_eq!(cart.total(), Price::from_whole(45));

        let mut flow = at_billing();
        let confirmation = flow.place_order(&mut cart, &instant()).await.unwrap();

        assert!(cart.is_empty());
        assert!(flow.is_complete());
        assert_eq!(confirmation.email, "jane@example.com");
        assert!(is_order_number(confirmation.order_number.as_str()));
    }

    #[tokio::test]
    async fn place_order_before_billing_is_rejected() {
        let mut cart = cart_with_cake();
        let mut flow = CheckoutFlow::new();
        fill_contact(&mut flow);

        let result = flow.place_order(&mut cart, &instant()).await;
        assert_eq!(result, Err(CheckoutError::NotAtFinalStep(Step::Contact)));
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn place_order_with_incomplete_billing_is_rejected() {
        let mut cart = cart_with_cake();
        let mut flow = at_billing();
        flow.set_field(Step::Billing, "same_as_delivery", false).unwrap();

        let result = flow.place_order(&mut cart, &instant()).await;
        assert_eq!(result, Err(CheckoutError::StepIncomplete(Step::Billing)));
        assert_eq!(cart.len(), 1);
    }

    #[tokio::test]
    async fn place_order_with_empty_cart_is_rejected() {
        let mut cart = Cart::new();
        let mut flow = at_billing();

        let result = flow.place_order(&mut cart, &instant()).await;
        assert_eq!(result, Err(CheckoutError::EmptyCart));
        assert_eq!(flow.current_step(), Some(Step::Billing));
    }

    #[tokio::test]
    async fn failed_submission_keeps_everything() {
        let mut cart = cart_with_cake();
        let mut flow = at_billing();
        let form_before = flow.form().clone();

        let result = flow.place_order(&mut cart, &FailingSubmitter).await;
        assert!(matches!(
            result,
            Err(CheckoutError::Submission(SubmissionError::Unavailable(_)))
        ));

        assert_eq!(cart.len(), 1);
        assert_eq!(flow.current_step(), Some(Step::Billing));
        assert_eq!(flow.form(), &form_before);
    }

    #[tokio::test]
    async fn completed_flow_rejects_further_changes() {
        let mut cart = cart_with_cake();
        let mut flow = at_billing();
        flow.place_order(&mut cart, &instant()).await.unwrap();

        assert_eq!(
            flow.place_order(&mut cart, &instant()).await,
            Err(CheckoutError::AlreadyComplete)
        );
        assert_eq!(flow.back(), Err(CheckoutError::AlreadyComplete));
        assert_eq!(
            flow.set_field(Step::Contact, "email", "x@example.com"),
            Err(CheckoutError::AlreadyComplete)
        );
    }
}
