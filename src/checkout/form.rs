//! Per-step checkout form records.

use super::{CheckoutError, Step};

/// Value typed into a form field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    Text(String),
    Flag(bool),
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Flag(value)
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct ContactInfo {
    pub email: String,
    pub phone: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DeliveryInfo {
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
    pub delivery_date: String,
    pub delivery_time: String,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PaymentInfo {
    pub card_number: String,
    pub card_name: String,
    pub expiry: String,
    pub cvv: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingInfo {
    pub same_as_delivery: bool,
    pub first_name: String,
    pub last_name: String,
    pub address: String,
    pub city: String,
    pub postal_code: String,
}

impl Default for BillingInfo {
    fn default() -> Self {
        Self {
            same_as_delivery: true,
            first_name: String::new(),
            last_name: String::new(),
            address: String::new(),
            city: String::new(),
            postal_code: String::new(),
        }
    }
}

/// Everything the shopper has entered so far, one record per step.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct CheckoutForm {
    pub contact: ContactInfo,
    pub delivery: DeliveryInfo,
    pub payment: PaymentInfo,
    pub billing: BillingInfo,
}

fn filled(value: &str) -> bool {
    !value.trim().is_empty()
}

impl CheckoutForm {
    /// A step is complete when every required field is filled.
    /// Billing address fields are only required when billing differs from delivery.
    pub fn is_complete(&self, step: Step) -> bool {
        match step {
            Step::Contact => [&self.contact.email, &self.contact.phone]
                .into_iter()
                .all(|v| filled(v)),
            Step::Delivery => {
                let d = &self.delivery;
                [
                    &d.first_name,
                    &d.last_name,
                    &d.address,
                    &d.city,
                    &d.postal_code,
                    &d.delivery_date,
                    &d.delivery_time,
                ]
                .into_iter()
                .all(|v| filled(v))
            }
            Step::Payment => {
                let p = &self.payment;
                [&p.card_number, &p.card_name, &p.expiry, &p.cvv]
                    .into_iter()
                    .all(|v| filled(v))
            }
            Step::Billing => {
                let b = &self.billing;
                b.same_as_delivery
                    || [&b.first_name, &b.last_name, &b.address, &b.city, &b.postal_code]
                        .into_iter()
                        .all(|v| filled(v))
            }
        }
    }

    /// Set one named field of a step.
    pub fn set(
        &mut self,
        step: Step,
        field: &str,
        value: impl Into<FieldValue>,
    ) -> Result<(), CheckoutError> {
        let value = value.into();

        if (step, field) == (Step::Billing, "same_as_delivery") {
            return match value {
                FieldValue::Flag(flag) => {
                    self.billing.same_as_delivery = flag;
                    Ok(())
                }
                FieldValue::Text(_) => Err(CheckoutError::FieldType {
                    step,
                    field: field.to_string(),
                }),
            };
        }

        let slot = self
            .text_field_mut(step, field)
            .ok_or_else(|| CheckoutError::UnknownField {
                step,
                field: field.to_string(),
            })?;

        match value {
            FieldValue::Text(text) => {
                *slot = text;
                Ok(())
            }
            FieldValue::Flag(_) => Err(CheckoutError::FieldType {
                step,
                field: field.to_string(),
            }),
        }
    }

    fn text_field_mut(&mut self, step: Step, field: &str) -> Option<&mut String> {
        let slot = match (step, field) {
            (Step::Contact, "email") => &mut self.contact.email,
            (Step::Contact, "phone") => &mut self.contact.phone,

            (Step::Delivery, "first_name") => &mut self.delivery.first_name,
            (Step::Delivery, "last_name") => &mut self.delivery.last_name,
            (Step::Delivery, "address") => &mut self.delivery.address,
            (Step::Delivery, "city") => &mut self.delivery.city,
            (Step::Delivery, "postal_code") => &mut self.delivery.postal_code,
            (Step::Delivery, "delivery_date") => &mut self.delivery.delivery_date,
            (Step::Delivery, "delivery_time") => &mut self.delivery.delivery_time,

            (Step::Payment, "card_number") => &mut self.payment.card_number,
            (Step::Payment, "card_name") => &mut self.payment.card_name,
            (Step::Payment, "expiry") => &mut self.payment.expiry,
            (Step::Payment, "cvv") => &mut self.payment.cvv,

            (Step::Billing, "first_name") => &mut self.billing.first_name,
            (Step::Billing, "last_name") => &mut self.billing.last_name,
            (Step::Billing, "address") => &mut self.billing.address,
            (Step::Billing, "city") => &mut self.billing.city,
            (Step::Billing, "postal_code") => &mut self.billing.postal_code,

            _ => return None,
        };
        Some(slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_form_only_billing_is_complete() {
        let form = CheckoutForm::default();
        assert!(!form.is_complete(Step::Contact));
        assert!(!form.is_complete(Step::Delivery));
        assert!(!form.is_complete(Step::Payment));
        // same_as_delivery starts out true
        assert!(form.is_complete(Step::Billing));
    }

    #[test]
    fn contact_complete_when_all_fields_filled() {
        let mut form = CheckoutForm::default();
        form.set(Step::Contact, "email", "jane@example.com").unwrap();
        assert!(!form.is_complete(Step::Contact));

        form.set(Step::Contact, "phone", "555-0100").unwrap();
        assert!(form.is_complete(Step::Contact));
    }

    #[test]
    fn whitespace_does_not_count_as_filled() {
        let mut form = CheckoutForm::default();
        form.set(Step::Contact, "email", "jane@example.com").unwrap();
        form.set(Step::Contact, "phone", "   ").unwrap();
        assert!(!form.is_complete(Step::Contact));
    }

    #[test]
    fn billing_incomplete_when_separate_address_missing_field() {
        let mut form = CheckoutForm::default();
        form.set(Step::Billing, "same_as_delivery", false).unwrap();
        assert!(!form.is_complete(Step::Billing));

        for field in ["first_name", "last_name", "address", "city"] {
            form.set(Step::Billing, field, "x").unwrap();
        }
        assert!(!form.is_complete(Step::Billing));

        form.set(Step::Billing, "postal_code", "12345").unwrap();
        assert!(form.is_complete(Step::Billing));
    }

    #[test]
    fn billing_complete_with_flag_despite_empty_fields() {
        let mut form = CheckoutForm::default();
        form.set(Step::Billing, "same_as_delivery", false).unwrap();
        form.set(Step::Billing, "same_as_delivery", true).unwrap();
        assert!(form.billing.first_name.is_empty());
        assert!(form.is_complete(Step::Billing));
    }

    #[test]
    fn unknown_field_is_rejected() {
        let mut form = CheckoutForm::default();
        let result = form.set(Step::Payment, "email", "jane@example.com");
        assert_eq!(
            result,
            Err(CheckoutError::UnknownField {
                step: Step::Payment,
                field: "email".to_string()
            })
        );
        assert_eq!(form, CheckoutForm::default());
    }

    #[test]
    fn mismatched_value_type_is_rejected() {
        let mut form = CheckoutForm::default();
        assert!(matches!(
            form.set(Step::Billing, "same_as_delivery", "yes"),
            Err(CheckoutError::FieldType { .. })
        ));
        assert!(matches!(
            form.set(Step::Contact, "email", true),
            Err(CheckoutError::FieldType { .. })
        ));
    }
}
