use std::fmt;

use chrono::{DateTime, Utc};
use rand::Rng;
use rand::distr::Alphanumeric;

use crate::Price;
use crate::cart::{Cart, CartItem};
use crate::model::LineId;

/// Client-generated order reference, `ORD-<6 timestamp digits>-<4 alphanumerics>`.
///
/// Practically unique within one session, not globally.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct OrderNumber(String);

impl OrderNumber {
    const SUFFIX_LEN: usize = 4;

    pub fn generate() -> Self {
        let suffix: String = rand::rng()
            .sample_iter(&Alphanumeric)
            .take(Self::SUFFIX_LEN)
            .map(char::from)
            .collect();
        Self::from_parts(Utc::now(), &suffix)
    }

    /// Last six digits of the millisecond timestamp, then the uppercased suffix.
    pub fn from_parts(at: DateTime<Utc>, suffix: &str) -> Self {
        let millis = at.timestamp_millis().rem_euclid(1_000_000);
        OrderNumber(format!("ORD-{millis:06}-{}", suffix.to_ascii_uppercase()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OrderNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Cart line frozen at submission time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub id: LineId,
    pub name: &'static str,
    pub quantity: u32,
    pub subtotal: Price,
}

impl From<&CartItem> for OrderLine {
    fn from(item: &CartItem) -> Self {
        Self {
            id: item.id().to_string(),
            name: item.line().display_name(),
            quantity: item.quantity(),
            subtotal: item.subtotal(),
        }
    }
}

/// What gets handed to an [`OrderSubmitter`](super::OrderSubmitter).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub number: OrderNumber,
    pub email: String,
    pub lines: Vec<OrderLine>,
    pub total: Price,
}

impl Order {
    pub fn from_cart(number: OrderNumber, email: impl Into<String>, cart: &Cart) -> Self {
        Self {
            number,
            email: email.into(),
            lines: cart.items().iter().map(OrderLine::from).collect(),
            total: cart.total(),
        }
    }
}

/// Result of a successful submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderConfirmation {
    pub order_number: OrderNumber,
    pub email: String,
}

/// Matches `ORD-######-XXXX`.
#[cfg(test)]
pub(crate) fn is_order_number(s: &str) -> bool {
    let parts: Vec<&str> = s.split('-').collect();
    parts.len() == 3
        && parts[0] == "ORD"
        && parts[1].len() == 6
        && parts[1].chars().all(|c| c.is_ascii_digit())
        && parts[2].len() == 4
        && parts[2]
            .chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}
