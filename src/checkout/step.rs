use std::fmt;
use std::str::FromStr;

/// A data-collection step of the checkout wizard, in wizard order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Step {
    Contact,
    Delivery,
    Payment,
    Billing,
}

impl Step {
    pub const ALL: [Step; 4] = [Step::Contact, Step::Delivery, Step::Payment, Step::Billing];

    pub fn next(self) -> Option<Step> {
        match self {
            Step::Contact => Some(Step::Delivery),
            Step::Delivery => Some(Step::Payment),
            Step::Payment => Some(Step::Billing),
            Step::Billing => None,
        }
    }

    pub fn previous(self) -> Option<Step> {
        match self {
            Step::Contact => None,
            Step::Delivery => Some(Step::Contact),
            Step::Payment => Some(Step::Delivery),
            Step::Billing => Some(Step::Payment),
        }
    }
}

impl fmt::Display for Step {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let id = match self {
            Step::Contact => "contact",
            Step::Delivery => "delivery",
            Step::Payment => "payment",
            Step::Billing => "billing",
        };
        f.write_str(id)
    }
}

impl FromStr for Step {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Step::ALL
            .into_iter()
            .find(|step| step.to_string() == s)
            .ok_or_else(|| s.to_string())
    }
}
