//! Error types for the checkout flow.

use thiserror::Error;

use super::{Step, SubmissionError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CheckoutError {
    #[error("{0} step has missing required fields")]
    StepIncomplete(Step),

    #[error("already at the first step")]
    AtFirstStep,

    #[error("{0} is the final step, the order must be placed")]
    FinalStep(Step),

    #[error("orders can only be placed from the billing step, not {0}")]
    NotAtFinalStep(Step),

    #[error("cannot place an order for an empty cart")]
    EmptyCart,

    #[error("checkout is already complete")]
    AlreadyComplete,

    #[error("{step} has no field '{field}'")]
    UnknownField { step: Step, field: String },

    #[error("{step}.{field} does not accept this kind of value")]
    FieldType { step: Step, field: String },

    #[error("order submission failed: {0}")]
    Submission(#[from] SubmissionError),
}
