//! Error types for cart mutations.

use thiserror::Error;

use crate::model::LineId;

/// Rejected cart mutation. The cart is left unchanged.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    #[error("line {0} not found")]
    LineNotFound(LineId),

    #[error("line {id}: quantity {requested} is below the minimum of 1")]
    QuantityBelowMinimum { id: LineId, requested: u32 },

    #[error("line {id}: adding {added} to quantity {quantity} overflows")]
    QuantityOverflow {
        id: LineId,
        quantity: u32,
        added: u32,
    },
}
