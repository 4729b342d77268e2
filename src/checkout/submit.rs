//! Order submission seam.

use std::future::Future;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

use super::{Order, OrderConfirmation};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmissionError {
    #[error("order {0} was rejected: {1}")]
    Rejected(String, String),

    #[error("order service unavailable: {0}")]
    Unavailable(String),
}

/// Places an order somewhere. The checkout flow awaits this once per order.
pub trait OrderSubmitter {
    fn submit(
        &self,
        order: &Order,
    ) -> impl Future<Output = Result<OrderConfirmation, SubmissionError>> + Send;
}

/// Stand-in backend: waits a fixed delay, then confirms every order.
#[derive(Debug, Clone)]
pub struct SimulatedSubmitter {
    delay: Duration,
}

impl SimulatedSubmitter {
    pub const DEFAULT_DELAY: Duration = Duration::from_millis(1500);

    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for SimulatedSubmitter {
    fn default() -> Self {
        Self::new(Self::DEFAULT_DELAY)
    }
}

impl OrderSubmitter for SimulatedSubmitter {
    async fn submit(&self, order: &Order) -> Result<OrderConfirmation, SubmissionError> {
        info!(
            order = %order.number,
            total = %order.total,
            delay_ms = self.delay.as_millis() as u64,
            "simulating order submission"
        );
        tokio::time::sleep(self.delay).await;
        Ok(OrderConfirmation {
            order_number: order.number.clone(),
            email: order.email.clone(),
        })
    }
}
