/*
[INPUT]:  Validated order requests and an HTTP client
[OUTPUT]: Order acknowledgements classified by status
[POS]:    Order layer - orchestrates submission and outcome logging
[UPDATE]: When the set of terminal order statuses changes
*/

use tracing::{error, info, warn};

use crate::http::{BinanceClient, Result};
use crate::types::{OrderAck, OrderOutcome, OrderRequest};

/// Submits orders and classifies the exchange's acknowledgement
#[derive(Debug, Clone)]
pub struct OrderManager {
    client: BinanceClient,
}

impl OrderManager {
    pub fn new(client: BinanceClient) -> Self {
        Self { client }
    }

    /// Get the underlying HTTP client
    pub fn client(&self) -> &BinanceClient {
        &self.client
    }

    /// Submit one order and log the outcome.
    ///
    /// Errors pass through unchanged; there are no retries because a
    /// timed-out submission may still have been accepted by the exchange.
    /// An acknowledgement with an unrecognized status is still a success.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderAck> {
        info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type(),
            quantity = %order.quantity,
            "submitting order"
        );

        let ack = match self.client.place_order(order).await {
            Ok(ack) => ack,
            Err(err) => {
                error!(error = %err, "order submission failed");
                return Err(err);
            }
        };

        match ack.outcome() {
            OrderOutcome::Placed => {
                info!(order_id = ?ack.order_id, status = ?ack.status, "order placed");
            }
            OrderOutcome::Unknown(status) => {
                warn!(status = %status, "order status not recognized");
            }
        }

        Ok(ack)
    }
}
