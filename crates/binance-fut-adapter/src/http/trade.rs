/*
[INPUT]:  Validated order requests
[OUTPUT]: Order acknowledgements from the exchange
[POS]:    HTTP layer - signed trading requests
[UPDATE]: When order submission parameters change
*/

use reqwest::Method;
use tracing::info;

use crate::http::client::BinanceClient;
use crate::http::error::Result;
use crate::types::{OrderAck, OrderRequest};

impl BinanceClient {
    /// POST /fapi/v1/order (signed).
    ///
    /// Parameters go in the query string; the body stays empty.
    pub async fn place_order(&self, order: &OrderRequest) -> Result<OrderAck> {
        info!(
            symbol = %order.symbol,
            side = %order.side,
            order_type = %order.order_type(),
            quantity = %order.quantity,
            price = ?order.terms.price(),
            stop_price = ?order.terms.stop_price(),
            "placing order"
        );
        let data = self
            .execute(Method::POST, "/fapi/v1/order", order.to_params(), true)
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
