/*
[INPUT]:  None
[OUTPUT]: Exchange metadata from the public endpoint
[POS]:    HTTP layer - unsigned market data requests
[UPDATE]: When more market data endpoints are needed
*/

use reqwest::Method;

use crate::http::client::BinanceClient;
use crate::http::error::Result;
use crate::types::ExchangeInfo;

impl BinanceClient {
    /// GET /fapi/v1/exchangeInfo (unsigned).
    ///
    /// Fetches exchange metadata; doubles as a connectivity check since it
    /// needs no signature.
    pub async fn exchange_info(&self) -> Result<ExchangeInfo> {
        let data = self
            .execute(Method::GET, "/fapi/v1/exchangeInfo", Vec::new(), false)
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
