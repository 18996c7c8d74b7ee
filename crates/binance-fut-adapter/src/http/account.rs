/*
[INPUT]:  None
[OUTPUT]: Account balances and position summary
[POS]:    HTTP layer - signed account state requests
[UPDATE]: When more account endpoints are needed
*/

use reqwest::Method;

use crate::http::client::BinanceClient;
use crate::http::error::Result;
use crate::types::AccountInformation;

impl BinanceClient {
    /// GET /fapi/v2/account (signed)
    pub async fn account(&self) -> Result<AccountInformation> {
        let data = self
            .execute(Method::GET, "/fapi/v2/account", Vec::new(), true)
            .await?;
        Ok(serde_json::from_value(data)?)
    }
}
