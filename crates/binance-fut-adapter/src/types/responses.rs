/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust response structs with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Acknowledgement for a submitted order.
///
/// Every field is optional pass-through from the exchange; display layers
/// substitute "N/A" for what is absent.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct OrderAck {
    pub order_id: Option<i64>,
    pub status: Option<String>,
    pub symbol: Option<String>,
    pub side: Option<String>,
    #[serde(rename = "type")]
    pub order_type: Option<String>,
    pub orig_qty: Option<String>,
    pub executed_qty: Option<String>,
    pub avg_price: Option<String>,
    pub price: Option<String>,
    pub update_time: Option<i64>,
}

/// Statuses treated as a successfully placed order
const PLACED_STATUSES: [&str; 3] = ["NEW", "PARTIALLY_FILLED", "FILLED"];

impl OrderAck {
    /// Classify the exchange-reported status
    pub fn outcome(&self) -> OrderOutcome {
        let status = self.status.as_deref().unwrap_or("");
        if PLACED_STATUSES.contains(&status) {
            OrderOutcome::Placed
        } else {
            OrderOutcome::Unknown(status.to_string())
        }
    }
}

/// Classification of an acknowledgement's status field
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderOutcome {
    /// Accepted by the exchange: NEW, PARTIALLY_FILLED or FILLED
    Placed,
    /// Any other or missing status; the order may still exist on the exchange
    Unknown(String),
}

/// Subset of the exchange metadata used for connectivity probes
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ExchangeInfo {
    pub timezone: Option<String>,
    pub server_time: Option<i64>,
    pub symbols: Vec<SymbolInfo>,
}

/// Listing entry in the exchange metadata
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SymbolInfo {
    pub symbol: String,
    pub status: Option<String>,
}

/// Futures account balances from the signed account endpoint
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AccountInformation {
    #[serde(with = "rust_decimal::serde::str_option")]
    pub total_wallet_balance: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub total_unrealized_profit: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub total_margin_balance: Option<Decimal>,
    #[serde(with = "rust_decimal::serde::str_option")]
    pub available_balance: Option<Decimal>,
    pub assets: Vec<AssetBalance>,
}

/// Per-asset balance entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssetBalance {
    pub asset: String,
    #[serde(with = "rust_decimal::serde::str")]
    pub wallet_balance: Decimal,
    #[serde(with = "rust_decimal::serde::str")]
    pub available_balance: Decimal,
}
