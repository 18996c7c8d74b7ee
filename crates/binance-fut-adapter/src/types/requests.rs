/*
[INPUT]:  Validated order fields from the validation layer
[OUTPUT]: Typed order requests convertible to wire parameters
[POS]:    Data layer - request construction for API communication
[UPDATE]: When API schema changes or new order types added
*/

use rust_decimal::Decimal;

use super::enums::{OrderType, Side, TimeInForce};

/// Per-order-type terms; a price or stop price only exists where the
/// exchange contract defines one
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OrderTerms {
    Market,
    Limit {
        price: Decimal,
        time_in_force: TimeInForce,
    },
    StopMarket {
        price: Decimal,
        stop_price: Decimal,
    },
}

impl OrderTerms {
    /// Wire order type for these terms
    pub fn order_type(&self) -> OrderType {
        match self {
            OrderTerms::Market => OrderType::Market,
            OrderTerms::Limit { .. } => OrderType::Limit,
            OrderTerms::StopMarket { .. } => OrderType::StopMarket,
        }
    }

    /// Limit or stop reference price, when the order type carries one
    pub fn price(&self) -> Option<Decimal> {
        match self {
            OrderTerms::Market => None,
            OrderTerms::Limit { price, .. } => Some(*price),
            OrderTerms::StopMarket { price, .. } => Some(*price),
        }
    }

    /// Trigger price for stop orders
    pub fn stop_price(&self) -> Option<Decimal> {
        match self {
            OrderTerms::StopMarket { stop_price, .. } => Some(*stop_price),
            _ => None,
        }
    }
}

/// A validated order, immutable once built, ready to sign and send
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub symbol: String,
    pub side: Side,
    pub quantity: Decimal,
    pub terms: OrderTerms,
}

impl OrderRequest {
    pub fn market(symbol: impl Into<String>, side: Side, quantity: Decimal) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            terms: OrderTerms::Market,
        }
    }

    pub fn limit(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        time_in_force: TimeInForce,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            terms: OrderTerms::Limit {
                price,
                time_in_force,
            },
        }
    }

    pub fn stop_market(
        symbol: impl Into<String>,
        side: Side,
        quantity: Decimal,
        price: Decimal,
        stop_price: Decimal,
    ) -> Self {
        Self {
            symbol: symbol.into(),
            side,
            quantity,
            terms: OrderTerms::StopMarket { price, stop_price },
        }
    }

    pub fn order_type(&self) -> OrderType {
        self.terms.order_type()
    }

    /// Wire parameters in submission order: symbol, side, type, quantity,
    /// then price and timeInForce for limit orders or stopPrice for stop
    /// orders. The reference price of a stop order stays client-side.
    pub fn to_params(&self) -> Vec<(String, String)> {
        let mut params = vec![
            ("symbol".to_string(), self.symbol.clone()),
            ("side".to_string(), self.side.as_str().to_string()),
            ("type".to_string(), self.order_type().as_str().to_string()),
            ("quantity".to_string(), self.quantity.to_string()),
        ];

        match &self.terms {
            OrderTerms::Market => {}
            OrderTerms::Limit {
                price,
                time_in_force,
            } => {
                params.push(("price".to_string(), price.to_string()));
                params.push(("timeInForce".to_string(), time_in_force.as_str().to_string()));
            }
            OrderTerms::StopMarket { stop_price, .. } => {
                params.push(("stopPrice".to_string(), stop_price.to_string()));
            }
        }

        params
    }
}
