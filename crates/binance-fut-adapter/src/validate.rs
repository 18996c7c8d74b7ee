/*
[INPUT]:  Raw order fields as strings from the CLI
[OUTPUT]: Typed, sanitized order requests or validation errors
[POS]:    Validation layer - per-field rules ahead of any network call
[UPDATE]: When field rules or order-type requirements change
*/

use rust_decimal::Decimal;

use crate::http::error::{BinanceError, Result};
use crate::types::{OrderRequest, OrderTerms, OrderType, Side, TimeInForce};

/// Raw order fields as received from the command line, prior to validation
#[derive(Debug, Clone, Default)]
pub struct OrderInput {
    pub symbol: String,
    pub side: String,
    pub order_type: String,
    pub quantity: String,
    pub price: Option<String>,
    pub stop_price: Option<String>,
    pub time_in_force: Option<String>,
}

/// Trim and uppercase a symbol, requiring ASCII alphanumerics
pub fn validate_symbol(raw: &str) -> Result<String> {
    let symbol = raw.trim().to_uppercase();
    if symbol.is_empty() || !symbol.chars().all(|c| c.is_ascii_alphanumeric()) {
        return Err(BinanceError::validation(
            "symbol",
            format!("Invalid symbol '{symbol}': must be alphanumeric (e.g. BTCUSDT)"),
        ));
    }
    Ok(symbol)
}

pub fn validate_side(raw: &str) -> Result<Side> {
    let side = raw.trim().to_uppercase();
    side.parse().map_err(|_| {
        BinanceError::validation("side", format!("Invalid side '{side}': must be BUY or SELL"))
    })
}

pub fn validate_order_type(raw: &str) -> Result<OrderType> {
    let order_type = raw.trim().to_uppercase();
    order_type.parse().map_err(|_| {
        BinanceError::validation(
            "type",
            format!("Invalid order type '{order_type}': must be MARKET, LIMIT or STOP_MARKET"),
        )
    })
}

pub fn validate_quantity(raw: &str) -> Result<Decimal> {
    let quantity: Decimal = raw.trim().parse().map_err(|_| {
        BinanceError::validation(
            "quantity",
            format!("Invalid quantity '{raw}': must be a positive number"),
        )
    })?;
    if quantity <= Decimal::ZERO {
        return Err(BinanceError::validation(
            "quantity",
            format!("Quantity must be greater than 0, got {quantity}"),
        ));
    }
    Ok(quantity)
}

/// Parse the reference price when the order type uses one; a value supplied
/// for market orders is dropped rather than rejected
pub fn validate_price(raw: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    if !order_type.requires_price() {
        return Ok(None);
    }
    let Some(raw) = raw else {
        return Err(BinanceError::validation(
            "price",
            format!("Price is required for {order_type} orders"),
        ));
    };
    let price: Decimal = raw.trim().parse().map_err(|_| {
        BinanceError::validation(
            "price",
            format!("Invalid price '{raw}': must be a positive number"),
        )
    })?;
    if price <= Decimal::ZERO {
        return Err(BinanceError::validation(
            "price",
            format!("Price must be greater than 0, got {price}"),
        ));
    }
    Ok(Some(price))
}

/// Parse the stop trigger price; only stop orders use one
pub fn validate_stop_price(raw: Option<&str>, order_type: OrderType) -> Result<Option<Decimal>> {
    if !order_type.requires_stop_price() {
        return Ok(None);
    }
    let Some(raw) = raw else {
        return Err(BinanceError::validation(
            "stopPrice",
            "Stop price is required for STOP_MARKET orders",
        ));
    };
    let stop_price: Decimal = raw.trim().parse().map_err(|_| {
        BinanceError::validation(
            "stopPrice",
            format!("Invalid stop price '{raw}': must be a positive number"),
        )
    })?;
    if stop_price <= Decimal::ZERO {
        return Err(BinanceError::validation(
            "stopPrice",
            format!("Stop price must be greater than 0, got {stop_price}"),
        ));
    }
    Ok(Some(stop_price))
}

/// Normalize the time-in-force flag for limit orders
pub fn validate_time_in_force(raw: &str) -> Result<TimeInForce> {
    let time_in_force = raw.trim().to_uppercase();
    time_in_force.parse().map_err(|_| {
        BinanceError::validation(
            "timeInForce",
            format!("Invalid time in force '{time_in_force}': must be GTC, IOC, FOK or GTX"),
        )
    })
}

/// Validate every raw field and assemble the typed request.
///
/// The first failing field aborts with its error; no network traffic has
/// happened by then.
pub fn build_order_request(input: &OrderInput) -> Result<OrderRequest> {
    let symbol = validate_symbol(&input.symbol)?;
    let side = validate_side(&input.side)?;
    let order_type = validate_order_type(&input.order_type)?;
    let quantity = validate_quantity(&input.quantity)?;
    let price = validate_price(input.price.as_deref(), order_type)?;
    let stop_price = validate_stop_price(input.stop_price.as_deref(), order_type)?;
    let time_in_force = match input.time_in_force.as_deref() {
        Some(raw) => validate_time_in_force(raw)?,
        None => TimeInForce::default(),
    };

    let terms = match order_type {
        OrderType::Market => OrderTerms::Market,
        OrderType::Limit => OrderTerms::Limit {
            price: require_price(price, order_type)?,
            time_in_force,
        },
        OrderType::StopMarket => OrderTerms::StopMarket {
            price: require_price(price, order_type)?,
            stop_price: require_stop_price(stop_price)?,
        },
    };

    Ok(OrderRequest {
        symbol,
        side,
        quantity,
        terms,
    })
}

fn require_price(price: Option<Decimal>, order_type: OrderType) -> Result<Decimal> {
    price.ok_or_else(|| {
        BinanceError::validation("price", format!("Price is required for {order_type} orders"))
    })
}

fn require_stop_price(stop_price: Option<Decimal>) -> Result<Decimal> {
    stop_price.ok_or_else(|| {
        BinanceError::validation("stopPrice", "Stop price is required for STOP_MARKET orders")
    })
}
