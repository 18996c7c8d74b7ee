/*
[INPUT]:  API schema definitions and serde requirements
[OUTPUT]: Typed Rust enums with serialization support
[POS]:    Data layer - type definitions for API communication
[UPDATE]: When API schema changes or new types added
*/

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    pub fn as_str(&self) -> &'static str {
        match self {
            Side::Buy => "BUY",
            Side::Sell => "SELL",
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Side {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "BUY" => Ok(Side::Buy),
            "SELL" => Ok(Side::Sell),
            other => Err(format!("unknown side '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderType {
    Market,
    Limit,
    StopMarket,
}

impl OrderType {
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderType::Market => "MARKET",
            OrderType::Limit => "LIMIT",
            OrderType::StopMarket => "STOP_MARKET",
        }
    }

    /// Whether orders of this type carry a reference price
    pub fn requires_price(&self) -> bool {
        matches!(self, OrderType::Limit | OrderType::StopMarket)
    }

    /// Whether orders of this type carry a stop trigger price
    pub fn requires_stop_price(&self) -> bool {
        matches!(self, OrderType::StopMarket)
    }
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "MARKET" => Ok(OrderType::Market),
            "LIMIT" => Ok(OrderType::Limit),
            "STOP_MARKET" => Ok(OrderType::StopMarket),
            other => Err(format!("unknown order type '{other}'")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TimeInForce {
    #[default]
    Gtc,
    Ioc,
    Fok,
    Gtx,
}

impl TimeInForce {
    pub fn as_str(&self) -> &'static str {
        match self {
            TimeInForce::Gtc => "GTC",
            TimeInForce::Ioc => "IOC",
            TimeInForce::Fok => "FOK",
            TimeInForce::Gtx => "GTX",
        }
    }
}

impl fmt::Display for TimeInForce {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TimeInForce {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "GTC" => Ok(TimeInForce::Gtc),
            "IOC" => Ok(TimeInForce::Ioc),
            "FOK" => Ok(TimeInForce::Fok),
            "GTX" => Ok(TimeInForce::Gtx),
            other => Err(format!("unknown time in force '{other}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_forms() {
        assert_eq!(Side::Buy.as_str(), "BUY");
        assert_eq!(OrderType::StopMarket.as_str(), "STOP_MARKET");
        assert_eq!(TimeInForce::Gtx.to_string(), "GTX");
    }

    #[test]
    fn test_from_str_round_trip() {
        assert_eq!("SELL".parse::<Side>().unwrap(), Side::Sell);
        assert_eq!("STOP_MARKET".parse::<OrderType>().unwrap(), OrderType::StopMarket);
        assert_eq!("IOC".parse::<TimeInForce>().unwrap(), TimeInForce::Ioc);
        assert!("HOLD".parse::<Side>().is_err());
        assert!("TRAILING_STOP".parse::<OrderType>().is_err());
    }

    #[test]
    fn test_price_requirements_per_type() {
        assert!(!OrderType::Market.requires_price());
        assert!(OrderType::Limit.requires_price());
        assert!(OrderType::StopMarket.requires_price());
        assert!(OrderType::StopMarket.requires_stop_price());
        assert!(!OrderType::Limit.requires_stop_price());
    }

    #[test]
    fn test_default_time_in_force_is_gtc() {
        assert_eq!(TimeInForce::default(), TimeInForce::Gtc);
    }
}
