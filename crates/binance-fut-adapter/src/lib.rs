/*
[INPUT]:  Crate modules and public type definitions
[OUTPUT]: Public Binance futures adapter crate surface
[POS]:    Crate root - module wiring
[UPDATE]: When public modules or exports change
*/

pub mod http;
pub mod orders;
pub mod types;
pub mod validate;

// Re-export commonly used types from http
pub use http::{
    BinanceClient,
    BinanceError,
    ClientConfig,
    Credentials,
    RequestSigner,
    Result,
    TESTNET_BASE_URL,
};

// Re-export the order manager
pub use orders::OrderManager;

// Re-export all types
pub use types::*;

// Re-export validation entry points
pub use validate::{build_order_request, OrderInput};
