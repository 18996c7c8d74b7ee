/*
[INPUT]:  Submodule implementations
[OUTPUT]: Public HTTP API surface
[POS]:    HTTP module root - re-exports client, signing and errors
[UPDATE]: When adding new HTTP submodules
*/

pub mod account;
pub mod client;
pub mod error;
pub mod market;
pub mod signature;
pub mod trade;

pub use client::{BinanceClient, ClientConfig, Credentials, TESTNET_BASE_URL};
pub use error::{BinanceError, Result};
pub use signature::{RequestSigner, SignedParams};
