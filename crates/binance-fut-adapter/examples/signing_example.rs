/*
[INPUT]:  Order parameters and a throwaway API secret
[OUTPUT]: Wire parameters and the signed query string
[POS]:    Examples - request signing walkthrough
[UPDATE]: When signing or parameter encoding changes
*/

use binance_fut_adapter::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: how an order becomes a signed query string
///
/// Uses a throwaway secret and a fixed timestamp so the output is
/// reproducible. No network traffic.
fn main() {
    println!("=== Binance Futures Signing Example ===\n");

    let order = OrderRequest::limit(
        "BTCUSDT",
        Side::Buy,
        Decimal::from_str("0.001").unwrap_or_default(),
        Decimal::from_str("95000").unwrap_or_default(),
        TimeInForce::Gtc,
    );

    println!("Wire parameters in submission order:");
    for (key, value) in order.to_params() {
        println!("  {key} = {value}");
    }

    let signer = RequestSigner::new("demo-secret-not-for-real-use");
    let signed = signer.sign_at(&order.to_params(), 1_736_500_000_000);

    println!("\n✓ Signed query string:");
    println!("  {}", signed.encode());
    println!("\nThe timestamp is injected at signing time and the signature");
    println!("is always the final parameter. The same encoder produces the");
    println!("signed bytes and the sent bytes.");
}
