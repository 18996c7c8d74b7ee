/*
[INPUT]:  BINANCE_API_KEY / BINANCE_API_SECRET environment variables
[OUTPUT]: Exchange metadata and account balances from the testnet
[POS]:    Examples - connectivity probe and signed account query
[UPDATE]: When adding new market or account endpoints
*/

use binance_fut_adapter::*;

/// Example: probe the testnet and read account balances
///
/// `exchange_info` is public; `account` requires valid testnet
/// credentials in the environment.
#[tokio::main]
async fn main() {
    println!("=== Binance Futures Account Example ===\n");

    let (api_key, api_secret) = match (
        std::env::var("BINANCE_API_KEY"),
        std::env::var("BINANCE_API_SECRET"),
    ) {
        (Ok(api_key), Ok(api_secret)) => (api_key, api_secret),
        _ => {
            eprintln!("Set BINANCE_API_KEY and BINANCE_API_SECRET to run this example");
            return;
        }
    };

    let client = match BinanceClient::new(Credentials::new(api_key, api_secret)) {
        Ok(client) => client,
        Err(err) => {
            eprintln!("Failed to create client: {err}");
            return;
        }
    };
    println!("✓ HTTP client created (testnet base URL)\n");

    // Unsigned connectivity probe
    println!("Querying exchange info...");
    match client.exchange_info().await {
        Ok(info) => println!("✓ Exchange reachable, {} symbols listed", info.symbols.len()),
        Err(err) => println!("✗ Error: {err}"),
    }

    // Signed account query
    println!("\nQuerying account balances...");
    match client.account().await {
        Ok(account) => {
            println!("✓ Available balance: {:?}", account.available_balance);
            for asset in &account.assets {
                println!("  {} wallet={}", asset.asset, asset.wallet_balance);
            }
        }
        Err(err) => println!("✗ Error: {err}"),
    }

    println!("\n✓ Account example complete");
}
