/*
[INPUT]:  CLI arguments and environment credentials
[OUTPUT]: One order submission with console and file logging
[POS]:    CLI crate root - argument parsing and run flow
[UPDATE]: When changing CLI flags, credential resolution, or the run flow
*/

use std::path::PathBuf;

use anyhow::{anyhow, Context};
use clap::Parser;
use tracing::{error, info};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter, Layer};

use binance_fut_adapter::{
    build_order_request, BinanceClient, BinanceError, ClientConfig, Credentials, OrderInput,
    OrderManager, OrderOutcome, Result, TESTNET_BASE_URL,
};

pub mod output;

const EXAMPLES: &str = "\
Examples:
  # Market buy
  binance-fut-cli --symbol BTCUSDT --side BUY --type MARKET --quantity 0.001

  # Limit sell
  binance-fut-cli --symbol BTCUSDT --side SELL --type LIMIT --quantity 0.001 --price 95000

  # Stop-market buy
  binance-fut-cli --symbol BTCUSDT --side BUY --type STOP_MARKET --quantity 0.001 \\
      --price 96500 --stop-price 96000

Credentials can also be provided via the BINANCE_API_KEY and
BINANCE_API_SECRET environment variables; flags take precedence.";

#[derive(Parser, Debug)]
#[command(
    name = "binance-fut-cli",
    version,
    about = "Place a single order on the Binance USDT-M futures testnet",
    after_help = EXAMPLES
)]
pub struct Cli {
    /// Trading pair, e.g. BTCUSDT
    #[arg(long, value_name = "SYMBOL")]
    pub symbol: String,
    /// BUY or SELL
    #[arg(long, value_name = "SIDE")]
    pub side: String,
    /// MARKET, LIMIT or STOP_MARKET
    #[arg(long = "type", value_name = "ORDER_TYPE")]
    pub order_type: String,
    /// Order quantity in base asset units
    #[arg(long, value_name = "QTY")]
    pub quantity: String,
    /// Limit price; also the reference price for stop orders
    #[arg(long, value_name = "PRICE")]
    pub price: Option<String>,
    /// Trigger price for STOP_MARKET orders
    #[arg(long = "stop-price", value_name = "PRICE")]
    pub stop_price: Option<String>,
    /// Time in force for LIMIT orders
    #[arg(long = "time-in-force", value_name = "TIF", default_value = "GTC")]
    pub time_in_force: String,
    /// API key; falls back to BINANCE_API_KEY
    #[arg(long = "api-key", value_name = "KEY")]
    pub api_key: Option<String>,
    /// API secret; falls back to BINANCE_API_SECRET
    #[arg(long = "api-secret", value_name = "SECRET")]
    pub api_secret: Option<String>,
    #[arg(long = "base-url", value_name = "URL", default_value = TESTNET_BASE_URL)]
    pub base_url: String,
    /// Probe the exchange before submitting the order
    #[arg(long)]
    pub check: bool,
    #[arg(long = "log-level", value_name = "LEVEL", default_value = "info")]
    pub log_level: String,
    #[arg(long = "log-dir", value_name = "DIR", default_value = "logs")]
    pub log_dir: PathBuf,
}

/// Run the CLI to completion, printing a failure block on any error
pub async fn run(args: &Cli) -> Result<()> {
    match run_inner(args).await {
        Ok(()) => Ok(()),
        Err(err) => {
            output::print_failure(&err);
            Err(err)
        }
    }
}

async fn run_inner(args: &Cli) -> Result<()> {
    let credentials = resolve_credentials(args)
        .inspect_err(|err| error!(error = %err, "credential resolution failed"))?;

    let input = OrderInput {
        symbol: args.symbol.clone(),
        side: args.side.clone(),
        order_type: args.order_type.clone(),
        quantity: args.quantity.clone(),
        price: args.price.clone(),
        stop_price: args.stop_price.clone(),
        time_in_force: Some(args.time_in_force.clone()),
    };
    let order = build_order_request(&input)
        .inspect_err(|err| error!(error = %err, "input validation failed"))?;

    let config = ClientConfig {
        base_url: args.base_url.clone(),
        ..ClientConfig::default()
    };
    let client = BinanceClient::with_config(credentials, config)?;
    let manager = OrderManager::new(client);

    if args.check {
        let info = manager.client().exchange_info().await?;
        info!(symbols = info.symbols.len(), "connectivity check passed");
        output::print_connectivity(&info);
    }

    println!("{}", output::order_summary(&order));

    let ack = manager.place_order(&order).await?;

    println!("{}", output::order_response(&ack));
    match ack.outcome() {
        OrderOutcome::Placed => {
            output::print_placed(ack.status.as_deref().unwrap_or(""));
        }
        OrderOutcome::Unknown(status) => {
            output::print_unknown_status(&status);
        }
    }

    Ok(())
}

/// Flags win over environment variables; empty values count as absent
fn resolve_credentials(args: &Cli) -> Result<Credentials> {
    let api_key = args
        .api_key
        .clone()
        .filter(|value| !value.is_empty())
        .or_else(|| env_var("BINANCE_API_KEY"));
    let api_secret = args
        .api_secret
        .clone()
        .filter(|value| !value.is_empty())
        .or_else(|| env_var("BINANCE_API_SECRET"));

    match (api_key, api_secret) {
        (Some(api_key), Some(api_secret)) => Ok(Credentials::new(api_key, api_secret)),
        _ => Err(BinanceError::validation(
            "credentials",
            "API credentials not found. Set BINANCE_API_KEY and BINANCE_API_SECRET \
             environment variables, or pass --api-key and --api-secret",
        )),
    }
}

fn env_var(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|value| !value.is_empty())
}

/// Install console (stderr) and daily rolling file logging.
///
/// The returned guard must stay alive until exit so buffered file
/// records get flushed.
pub fn init_tracing(args: &Cli) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(&args.log_dir)
        .with_context(|| format!("create log directory {}", args.log_dir.display()))?;

    let console_filter = if std::env::var(EnvFilter::DEFAULT_ENV).is_ok() {
        EnvFilter::try_from_default_env().context("invalid RUST_LOG filter")?
    } else {
        EnvFilter::try_new(&args.log_level).context("invalid log level")?
    };

    let file_appender = tracing_appender::rolling::daily(&args.log_dir, "binance-fut.log");
    let (file_writer, guard) = tracing_appender::non_blocking(file_appender);

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(console_filter);
    let file_layer = fmt::layer()
        .with_writer(file_writer)
        .with_ansi(false)
        .with_filter(LevelFilter::DEBUG);

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .try_init()
        .map_err(|err| anyhow!(err))
        .context("initialize tracing subscriber")?;

    info!(log_dir = %args.log_dir.display(), "logging initialised");
    Ok(guard)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args_with_credentials(api_key: Option<&str>, api_secret: Option<&str>) -> Cli {
        Cli::parse_from({
            let mut argv = vec![
                "binance-fut-cli".to_string(),
                "--symbol".to_string(),
                "BTCUSDT".to_string(),
                "--side".to_string(),
                "BUY".to_string(),
                "--type".to_string(),
                "MARKET".to_string(),
                "--quantity".to_string(),
                "0.001".to_string(),
            ];
            if let Some(api_key) = api_key {
                argv.push("--api-key".to_string());
                argv.push(api_key.to_string());
            }
            if let Some(api_secret) = api_secret {
                argv.push("--api-secret".to_string());
                argv.push(api_secret.to_string());
            }
            argv
        })
    }

    // Single test so the process environment is mutated from one place only.
    #[test]
    fn test_resolve_credentials_precedence() {
        unsafe {
            std::env::set_var("BINANCE_API_KEY", "env-key");
            std::env::set_var("BINANCE_API_SECRET", "env-secret");
        }

        let flags = args_with_credentials(Some("flag-key"), Some("flag-secret"));
        let credentials = resolve_credentials(&flags).unwrap();
        assert_eq!(credentials.api_key, "flag-key");
        assert_eq!(credentials.api_secret, "flag-secret");

        let env_only = args_with_credentials(None, None);
        let credentials = resolve_credentials(&env_only).unwrap();
        assert_eq!(credentials.api_key, "env-key");
        assert_eq!(credentials.api_secret, "env-secret");

        unsafe {
            std::env::remove_var("BINANCE_API_KEY");
            std::env::remove_var("BINANCE_API_SECRET");
        }

        let err = resolve_credentials(&args_with_credentials(None, None)).unwrap_err();
        assert!(matches!(err, BinanceError::Validation { field: "credentials", .. }));

        let partial = args_with_credentials(Some("flag-key"), None);
        let err = resolve_credentials(&partial).unwrap_err();
        assert!(matches!(err, BinanceError::Validation { field: "credentials", .. }));
    }
}
