/*
[INPUT]:  Order requests, acknowledgements and errors
[OUTPUT]: Formatted console blocks for the user
[POS]:    Presentation layer - all user-facing stdout rendering
[UPDATE]: When the summary or response layout changes
*/

use console::style;

use binance_fut_adapter::{BinanceError, ExchangeInfo, OrderAck, OrderRequest, OrderTerms};

const RULE_WIDTH: usize = 50;

fn rule() -> String {
    "=".repeat(RULE_WIDTH)
}

fn display_str(value: Option<&str>) -> &str {
    value.unwrap_or("N/A")
}

fn display_i64(value: Option<i64>) -> String {
    match value {
        Some(value) => value.to_string(),
        None => "N/A".to_string(),
    }
}

/// Render the request summary shown before submission
pub fn order_summary(order: &OrderRequest) -> String {
    let mut lines = vec![
        rule(),
        "  ORDER REQUEST SUMMARY".to_string(),
        rule(),
        format!("  Symbol     : {}", order.symbol),
        format!("  Side       : {}", order.side),
        format!("  Type       : {}", order.order_type()),
        format!("  Quantity   : {}", order.quantity),
    ];
    if let Some(price) = order.terms.price() {
        lines.push(format!("  Price      : {price}"));
    }
    if let Some(stop_price) = order.terms.stop_price() {
        lines.push(format!("  Stop Price : {stop_price}"));
    }
    if let OrderTerms::Limit { time_in_force, .. } = order.terms {
        lines.push(format!("  TIF        : {time_in_force}"));
    }
    lines.push(rule());
    lines.join("\n")
}

/// Render the exchange acknowledgement, with N/A for absent fields
pub fn order_response(ack: &OrderAck) -> String {
    let lines = [
        rule(),
        "  ORDER RESPONSE".to_string(),
        rule(),
        format!("  Order ID   : {}", display_i64(ack.order_id)),
        format!("  Status     : {}", display_str(ack.status.as_deref())),
        format!("  Symbol     : {}", display_str(ack.symbol.as_deref())),
        format!("  Side       : {}", display_str(ack.side.as_deref())),
        format!("  Type       : {}", display_str(ack.order_type.as_deref())),
        format!("  Orig Qty   : {}", display_str(ack.orig_qty.as_deref())),
        format!("  Executed   : {}", display_str(ack.executed_qty.as_deref())),
        format!("  Avg Price  : {}", display_str(ack.avg_price.as_deref())),
        format!("  Price      : {}", display_str(ack.price.as_deref())),
        format!("  Time       : {}", display_i64(ack.update_time)),
        rule(),
    ];
    lines.join("\n")
}

pub fn print_connectivity(info: &ExchangeInfo) {
    println!(
        "{} exchange reachable ({} symbols listed)",
        style("✓").green().bold(),
        info.symbols.len()
    );
}

pub fn print_placed(status: &str) {
    println!(
        "\n{} (status: {status})\n",
        style("✅ ORDER PLACED SUCCESSFULLY").green().bold()
    );
}

pub fn print_unknown_status(status: &str) {
    println!(
        "\n{}: {status}\n",
        style("⚠️  ORDER STATUS UNKNOWN").yellow().bold()
    );
}

/// Build the failure block for an error; validation and unexpected errors
/// get their own headers, everything else failed at the exchange boundary
pub fn failure_block(err: &BinanceError) -> String {
    match err {
        BinanceError::Validation { .. } => {
            format!("\n{}: {err}\n", style("❌ VALIDATION ERROR").red().bold())
        }
        BinanceError::Api { .. } | BinanceError::Connection(_) | BinanceError::Timeout { .. } => {
            format!("\n{}\n   {err}\n", style("❌ ORDER FAILED").red().bold())
        }
        BinanceError::Unexpected(_) => {
            format!("\n{}: {err}\n", style("❌ UNEXPECTED ERROR").red().bold())
        }
    }
}

pub fn print_failure(err: &BinanceError) {
    println!("{}", failure_block(err));
}
