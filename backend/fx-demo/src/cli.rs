use crate::DemoError;

use clap::Parser;
use fx_core::HeaderValue;

#[derive(Parser, Debug)]
#[command(name = "fx-demo")]
#[command(about = "Publish messages through a bounded broadcast channel")]
#[command(version)]
pub struct Cli {
    /// Number of recording subscribers to register
    #[arg(long, default_value_t = 2, value_parser = clap::value_parser!(u16).range(1..))]
    pub subscribers: u16,

    /// Message limit for the last subscriber
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    pub limit: Option<u64>,

    /// Header attached to every message, as name=value (repeatable)
    #[arg(long = "header", value_parser = parse_header)]
    pub headers: Vec<(String, HeaderValue)>,

    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,

    /// Payloads to publish, in order
    #[arg(default_values_t = [String::from("greeting")])]
    pub payloads: Vec<String>,
}

/// Split `name=value`. The value is read as JSON when it parses, else kept as
/// a string, so `status=202` yields a number and `foo=bar` a string.
pub fn parse_header(raw: &str) -> Result<(String, HeaderValue), DemoError> {
    let Some((name, value)) = raw.split_once('=') else {
        return Err(DemoError::invalid_header(raw));
    };

    if name.trim().is_empty() {
        return Err(DemoError::invalid_header(raw));
    }

    let value = serde_json::from_str(value)
        .unwrap_or_else(|_| HeaderValue::String(value.to_string()));

    Ok((name.to_string(), value))
}
