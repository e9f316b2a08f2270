use std::fs;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use serde_json::Value;

use api_event_handler::{telemetry::init_tracing, Config, Dispatcher, InvocationMeta};

/// Run one stored event through the handler and print the response
#[derive(Parser)]
struct Cli {
    /// Path to an HTTP API event in JSON
    #[arg(long)]
    event: PathBuf,

    /// Invocation id; a random one is generated when omitted
    #[arg(long)]
    request_id: Option<String>,

    #[arg(long, default_value = "local-replay")]
    function_name: String,

    /// Pretty-print the response envelope
    #[arg(long)]
    pretty: bool,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = Config::from_env()?;
    config.validate()?;
    init_tracing(&config)?;

    let raw = fs::read_to_string(&cli.event)
        .with_context(|| format!("failed to read {}", cli.event.display()))?;
    let payload: Value = serde_json::from_str(&raw)
        .with_context(|| format!("{} is not valid JSON", cli.event.display()))?;

    let request_id = cli
        .request_id
        .unwrap_or_else(|| uuid::Uuid::new_v4().to_string());
    let invocation = InvocationMeta::new(request_id, cli.function_name);

    let response = Dispatcher::new(config).handle_value(payload, &invocation);

    let output = if cli.pretty {
        serde_json::to_string_pretty(&response)?
    } else {
        serde_json::to_string(&response)?
    };
    println!("{}", output);

    Ok(())
}
