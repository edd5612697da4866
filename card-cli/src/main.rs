//! # cardcraft
//!
//! Terminal greeting card maker.

use anyhow::Context;
use card_cli::{CliArgs, CliConfig, Session};
use clap::Parser;
use tokio::io::BufReader;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize tracing on stderr so screens on stdout stay readable.
///
/// Set `RUST_LOG` to control log levels
/// (default: `cardcraft=info,card_cli=info,card_core=info`).
/// Set `RUST_LOG_FORMAT=json` for JSON output.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("cardcraft=info,card_cli=info,card_core=info"));

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    if std::env::var("RUST_LOG_FORMAT").as_deref() == Ok("json") {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();

    let args = CliArgs::parse();
    let config = CliConfig::from(args);

    tracing::info!(
        "Starting CardCraft (splash {}ms, busy {}ms)",
        config.app.splash_delay_ms,
        config.app.busy_delay_ms
    );

    let mut session = Session::new(config.app, config.json, std::io::stdout());

    if let Some(path) = &config.script {
        tracing::info!("Reading commands from {}", path.display());
        let file = tokio::fs::File::open(path)
            .await
            .with_context(|| format!("Failed to open script {}", path.display()))?;
        session.run(BufReader::new(file)).await?;
    } else {
        session.run(BufReader::new(tokio::io::stdin())).await?;
    }

    tracing::info!("CardCraft exited on {}", session.app().current_route());
    Ok(())
}
