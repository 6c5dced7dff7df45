//! clear-mind server binary: serve the HTTP surface, or process a single
//! thought from stdin with `--once`.

use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use clear_mind::cognitive::Pipeline;
use clear_mind::cognitive::types::CognitiveInput;
use clear_mind::config::Config;
use clear_mind::http::{HttpState, serve};
use clear_mind::providers::{ContentProvider, HttpProvider};

#[derive(Parser, Debug)]
#[command(name = "clear-mind", about = "Structured clarity for free-form thought")]
struct Args {
    /// Address to bind the HTTP server
    #[arg(long)]
    bind: Option<std::net::SocketAddr>,

    /// Read one thought from stdin, print the JSON output, and exit
    #[arg(long)]
    once: bool,

    /// Treat the call as privileged (provider delegation allowed)
    #[arg(long)]
    privileged: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    clear_mind::load_env();

    let args = Args::parse();
    let config = Config::load()?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config.runtime.log_level.clone())),
        )
        .init();

    let provider: Option<Arc<dyn ContentProvider>> = if config.provider.enable {
        match HttpProvider::from_config(&config.provider) {
            Ok(provider) => {
                info!(model = %config.provider.model, "content provider configured");
                Some(Arc::new(provider))
            }
            Err(e) => {
                tracing::warn!(error = %e, "content provider unavailable, rule engine only");
                None
            }
        }
    } else {
        None
    };

    let pipeline = Arc::new(Pipeline::new(
        provider,
        std::time::Duration::from_millis(config.provider.timeout_ms),
    ));

    if args.once {
        let mut text = String::new();
        use tokio::io::AsyncReadExt;
        tokio::io::stdin().read_to_string(&mut text).await?;
        let output = pipeline
            .process(CognitiveInput { text }, args.privileged)
            .await;
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    let bind = args.bind.unwrap_or(config.runtime.http_bind);
    serve(HttpState { pipeline }, bind).await?;
    Ok(())
}
