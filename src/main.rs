//! bento-gateway - chat proxy for the bento-grid portfolio
//!
//! Loads `config/gateway.yaml` (or defaults), applies environment overrides
//! and serves `/api`.

#![allow(missing_docs)]

use bento_gateway::config::{Config, LogFormat};
use bento_gateway::server;
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::Subscriber;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::fmt::MakeWriter;

#[derive(Debug, Parser)]
#[command(name = "gateway", version, about = "Rate-limited chat proxy for the portfolio site")]
struct Args {
    /// Path to the YAML configuration file
    #[arg(short, long, env = "GATEWAY_CONFIG", default_value = "config/gateway.yaml")]
    config: PathBuf,

    /// Override the bind host
    #[arg(long)]
    host: Option<String>,

    /// Override the bind port
    #[arg(short, long)]
    port: Option<u16>,
}

fn env_filter(default: &str) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default))
}

/// Plain subscriber used until the configured one can be installed
fn bootstrap_subscriber<W>(filter: EnvFilter, writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(writer)
        .finish()
}

fn init_tracing(config: &Config) {
    let filter = env_filter(config.logging().level.as_str());

    match config.logging().format {
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .with_target(false)
            .init(),
        LogFormat::Text => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_thread_ids(false)
            .init(),
    }
}

async fn load_config(args: Args) -> anyhow::Result<Config> {
    let mut config = Config::load(&args.config).await?;
    if let Some(host) = args.host {
        config.gateway.server.host = host;
    }
    if let Some(port) = args.port {
        config.gateway.server.port = port;
    }
    config.validate()?;
    Ok(config)
}

async fn run(args: Args) -> anyhow::Result<()> {
    // The configured level and format are unknown until loading finishes.
    let config = {
        let _bootstrap = tracing::subscriber::set_default(bootstrap_subscriber(
            env_filter("info"),
            std::io::stdout,
        ));
        load_config(args).await?
    };

    init_tracing(&config);
    server::serve(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() -> ExitCode {
    // `.env` is optional
    let _ = dotenvy::dotenv();
    let args = Args::parse();

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
