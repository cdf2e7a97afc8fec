//! Entry point for the shortlink HTTP service.
//!
//! # Usage
//!
//! ```bash
//! # Defaults: listen on 0.0.0.0:8080, short URLs under http://localhost:8080
//! cargo run
//!
//! # Override the environment from the command line
//! cargo run -- --listen 127.0.0.1:9000 --base-url https://s.example.com
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use shortlink::config::Config;
use tracing_subscriber::EnvFilter;

/// In-memory URL shortener.
#[derive(Parser)]
#[command(name = "shortlink")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(short, long)]
    listen: Option<String>,

    /// Prefix of generated short URLs, overrides `BASE_URL`
    #[arg(short, long)]
    base_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = Config::from_env().context("Failed to load configuration")?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    config.validate().context("Invalid configuration")?;

    init_tracing(&config)?;
    config.print_summary();

    shortlink::server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid log filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
