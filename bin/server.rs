// Portfolio - Web Server binary
//
// Usage: portfolio-server [ADDR]
// ADDR overrides PORTFOLIO_ADDR (default 127.0.0.1:3000).

use anyhow::Context;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use portfolio::config::{parse_addr, Config};
use portfolio::server;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    println!("🌐 Portfolio - Web Server");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━");

    let mut config = Config::from_env().context("Invalid PORTFOLIO_* environment")?;
    if let Some(addr) = std::env::args().nth(1) {
        config.addr = parse_addr(&addr)?;
    }

    match &config.content_path {
        Some(path) => println!("✓ Content file: {}", path.display()),
        None => println!("✓ Using built-in content"),
    }
    println!("\n🚀 http://{}", config.addr);
    println!("   API: http://{}/api/content", config.addr);
    println!("\n   Press Ctrl+C to stop\n");

    server::run_server(config).await
}
