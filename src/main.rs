use dotenvy::dotenv;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use activities::config::ServerConfig;
use activities::database::ActivityDirectory;
use activities::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load .env file
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Seed the directory once; every handler shares this instance
    let config = ServerConfig::from_env()?;
    let directory = ActivityDirectory::seeded();
    info!(activities = directory.len(), "activity directory seeded");

    // 3. Build the application
    let app = web::router(directory.into_shared(), &config.static_dir);

    // 4. Start the server (with fallback port)
    let addr = config.addr()?;
    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            warn!(%addr, error = %e, "bind failed");
            let fallback = config.fallback_addr()?;
            info!(%fallback, "trying fallback port");
            tokio::net::TcpListener::bind(fallback).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!(
        static_dir = %config.static_dir.display(),
        "server listening on http://{}",
        bound_addr
    );

    axum::serve(listener, app).await?;
    Ok(())
}
