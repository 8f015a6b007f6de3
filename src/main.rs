use anyhow::Context;
use dotenvy::dotenv;
use std::net::SocketAddr;
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mergington_activities::config::AppConfig;
use mergington_activities::database;
use mergington_activities::web::{self, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv().ok();

    // 1. Start logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "mergington_activities=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;
    info!(
        version = env!("CARGO_PKG_VERSION"),
        enforce_capacity = config.signup_policy.enforce_capacity,
        "Starting activities server"
    );

    // 2. Open and seed the activity store
    let pool = database::connect(&config.database_url)
        .await
        .with_context(|| format!("cannot open activity store at {}", config.database_url))?;
    info!("Activity store ready ({})", config.database_url);

    // 3. Build the application
    let state = AppState::new(pool, config.signup_policy);
    let app = web::router(state, &config.static_dir);

    // 4. Start the server, falling back to the next port
    let addr: SocketAddr = format!("{}:{}", config.host, config.port)
        .parse()
        .with_context(|| format!("cannot parse {}:{}", config.host, config.port))?;

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(l) => l,
        Err(e) => {
            let fallback_port = config.port.checked_add(1).context("no fallback port")?;
            warn!(
                "Cannot bind {}: {}. Trying fallback {}:{}",
                addr, e, config.host, fallback_port
            );
            let fallback: SocketAddr = format!("{}:{}", config.host, fallback_port)
                .parse()
                .context("cannot parse fallback address")?;
            tokio::net::TcpListener::bind(fallback)
                .await
                .context("cannot bind fallback port")?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server running on http://{}", bound_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
