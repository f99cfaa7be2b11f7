use clap::Parser;

use pixelperfect_api::app::app;
use pixelperfect_api::auth::session::SessionStore;
use pixelperfect_api::config;
use pixelperfect_api::state::AppState;
use pixelperfect_api::store::{seed, Store};

/// Content backend for the PixelPerfect agency site.
#[derive(Debug, Parser)]
#[command(name = "pixelperfect-api", version)]
struct Args {
    /// Bind address; overrides HOST
    #[arg(long)]
    host: Option<String>,

    /// Listen port; overrides PORT
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up PORT, ADMIN_PASSWORD, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("starting PixelPerfect API in {:?} mode", config.environment);

    let args = Args::parse();

    // Storage is constructed here and injected; seeding is an explicit step.
    let store = Store::new();
    seed::seed_admin(&store, &config.seed.admin_username, &config.seed.admin_password)?;
    if config.seed.demo_data {
        seed::seed_demo(&store);
        tracing::info!("seeded demo fixtures");
    }

    let sessions = SessionStore::new(config.session.ttl_hours);
    let state = AppState::new(store, sessions);

    let host = args.host.unwrap_or_else(|| config.server.host.clone());
    let port = args.port.unwrap_or(config.server.port);
    let bind_addr = format!("{}:{}", host, port);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!("listening on http://{}", bind_addr);

    axum::serve(listener, app(state)).await?;
    Ok(())
}
