/// Aria - catalog and playback server
use aria_playback::{Notice, PlaybackEngine, PlayerConfig};
use aria_server::{
    api,
    config::ServerConfig,
    seed,
    services::{BroadcastSink, DbPlayLog},
    state::AppState,
};
use clap::{Parser, Subcommand};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::sync::broadcast;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "aria-server")]
#[command(about = "Aria music catalog and playback server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Populate an empty database with the sample catalog
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "aria_server=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve => serve().await?,
        Commands::Seed => seed_database().await?,
    }

    Ok(())
}

async fn serve() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    config.validate()?;

    tracing::info!("Starting Aria server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let pool = aria_storage::create_pool(&config.storage.database_url).await?;
    aria_storage::run_migrations(&pool).await?;
    tracing::info!("Database connected");

    // Notices fan out to event-stream clients
    let (notices, _) = broadcast::channel::<Notice>(64);

    let engine = PlaybackEngine::new(
        PlayerConfig {
            volume: config.player.volume,
        },
        Arc::new(BroadcastSink::new(notices.clone())),
        Arc::new(DbPlayLog::new(pool.clone())),
    );

    let state = AppState::new(pool, engine, notices);
    let app = api::create_router(state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));
    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

async fn seed_database() -> anyhow::Result<()> {
    let config = ServerConfig::load()?;
    let pool = aria_storage::create_pool(&config.storage.database_url).await?;
    aria_storage::run_migrations(&pool).await?;

    seed::seed(&pool).await?;

    Ok(())
}
