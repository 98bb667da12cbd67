use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use songinfo_core::enrichment::EnrichmentSource;
use songinfo_db::store::{PgSongStore, SongStore};
use songinfo_db::PoolConfig;
use songinfo_provider::{MetadataApi, SongMetadataProvider};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use songinfo_api::config::ServerConfig;
use songinfo_api::resolver::SongResolver;
use songinfo_api::router::build_app_router;
use songinfo_api::routes;
use songinfo_api::state::AppState;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    // --- Tracing ---
    init_tracing();

    // --- Configuration ---
    let config = ServerConfig::from_env();
    tracing::info!(host = %config.host, port = %config.port, "Loaded server configuration");

    // --- Database ---
    let database_url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");
    let pool_config = PoolConfig::from_env();

    let pool = songinfo_db::create_pool(&database_url, &pool_config)
        .await
        .expect("Failed to connect to database");
    tracing::info!(
        max_connections = pool_config.max_connections,
        "Database connection pool created"
    );

    songinfo_db::health_check(&pool)
        .await
        .expect("Database health check failed");
    tracing::info!("Database health check passed");

    songinfo_db::run_migrations(&pool)
        .await
        .expect("Failed to run database migrations");
    tracing::info!("Database migrations applied");

    // --- Resolver dependencies ---
    let store: Arc<dyn SongStore> = Arc::new(PgSongStore::new(pool));

    let provider: Arc<dyn SongMetadataProvider> = Arc::new(
        MetadataApi::new(
            config.provider_url.clone(),
            Duration::from_secs(config.provider_timeout_secs),
        )
        .expect("Failed to build metadata provider client"),
    );
    tracing::info!(url = %config.provider_url, "Metadata provider configured");

    let enrichment = EnrichmentSource::new(config.enrichment_path.clone());
    tracing::info!(path = %config.enrichment_path.display(), "Enrichment source configured");

    // --- Mock provider ---
    if let Some(port) = config.mock_provider_port {
        let mock = routes::mock_provider::router(Arc::new(enrichment.clone()));
        let addr = SocketAddr::new(parse_host(&config.host), port);
        let listener = tokio::net::TcpListener::bind(addr)
            .await
            .expect("Failed to bind mock provider address");
        tracing::info!(%addr, "Starting mock metadata provider");
        tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, mock).await {
                tracing::error!(error = %e, "Mock provider stopped");
            }
        });
    }

    // --- App state ---
    let resolver = Arc::new(SongResolver::new(Arc::clone(&store), provider, enrichment));
    let state = AppState { store, resolver };

    let app = build_app_router(state, &config);

    // --- Start server ---
    let addr = SocketAddr::new(parse_host(&config.host), config.port);
    tracing::info!(%addr, "Starting server");

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");

    tracing::info!("Graceful shutdown complete");
}

/// Install the global subscriber. `LOG_FORMAT=json` switches to JSON lines.
fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "songinfo_api=debug,songinfo_core=debug,tower_http=debug".into());

    let json = std::env::var("LOG_FORMAT").is_ok_and(|v| v.eq_ignore_ascii_case("json"));

    let registry = tracing_subscriber::registry().with(filter);
    if json {
        registry.with(tracing_subscriber::fmt::layer().json()).init();
    } else {
        registry.with(tracing_subscriber::fmt::layer()).init();
    }
}

fn parse_host(host: &str) -> std::net::IpAddr {
    host.parse().expect("Invalid HOST address")
}

/// Wait for a termination signal to initiate graceful shutdown.
///
/// Handles both SIGINT (Ctrl-C) and SIGTERM (on Unix).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl-C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            tracing::info!("Received SIGINT (Ctrl-C), starting graceful shutdown");
        }
        () = terminate => {
            tracing::info!("Received SIGTERM, starting graceful shutdown");
        }
    }
}
