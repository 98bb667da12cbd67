use std::path::PathBuf;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Base URL of the external metadata provider.
    pub provider_url: String,
    /// Timeout for a single provider request in seconds (default: `10`).
    pub provider_timeout_secs: u64,
    /// Path of the static enrichment JSON file.
    pub enrichment_path: PathBuf,
    /// When set, a stand-in provider serving the enrichment file is started on this port.
    pub mock_provider_port: Option<u16>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                 | Default                    |
    /// |-------------------------|----------------------------|
    /// | `HOST`                  | `0.0.0.0`                  |
    /// | `PORT`                  | `8080`                     |
    /// | `CORS_ORIGINS`          | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS`  | `30`                       |
    /// | `PROVIDER_URL`          | `http://localhost:8081`    |
    /// | `PROVIDER_TIMEOUT_SECS` | `10`                       |
    /// | `ENRICHMENT_PATH`       | `song_enrichment.json`     |
    /// | `MOCK_PROVIDER_PORT`    | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins = parse_origins(
            &std::env::var("CORS_ORIGINS").unwrap_or_else(|_| "http://localhost:5173".into()),
        );

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let provider_url =
            std::env::var("PROVIDER_URL").unwrap_or_else(|_| "http://localhost:8081".into());

        let provider_timeout_secs: u64 = std::env::var("PROVIDER_TIMEOUT_SECS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("PROVIDER_TIMEOUT_SECS must be a valid u64");

        let enrichment_path = std::env::var("ENRICHMENT_PATH")
            .unwrap_or_else(|_| "song_enrichment.json".into())
            .into();

        let mock_provider_port = std::env::var("MOCK_PROVIDER_PORT").ok().map(|v| {
            v.parse::<u16>()
                .expect("MOCK_PROVIDER_PORT must be a valid u16")
        });

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            provider_url,
            provider_timeout_secs,
            enrichment_path,
            mock_provider_port,
        }
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
