use anyhow::Result;

// ============================================================================
// Configuration Constants
// ============================================================================

const DEFAULT_PORT: u16 = 8080;
const DEFAULT_PUBLIC_DIR: &str = "public";
const DEFAULT_DB_MAX_CONNECTIONS: u32 = 5;

// ============================================================================
// Configuration Structures
// ============================================================================

/// Database connection pool configuration
#[derive(Clone, Debug)]
pub struct DbConfig {
    /// Maximum number of connections in the pool
    pub max_connections: u32,
}

#[derive(Clone, Debug)]
pub struct Config {
    /// Postgres connection string, read once at startup
    pub database_url: String,
    pub port: u16,
    /// Directory static assets (images) are served from
    pub public_dir: String,
    pub rust_log: String,
    pub db: DbConfig,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            database_url: std::env::var("DATABASE_URL")?,
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(DEFAULT_PORT),
            public_dir: std::env::var("PUBLIC_DIR")
                .unwrap_or_else(|_| DEFAULT_PUBLIC_DIR.to_string()),
            rust_log: std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string()),
            db: DbConfig {
                max_connections: std::env::var("DB_MAX_CONNECTIONS")
                    .ok()
                    .and_then(|c| c.parse().ok())
                    .unwrap_or(DEFAULT_DB_MAX_CONNECTIONS),
            },
        })
    }
}
