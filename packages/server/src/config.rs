use std::env;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use sqlx::postgres::{PgConnectOptions, PgPoolOptions};

const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:3005";

/// Application configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub app_name: String,
    /// Mount point for the listing routes ("" serves them at the root)
    pub api_prefix: String,
    pub allowed_origins: Vec<String>,
    pub db_max_connections: u32,
    pub db_acquire_timeout: Duration,
    /// Server-side `statement_timeout` applied to every pooled connection
    pub db_statement_timeout: Duration,
    pub request_timeout: Duration,
    pub run_migrations: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        // Load .env file if present (development)
        let _ = dotenv();

        Ok(Self {
            database_url: env::var("DATABASE_URL").context("DATABASE_URL must be set")?,
            port: env::var("PORT")
                .unwrap_or_else(|_| "8000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
            app_name: env::var("APP_NAME").unwrap_or_else(|_| "Staywise API".to_string()),
            api_prefix: normalize_prefix(&env::var("API_PREFIX").unwrap_or_default()),
            allowed_origins: parse_origins(
                &env::var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            db_max_connections: env::var("DB_MAX_CONNECTIONS")
                .unwrap_or_else(|_| "10".to_string())
                .parse()
                .context("DB_MAX_CONNECTIONS must be a valid number")?,
            db_acquire_timeout: Duration::from_secs(
                env::var("DB_ACQUIRE_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "5".to_string())
                    .parse()
                    .context("DB_ACQUIRE_TIMEOUT_SECS must be a valid number")?,
            ),
            db_statement_timeout: Duration::from_secs(
                env::var("DB_STATEMENT_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "10".to_string())
                    .parse()
                    .context("DB_STATEMENT_TIMEOUT_SECS must be a valid number")?,
            ),
            request_timeout: Duration::from_secs(
                env::var("REQUEST_TIMEOUT_SECS")
                    .unwrap_or_else(|_| "30".to_string())
                    .parse()
                    .context("REQUEST_TIMEOUT_SECS must be a valid number")?,
            ),
            run_migrations: env::var("RUN_MIGRATIONS")
                .map(|v| !matches!(v.trim().to_ascii_lowercase().as_str(), "0" | "false" | "no"))
                .unwrap_or(true),
        })
    }

    /// Pool sizing and the connection-acquisition deadline
    pub fn pool_options(&self) -> PgPoolOptions {
        PgPoolOptions::new()
            .max_connections(self.db_max_connections)
            .acquire_timeout(self.db_acquire_timeout)
    }

    /// Connection options for `database_url` with the statement timeout set.
    ///
    /// A query that outlives the timeout is cancelled by Postgres and comes
    /// back as a `sqlx::Error`.
    pub fn connect_options(&self) -> Result<PgConnectOptions> {
        let options = PgConnectOptions::from_str(&self.database_url)
            .context("DATABASE_URL must be a valid Postgres URL")?
            .options([(
                "statement_timeout",
                format!("{}ms", self.db_statement_timeout.as_millis()),
            )]);
        Ok(options)
    }
}

/// Strip trailing slashes and guarantee a leading one, "/" collapses to "".
fn normalize_prefix(raw: &str) -> String {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        String::new()
    } else if trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(String::from)
        .collect()
}
