//! Test harness with testcontainers for integration testing.
//!
//! One Postgres container is shared across all tests. Each test gets its own
//! freshly created database with migrations applied, so tests never see each
//! other's rows and can run in parallel.

use std::time::Duration;

use anyhow::{Context, Result};
use axum::Router;
use sqlx::PgPool;
use staywise_core::server::build_app;
use staywise_core::Config;
use test_context::AsyncTestContext;
use testcontainers::runners::AsyncRunner;
use testcontainers::{ContainerAsync, ImageExt};
use testcontainers_modules::postgres::Postgres;
use tokio::sync::OnceCell;

use super::HttpClient;

/// Shared test infrastructure that persists across all tests.
struct SharedTestInfra {
    /// Connection URL without the database path segment
    server_url: String,
    // Keep container alive for the entire test run
    _postgres: ContainerAsync<Postgres>,
}

/// Global shared infrastructure - initialized once, reused by all tests.
static SHARED_INFRA: OnceCell<SharedTestInfra> = OnceCell::const_new();

impl SharedTestInfra {
    async fn init() -> Result<Self> {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        let postgres = Postgres::default()
            .with_tag("16")
            .with_cmd(["-c", "max_connections=200"])
            .start()
            .await
            .context("Failed to start Postgres container")?;

        let pg_host = postgres.get_host().await?;
        let pg_port = postgres.get_host_port_ipv4(5432).await?;
        let server_url = format!("postgresql://postgres:postgres@{}:{}", pg_host, pg_port);

        Ok(Self {
            server_url,
            _postgres: postgres,
        })
    }

    pub(super) async fn get() -> &'static Self {
        SHARED_INFRA
            .get_or_init(|| async {
                Self::init()
                    .await
                    .expect("Failed to initialize shared test infrastructure")
            })
            .await
    }
}

/// Test harness that manages test infrastructure.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &TestHarness) {
///     let (status, body) = ctx.http().get("/hotels").await;
/// }
/// ```
pub struct TestHarness {
    /// Database pool - use this for test fixtures.
    pub db_pool: PgPool,
    pub config: Config,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        Self::new().await.expect("Failed to create test harness")
    }

    async fn teardown(self) {
        self.db_pool.close().await;
    }
}

impl TestHarness {
    /// Creates a new harness backed by a fresh, migrated database.
    pub async fn new() -> Result<Self> {
        let infra = SharedTestInfra::get().await;

        let db_name = format!("staywise_test_{:016x}", rand::random::<u64>());
        let admin_pool = PgPool::connect(&format!("{}/postgres", infra.server_url))
            .await
            .context("Failed to connect to admin database")?;
        sqlx::query(&format!("CREATE DATABASE {}", db_name))
            .execute(&admin_pool)
            .await
            .context("Failed to create test database")?;
        admin_pool.close().await;

        let config = Config {
            database_url: format!("{}/{}", infra.server_url, db_name),
            port: 0,
            app_name: "Staywise API".to_string(),
            api_prefix: String::new(),
            allowed_origins: vec!["http://localhost:3000".to_string()],
            db_max_connections: 5,
            db_acquire_timeout: Duration::from_secs(5),
            db_statement_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
            run_migrations: false,
        };

        let db_pool = connect(&config)
            .await
            .context("Failed to connect to test database")?;

        sqlx::migrate!("./migrations")
            .run(&db_pool)
            .await
            .context("Failed to run migrations")?;

        Ok(Self { db_pool, config })
    }

    /// Second pool on the same database whose statements are cancelled
    /// after `statement_timeout`.
    pub async fn pool_with_statement_timeout(&self, statement_timeout: Duration) -> Result<PgPool> {
        let config = Config {
            db_statement_timeout: statement_timeout,
            ..self.config.clone()
        };
        connect(&config).await
    }

    /// Router wired to this harness's database.
    pub fn app(&self) -> Router {
        build_app(self.db_pool.clone(), &self.config)
    }

    /// HTTP client driving the router in-process.
    pub fn http(&self) -> HttpClient {
        HttpClient::new(self.app())
    }
}

async fn connect(config: &Config) -> Result<PgPool> {
    let pool = config
        .pool_options()
        .connect_with(config.connect_options()?)
        .await?;
    Ok(pool)
}
