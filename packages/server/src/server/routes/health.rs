use std::time::{Duration, Instant};

use axum::{extract::Extension, http::StatusCode, Json};
use serde::Serialize;
use sqlx::PgPool;
use tokio::time::timeout;
use tracing::warn;

use crate::server::app::AxumAppState;

#[derive(Serialize)]
pub struct LivenessResponse {
    message: String,
    version: &'static str,
    status: &'static str,
}

/// Readiness report: database round trip plus pool occupancy
#[derive(Serialize)]
pub struct HealthResponse {
    status: &'static str,
    database: DatabaseProbe,
    pool: PoolSnapshot,
}

#[derive(Serialize)]
pub struct DatabaseProbe {
    reachable: bool,
    latency_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Serialize)]
pub struct PoolSnapshot {
    open: u32,
    idle: usize,
    max: u32,
}

/// Liveness payload served at the root path
pub async fn root_handler(Extension(state): Extension<AxumAppState>) -> Json<LivenessResponse> {
    Json(LivenessResponse {
        message: format!("{} is running", state.app_name),
        version: env!("CARGO_PKG_VERSION"),
        status: "healthy",
    })
}

/// Readiness endpoint
///
/// 200 when the listing store answers within the probe deadline, 503 otherwise.
pub async fn health_handler(
    Extension(state): Extension<AxumAppState>,
) -> (StatusCode, Json<HealthResponse>) {
    let database = probe_database(&state.db_pool, state.db_probe_timeout).await;
    let pool = PoolSnapshot {
        open: state.db_pool.size(),
        idle: state.db_pool.num_idle(),
        max: state.db_pool.options().get_max_connections(),
    };

    let (status, code) = if database.reachable {
        ("healthy", StatusCode::OK)
    } else {
        warn!(error = ?database.error, "Health check failed");
        ("unhealthy", StatusCode::SERVICE_UNAVAILABLE)
    };

    (
        code,
        Json(HealthResponse {
            status,
            database,
            pool,
        }),
    )
}

async fn probe_database(pool: &PgPool, deadline: Duration) -> DatabaseProbe {
    let started = Instant::now();
    let outcome = timeout(deadline, sqlx::query("SELECT 1").execute(pool)).await;
    let latency_ms = started.elapsed().as_millis() as u64;

    let error = match outcome {
        Ok(Ok(_)) => None,
        Ok(Err(e)) => Some(e.to_string()),
        Err(_) => Some(format!("no answer within {}ms", deadline.as_millis())),
    };

    DatabaseProbe {
        reachable: error.is_none(),
        latency_ms,
        error,
    }
}
