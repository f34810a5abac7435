//! Service health, mounted at the root outside `/api`.
//!
//! Reports whether the store answers and whether the category seed data is
//! present, since every listing depends on it.

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::get;
use axum::{Json, Router};
use serde::Serialize;
use trivia_db::repositories::CategoryRepo;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct HealthReport {
    pub success: bool,
    /// `ok`, `unseeded` (no categories), or `degraded` (store unreachable).
    pub status: &'static str,
    pub version: &'static str,
    pub database: DatabaseReport,
}

#[derive(Debug, Serialize)]
pub struct DatabaseReport {
    pub reachable: bool,
    /// Number of seeded categories; `null` when the store is unreachable.
    pub categories: Option<i64>,
}

async fn report(State(state): State<AppState>) -> (StatusCode, Json<HealthReport>) {
    let (code, status, database) = match CategoryRepo::count(&state.pool).await {
        Ok(categories) => (
            StatusCode::OK,
            if categories > 0 { "ok" } else { "unseeded" },
            DatabaseReport {
                reachable: true,
                categories: Some(categories),
            },
        ),
        Err(err) => {
            tracing::warn!(error = %err, "Health check could not reach the database");
            (
                StatusCode::SERVICE_UNAVAILABLE,
                "degraded",
                DatabaseReport {
                    reachable: false,
                    categories: None,
                },
            )
        }
    };

    let body = HealthReport {
        success: code.is_success(),
        status,
        version: env!("CARGO_PKG_VERSION"),
        database,
    };
    (code, Json(body))
}

pub fn router() -> Router<AppState> {
    Router::new().route("/health", get(report))
}
