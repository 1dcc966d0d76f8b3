//! Ping Handler
//!
//! 健康检查端点，顺带探测数据库连通性

use axum::{extract::State, Json};
use serde::Serialize;
use std::sync::Arc;

use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// Ping 响应
#[derive(Serialize)]
pub struct PingResponse {
    pub status: &'static str,
    pub version: &'static str,
}

/// Ping endpoint - 健康检查
///
/// 存储不可达时返回 500，服务离开数据库无法工作
pub async fn ping(State(state): State<Arc<AppState>>) -> Result<Json<PingResponse>, ApiError> {
    sqlx::query("SELECT 1").execute(&state.db).await?;

    Ok(Json(PingResponse {
        status: "ok",
        version: env!("CARGO_PKG_VERSION"),
    }))
}

#[cfg(test)]
mod tests {
    use axum::body::{to_bytes, Body};
    use axum::http::{Request, StatusCode};
    use std::sync::Arc;
    use tower::util::ServiceExt;

    use crate::infrastructure::http::routes::create_routes;
    use crate::infrastructure::http::state::AppState;
    use crate::infrastructure::persistence::sqlite::{
        create_pool, run_migrations, DatabaseConfig,
    };

    #[tokio::test]
    async fn test_ping_reports_ok() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let app = create_routes().with_state(Arc::new(AppState::new(pool)));

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
    }

    #[tokio::test]
    async fn test_ping_fails_when_pool_closed() {
        let pool = create_pool(&DatabaseConfig::in_memory()).await.unwrap();
        run_migrations(&pool).await.unwrap();
        let app = create_routes().with_state(Arc::new(AppState::new(pool.clone())));
        pool.close().await;

        let response = app
            .oneshot(Request::builder().uri("/ping").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }
}
