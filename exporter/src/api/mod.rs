//! HTTP APIハンドラー
//!
//! `/metrics`（Prometheusスクレイプ）と `/health`（死活監視）

pub mod health;
pub mod metrics;

use crate::AppState;
use axum::{routing::get, Router};
use tower_http::trace::TraceLayer;

/// APIルーターを作成
pub fn create_app(state: AppState) -> Router {
    Router::new()
        .route("/metrics", get(metrics::get_metrics))
        .route("/health", get(health::health_check))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
