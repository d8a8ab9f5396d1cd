//! メトリクスAPIハンドラー

use crate::{collector, AppState};
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use tracing::debug;

const TEXT_PLAIN: &str = "text/plain; charset=utf-8";

/// GET /metrics - Prometheusスクレイプ
///
/// リクエストごとにPingdom APIを1回呼び出す。1件も収集できなければ404を返し、
/// upstreamの障害を5xxとして返すことはない。
pub async fn get_metrics(State(state): State<AppState>) -> Response {
    let metric_data = collector::collect(&state.client).await;

    if metric_data.len() > 1 {
        (
            StatusCode::OK,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            metric_data.join("\n"),
        )
            .into_response()
    } else {
        debug!("No metrics collected");
        (
            StatusCode::NOT_FOUND,
            [(header::CONTENT_TYPE, TEXT_PLAIN)],
            "No metrics collected",
        )
            .into_response()
    }
}
