//! ヘルスチェックAPIハンドラー

use axum::http::StatusCode;

/// GET /health - 死活監視
///
/// Pingdom APIの到達性は確認せず、常に200を返す。
pub async fn health_check() -> StatusCode {
    StatusCode::OK
}
