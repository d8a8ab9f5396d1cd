//! Pingdom Exporter
//!
//! Pingdom APIのチェック状態をPrometheus形式で公開するサーバー

#![warn(missing_docs)]

/// REST APIハンドラー
pub mod api;

/// Pingdom APIクライアント
pub mod client;

/// スクレイプ時の収集処理
pub mod collector;

/// ロギング初期化ユーティリティ
pub mod logging;

/// メトリクス行の生成
pub mod metrics;

/// axumサーバー起動・シャットダウンハンドリング
pub mod server;

/// アプリケーション状態
///
/// スクレイプ間で共有する可変状態は持たない。
#[derive(Clone)]
pub struct AppState {
    /// Pingdom APIクライアント（接続プーリング有効）
    pub client: client::PingdomClient,
}
