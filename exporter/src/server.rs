//! axumサーバー起動・シャットダウンハンドリング

use crate::{api, client::PingdomClient, AppState};
use pingdom_exporter_common::config::ExporterConfig;
use thiserror::Error;
use tracing::info;

/// サーバー起動エラー
#[derive(Debug, Error)]
pub enum ServerError {
    /// HTTPクライアントの初期化失敗
    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),

    /// ポートのバインド失敗
    #[error("Failed to bind to {addr}: {source}")]
    Bind {
        /// バインドアドレス
        addr: String,
        /// 原因
        source: std::io::Error,
    },

    /// サーバー実行中のI/Oエラー
    #[error("Server error: {0}")]
    Serve(std::io::Error),
}

/// 設定からアプリケーション状態を作る
pub fn build_state(config: &ExporterConfig) -> Result<AppState, ServerError> {
    Ok(AppState {
        client: PingdomClient::new(config)?,
    })
}

/// axumサーバーを起動し、シャットダウンシグナルを待機する
pub async fn run(config: ExporterConfig) -> Result<(), ServerError> {
    let state = build_state(&config)?;
    let app = api::create_app(state);

    let bind_addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|source| ServerError::Bind {
            addr: bind_addr.clone(),
            source,
        })?;

    info!(
        addr = %bind_addr,
        api_url = %config.api_url,
        "Pingdom exporter listening"
    );

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(ServerError::Serve)?;

    info!("Server shutdown complete");
    Ok(())
}

/// シャットダウンシグナルを待機
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut signal) => {
                signal.recv().await;
            }
            Err(e) => {
                tracing::error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, shutting down...");
        }
        _ = terminate => {
            info!("Received SIGTERM, shutting down...");
        }
    }
}
