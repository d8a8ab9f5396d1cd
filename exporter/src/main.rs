//! Pingdom Exporter Entry Point

use pingdom_exporter::{logging, server};
use pingdom_exporter_common::config::ExporterConfig;
use tracing::error;

/// 設定エラー時の終了コード
const EXIT_CONFIG_ERROR: i32 = 2;

#[tokio::main]
async fn main() {
    let config = match ExporterConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("ERROR: {}", e);
            std::process::exit(EXIT_CONFIG_ERROR);
        }
    };

    if let Err(e) = logging::init(config.log_level) {
        eprintln!("Error: failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = server::run(config).await {
        error!("{}", e);
        std::process::exit(1);
    }
}
