//! エラー型定義
//!
//! 統一エラー型（thiserror使用）

use thiserror::Error;

/// 設定読み込みエラー
///
/// いずれも起動時に致命的であり、プロセスは終了コード2で終了する。
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// 必須の環境変数が未設定
    #[error("Environment variable {0} is not set")]
    Missing(&'static str),

    /// 環境変数の値が不正
    #[error("Environment variable {name} has an invalid value {value:?}: {reason}")]
    Invalid {
        /// 変数名
        name: &'static str,
        /// 設定されていた値
        value: String,
        /// 不正の理由
        reason: String,
    },
}

/// Pingdom API呼び出しエラー
///
/// スクレイプ処理内で回復され、外部には「チェック0件」として見える。
#[derive(Debug, Error)]
pub enum UpstreamError {
    /// 接続失敗（名前解決・接続拒否・タイムアウト等）
    #[error("Failed to connect to {url}: {message}")]
    Connection {
        /// リクエストURL
        url: String,
        /// 詳細
        message: String,
    },

    /// 2xx以外のステータスコード
    #[error("Failed to get data from {url}: HTTP {status}")]
    Status {
        /// リクエストURL
        url: String,
        /// ステータスコード
        status: u16,
    },

    /// レスポンスボディのデコード失敗
    #[error("Failed to decode response from {url}: {message}")]
    Decode {
        /// リクエストURL
        url: String,
        /// 詳細
        message: String,
    },
}

/// Result型エイリアス
pub type UpstreamResult<T> = Result<T, UpstreamError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_names_variable() {
        let err = ConfigError::Missing("PINGDOM_TOKEN");
        assert_eq!(
            err.to_string(),
            "Environment variable PINGDOM_TOKEN is not set"
        );
    }

    #[test]
    fn test_upstream_status_error_includes_code() {
        let err = UpstreamError::Status {
            url: "https://api.pingdom.com/api/3.1/checks".to_string(),
            status: 403,
        };
        assert!(err.to_string().contains("403"));
        assert!(err.to_string().contains("/checks"));
    }
}
