//! 設定管理
//!
//! 環境変数から [`ExporterConfig`] を組み立てる。起動時に一度だけ読み込み、
//! 以降はクライアントとルーターへ値として渡す。

use crate::error::ConfigError;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Pingdom APIトークン
pub const ENV_PINGDOM_TOKEN: &str = "PINGDOM_TOKEN";
/// 待ち受けポート
pub const ENV_PUBLISH_PORT: &str = "PUBLISH_PORT";
/// ログレベル
pub const ENV_LOG_LEVEL: &str = "LOG_LEVEL";
/// Pingdom APIのベースURL
pub const ENV_PINGDOM_API_URL: &str = "PINGDOM_API_URL";
/// Pingdom API呼び出しのタイムアウト（秒）
pub const ENV_PINGDOM_TIMEOUT_SECS: &str = "PINGDOM_TIMEOUT_SECS";

/// デフォルトのPingdom APIベースURL
pub const DEFAULT_API_URL: &str = "https://api.pingdom.com/api/3.1";

/// ログレベル
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    /// DEBUG
    Debug,
    /// INFO
    Info,
    /// WARNING
    #[default]
    Warning,
    /// ERROR（CRITICALも含む）
    Error,
}

impl LogLevel {
    /// `tracing` のフィルタ指定に使う名前
    pub fn as_filter(self) -> &'static str {
        match self {
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warning => "warn",
            Self::Error => "error",
        }
    }
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" | "critical" => Ok(Self::Error),
            other => Err(format!("unknown log level '{}'", other)),
        }
    }
}

/// Exporter設定
#[derive(Clone, PartialEq)]
pub struct ExporterConfig {
    /// Bearer認証に使うPingdom APIトークン
    pub pingdom_token: String,
    /// HTTPサーバーの待ち受けポート（全インターフェース）
    pub publish_port: u16,
    /// ログレベル (デフォルト: WARNING)
    pub log_level: LogLevel,
    /// Pingdom APIのベースURL (デフォルト: [`DEFAULT_API_URL`])
    pub api_url: String,
    /// Pingdom API呼び出しのタイムアウト（未設定時はHTTPクライアントのデフォルト）
    pub request_timeout: Option<Duration>,
}

impl ExporterConfig {
    /// プロセス環境変数から読み込む
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から読み込む
    ///
    /// 必須変数のチェック順は `PUBLISH_PORT`, `PINGDOM_TOKEN` の順。
    /// 空文字列は未設定として扱う。
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let publish_port = parse_env::<_, u16>(&lookup, ENV_PUBLISH_PORT)?
            .ok_or(ConfigError::Missing(ENV_PUBLISH_PORT))?;
        let pingdom_token = require_env(&lookup, ENV_PINGDOM_TOKEN)?;
        let log_level = parse_env::<_, LogLevel>(&lookup, ENV_LOG_LEVEL)?.unwrap_or_default();
        let api_url = get_env(&lookup, ENV_PINGDOM_API_URL)
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        let request_timeout =
            parse_env::<_, u64>(&lookup, ENV_PINGDOM_TIMEOUT_SECS)?.map(Duration::from_secs);

        Ok(Self {
            pingdom_token,
            publish_port,
            log_level,
            api_url,
            request_timeout,
        })
    }

    /// バインドアドレス（全インターフェース）
    pub fn bind_addr(&self) -> String {
        format!("0.0.0.0:{}", self.publish_port)
    }

    /// `Authorization` ヘッダー値
    pub fn authorization(&self) -> String {
        format!("Bearer {}", self.pingdom_token)
    }
}

impl fmt::Debug for ExporterConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ExporterConfig")
            .field("pingdom_token", &"<redacted>")
            .field("publish_port", &self.publish_port)
            .field("log_level", &self.log_level)
            .field("api_url", &self.api_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}

/// 環境変数を取得する（空文字列は未設定扱い）
fn get_env<F>(lookup: &F, name: &str) -> Option<String>
where
    F: Fn(&str) -> Option<String>,
{
    lookup(name).filter(|value| !value.trim().is_empty())
}

/// 必須の環境変数を取得する
fn require_env<F>(lookup: &F, name: &'static str) -> Result<String, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    get_env(lookup, name).ok_or(ConfigError::Missing(name))
}

/// 環境変数を取得して型変換する
fn parse_env<F, T>(lookup: &F, name: &'static str) -> Result<Option<T>, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: fmt::Display,
{
    match get_env(lookup, name) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::Invalid {
                name,
                value,
                reason: e.to_string(),
            }),
    }
}
