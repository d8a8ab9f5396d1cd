//! ロギング初期化
//!
//! 1イベント1行のJSONログを標準エラー出力に書き出す。
//! 各レコードはトップレベルに `timestamp`, `level`, `message`, `target`, `threadName` を持つ。

use pingdom_exporter_common::config::LogLevel;
use tracing_subscriber::{
    fmt::{
        format::{Format, Json, JsonFields},
        MakeWriter, Subscriber,
    },
    util::SubscriberInitExt,
    EnvFilter,
};

/// JSONログ用のサブスクライバー型
pub type JsonSubscriber<W> = Subscriber<JsonFields, Format<Json>, EnvFilter, W>;

/// ログレベルからフィルタを作る
pub fn env_filter(level: LogLevel) -> EnvFilter {
    EnvFilter::new(level.as_filter())
}

/// 任意の出力先に書き出すサブスクライバーを作成
pub fn subscriber<W>(level: LogLevel, writer: W) -> JsonSubscriber<W>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    tracing_subscriber::fmt()
        .json()
        .with_target(true)
        .with_thread_names(true)
        .flatten_event(true)
        .with_current_span(false)
        .with_span_list(false)
        .with_env_filter(env_filter(level))
        .with_writer(writer)
        .finish()
}

/// グローバルサブスクライバーを登録する
pub fn init(level: LogLevel) -> Result<(), tracing_subscriber::util::TryInitError> {
    subscriber(level, std::io::stderr).try_init()
}
