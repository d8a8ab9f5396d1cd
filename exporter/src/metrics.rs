//! Prometheusテキスト形式のメトリクス行生成
//!
//! `pingdom_check_<name>{label="value",...} <value>` 形式の1行を組み立てる。
//! ラベル値の `"` はエスケープしない。

use std::fmt::Write as _;
use tracing::debug;

/// メトリクス名の接頭辞
pub const METRIC_PREFIX: &str = "pingdom_check_";

/// メトリクス値
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MetricValue {
    /// 数値
    Number(f64),
    /// 真偽値（0/1として出力）
    Boolean(bool),
    /// シーケンスの要素数
    Count(usize),
}

impl MetricValue {
    /// 出力用の数値に正規化する
    pub fn normalize(self) -> f64 {
        match self {
            Self::Number(v) => v,
            Self::Boolean(b) => u8::from(b).into(),
            Self::Count(n) => n as f64,
        }
    }
}

impl From<f64> for MetricValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<i64> for MetricValue {
    fn from(value: i64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<u64> for MetricValue {
    fn from(value: u64) -> Self {
        Self::Number(value as f64)
    }
}

impl From<bool> for MetricValue {
    fn from(value: bool) -> Self {
        Self::Boolean(value)
    }
}

impl<T> From<&[T]> for MetricValue {
    fn from(value: &[T]) -> Self {
        Self::Count(value.len())
    }
}

/// 挿入順を保持するラベル集合
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LabelSet {
    entries: Vec<(&'static str, String)>,
}

impl LabelSet {
    /// 空のラベル集合
    pub fn new() -> Self {
        Self::default()
    }

    /// ラベルを追加する。同名のラベルがあれば位置を保ったまま値を置き換える。
    pub fn insert(&mut self, name: &'static str, value: impl ToString) {
        let value = value.to_string();
        match self.entries.iter_mut().find(|(k, _)| *k == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// 挿入順に走査
    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.entries.iter().map(|(k, v)| (*k, v.as_str()))
    }

    /// 空かどうか
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// メトリクス1行を生成する
///
/// 同じ入力には常に同じ文字列を返す。
pub fn format_metrics(name: &str, value: impl Into<MetricValue>, labels: &LabelSet) -> String {
    let mut line = String::with_capacity(64);
    line.push_str(METRIC_PREFIX);
    line.push_str(name);

    if !labels.is_empty() {
        line.push('{');
        for (i, (key, val)) in labels.iter().enumerate() {
            if i > 0 {
                line.push(',');
            }
            // String への書き込みは失敗しない
            let _ = write!(line, "{}=\"{}\"", key, val);
        }
        line.push('}');
    }

    let _ = write!(line, " {}", value.into().normalize());
    debug!("{}", line);
    line
}
