//! 共通型定義
//!
//! Pingdom API 3.1 の `GET /checks` レスポンスを表すデータ型

use serde::Deserialize;

/// `GET /checks` のレスポンス全体
///
/// `checks` キーが無いドキュメント（取得失敗時の空結果を含む）は
/// `checks: None` として扱う。
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
pub struct CheckList {
    /// チェック一覧（upstreamの並び順を保持）
    #[serde(default)]
    pub checks: Option<Vec<Check>>,
}

/// Pingdomのチェック（監視プローブ1件）
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct Check {
    /// チェックID
    pub id: u64,
    /// 表示名
    pub name: String,
    /// ポーリング間隔（分）
    pub resolution: u32,
    /// 監視対象ホスト名
    pub hostname: String,
    /// ステータス文字列（`up`, `down`, `paused` など）
    pub status: String,
    /// 重要度（`include_severity=true` 指定時のみ返る）
    #[serde(default)]
    pub severity_level: String,
    /// 最終レスポンスタイム（ミリ秒、未実行のチェックでは省略される）
    #[serde(default)]
    pub lastresponsetime: u64,
    /// タグ（`include_tags=true` 指定時のみ返る）
    #[serde(default)]
    pub tags: Vec<Tag>,
}

impl Check {
    /// ステータス文字列を列挙値に変換する
    pub fn check_status(&self) -> CheckStatus {
        CheckStatus::from(self.status.as_str())
    }
}

/// チェックに付与されたタグ
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct Tag {
    /// タグ名
    pub name: String,
}

/// チェックのステータス
///
/// 未知の文字列は [`CheckStatus::Unknown`] に落とす。変換は失敗しない。
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckStatus {
    /// 稼働中
    Up,
    /// ダウン検知（未確定）
    UnconfirmedDown,
    /// ダウン
    Down,
    /// 一時停止中
    Paused,
    /// 不明（未知の文字列を含む）
    Unknown,
}

impl CheckStatus {
    /// 一時停止を表すステータスコード
    pub const PAUSED_CODE: i64 = -1;

    /// メトリクスとして公開する数値コード
    pub fn code(self) -> i64 {
        match self {
            Self::Up => 0,
            Self::UnconfirmedDown => 1,
            Self::Down => 2,
            Self::Paused => Self::PAUSED_CODE,
            Self::Unknown => -2,
        }
    }
}

impl From<&str> for CheckStatus {
    fn from(value: &str) -> Self {
        match value {
            "up" => Self::Up,
            "unconfirmed_down" => Self::UnconfirmedDown,
            "down" => Self::Down,
            "paused" => Self::Paused,
            _ => Self::Unknown,
        }
    }
}
