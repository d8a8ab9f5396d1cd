//! Pingdom Exporter 共通ライブラリ
//!
//! upstreamのデータ型、設定、エラー型

#![warn(missing_docs)]

/// 設定管理（環境変数）
pub mod config;

/// エラー型定義
pub mod error;

/// Pingdom APIのデータ型
pub mod types;
