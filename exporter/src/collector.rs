//! スクレイプ1回分の収集処理
//!
//! Pingdom APIからチェック一覧を取得し、チェックごとに `status` と
//! `response_time` の2行を生成する。

use crate::client::PingdomClient;
use crate::metrics::{format_metrics, LabelSet};
use pingdom_exporter_common::types::{Check, CheckStatus};
use tracing::debug;

/// `region` ラベルとして採用するタグ
pub const REGION_TAGS: [&str; 3] = ["east", "west", "global"];

/// `environment` ラベルとして採用するタグ
pub const ENVIRONMENT_TAGS: [&str; 2] = ["production", "pre-production"];

/// 全チェックのメトリクス行を収集する
///
/// 末尾には常に空文字列が1つ付く。要素数が1なら収集できたメトリクスは無い。
pub async fn collect(client: &PingdomClient) -> Vec<String> {
    let check_list = client.fetch_checks().await;
    let checks = check_list.checks.unwrap_or_default();

    let mut all_metrics = Vec::with_capacity(checks.len() * 2 + 1);
    for check in &checks {
        all_metrics.extend(check_metrics(check));
    }
    all_metrics.push(String::new());
    all_metrics
}

/// チェック1件分のメトリクス行
pub fn check_metrics(check: &Check) -> [String; 2] {
    debug!(?check, "Processing check");

    let status = check.check_status();
    let labels = check_labels(check, status);

    [
        format_metrics("status", status.code(), &labels),
        format_metrics("response_time", check.lastresponsetime, &labels),
    ]
}

/// チェックのラベル集合を組み立てる
pub fn check_labels(check: &Check, status: CheckStatus) -> LabelSet {
    let (region, environment) = resolve_tags(check);
    let paused = status.code() == CheckStatus::PAUSED_CODE;

    let mut labels = LabelSet::new();
    labels.insert("id", check.id);
    labels.insert("name", &check.name);
    labels.insert("resolution", check.resolution);
    labels.insert("hostname", &check.hostname);
    labels.insert("severity", check.severity_level.to_lowercase());
    labels.insert("paused", paused);
    if let Some(region) = region {
        labels.insert("region", region);
    }
    if let Some(environment) = environment {
        labels.insert("environment", environment);
    }
    labels
}

/// タグから `region` と `environment` を決める
///
/// どちらも、許可リストに一致した最後のタグが採用される。
pub fn resolve_tags(check: &Check) -> (Option<&str>, Option<&str>) {
    let mut region = None;
    let mut environment = None;
    for tag in &check.tags {
        let name = tag.name.as_str();
        if REGION_TAGS.contains(&name) {
            region = Some(name);
        }
        if ENVIRONMENT_TAGS.contains(&name) {
            environment = Some(name);
        }
    }
    (region, environment)
}
