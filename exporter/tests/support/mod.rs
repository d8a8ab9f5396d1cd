//! テスト共通ユーティリティ

#![allow(dead_code)]

use axum::Router;
use pingdom_exporter::{api, server};
use pingdom_exporter_common::config::{ExporterConfig, LogLevel};
use serde_json::{json, Value};
use std::io;
use std::sync::{Arc, Mutex};
use std::time::Duration;

/// モックAPIを向いた設定
pub fn test_config(api_url: String) -> ExporterConfig {
    ExporterConfig {
        pingdom_token: "test-token".to_string(),
        publish_port: 0,
        log_level: LogLevel::Debug,
        api_url,
        request_timeout: Some(Duration::from_secs(5)),
    }
}

/// モックAPIを向いたルーターを作る
pub fn create_test_app(api_url: String) -> Router {
    let state = server::build_state(&test_config(api_url)).expect("failed to build state");
    api::create_app(state)
}

/// 接続できないベースURL（直前まで使っていたポート）
pub fn unreachable_api_url() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("failed to reserve port");
    let addr = listener.local_addr().expect("failed to read port");
    drop(listener);
    format!("http://{}", addr)
}

/// Pingdom API形式のチェック
pub fn check_json(id: u64, name: &str, status: &str, tags: &[&str]) -> Value {
    json!({
        "id": id,
        "name": name,
        "resolution": 1,
        "hostname": format!("{}.example.com", name),
        "status": status,
        "severity_level": "HIGH",
        "lastresponsetime": 250,
        "tags": tags
            .iter()
            .map(|t| json!({"name": t, "type": "u", "count": 1}))
            .collect::<Vec<_>>(),
    })
}

/// ログ出力のキャプチャ
#[derive(Clone, Default)]
pub struct LogCapture(Arc<Mutex<Vec<u8>>>);

impl LogCapture {
    /// キャプチャしたJSONレコード
    pub fn records(&self) -> Vec<Value> {
        let buf = self.0.lock().unwrap();
        String::from_utf8_lossy(&buf)
            .lines()
            .filter_map(|line| serde_json::from_str(line).ok())
            .collect()
    }
}

impl io::Write for LogCapture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
