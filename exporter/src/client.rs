//! Pingdom APIクライアント
//!
//! 1スクレイプにつき1回だけ `GET /checks` を呼び出す。失敗時はリトライせず、
//! ログを出して空の結果を返す。

use pingdom_exporter_common::{
    config::ExporterConfig,
    error::{UpstreamError, UpstreamResult},
    types::CheckList,
};
use reqwest::{header::AUTHORIZATION, Client};
use serde::de::DeserializeOwned;
use tracing::{debug, error};

/// チェック一覧取得のパス（タグと重要度を含める）
const CHECKS_PATH: &str = "/checks?include_tags=true&include_severity=true";

/// Pingdom APIクライアント
///
/// 内部の `reqwest::Client` は接続プールを共有するため、クローンは安価。
#[derive(Clone)]
pub struct PingdomClient {
    http: Client,
    api_url: String,
    authorization: String,
}

impl PingdomClient {
    /// 設定からクライアントを作成
    pub fn new(config: &ExporterConfig) -> Result<Self, reqwest::Error> {
        let mut builder = Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url.clone(),
            authorization: config.authorization(),
        })
    }

    /// チェック一覧のURL
    pub fn checks_url(&self) -> String {
        format!("{}{}", self.api_url, CHECKS_PATH)
    }

    /// 全チェックを取得する
    ///
    /// 失敗時は `checks` を持たない空の [`CheckList`] を返す。
    pub async fn fetch_checks(&self) -> CheckList {
        self.get_data(&self.checks_url()).await
    }

    /// `url` をGETしてJSONとしてデコードする
    ///
    /// 接続失敗・非2xx・デコード失敗はいずれもエラーログを出し `T::default()` を返す。
    pub async fn get_data<T>(&self, url: &str) -> T
    where
        T: DeserializeOwned + Default,
    {
        match self.try_get_data(url).await {
            Ok(data) => data,
            Err(e) => {
                error!(url = %url, error = %e, "Failed to get data from Pingdom API");
                T::default()
            }
        }
    }

    async fn try_get_data<T>(&self, url: &str) -> UpstreamResult<T>
    where
        T: DeserializeOwned,
    {
        debug!(url = %url, "Hitting the API");

        let response = self
            .http
            .get(url)
            .header(AUTHORIZATION, &self.authorization)
            .send()
            .await
            .map_err(|e| UpstreamError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(UpstreamError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| UpstreamError::Connection {
                url: url.to_string(),
                message: e.to_string(),
            })?;

        serde_json::from_slice(&body).map_err(|e| UpstreamError::Decode {
            url: url.to_string(),
            message: e.to_string(),
        })
    }
}
