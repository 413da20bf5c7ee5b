//! SoftLayer HTTP 请求方法

use reqwest::RequestBuilder;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::http_client::HttpUtils;
use crate::traits::{ErrorContext, ProviderErrorMapper, RawApiError};

use super::{SoftlayerErrorBody, SoftlayerProvider};

impl SoftlayerProvider {
    /// `<endpoint>/<Service>/<id>/<method>.json`
    fn url(&self, path: &str) -> String {
        format!("{}/{path}.json", self.endpoint)
    }

    /// Send a request, mapping non-2xx answers through [`ProviderErrorMapper`].
    async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
        method: &str,
        url: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let builder = builder.basic_auth(&self.username, Some(&self.api_key));
        let (status, text) =
            HttpUtils::execute_request(builder, self.provider_name(), method, url).await?;

        if !(200..300).contains(&status) {
            let raw = match serde_json::from_str::<SoftlayerErrorBody>(&text) {
                Ok(body) => match body.code {
                    Some(code) => RawApiError::with_code(code, body.error, status),
                    None => RawApiError::from_status(status, body.error),
                },
                Err(_) => RawApiError::from_status(status, format!("HTTP {status}: {text}")),
            };
            log::error!("API 错误: {} ({:?})", raw.message, raw.code);
            return Err(self.map_error(raw, context));
        }

        HttpUtils::parse_json(&text, self.provider_name())
    }

    /// 执行 GET 请求；`query` 必须已经 URL 编码
    pub(crate) async fn get<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &str,
        context: ErrorContext,
    ) -> Result<T> {
        let mut url = self.url(path);
        if !query.is_empty() {
            url.push('?');
            url.push_str(query);
        }
        let builder = self.client.get(&url);
        self.send(builder, "GET", &url, context).await
    }

    /// 执行 POST 请求
    pub(crate) async fn post<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        log::debug!(
            "Request Body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
        );
        let builder = self.client.post(&url).json(body);
        self.send(builder, "POST", &url, context).await
    }

    /// 执行 PUT 请求
    pub(crate) async fn put<T: DeserializeOwned, B: Serialize + Sync>(
        &self,
        path: &str,
        body: &B,
        context: ErrorContext,
    ) -> Result<T> {
        let url = self.url(path);
        log::debug!(
            "Request Body: {}",
            serde_json::to_string(body).unwrap_or_else(|_| "<unserializable>".to_string())
        );
        let builder = self.client.put(&url).json(body);
        self.send(builder, "PUT", &url, context).await
    }

    /// 执行 DELETE 请求
    pub(crate) async fn delete(&self, path: &str, context: ErrorContext) -> Result<bool> {
        let url = self.url(path);
        let builder = self.client.delete(&url);
        self.send(builder, "DELETE", &url, context).await
    }
}

/// Build `objectMask=...&objectFilter=...` with both values URL-encoded.
pub(crate) fn object_query(mask: Option<&str>, filter: Option<&serde_json::Value>) -> String {
    let mut parts = Vec::new();
    if let Some(mask) = mask {
        parts.push(format!("objectMask={}", urlencoding::encode(mask)));
    }
    if let Some(filter) = filter {
        parts.push(format!(
            "objectFilter={}",
            urlencoding::encode(&filter.to_string())
        ));
    }
    parts.join("&")
}
