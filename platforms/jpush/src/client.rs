use std::fmt;
use std::sync::Arc;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use common::{HttpMethod, HttpRequest, HttpResponse, HttpSender, PushInitConfig, find_header};
use log::*;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::config::{ApiFamily, BaseUrls, Config};
use crate::error::{ErrorCode, JPushError, Result};
use crate::services::{AdvancedService, PushService, ReportService};
use crate::transport::ReqwestSender;

/// JPush 客户端
///
/// 只持有不可变配置和发送器，可以在多个任务间克隆共享。
#[derive(Clone)]
pub struct Client {
    inner: Arc<Inner>,
}

struct Inner {
    app_key: String,
    authorization: String,
    base_urls: BaseUrls,
    sender: Arc<dyn HttpSender>,
}

impl fmt::Debug for Client {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Client")
            .field("app_key", &self.inner.app_key)
            .field("base_urls", &self.inner.base_urls)
            .finish_non_exhaustive()
    }
}

impl Client {
    /// 使用 reqwest 发送器创建客户端
    pub fn new(config: Config) -> Result<Self> {
        config.validate()?;
        let sender = ReqwestSender::new(config.timeout())?;
        Ok(Self::build(config, Arc::new(sender)))
    }

    /// 使用自定义发送器创建客户端
    pub fn with_sender(config: Config, sender: Arc<dyn HttpSender>) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config, sender))
    }

    fn build(config: Config, sender: Arc<dyn HttpSender>) -> Self {
        let credentials = format!("{}:{}", config.app_key, config.master_secret);
        debug!(
            "{} client ready for app_key {} (timeout {:?})",
            config.platform_name(),
            config.app_key,
            config.timeout()
        );
        Self {
            inner: Arc::new(Inner {
                authorization: format!("Basic {}", STANDARD.encode(credentials)),
                app_key: config.app_key,
                base_urls: config.base_urls,
                sender,
            }),
        }
    }

    pub fn app_key(&self) -> &str {
        &self.inner.app_key
    }

    pub fn push(&self) -> PushService<'_> {
        PushService::new(self)
    }

    pub fn advanced(&self) -> AdvancedService<'_> {
        AdvancedService::new(self)
    }

    pub fn report(&self) -> ReportService<'_> {
        ReportService::new(self)
    }

    pub async fn get(&self, family: ApiFamily, path: &str) -> Result<ApiResponse> {
        self.execute(HttpMethod::Get, family, path, None).await
    }

    pub async fn delete(&self, family: ApiFamily, path: &str) -> Result<ApiResponse> {
        self.execute(HttpMethod::Delete, family, path, None).await
    }

    pub async fn post<B: Serialize + ?Sized>(
        &self,
        family: ApiFamily,
        path: &str,
        body: &B,
    ) -> Result<ApiResponse> {
        let body = serde_json::to_string(body).map_err(|e| {
            error!("failed to serialize request body: {e}");
            JPushError::new(
                ErrorCode::InvalidJson,
                format!("failed to serialize request body: {e}"),
            )
        })?;
        self.execute(HttpMethod::Post, family, path, Some(body)).await
    }

    async fn execute(
        &self,
        method: HttpMethod,
        family: ApiFamily,
        path: &str,
        body: Option<String>,
    ) -> Result<ApiResponse> {
        let url = format!("{}{}", self.inner.base_urls.get(family), path);

        let mut request = HttpRequest::new(method, url.as_str())
            .header("Authorization", self.inner.authorization.as_str())
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if let Some(body) = body {
            debug!("request body: {body}");
            request = request.body(body);
        }

        debug!("sending {method} {url}");
        let response = self.inner.sender.send(request).await.map_err(|e| {
            error!("{method} {url} failed: {e}");
            JPushError::from(e)
        })?;

        debug!(
            "received HTTP {} from {url} headers={:?} body={}",
            response.status,
            response.headers,
            response.text()
        );

        ApiResponse::from_http(response).inspect_err(|e| error!("{method} {url} failed: {e}"))
    }
}

/// 已解析的 API 响应
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    /// 空响应体解析为 `Value::Null`
    pub body: Value,
}

impl ApiResponse {
    /// 解析响应体并把错误对象或错误状态码转换为 `JPushError`
    pub fn from_http(response: HttpResponse) -> Result<Self> {
        let body = if response.body.is_empty() {
            Value::Null
        } else {
            response.json::<Value>().map_err(|e| {
                JPushError::new(
                    ErrorCode::InvalidJson,
                    format!("failed to parse response body: {e}"),
                )
            })?
        };

        if let Some(err) = embedded_error(&body) {
            return Err(err);
        }

        if response.status >= 400 {
            return Err(JPushError::new(
                status_error_code(response.status),
                format!("HTTP error: {}", response.status),
            ));
        }

        Ok(Self {
            status: response.status,
            headers: response.headers,
            body,
        })
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    pub fn rate_limit(&self) -> RateLimit {
        let read = |name: &str| {
            self.header(name)
                .and_then(|value| value.trim().parse().ok())
                .unwrap_or(0)
        };
        RateLimit {
            limit: read("X-Rate-Limit-Limit"),
            remaining: read("X-Rate-Limit-Remaining"),
            reset: read("X-Rate-Limit-Reset"),
        }
    }

    /// 将响应体直接解码为目标类型
    pub fn decode<T: DeserializeOwned>(self) -> Result<T> {
        serde_json::from_value(self.body).map_err(|e| {
            JPushError::new(
                ErrorCode::InvalidJson,
                format!("failed to decode response: {e}"),
            )
        })
    }
}

/// 频率限制信息，缺失或无法解析的头记为 0
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RateLimit {
    pub limit: u32,
    pub remaining: u32,
    pub reset: u32,
}

/// 没有错误对象时按状态码归类；网关超时等其它状态一律视为服务端内部错误
fn status_error_code(status: u16) -> ErrorCode {
    match status {
        400 => ErrorCode::InvalidParams,
        401 => ErrorCode::InvalidAuth,
        403 => ErrorCode::AppKeyBlacklisted,
        429 => ErrorCode::RateLimitExceeded,
        _ => ErrorCode::InternalError,
    }
}

fn embedded_error(body: &Value) -> Option<JPushError> {
    let error = body.get("error")?.as_object()?;
    let code = error
        .get("code")
        .and_then(Value::as_i64)
        .and_then(|code| i32::try_from(code).ok())
        .map(ErrorCode::from)
        .unwrap_or(ErrorCode::InternalError);
    let message = error
        .get("message")
        .and_then(Value::as_str)
        .unwrap_or("unknown error");
    Some(JPushError::new(code, message))
}
