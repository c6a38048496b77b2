use std::time::Duration;

use async_trait::async_trait;
use common::{HttpMethod, HttpRequest, HttpResponse, HttpSender, SendError};
use reqwest::{Client, Method};

/// 基于 reqwest 的发送器，整个请求（连接、发送、读取响应体）受同一个超时约束
#[derive(Debug, Clone)]
pub struct ReqwestSender {
    http_client: Client,
}

impl ReqwestSender {
    pub fn new(timeout: Duration) -> Result<Self, SendError> {
        let http_client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| SendError::Build(e.to_string()))?;
        Ok(Self { http_client })
    }
}

#[async_trait]
impl HttpSender for ReqwestSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SendError> {
        let method = match request.method {
            HttpMethod::Get => Method::GET,
            HttpMethod::Post => Method::POST,
            HttpMethod::Delete => Method::DELETE,
        };

        let mut builder = self.http_client.request(method, &request.url);
        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let response = builder.send().await.map_err(classify_error)?;

        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    value.to_str().unwrap_or_default().to_string(),
                )
            })
            .collect();
        let body = response.bytes().await.map_err(classify_error)?;

        Ok(HttpResponse {
            status,
            headers,
            body: body.to_vec(),
        })
    }
}

fn classify_error(e: reqwest::Error) -> SendError {
    if e.is_timeout() {
        SendError::Timeout(e.to_string())
    } else if e.is_connect() {
        SendError::Connect(e.to_string())
    } else if e.is_body() || e.is_decode() {
        SendError::Body(e.to_string())
    } else {
        SendError::Request(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_invalid_url_is_request_error() {
        let sender = ReqwestSender::new(Duration::from_secs(1)).unwrap();
        let err = sender
            .send(HttpRequest::new(HttpMethod::Get, "not a url"))
            .await
            .unwrap_err();
        assert!(matches!(err, SendError::Request(_)), "unexpected error: {err:?}");
    }
}
