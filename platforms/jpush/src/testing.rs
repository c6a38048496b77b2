//! 单元测试使用的内存发送器，记录请求并按顺序返回预设响应

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use common::{HttpRequest, HttpResponse, HttpSender, SendError};

use crate::client::Client;
use crate::config::{BaseUrls, Config};

#[derive(Default)]
pub(crate) struct MockSender {
    responses: Mutex<VecDeque<Result<HttpResponse, SendError>>>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl MockSender {
    pub(crate) fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub(crate) fn respond(&self, status: u16, body: &str) {
        self.reply(HttpResponse::new(status, body));
    }

    pub(crate) fn reply(&self, response: HttpResponse) {
        self.responses.lock().unwrap().push_back(Ok(response));
    }

    pub(crate) fn fail(&self, err: SendError) {
        self.responses.lock().unwrap().push_back(Err(err));
    }

    pub(crate) fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl HttpSender for MockSender {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse, SendError> {
        self.requests.lock().unwrap().push(request);
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(HttpResponse::new(200, "{}")))
    }
}

pub(crate) fn client_with(sender: &Arc<MockSender>) -> Client {
    let _ = env_logger::builder().is_test(true).try_init();
    let config = Config {
        base_urls: BaseUrls {
            push: "http://push.test".to_string(),
            device: "http://device.test".to_string(),
            report: "http://report.test/".to_string(),
        },
        ..Config::new("app-key", "master-secret")
    };
    Client::with_sender(config, sender.clone()).unwrap()
}
