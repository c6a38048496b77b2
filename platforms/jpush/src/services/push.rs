use log::*;

use crate::client::Client;
use crate::config::ApiFamily;
use crate::error::Result;
use crate::types::{PushRequest, PushResponse};
use crate::validate::validate_push_request;

/// 推送服务
pub struct PushService<'a> {
    client: &'a Client,
}

impl<'a> PushService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// 向设备推送一条通知或自定义消息
    pub async fn push(&self, request: &PushRequest) -> Result<PushResponse> {
        info!("creating push for app_key {}", self.client.app_key());

        validate_push_request(request)
            .inspect_err(|e| error!("push request rejected: {e}"))?;

        let response = self
            .client
            .post(ApiFamily::Push, "/v3/push", request)
            .await?;

        let rate_limit = response.rate_limit();
        info!(
            "push rate limit: limit={} remaining={} reset={}",
            rate_limit.limit, rate_limit.remaining, rate_limit.reset
        );

        let result: PushResponse = response.decode()?;
        info!("push created: sendno={} msg_id={}", result.sendno, result.msg_id);
        Ok(result)
    }
}
