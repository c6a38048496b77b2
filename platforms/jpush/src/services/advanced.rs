use log::*;

use crate::client::Client;
use crate::config::ApiFamily;
use crate::error::Result;
use crate::types::{CidResponse, CidType, FilePushRequest, PushRequest, PushResponse, QuotaResponse};
use crate::validate::{
    validate_cid_count, validate_file_push_request, validate_msg_id, validate_push_request,
};

/// 高级功能服务：CID、推送校验、撤销、厂商配额、文件推送
pub struct AdvancedService<'a> {
    client: &'a Client,
}

impl<'a> AdvancedService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// 获取防重复推送标识
    ///
    /// `count` 取值 1..=1000；非VIP应用的上限 10 由服务端校验。
    pub async fn get_cid(&self, count: u32, cid_type: CidType) -> Result<CidResponse> {
        validate_cid_count(count)?;
        info!("requesting {count} cids of type {}", cid_type.as_str());

        let path = format!("/v3/push/cid?count={count}&type={}", cid_type.as_str());
        let response: CidResponse = self.client.get(ApiFamily::Push, &path).await?.decode()?;
        debug!("received {} cids", response.cid_list.len());
        Ok(response)
    }

    /// 校验推送请求能否成功，不会向用户发送消息
    pub async fn validate_push(&self, request: &PushRequest) -> Result<PushResponse> {
        info!("validating push for app_key {}", self.client.app_key());
        validate_push_request(request)
            .inspect_err(|e| error!("validate push request rejected: {e}"))?;

        self.client
            .post(ApiFamily::Push, "/v3/push/validate", request)
            .await?
            .decode()
    }

    /// 撤销一条推送
    pub async fn cancel_push(&self, msg_id: &str) -> Result<()> {
        validate_msg_id(msg_id)?;

        info!("cancelling push {msg_id}");
        self.client
            .delete(ApiFamily::Push, &format!("/v3/push/{msg_id}"))
            .await?;
        Ok(())
    }

    /// 查询厂商通道配额
    pub async fn get_vendor_quota(&self) -> Result<QuotaResponse> {
        info!("querying vendor quota");
        self.client
            .get(ApiFamily::Push, "/v3/push/quota")
            .await?
            .decode()
    }

    /// 按预先上传的文件推送
    pub async fn push_by_file(&self, request: &FilePushRequest) -> Result<PushResponse> {
        info!("creating file push for app_key {}", self.client.app_key());
        validate_file_push_request(request)
            .inspect_err(|e| error!("file push request rejected: {e}"))?;

        let result: PushResponse = self
            .client
            .post(ApiFamily::Push, "/v3/push/file", request)
            .await?
            .decode()?;
        info!("file push created: msg_id={}", result.msg_id);
        Ok(result)
    }
}
