use serde::{Deserialize, Serialize};

use super::push::{Callback, Message, Notification, Options, Platform, SmsMessage};

/// CID类型
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CidType {
    #[default]
    Push,
    Schedule,
}

impl CidType {
    pub fn as_str(&self) -> &'static str {
        match self {
            CidType::Push => "push",
            CidType::Schedule => "schedule",
        }
    }
}

/// 获取CID响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CidResponse {
    #[serde(rename = "cidlist", default)]
    pub cid_list: Vec<String>,
}

/// 配额信息，开通不限量时 total 和 used 均为 -1
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaInfo {
    #[serde(default)]
    pub total: i64,
    #[serde(default)]
    pub used: i64,
}

impl QuotaInfo {
    pub fn is_unlimited(&self) -> bool {
        self.total == -1
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VendorQuota {
    /// 运营消息配额
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<QuotaInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct VivoQuota {
    /// 系统消息配额
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<QuotaInfo>,
    /// 运营消息配额
    #[serde(skip_serializing_if = "Option::is_none")]
    pub operation: Option<QuotaInfo>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xiaomi_quota: Option<VendorQuota>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oppo_quota: Option<VendorQuota>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vivo_quota: Option<VivoQuota>,
}

/// 厂商配额查询响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuotaResponse {
    #[serde(default)]
    pub code: i32,
    #[serde(default)]
    pub message: String,
    pub data: Option<QuotaData>,
}

/// 文件目标
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileTarget {
    pub file_id: String,
}

/// 文件推送目标，只支持 file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileAudience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file: Option<FileTarget>,
}

impl FileAudience {
    pub fn file(file_id: impl Into<String>) -> Self {
        Self {
            file: Some(FileTarget {
                file_id: file_id.into(),
            }),
        }
    }
}

/// 文件推送请求
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FilePushRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<FileAudience>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<Notification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sms_message: Option<SmsMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<Options>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub callback: Option<Callback>,
}
