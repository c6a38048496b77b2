use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 送达统计详情
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReceivedDetail {
    #[serde(default)]
    pub msg_id: String,
    /// 极光通道送达数
    pub jpush_received: Option<i64>,
    pub android_pns_sent: Option<i64>,
    pub android_pns_received: Option<i64>,
    pub ios_apns_sent: Option<i64>,
    pub ios_apns_received: Option<i64>,
    pub ios_msg_received: Option<i64>,
    // 服务端字段名拼写为 acivity
    #[serde(rename = "live_acivity_sent")]
    pub live_activity_sent: Option<i64>,
    #[serde(rename = "live_acivity_received")]
    pub live_activity_received: Option<i64>,
    pub wp_mpns_sent: Option<i64>,
    pub quickapp_jpush_received: Option<i64>,
    pub quickapp_pns_sent: Option<i64>,
    pub hmos_hmpns_received: Option<i64>,
    pub hmos_hmpns_sent: Option<i64>,
    pub hmos_msg_received: Option<i64>,
    pub hmos_msg_sent: Option<i64>,
}

/// 送达统计（旧接口）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Received {
    #[serde(default)]
    pub msg_id: String,
    pub android_received: Option<i64>,
    pub ios_apns_sent: Option<i64>,
    pub ios_apns_received: Option<i64>,
    pub ios_msg_received: Option<i64>,
    pub wp_mpns_sent: Option<i64>,
}

/// 送达状态查询请求（VIP）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatusRequest {
    pub msg_id: i64,
    /// 最多1000个
    pub registration_ids: Vec<String>,
    /// 查询日期，默认当天
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date: Option<NaiveDate>,
}

/// 单个设备的送达状态
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageStatus {
    pub status: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeliveryState {
    Delivered,
    NotDelivered,
    /// registration_id 不属于该应用
    ForeignRegistrationId,
    /// 不是该消息的推送目标
    NotTargeted,
    SystemError,
    Unknown(i32),
}

impl MessageStatus {
    pub fn state(&self) -> DeliveryState {
        match self.status {
            0 => DeliveryState::Delivered,
            1 => DeliveryState::NotDelivered,
            2 => DeliveryState::ForeignRegistrationId,
            3 => DeliveryState::NotTargeted,
            4 => DeliveryState::SystemError,
            other => DeliveryState::Unknown(other),
        }
    }
}

/// 以 registration_id 为键的送达状态
pub type MessageStatuses = HashMap<String, MessageStatus>;

/// 单个通道的统计数据
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChannelStats {
    pub target: i64,
    pub sent: i64,
    pub received: i64,
    pub display: i64,
    pub click: i64,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AndroidSubChannels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jg_android: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub huawei: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub xiaomi: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub oppo: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vivo: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meizu: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fcm: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub asus: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tuibida: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub honor: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nio: Option<ChannelStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IosSubChannels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jg_ios: Option<ChannelStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HmosSubChannels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmpns: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub jg_hmos: Option<ChannelStats>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuickAppSubChannels {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_jg: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_huawei: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_xiaomi: Option<ChannelStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quick_oppo: Option<ChannelStats>,
}

/// 通知、自定义消息、应用内提醒共用的统计结构
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeliveryStats {
    #[serde(default)]
    pub target: i64,
    #[serde(default)]
    pub sent: i64,
    #[serde(default)]
    pub received: i64,
    #[serde(default)]
    pub display: i64,
    #[serde(default)]
    pub click: i64,
    pub sub_android: Option<AndroidSubChannels>,
    pub sub_ios: Option<IosSubChannels>,
    /// 应用内提醒没有鸿蒙和快应用子通道
    pub sub_hmos: Option<HmosSubChannels>,
    pub sub_quickapp: Option<QuickAppSubChannels>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetailStats {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notification: Option<DeliveryStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<DeliveryStats>,
    #[serde(rename = "inapp", skip_serializing_if = "Option::is_none")]
    pub in_app: Option<DeliveryStats>,
}

/// 消息统计详情（VIP）
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MessageDetail {
    #[serde(default)]
    pub msg_id: String,
    pub details: Option<MessageDetailStats>,
}
