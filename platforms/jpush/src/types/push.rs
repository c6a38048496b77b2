use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

/// 附加字段
pub type Extras = Map<String, Value>;

/// VOIP通知为任意 JSON 对象
pub type VoipNotification = Map<String, Value>;

/// 设备平台
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeviceType {
    Android,
    Ios,
    Hmos,
    QuickApp,
    WinPhone,
}

/// 推送平台，序列化为 `"all"` 或平台数组
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    All,
    Explicit(Vec<DeviceType>),
}

impl Platform {
    pub fn explicit(devices: impl IntoIterator<Item = DeviceType>) -> Self {
        Platform::Explicit(devices.into_iter().collect())
    }
}

impl Serialize for Platform {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Platform::All => serializer.serialize_str("all"),
            Platform::Explicit(devices) => devices.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for Platform {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Repr {
            Keyword(String),
            List(Vec<DeviceType>),
        }

        match Repr::deserialize(deserializer)? {
            Repr::Keyword(keyword) if keyword == "all" => Ok(Platform::All),
            Repr::Keyword(other) => Err(serde::de::Error::custom(format!(
                "unknown platform keyword: {other}"
            ))),
            Repr::List(devices) => Ok(Platform::Explicit(devices)),
        }
    }
}

/// 广播标记，序列化为 `"all"`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Broadcast {
    All,
}

/// 推送目标
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Audience {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub all: Option<Broadcast>,
    /// 标签 OR，最多20个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag: Vec<String>,
    /// 标签 AND，最多20个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_and: Vec<String>,
    /// 标签 NOT，最多20个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tag_not: Vec<String>,
    /// 别名，最多1000个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub alias: Vec<String>,
    /// 注册ID，最多1000个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub registration_id: Vec<String>,
    /// 用户分群，只能指定一个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub segment: Vec<String>,
    /// A/B测试，只能指定一个
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub abtest: Vec<String>,
    /// 实时活动ID，不能与其他目标组合
    #[serde(skip_serializing_if = "Option::is_none")]
    pub live_activity_id: Option<String>,
}

fn collect<I, S>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    values.into_iter().map(Into::into).collect()
}

impl Audience {
    pub fn broadcast() -> Self {
        Self {
            all: Some(Broadcast::All),
            ..Default::default()
        }
    }

    pub fn tags<I: IntoIterator<Item = S>, S: Into<String>>(tags: I) -> Self {
        Self {
            tag: collect(tags),
            ..Default::default()
        }
    }

    pub fn tags_and<I: IntoIterator<Item = S>, S: Into<String>>(tags: I) -> Self {
        Self {
            tag_and: collect(tags),
            ..Default::default()
        }
    }

    pub fn tags_not<I: IntoIterator<Item = S>, S: Into<String>>(tags: I) -> Self {
        Self {
            tag_not: collect(tags),
            ..Default::default()
        }
    }

    pub fn aliases<I: IntoIterator<Item = S>, S: Into<String>>(aliases: I) -> Self {
        Self {
            alias: collect(aliases),
            ..Default::default()
        }
    }

    pub fn registration_ids<I: IntoIterator<Item = S>, S: Into<String>>(ids: I) -> Self {
        Self {
            registration_id: collect(ids),
            ..Default::default()
        }
    }

    pub fn segment(segment: impl Into<String>) -> Self {
        Self {
            segment: vec![segment.into()],
            ..Default::default()
        }
    }

    pub fn abtest(abtest: impl Into<String>) -> Self {
        Self {
            abtest: vec![abtest.into()],
            ..Default::default()
        }
    }

    pub fn live_activity(live_activity_id: impl Into<String>) -> Self {
        Self {
            live_activity_id: Some(live_activity_id.into()),
            ..Default::default()
        }
    }
}

/// 点击通知后的跳转意图
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intent {
    pub url: String,
}

/// Android通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AndroidNotification {
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub builder_id: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub priority: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alert_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inbox: Option<Extras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_pic_path: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

/// iOS通知
///
/// `alert` 可以是字符串，也可以是 APNs 的 alert 字典；`badge` 可以是数字或 "+1" 这样的字符串。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IosNotification {
    #[serde(default)]
    pub alert: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sound: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge: Option<Value>,
    #[serde(rename = "content-available", skip_serializing_if = "Option::is_none")]
    pub content_available: Option<bool>,
    #[serde(rename = "mutable-content", skip_serializing_if = "Option::is_none")]
    pub mutable_content: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(rename = "thread-id", skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

/// 鸿蒙通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HmosNotification {
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intent: Option<Intent>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_add_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub badge_set_num: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub test_message: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub receipt_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub large_icon: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub push_type: Option<i32>,
}

/// 快应用通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct QuickAppNotification {
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

/// 通知
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// 各平台共用的通知内容
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub alert: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub android: Option<AndroidNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ios: Option<IosNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hmos: Option<HmosNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quickapp: Option<QuickAppNotification>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub voip: Option<VoipNotification>,
}

impl Notification {
    pub fn alert(alert: impl Into<String>) -> Self {
        Self {
            alert: alert.into(),
            ..Default::default()
        }
    }
}

/// 自定义消息
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub msg_content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extras: Option<Extras>,
}

impl Message {
    pub fn new(msg_content: impl Into<String>) -> Self {
        Self {
            msg_content: msg_content.into(),
            ..Default::default()
        }
    }
}

/// 短信补充
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SmsMessage {
    pub temp_id: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temp_para: Option<Extras>,
    /// 延迟发送秒数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub delay_time: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub active_filter: Option<bool>,
}

/// 推送选项
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Options {
    /// 离线消息保留秒数
    #[serde(skip_serializing_if = "Option::is_none")]
    pub time_to_live: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_production: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apns_collapse_id: Option<String>,
    /// 定速推送时长（分钟）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub big_push_duration: Option<i32>,
}

/// 回执回调
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Callback {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub params: Option<Extras>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub callback_type: Option<i32>,
}

/// 推送请求
///
/// 所有字段都是可选的，以 `..Default::default()` 组装；发送前由校验器检查必填项。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PushRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub platform: Option<Platform>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub audience: Option<Audience>,
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
    /// 防重复标识，见 `AdvancedService::get_cid`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cid: Option<String>,
}

/// 推送响应
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PushResponse {
    #[serde(default)]
    pub sendno: String,
    #[serde(default)]
    pub msg_id: String,
}
