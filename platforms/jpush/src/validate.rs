//! 本地请求校验
//!
//! 每个校验函数只返回第一条不满足的规则，不会发起网络请求。

use crate::error::{ErrorCode, JPushError, Result};
use crate::types::{Audience, FilePushRequest, Message, Notification, PushRequest};

pub const MAX_TAGS: usize = 20;
pub const MAX_ALIASES: usize = 1000;
pub const MAX_REGISTRATION_IDS: usize = 1000;
pub const MAX_SEGMENTS: usize = 1;
pub const MAX_ABTESTS: usize = 1;
pub const MAX_REPORT_MSG_IDS: usize = 100;
pub const MAX_STATUS_REGISTRATION_IDS: usize = 1000;
pub const MAX_CID_COUNT: u32 = 1000;

fn invalid_params(message: impl Into<String>) -> JPushError {
    JPushError::new(ErrorCode::InvalidParams, message)
}

fn invalid_audience(message: impl Into<String>) -> JPushError {
    JPushError::new(ErrorCode::InvalidAudience, message)
}

pub fn validate_push_request(request: &PushRequest) -> Result<()> {
    if request.platform.is_none() {
        return Err(invalid_params("platform is required"));
    }
    let Some(audience) = &request.audience else {
        return Err(invalid_params("audience is required"));
    };
    validate_audience(audience)?;
    validate_content(request.notification.as_ref(), request.message.as_ref())
}

pub fn validate_file_push_request(request: &FilePushRequest) -> Result<()> {
    if request.platform.is_none() {
        return Err(invalid_params("platform is required"));
    }
    let Some(file) = request.audience.as_ref().and_then(|audience| audience.file.as_ref()) else {
        return Err(invalid_params("file audience is required"));
    };
    if file.file_id.is_empty() {
        return Err(invalid_params("file_id is required"));
    }
    validate_content(request.notification.as_ref(), request.message.as_ref())
}

fn validate_content(notification: Option<&Notification>, message: Option<&Message>) -> Result<()> {
    if notification.is_none() && message.is_none() {
        return Err(invalid_params(
            "at least one of notification or message is required",
        ));
    }
    if let Some(notification) = notification {
        validate_notification(notification)?;
    }
    if let Some(message) = message {
        validate_message(message)?;
    }
    Ok(())
}

pub fn validate_audience(audience: &Audience) -> Result<()> {
    let selectors: [(&str, &[String], usize); 7] = [
        ("tag", audience.tag.as_slice(), MAX_TAGS),
        ("tag_and", audience.tag_and.as_slice(), MAX_TAGS),
        ("tag_not", audience.tag_not.as_slice(), MAX_TAGS),
        ("alias", audience.alias.as_slice(), MAX_ALIASES),
        ("registration_id", audience.registration_id.as_slice(), MAX_REGISTRATION_IDS),
        ("segment", audience.segment.as_slice(), MAX_SEGMENTS),
        ("abtest", audience.abtest.as_slice(), MAX_ABTESTS),
    ];

    for (name, values, max) in &selectors {
        if values.len() > *max {
            return Err(invalid_audience(format!(
                "{name} accepts at most {max} entries, got {}",
                values.len()
            )));
        }
    }

    let has_selector = selectors.iter().any(|(_, values, _)| !values.is_empty());

    if audience.live_activity_id.is_some() {
        if audience.all.is_some() || has_selector {
            return Err(invalid_audience(
                "live_activity_id cannot be combined with other targets",
            ));
        }
        return Ok(());
    }

    if audience.all.is_some() {
        if has_selector {
            return Err(invalid_audience(
                "broadcast cannot be combined with other targets",
            ));
        }
        return Ok(());
    }

    if !has_selector {
        return Err(invalid_audience("audience must specify at least one target"));
    }
    Ok(())
}

pub fn validate_notification(notification: &Notification) -> Result<()> {
    if notification.alert.is_empty()
        && notification.android.is_none()
        && notification.ios.is_none()
        && notification.hmos.is_none()
        && notification.quickapp.is_none()
    {
        return Err(JPushError::new(
            ErrorCode::InvalidNotification,
            "notification must carry an alert or a platform payload",
        ));
    }
    Ok(())
}

pub fn validate_message(message: &Message) -> Result<()> {
    if message.msg_content.is_empty() {
        return Err(JPushError::new(
            ErrorCode::InvalidMessage,
            "msg_content must not be empty",
        ));
    }
    Ok(())
}

/// 消息ID会拼进URL，只接受非空的纯数字
pub(crate) fn validate_msg_id(msg_id: &str) -> Result<()> {
    if msg_id.is_empty() {
        return Err(invalid_params("message ID cannot be empty"));
    }
    if !msg_id.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid_params(format!(
            "message ID must be numeric, got {msg_id:?}"
        )));
    }
    Ok(())
}

pub(crate) fn validate_msg_ids<S: AsRef<str>>(msg_ids: &[S]) -> Result<()> {
    if msg_ids.is_empty() {
        return Err(invalid_params("msg_ids cannot be empty"));
    }
    if msg_ids.len() > MAX_REPORT_MSG_IDS {
        return Err(invalid_params(format!(
            "msg_ids cannot exceed {MAX_REPORT_MSG_IDS}"
        )));
    }
    msg_ids.iter().try_for_each(|id| validate_msg_id(id.as_ref()))
}

pub(crate) fn validate_cid_count(count: u32) -> Result<()> {
    if count == 0 || count > MAX_CID_COUNT {
        return Err(invalid_params(format!(
            "count must be between 1 and {MAX_CID_COUNT}, got {count}"
        )));
    }
    Ok(())
}
