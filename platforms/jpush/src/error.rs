use std::fmt;

use common::SendError;
use serde::{Deserialize, Serialize};

/// JPush API 错误码
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub enum ErrorCode {
    Success,
    InvalidParams,
    MissingAuth,
    InvalidAuth,
    InvalidAppKey,
    InvalidJson,
    Timeout,
    InternalError,
    RateLimitExceeded,
    AppKeyBlacklisted,
    BroadcastLimit,
    InvalidPlatform,
    InvalidAudience,
    InvalidNotification,
    InvalidMessage,
    InvalidOptions,
    InvalidRegistrationId,
    InvalidTag,
    InvalidAlias,
    TagLimitExceeded,
    IllegalRegistrationId,
    AliasLimitExceeded,
    TagOperationFailed,
    /// 服务端返回的、本地未收录的错误码
    Other(i32),
}

impl ErrorCode {
    pub fn code(&self) -> i32 {
        match self {
            ErrorCode::Success => 0,
            ErrorCode::InvalidParams => 1000,
            ErrorCode::MissingAuth => 1001,
            ErrorCode::InvalidAuth => 1002,
            ErrorCode::InvalidAppKey => 1003,
            ErrorCode::InvalidJson => 1004,
            ErrorCode::Timeout => 1005,
            ErrorCode::InternalError => 1006,
            ErrorCode::RateLimitExceeded => 2002,
            ErrorCode::AppKeyBlacklisted => 2003,
            ErrorCode::BroadcastLimit => 2008,
            ErrorCode::InvalidPlatform => 3001,
            ErrorCode::InvalidAudience => 3002,
            ErrorCode::InvalidNotification => 3003,
            ErrorCode::InvalidMessage => 3004,
            ErrorCode::InvalidOptions => 3005,
            ErrorCode::InvalidRegistrationId => 7001,
            ErrorCode::InvalidTag => 7002,
            ErrorCode::InvalidAlias => 7003,
            ErrorCode::TagLimitExceeded => 7004,
            ErrorCode::IllegalRegistrationId => 7013,
            ErrorCode::AliasLimitExceeded => 7015,
            ErrorCode::TagOperationFailed => 7016,
            ErrorCode::Other(code) => *code,
        }
    }

    /// 根据HTTP状态码获取错误码
    pub fn from_http_status(status: u16) -> Self {
        match status {
            200 => ErrorCode::Success,
            400 => ErrorCode::InvalidParams,
            401 => ErrorCode::InvalidAuth,
            403 => ErrorCode::AppKeyBlacklisted,
            429 => ErrorCode::RateLimitExceeded,
            504 => ErrorCode::Timeout,
            _ => ErrorCode::InternalError,
        }
    }
}

impl From<i32> for ErrorCode {
    fn from(code: i32) -> Self {
        match code {
            0 => ErrorCode::Success,
            1000 => ErrorCode::InvalidParams,
            1001 => ErrorCode::MissingAuth,
            1002 => ErrorCode::InvalidAuth,
            1003 => ErrorCode::InvalidAppKey,
            1004 => ErrorCode::InvalidJson,
            1005 => ErrorCode::Timeout,
            1006 => ErrorCode::InternalError,
            2002 => ErrorCode::RateLimitExceeded,
            2003 => ErrorCode::AppKeyBlacklisted,
            2008 => ErrorCode::BroadcastLimit,
            3001 => ErrorCode::InvalidPlatform,
            3002 => ErrorCode::InvalidAudience,
            3003 => ErrorCode::InvalidNotification,
            3004 => ErrorCode::InvalidMessage,
            3005 => ErrorCode::InvalidOptions,
            7001 => ErrorCode::InvalidRegistrationId,
            7002 => ErrorCode::InvalidTag,
            7003 => ErrorCode::InvalidAlias,
            7004 => ErrorCode::TagLimitExceeded,
            7013 => ErrorCode::IllegalRegistrationId,
            7015 => ErrorCode::AliasLimitExceeded,
            7016 => ErrorCode::TagOperationFailed,
            other => ErrorCode::Other(other),
        }
    }
}

impl From<ErrorCode> for i32 {
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// JPush API 错误
///
/// 配置、校验、传输以及服务端返回的失败都用同一个 (code, message) 值表示。
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("JPush API Error [{code}]: {message}")]
pub struct JPushError {
    pub code: ErrorCode,
    pub message: String,
}

impl JPushError {
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl From<SendError> for JPushError {
    fn from(err: SendError) -> Self {
        let code = match err {
            SendError::Timeout(_) | SendError::Connect(_) | SendError::Request(_) => {
                ErrorCode::Timeout
            }
            SendError::Body(_) | SendError::Build(_) => ErrorCode::InternalError,
        };
        JPushError::new(code, err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, JPushError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = JPushError::new(ErrorCode::InvalidParams, "platform is required");
        assert_eq!(err.to_string(), "JPush API Error [1000]: platform is required");
    }

    #[test]
    fn test_code_table_roundtrips() {
        let known = [
            ErrorCode::Success,
            ErrorCode::InvalidParams,
            ErrorCode::MissingAuth,
            ErrorCode::InvalidAuth,
            ErrorCode::InvalidAppKey,
            ErrorCode::InvalidJson,
            ErrorCode::Timeout,
            ErrorCode::InternalError,
            ErrorCode::RateLimitExceeded,
            ErrorCode::AppKeyBlacklisted,
            ErrorCode::BroadcastLimit,
            ErrorCode::InvalidPlatform,
            ErrorCode::InvalidAudience,
            ErrorCode::InvalidNotification,
            ErrorCode::InvalidMessage,
            ErrorCode::InvalidOptions,
            ErrorCode::InvalidRegistrationId,
            ErrorCode::InvalidTag,
            ErrorCode::InvalidAlias,
            ErrorCode::TagLimitExceeded,
            ErrorCode::IllegalRegistrationId,
            ErrorCode::AliasLimitExceeded,
            ErrorCode::TagOperationFailed,
        ];
        for code in known {
            assert_eq!(ErrorCode::from(code.code()), code);
        }
        assert_eq!(ErrorCode::from(1011), ErrorCode::Other(1011));
        assert_eq!(ErrorCode::Other(1011).code(), 1011);
    }

    #[test]
    fn test_from_http_status() {
        assert_eq!(ErrorCode::from_http_status(200), ErrorCode::Success);
        assert_eq!(ErrorCode::from_http_status(400), ErrorCode::InvalidParams);
        assert_eq!(ErrorCode::from_http_status(401), ErrorCode::InvalidAuth);
        assert_eq!(ErrorCode::from_http_status(403), ErrorCode::AppKeyBlacklisted);
        assert_eq!(ErrorCode::from_http_status(429), ErrorCode::RateLimitExceeded);
        assert_eq!(ErrorCode::from_http_status(504), ErrorCode::Timeout);
        assert_eq!(ErrorCode::from_http_status(500), ErrorCode::InternalError);
        assert_eq!(ErrorCode::from_http_status(404), ErrorCode::InternalError);
    }

    #[test]
    fn test_send_error_mapping() {
        let timeout: JPushError = SendError::Timeout("deadline".into()).into();
        assert_eq!(timeout.code, ErrorCode::Timeout);

        let refused: JPushError = SendError::Connect("refused".into()).into();
        assert_eq!(refused.code, ErrorCode::Timeout);

        let body: JPushError = SendError::Body("truncated".into()).into();
        assert_eq!(body.code, ErrorCode::InternalError);
    }

    #[test]
    fn test_error_serde_uses_numeric_code() {
        let err: JPushError =
            serde_json::from_str(r#"{"code":3002,"message":"bad audience"}"#).unwrap();
        assert_eq!(err.code, ErrorCode::InvalidAudience);
        assert_eq!(serde_json::to_value(&err).unwrap()["code"], 3002);
    }
}
