use std::time::Duration;

use common::PushInitConfig;
use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, JPushError, Result};

const PLATFORM_NAME: &str = "jpush";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// API 分组，决定请求发往哪个域名
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiFamily {
    Push,
    Device,
    Report,
}

/// 各 API 分组的基础地址
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BaseUrls {
    pub push: String,
    pub device: String,
    pub report: String,
}

impl Default for BaseUrls {
    fn default() -> Self {
        Self {
            push: "https://api.jpush.cn".to_string(),
            device: "https://device.jpush.cn".to_string(),
            report: "https://report.jpush.cn".to_string(),
        }
    }
}

impl BaseUrls {
    /// 所有分组指向同一个地址，适用于私有部署或测试
    pub fn single(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            push: url.clone(),
            device: url.clone(),
            report: url,
        }
    }

    pub fn get(&self, family: ApiFamily) -> &str {
        let url = match family {
            ApiFamily::Push => &self.push,
            ApiFamily::Device => &self.device,
            ApiFamily::Report => &self.report,
        };
        url.trim_end_matches('/')
    }
}

/// JPush 客户端配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    pub app_key: String,
    pub master_secret: String,
    /// 请求超时，未设置或为零时使用30秒
    #[serde(default, with = "timeout_secs")]
    pub timeout: Option<Duration>,
    #[serde(default)]
    pub base_urls: BaseUrls,
}

impl Config {
    pub fn new(app_key: impl Into<String>, master_secret: impl Into<String>) -> Self {
        Self {
            app_key: app_key.into(),
            master_secret: master_secret.into(),
            ..Default::default()
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.app_key.is_empty() {
            return Err(JPushError::new(
                ErrorCode::InvalidAppKey,
                "app_key must not be empty",
            ));
        }
        if self.master_secret.is_empty() {
            return Err(JPushError::new(
                ErrorCode::MissingAuth,
                "master_secret must not be empty",
            ));
        }
        Ok(())
    }
}

impl PushInitConfig for Config {
    fn platform_name(&self) -> &str {
        PLATFORM_NAME
    }

    fn timeout(&self) -> Duration {
        match self.timeout {
            Some(timeout) if !timeout.is_zero() => timeout,
            _ => DEFAULT_TIMEOUT,
        }
    }
}

mod timeout_secs {
    use std::time::Duration;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Option<Duration>, serializer: S) -> Result<S::Ok, S::Error> {
        match value {
            Some(timeout) => serializer.serialize_some(&timeout.as_secs_f64()),
            None => serializer.serialize_none(),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<Duration>, D::Error> {
        let secs = Option::<f64>::deserialize(deserializer)?;
        match secs {
            Some(secs) => Duration::try_from_secs_f64(secs)
                .map(Some)
                .map_err(|e| serde::de::Error::custom(format!("invalid timeout {secs}: {e}"))),
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_credentials() {
        assert!(Config::new("key", "secret").validate().is_ok());

        let err = Config::new("", "secret").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidAppKey);

        let err = Config::new("key", "").validate().unwrap_err();
        assert_eq!(err.code, ErrorCode::MissingAuth);
    }

    #[test]
    fn test_default_timeout() {
        let mut config = Config::new("key", "secret");
        assert_eq!(PushInitConfig::timeout(&config), DEFAULT_TIMEOUT);

        config.timeout = Some(Duration::ZERO);
        assert_eq!(PushInitConfig::timeout(&config), DEFAULT_TIMEOUT);

        config.timeout = Some(Duration::from_secs(5));
        assert_eq!(PushInitConfig::timeout(&config), Duration::from_secs(5));
        assert_eq!(config.platform_name(), "jpush");
    }

    #[test]
    fn test_base_urls_strip_trailing_slash() {
        let urls = BaseUrls::single("http://127.0.0.1:8080/");
        assert_eq!(urls.get(ApiFamily::Push), "http://127.0.0.1:8080");
        assert_eq!(urls.get(ApiFamily::Report), "http://127.0.0.1:8080");

        let defaults = BaseUrls::default();
        assert_eq!(defaults.get(ApiFamily::Device), "https://device.jpush.cn");
    }

    #[test]
    fn test_config_from_json() {
        let config: Config = serde_json::from_str(
            r#"{"app_key":"k","master_secret":"s","timeout":2.5,"base_urls":{"report":"http://localhost:9000"}}"#,
        )
        .unwrap();
        assert_eq!(config.timeout, Some(Duration::from_millis(2500)));
        assert_eq!(config.base_urls.report, "http://localhost:9000");
        assert_eq!(config.base_urls.push, "https://api.jpush.cn");

        let config: Config = serde_json::from_str(r#"{"app_key":"k","master_secret":"s"}"#).unwrap();
        assert!(config.timeout.is_none());
    }

    #[test]
    fn test_config_rejects_unrepresentable_timeout() {
        for timeout in ["1e30", "-1", "-0.5"] {
            let json = format!(r#"{{"app_key":"k","master_secret":"s","timeout":{timeout}}}"#);
            let result = serde_json::from_str::<Config>(&json);
            assert!(result.is_err(), "timeout {timeout} should be rejected");
        }
    }
}
