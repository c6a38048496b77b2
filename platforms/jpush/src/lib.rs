//! 极光推送（JPush）服务端 REST API 客户端
//!
//! 通过 [`Client`] 获取推送、高级功能与统计三组服务；
//! 所有请求在发送前都会经过 [`validate`] 中的本地校验。

pub mod client;
pub mod config;
pub mod error;
pub mod services;
pub mod transport;
pub mod types;
pub mod validate;

#[cfg(test)]
mod testing;

pub use client::{ApiResponse, Client, RateLimit};
pub use common::{HttpMethod, HttpRequest, HttpResponse, HttpSender, PushInitConfig, SendError};
pub use config::{ApiFamily, BaseUrls, Config, DEFAULT_TIMEOUT};
pub use error::{ErrorCode, JPushError, Result};
pub use services::{AdvancedService, PushService, ReportService};
pub use transport::ReqwestSender;
