use log::*;

use super::join_ids;
use crate::client::Client;
use crate::config::ApiFamily;
use crate::error::{ErrorCode, JPushError, Result};
use crate::types::{MessageDetail, MessageStatusRequest, MessageStatuses, Received, ReceivedDetail};
use crate::validate::{MAX_STATUS_REGISTRATION_IDS, validate_msg_ids};

/// 统计服务，请求发往 report 域名
pub struct ReportService<'a> {
    client: &'a Client,
}

impl<'a> ReportService<'a> {
    pub(crate) fn new(client: &'a Client) -> Self {
        Self { client }
    }

    /// 送达统计详情，最多100个消息ID
    pub async fn get_received_detail<S: AsRef<str>>(&self, msg_ids: &[S]) -> Result<Vec<ReceivedDetail>> {
        validate_msg_ids(msg_ids)?;
        info!("querying received detail for {} messages", msg_ids.len());
        let path = format!("/v3/received/detail?msg_ids={}", join_ids(msg_ids));
        self.client.get(ApiFamily::Report, &path).await?.decode()
    }

    /// 送达统计（旧接口），最多100个消息ID
    pub async fn get_received<S: AsRef<str>>(&self, msg_ids: &[S]) -> Result<Vec<Received>> {
        validate_msg_ids(msg_ids)?;
        let path = format!("/v3/received?msg_ids={}", join_ids(msg_ids));
        self.client.get(ApiFamily::Report, &path).await?.decode()
    }

    /// 查询指定设备的送达状态（VIP）
    pub async fn get_message_status(&self, request: &MessageStatusRequest) -> Result<MessageStatuses> {
        info!("querying delivery status of msg {}", request.msg_id);
        if request.msg_id == 0 {
            return Err(JPushError::new(ErrorCode::InvalidParams, "msg_id is required"));
        }
        if request.registration_ids.is_empty() {
            return Err(JPushError::new(
                ErrorCode::InvalidParams,
                "registration_ids cannot be empty",
            ));
        }
        if request.registration_ids.len() > MAX_STATUS_REGISTRATION_IDS {
            return Err(JPushError::new(
                ErrorCode::InvalidParams,
                format!("registration_ids cannot exceed {MAX_STATUS_REGISTRATION_IDS}"),
            ));
        }

        let statuses: MessageStatuses = self
            .client
            .post(ApiFamily::Report, "/v3/status/message", request)
            .await?
            .decode()?;
        debug!("received {} delivery statuses for msg {}", statuses.len(), request.msg_id);
        Ok(statuses)
    }

    /// 消息统计详情（VIP），最多100个消息ID
    pub async fn get_message_detail<S: AsRef<str>>(&self, msg_ids: &[S]) -> Result<Vec<MessageDetail>> {
        validate_msg_ids(msg_ids)?;
        let path = format!("/v3/messages/detail?msg_ids={}", join_ids(msg_ids));
        self.client.get(ApiFamily::Report, &path).await?.decode()
    }
}

#[cfg(test)]
mod tests {
    use common::{HttpMethod, SendError};

    use crate::testing::{MockSender, client_with};
    use crate::types::DeliveryState;

    use super::*;

    fn ids(n: usize) -> Vec<String> {
        (0..n).map(|i| format!("{}", 1000 + i)).collect()
    }

    #[tokio::test]
    async fn test_get_received_detail() {
        let sender = MockSender::new();
        sender.respond(
            200,
            r#"[{"msg_id":"1613113584","jpush_received":10,"ios_apns_sent":3},{"msg_id":"1229760629"}]"#,
        );
        let client = client_with(&sender);

        let details = client
            .report()
            .get_received_detail(&["1613113584", "1229760629"])
            .await
            .unwrap();
        assert_eq!(details.len(), 2);
        assert_eq!(details[0].jpush_received, Some(10));
        assert_eq!(details[1].ios_apns_sent, None);

        let requests = sender.requests();
        let req = &requests[0];
        assert_eq!(req.method, HttpMethod::Get);
        assert_eq!(
            req.url,
            "http://report.test/v3/received/detail?msg_ids=1613113584,1229760629"
        );
    }

    #[tokio::test]
    async fn test_msg_id_bounds() {
        let sender = MockSender::new();
        let client = client_with(&sender);
        let report = client.report();

        let err = report.get_received_detail::<String>(&[]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        let err = report.get_received(&ids(101)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        let err = report.get_message_detail(&ids(101)).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert!(sender.requests().is_empty());

        let err = report.get_received_detail(&["1", "2&x=3"]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        let err = report.get_received(&["../v3/push/quota"]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidParams);
        assert!(sender.requests().is_empty());

        sender.respond(200, "[]");
        assert!(report.get_message_detail(&ids(100)).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_received() {
        let sender = MockSender::new();
        sender.respond(200, r#"[{"msg_id":"1","android_received":5,"ios_apns_sent":null}]"#);
        let client = client_with(&sender);

        let received = client.report().get_received(&["1"]).await.unwrap();
        assert_eq!(received[0].android_received, Some(5));
        assert_eq!(sender.requests()[0].url, "http://report.test/v3/received?msg_ids=1");
    }

    #[tokio::test]
    async fn test_get_message_status() {
        let sender = MockSender::new();
        sender.respond(200, r#"{"rid-1":{"status":0},"rid-2":{"status":1}}"#);
        let client = client_with(&sender);

        let request = MessageStatusRequest {
            msg_id: 1828256757,
            registration_ids: vec!["rid-1".into(), "rid-2".into()],
            date: None,
        };
        let statuses = client.report().get_message_status(&request).await.unwrap();
        assert_eq!(statuses["rid-1"].state(), DeliveryState::Delivered);
        assert_eq!(statuses["rid-2"].state(), DeliveryState::NotDelivered);

        let requests = sender.requests();
        let req = &requests[0];
        assert_eq!(req.method, HttpMethod::Post);
        assert_eq!(req.url, "http://report.test/v3/status/message");
    }

    #[tokio::test]
    async fn test_get_message_status_invalid() {
        let sender = MockSender::new();
        let client = client_with(&sender);
        let report = client.report();

        let cases = [
            MessageStatusRequest {
                msg_id: 0,
                registration_ids: vec!["rid".into()],
                date: None,
            },
            MessageStatusRequest {
                msg_id: 1,
                registration_ids: Vec::new(),
                date: None,
            },
            MessageStatusRequest {
                msg_id: 1,
                registration_ids: ids(1001),
                date: None,
            },
        ];
        for request in &cases {
            let err = report.get_message_status(request).await.unwrap_err();
            assert_eq!(err.code, ErrorCode::InvalidParams);
        }
        assert!(sender.requests().is_empty());
    }

    #[tokio::test]
    async fn test_get_message_detail() {
        let sender = MockSender::new();
        sender.respond(
            200,
            r#"[{"msg_id":"9","details":{"notification":{"target":2,"sent":2,"received":1,"display":1,"click":0}}}]"#,
        );
        let client = client_with(&sender);

        let details = client.report().get_message_detail(&["9"]).await.unwrap();
        let stats = details[0].details.as_ref().unwrap().notification.as_ref().unwrap();
        assert_eq!(stats.received, 1);
        assert_eq!(
            sender.requests()[0].url,
            "http://report.test/v3/messages/detail?msg_ids=9"
        );
    }

    #[tokio::test]
    async fn test_unexpected_shape_is_invalid_json() {
        let sender = MockSender::new();
        sender.respond(200, r#"{"msg_id":"1"}"#);
        let client = client_with(&sender);

        let err = client.report().get_received(&["1"]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidJson);
    }

    #[tokio::test]
    async fn test_timeout() {
        let sender = MockSender::new();
        sender.fail(SendError::Timeout("operation timed out".into()));
        let client = client_with(&sender);

        let err = client.report().get_received_detail(&["1"]).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::Timeout);
    }
}
