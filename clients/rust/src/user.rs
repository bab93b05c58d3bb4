use crate::base::{APIResponse, BaseClient};
use beacon_api_structs::*;
use beacon_domain::ID;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct UserClient {
    base: Arc<BaseClient>,
}

pub struct GetNotificationHistoryInput {
    pub user_id: ID,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

impl UserClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_alerts(&self, user_id: ID) -> APIResponse<get_user_alerts::APIResponse> {
        self.base
            .get(format!("user/alerts?user_id={}", user_id), StatusCode::OK)
            .await
    }

    pub async fn get_dashboard(
        &self,
        user_id: ID,
    ) -> APIResponse<get_user_dashboard::APIResponse> {
        self.base
            .get(format!("user/dashboard?user_id={}", user_id), StatusCode::OK)
            .await
    }

    pub async fn mark_alert_read(
        &self,
        alert_id: ID,
        user_id: ID,
    ) -> APIResponse<mark_alert_read::APIResponse> {
        let body = mark_alert_read::RequestBody { user_id };
        self.base
            .post(
                body,
                format!("user/alerts/{}/read", alert_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn mark_alert_unread(
        &self,
        alert_id: ID,
        user_id: ID,
    ) -> APIResponse<mark_alert_unread::APIResponse> {
        let body = mark_alert_unread::RequestBody { user_id };
        self.base
            .post(
                body,
                format!("user/alerts/{}/unread", alert_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn snooze_alert(
        &self,
        alert_id: ID,
        user_id: ID,
    ) -> APIResponse<snooze_alert::APIResponse> {
        let body = snooze_alert::RequestBody { user_id };
        self.base
            .post(
                body,
                format!("user/alerts/{}/snooze", alert_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_notification_history(
        &self,
        input: GetNotificationHistoryInput,
    ) -> APIResponse<get_notification_history::APIResponse> {
        let mut path = format!("user/notifications/history?user_id={}", input.user_id);
        if let Some(page) = input.page {
            path = format!("{}&page={}", path, page);
        }
        if let Some(per_page) = input.per_page {
            path = format!("{}&per_page={}", path, per_page);
        }
        self.base.get(path, StatusCode::OK).await
    }
}
