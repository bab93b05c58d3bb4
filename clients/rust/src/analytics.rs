use crate::base::{APIResponse, BaseClient};
use beacon_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AnalyticsClient {
    base: Arc<BaseClient>,
}

impl AnalyticsClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_overview(&self) -> APIResponse<get_overview::APIResponse> {
        self.base
            .get("analytics/overview".into(), StatusCode::OK)
            .await
    }

    pub async fn get_alert_performance(
        &self,
        limit: Option<usize>,
    ) -> APIResponse<get_alert_performance::APIResponse> {
        let path = match limit {
            Some(limit) => format!("analytics/alerts/performance?limit={}", limit),
            None => "analytics/alerts/performance".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get_daily_trends(
        &self,
        days: Option<i64>,
    ) -> APIResponse<get_daily_trends::APIResponse> {
        let path = match days {
            Some(days) => format!("analytics/trends/daily?days={}", days),
            None => "analytics/trends/daily".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get_user_engagement(
        &self,
        limit: Option<usize>,
    ) -> APIResponse<get_user_engagement::APIResponse> {
        let path = match limit {
            Some(limit) => format!("analytics/users/engagement?limit={}", limit),
            None => "analytics/users/engagement".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn get_system_health(&self) -> APIResponse<get_system_health::APIResponse> {
        self.base
            .get("analytics/system/health".into(), StatusCode::OK)
            .await
    }
}
