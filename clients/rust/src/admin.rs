use crate::base::{APIResponse, BaseClient};
use beacon_api_structs::dtos::{AlertStatusFilter, VisibilityTypeDTO};
use beacon_api_structs::*;
use beacon_domain::{Severity, ID};
use chrono::{DateTime, Utc};
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct AdminClient {
    base: Arc<BaseClient>,
}

pub struct CreateAlertInput {
    pub title: String,
    pub message: String,
    pub severity: Option<Severity>,
    pub visibility_type: VisibilityTypeDTO,
    pub team_ids: Vec<ID>,
    pub user_ids: Vec<ID>,
    pub created_by: ID,
    pub expiry_time: DateTime<Utc>,
    pub reminders_enabled: Option<bool>,
}

pub struct UpdateAlertInput {
    pub alert_id: ID,
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<Severity>,
    pub expiry_time: Option<DateTime<Utc>>,
    pub visibility_type: Option<VisibilityTypeDTO>,
    pub team_ids: Vec<ID>,
    pub user_ids: Vec<ID>,
    pub reminders_enabled: Option<bool>,
}

impl AdminClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_users(&self) -> APIResponse<get_users::APIResponse> {
        self.base.get("admin/users".into(), StatusCode::OK).await
    }

    pub async fn get_teams(&self) -> APIResponse<get_teams::APIResponse> {
        self.base.get("admin/teams".into(), StatusCode::OK).await
    }

    pub async fn get_alerts(
        &self,
        status: Option<AlertStatusFilter>,
    ) -> APIResponse<get_alerts::APIResponse> {
        let path = match status {
            Some(AlertStatusFilter::Active) => "admin/alerts?status=active".to_string(),
            Some(AlertStatusFilter::Archived) => "admin/alerts?status=archived".to_string(),
            Some(AlertStatusFilter::Expired) => "admin/alerts?status=expired".to_string(),
            None => "admin/alerts".to_string(),
        };
        self.base.get(path, StatusCode::OK).await
    }

    pub async fn create_alert(
        &self,
        input: CreateAlertInput,
    ) -> APIResponse<create_alert::APIResponse> {
        let body = create_alert::RequestBody {
            title: input.title,
            message: input.message,
            severity: input.severity,
            visibility_type: input.visibility_type,
            team_ids: input.team_ids,
            user_ids: input.user_ids,
            created_by: input.created_by,
            expiry_time: input.expiry_time,
            reminders_enabled: input.reminders_enabled,
        };
        self.base
            .post(body, "admin/alerts".into(), StatusCode::CREATED)
            .await
    }

    pub async fn update_alert(
        &self,
        input: UpdateAlertInput,
    ) -> APIResponse<update_alert::APIResponse> {
        let body = update_alert::RequestBody {
            title: input.title,
            message: input.message,
            severity: input.severity,
            expiry_time: input.expiry_time,
            visibility_type: input.visibility_type,
            team_ids: input.team_ids,
            user_ids: input.user_ids,
            reminders_enabled: input.reminders_enabled,
        };
        self.base
            .put(
                body,
                format!("admin/alerts/{}", input.alert_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn archive_alert(&self, alert_id: ID) -> APIResponse<archive_alert::APIResponse> {
        self.base
            .post_empty(format!("admin/alerts/{}/archive", alert_id), StatusCode::OK)
            .await
    }

    pub async fn send_reminder(
        &self,
        alert_id: ID,
    ) -> APIResponse<send_alert_reminders::APIResponse> {
        self.base
            .post_empty(
                format!("admin/alerts/{}/send-reminder", alert_id),
                StatusCode::OK,
            )
            .await
    }

    pub async fn get_system_stats(&self) -> APIResponse<get_system_stats::APIResponse> {
        self.base
            .get("admin/stats/system".into(), StatusCode::OK)
            .await
    }
}
