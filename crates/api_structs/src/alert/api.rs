use beacon_domain::{Alert, Severity, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::dtos::{AlertDTO, AlertStatusFilter, VisibilityTypeDTO};

#[derive(Debug, Deserialize, Serialize)]
pub struct AlertResponse {
    pub success: bool,
    pub alert: AlertDTO,
}

impl AlertResponse {
    pub fn new(alert: Alert, now: DateTime<Utc>) -> Self {
        Self {
            success: true,
            alert: AlertDTO::new(alert, now),
        }
    }
}

pub mod create_alert {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub title: String,
        pub message: String,
        #[serde(default)]
        pub severity: Option<Severity>,
        pub visibility_type: VisibilityTypeDTO,
        #[serde(default)]
        pub team_ids: Vec<ID>,
        #[serde(default)]
        pub user_ids: Vec<ID>,
        pub created_by: ID,
        pub expiry_time: DateTime<Utc>,
        #[serde(default)]
        pub reminders_enabled: Option<bool>,
    }

    pub type APIResponse = AlertResponse;
}

pub mod update_alert {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        #[serde(default)]
        pub title: Option<String>,
        #[serde(default)]
        pub message: Option<String>,
        #[serde(default)]
        pub severity: Option<Severity>,
        #[serde(default)]
        pub expiry_time: Option<DateTime<Utc>>,
        #[serde(default)]
        pub visibility_type: Option<VisibilityTypeDTO>,
        #[serde(default)]
        pub team_ids: Vec<ID>,
        #[serde(default)]
        pub user_ids: Vec<ID>,
        #[serde(default)]
        pub reminders_enabled: Option<bool>,
    }

    pub type APIResponse = AlertResponse;
}

pub mod archive_alert {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    pub type APIResponse = AlertResponse;
}

pub mod get_alerts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        #[serde(default)]
        pub status: Option<AlertStatusFilter>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub alerts: Vec<AlertDTO>,
    }

    impl APIResponse {
        pub fn new(alerts: Vec<Alert>, now: DateTime<Utc>) -> Self {
            Self {
                alerts: alerts
                    .into_iter()
                    .map(|alert| AlertDTO::new(alert, now))
                    .collect(),
            }
        }
    }
}

pub mod send_alert_reminders {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub success: bool,
        pub reminders_sent: usize,
    }

    impl APIResponse {
        pub fn new(reminders_sent: usize) -> Self {
            Self {
                success: true,
                reminders_sent,
            }
        }
    }
}
