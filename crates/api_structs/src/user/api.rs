use beacon_domain::{Alert, Delivery, User, ID};
use serde::{Deserialize, Serialize};

use crate::dtos::{DashboardSummaryDTO, DeliveryDTO, UserAlertDTO, UserDTO};

#[derive(Debug, Deserialize, Serialize)]
pub struct DeliveryResponse {
    pub success: bool,
    pub delivery: DeliveryDTO,
}

impl DeliveryResponse {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            success: true,
            delivery: DeliveryDTO::new(delivery),
        }
    }
}

pub mod get_users {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub users: Vec<UserDTO>,
    }

    impl APIResponse {
        pub fn new(users: Vec<User>) -> Self {
            Self {
                users: users.into_iter().map(UserDTO::new).collect(),
            }
        }
    }
}

pub mod get_user_alerts {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub alerts: Vec<UserAlertDTO>,
    }

    impl APIResponse {
        pub fn new(alerts: Vec<(Alert, Delivery)>) -> Self {
            Self {
                alerts: alerts
                    .into_iter()
                    .map(|(alert, delivery)| UserAlertDTO::new(alert, delivery))
                    .collect(),
            }
        }
    }
}

pub mod get_user_dashboard {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub user_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub summary: DashboardSummaryDTO,
    }
}

pub mod mark_alert_read {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: ID,
    }

    pub type APIResponse = DeliveryResponse;
}

pub mod mark_alert_unread {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: ID,
    }

    pub type APIResponse = DeliveryResponse;
}

pub mod snooze_alert {
    use super::*;

    #[derive(Debug, Deserialize)]
    pub struct PathParams {
        pub alert_id: ID,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct RequestBody {
        pub user_id: ID,
    }

    pub type APIResponse = DeliveryResponse;
}

pub mod get_notification_history {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct QueryParams {
        pub user_id: ID,
        #[serde(default)]
        pub page: Option<usize>,
        #[serde(default)]
        pub per_page: Option<usize>,
    }

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub deliveries: Vec<DeliveryDTO>,
        pub page: usize,
        pub per_page: usize,
        pub total: usize,
    }

    impl APIResponse {
        pub fn new(deliveries: Vec<Delivery>, page: usize, per_page: usize, total: usize) -> Self {
            Self {
                deliveries: deliveries.into_iter().map(DeliveryDTO::new).collect(),
                page,
                per_page,
                total,
            }
        }
    }
}
