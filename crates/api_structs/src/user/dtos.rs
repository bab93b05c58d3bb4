use beacon_domain::{Alert, Delivery, DeliveryState, Severity, User, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserDTO {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    pub team_id: Option<ID>,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            is_admin: user.is_admin,
            team_id: user.team_id,
        }
    }
}

/// An alert as seen by a single user: the alert fields that matter to
/// a recipient plus that user's delivery state.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UserAlertDTO {
    pub id: ID,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub expiry_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub state: DeliveryState,
    pub snoozed_until: Option<DateTime<Utc>>,
}

impl UserAlertDTO {
    pub fn new(alert: Alert, delivery: Delivery) -> Self {
        Self {
            id: alert.id,
            title: alert.title,
            message: alert.message,
            severity: alert.severity,
            expiry_time: alert.expiry_time,
            created_at: alert.created_at,
            state: delivery.state,
            snoozed_until: delivery.snoozed_until,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DashboardSummaryDTO {
    pub total_count: usize,
    pub unread_count: usize,
    pub read_count: usize,
    pub snoozed_count: usize,
}

impl DashboardSummaryDTO {
    pub fn new(unread_count: usize, read_count: usize, snoozed_count: usize) -> Self {
        Self {
            total_count: unread_count + read_count + snoozed_count,
            unread_count,
            read_count,
            snoozed_count,
        }
    }
}
