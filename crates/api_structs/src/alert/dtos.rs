use beacon_domain::{Alert, Severity, Visibility, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VisibilityTypeDTO {
    Organization,
    Team,
    User,
}

/// Builds the domain visibility scope out of the flat wire fields.
pub fn visibility_from_parts(
    visibility_type: VisibilityTypeDTO,
    team_ids: Vec<ID>,
    user_ids: Vec<ID>,
) -> Visibility {
    match visibility_type {
        VisibilityTypeDTO::Organization => Visibility::Organization,
        VisibilityTypeDTO::Team => Visibility::Teams(team_ids),
        VisibilityTypeDTO::User => Visibility::Users(user_ids),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AlertStatusFilter {
    Active,
    Archived,
    Expired,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct AlertDTO {
    pub id: ID,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub visibility_type: VisibilityTypeDTO,
    pub team_ids: Vec<ID>,
    pub user_ids: Vec<ID>,
    pub created_by: ID,
    pub expiry_time: DateTime<Utc>,
    pub reminders_enabled: bool,
    pub is_active: bool,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl AlertDTO {
    pub fn new(alert: Alert, now: DateTime<Utc>) -> Self {
        let is_active = alert.is_active(now);
        let (visibility_type, team_ids, user_ids) = match &alert.visibility {
            Visibility::Organization => (VisibilityTypeDTO::Organization, Vec::new(), Vec::new()),
            Visibility::Teams(ids) => (VisibilityTypeDTO::Team, ids.clone(), Vec::new()),
            Visibility::Users(ids) => (VisibilityTypeDTO::User, Vec::new(), ids.clone()),
        };
        Self {
            id: alert.id,
            title: alert.title,
            message: alert.message,
            severity: alert.severity,
            visibility_type,
            team_ids,
            user_ids,
            created_by: alert.created_by,
            expiry_time: alert.expiry_time,
            reminders_enabled: alert.reminders_enabled,
            is_active,
            archived_at: alert.archived_at,
            created_at: alert.created_at,
            updated_at: alert.updated_at,
        }
    }
}
