use crate::shared::entity::{Entity, ID};
use crate::user::User;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Info,
    Warning,
    Critical,
}

impl Default for Severity {
    fn default() -> Self {
        Self::Info
    }
}

/// Which users an `Alert` is delivered to.
#[derive(Debug, Clone, PartialEq)]
pub enum Visibility {
    /// Every user in the organization
    Organization,
    /// Members of the given teams
    Teams(Vec<ID>),
    /// Exactly the given users
    Users(Vec<ID>),
}

impl Visibility {
    pub fn includes(&self, user: &User) -> bool {
        match self {
            Visibility::Organization => true,
            Visibility::Teams(team_ids) => user
                .team_id
                .as_ref()
                .map(|team_id| team_ids.contains(team_id))
                .unwrap_or(false),
            Visibility::Users(user_ids) => user_ids.contains(&user.id),
        }
    }
}

/// A broadcast notification entity. An `Alert` fans out into one
/// `Delivery` per user in its visibility scope and stays eligible for
/// reminders until it is archived, expires or every recipient has
/// acknowledged it.
#[derive(Debug, Clone)]
pub struct Alert {
    pub id: ID,
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub visibility: Visibility,
    /// The admin `User` that created this alert
    pub created_by: ID,
    /// After this instant the alert no longer shows up for users and
    /// refuses reminders. Archival is the explicit counterpart.
    pub expiry_time: DateTime<Utc>,
    /// Whether the background job re-notifies unacknowledged users
    pub reminders_enabled: bool,
    pub archived_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Alert {
    pub fn is_archived(&self) -> bool {
        self.archived_at.is_some()
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expiry_time <= now
    }

    pub fn is_active(&self, now: DateTime<Utc>) -> bool {
        !self.is_archived() && !self.is_expired(now)
    }

    /// Archiving is terminal and idempotent, repeat calls keep the
    /// original archival timestamp.
    pub fn archive(&mut self, now: DateTime<Utc>) {
        if self.archived_at.is_none() {
            self.archived_at = Some(now);
            self.updated_at = now;
        }
    }
}

impl Entity<ID> for Alert {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
