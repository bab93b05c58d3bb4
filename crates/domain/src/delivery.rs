use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Duration, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DeliveryState {
    Unread,
    Read,
    Snoozed,
}

/// The association between an `Alert` and a `User`. Created when the
/// alert becomes visible to the user and mutated by read / unread /
/// snooze actions and by reminder dispatch.
#[derive(Debug, Clone, PartialEq)]
pub struct Delivery {
    pub id: ID,
    pub alert_id: ID,
    pub user_id: ID,
    pub state: DeliveryState,
    /// Until this instant the delivery is excluded from reminders.
    /// Only set while `state` is `Snoozed`.
    pub snoozed_until: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub reminder_count: u32,
    pub last_reminded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Delivery {
    pub fn new(alert_id: ID, user_id: ID, now: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            alert_id,
            user_id,
            state: DeliveryState::Unread,
            snoozed_until: None,
            read_at: None,
            reminder_count: 0,
            last_reminded_at: None,
            created_at: now,
            updated_at: now,
        }
    }

    pub fn mark_read(&mut self, now: DateTime<Utc>) {
        self.state = DeliveryState::Read;
        self.read_at = Some(now);
        self.snoozed_until = None;
        self.updated_at = now;
    }

    pub fn mark_unread(&mut self, now: DateTime<Utc>) {
        self.state = DeliveryState::Unread;
        self.read_at = None;
        self.snoozed_until = None;
        self.updated_at = now;
    }

    pub fn snooze(&mut self, until: DateTime<Utc>, now: DateTime<Utc>) {
        self.state = DeliveryState::Snoozed;
        self.snoozed_until = Some(until);
        self.updated_at = now;
    }

    fn snooze_elapsed(&self, now: DateTime<Utc>) -> bool {
        self.snoozed_until.map(|until| until <= now).unwrap_or(true)
    }

    /// Whether a reminder dispatch should reach this delivery
    pub fn needs_reminder(&self, now: DateTime<Utc>) -> bool {
        match self.state {
            DeliveryState::Unread => true,
            DeliveryState::Snoozed => self.snooze_elapsed(now),
            DeliveryState::Read => false,
        }
    }

    /// Records a dispatched reminder. An elapsed snooze is reset to
    /// unread so the delivery shows up in the unread partition again.
    pub fn record_reminder(&mut self, now: DateTime<Utc>) {
        if self.state == DeliveryState::Snoozed && self.snooze_elapsed(now) {
            self.state = DeliveryState::Unread;
            self.snoozed_until = None;
        }
        self.reminder_count += 1;
        self.last_reminded_at = Some(now);
        self.updated_at = now;
    }
}

impl Entity<ID> for Delivery {
    fn id(&self) -> ID {
        self.id.clone()
    }
}

/// The moment a delivery snoozed "for the day" becomes eligible for
/// reminders again.
pub fn next_utc_midnight(now: DateTime<Utc>) -> DateTime<Utc> {
    (now + Duration::days(1))
        .date_naive()
        .and_time(NaiveTime::MIN)
        .and_utc()
}
