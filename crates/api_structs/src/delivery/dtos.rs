use beacon_domain::{Delivery, DeliveryState, ID};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DeliveryDTO {
    pub id: ID,
    pub alert_id: ID,
    pub user_id: ID,
    pub state: DeliveryState,
    pub snoozed_until: Option<DateTime<Utc>>,
    pub read_at: Option<DateTime<Utc>>,
    pub reminder_count: u32,
    pub last_reminded_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl DeliveryDTO {
    pub fn new(delivery: Delivery) -> Self {
        Self {
            id: delivery.id,
            alert_id: delivery.alert_id,
            user_id: delivery.user_id,
            state: delivery.state,
            snoozed_until: delivery.snoozed_until,
            read_at: delivery.read_at,
            reminder_count: delivery.reminder_count,
            last_reminded_at: delivery.last_reminded_at,
            created_at: delivery.created_at,
            updated_at: delivery.updated_at,
        }
    }
}
