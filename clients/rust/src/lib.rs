mod admin;
mod analytics;
mod base;
mod user;

use admin::AdminClient;
pub use admin::{CreateAlertInput, UpdateAlertInput};
use analytics::AnalyticsClient;
pub use base::{APIError, APIResponse};
use base::BaseClient;
use std::sync::Arc;
use user::UserClient;
pub use user::GetNotificationHistoryInput;

pub use beacon_api_structs::dtos::*;
pub use beacon_domain::{DeliveryState, Severity, ID};

// Domain
pub use beacon_api_structs::dtos::AlertDTO as Alert;
pub use beacon_api_structs::dtos::DeliveryDTO as Delivery;
pub use beacon_api_structs::dtos::TeamDTO as Team;
pub use beacon_api_structs::dtos::UserDTO as User;

/// Beacon Server SDK
///
/// The SDK contains methods for interacting with the Beacon alerting
/// server API.
#[derive(Clone)]
pub struct BeaconSDK {
    pub admin: AdminClient,
    pub analytics: AnalyticsClient,
    pub user: UserClient,
}

impl BeaconSDK {
    pub fn new(address: String) -> Self {
        let base = Arc::new(BaseClient::new(address));
        let admin = AdminClient::new(base.clone());
        let analytics = AnalyticsClient::new(base.clone());
        let user = UserClient::new(base);

        Self {
            admin,
            analytics,
            user,
        }
    }
}
