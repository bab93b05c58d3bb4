use beacon_sdk::{BeaconSDK, CreateAlertInput, User, VisibilityTypeDTO};
use chrono::{Duration, Utc};

/// The seeded sample admin, the way the black box harness finds it:
/// list users and pick the first admin.
pub async fn find_admin(sdk: &BeaconSDK) -> User {
    let res = sdk.admin.get_users().await.expect("To list users");
    res.users
        .into_iter()
        .find(|u| u.is_admin)
        .expect("To find an admin user")
}

pub async fn find_member(sdk: &BeaconSDK) -> User {
    let res = sdk.admin.get_users().await.expect("To list users");
    res.users
        .into_iter()
        .find(|u| !u.is_admin)
        .expect("To find a regular user")
}

pub fn org_alert_input(created_by: beacon_sdk::ID, title: &str) -> CreateAlertInput {
    CreateAlertInput {
        title: title.into(),
        message: "This alert was created by the integration test suite.".into(),
        severity: None,
        visibility_type: VisibilityTypeDTO::Organization,
        team_ids: Vec::new(),
        user_ids: Vec::new(),
        created_by,
        expiry_time: Utc::now() + Duration::hours(24),
        reminders_enabled: None,
    }
}
