mod helpers;

use beacon_sdk::APIError;
use helpers::setup::spawn_app;
use helpers::utils::{find_admin, org_alert_input};

#[actix_web::test]
async fn test_manual_reminder_reaches_unacknowledged_users() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Reminder alert"))
        .await
        .expect("To create alert");

    let res = sdk
        .admin
        .send_reminder(created.alert.id.clone())
        .await
        .expect("To send reminders");
    assert!(res.success);
    // All four seeded users still have the alert unread
    assert_eq!(res.reminders_sent, 4);
}

#[actix_web::test]
async fn test_reminder_with_zero_eligible_users_is_success() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Acknowledged alert"))
        .await
        .expect("To create alert");
    let alert_id = created.alert.id.clone();

    let users = sdk.admin.get_users().await.expect("To list users");
    for user in users.users {
        sdk.user
            .mark_alert_read(alert_id.clone(), user.id)
            .await
            .expect("To mark read");
    }

    let res = sdk
        .admin
        .send_reminder(alert_id)
        .await
        .expect("To send reminders");
    assert!(res.success);
    assert_eq!(res.reminders_sent, 0);
}

#[actix_web::test]
async fn test_reminder_on_archived_alert_conflicts() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Archived alert"))
        .await
        .expect("To create alert");
    let alert_id = created.alert.id.clone();
    sdk.admin
        .archive_alert(alert_id.clone())
        .await
        .expect("To archive alert");

    let res = sdk.admin.send_reminder(alert_id).await;
    assert!(matches!(
        res.unwrap_err(),
        APIError::UnexpectedStatusCode(code) if code.as_u16() == 409
    ));
}

#[actix_web::test]
async fn test_reminder_on_unknown_alert_is_not_found() {
    let (_, sdk, _) = spawn_app().await;

    let res = sdk.admin.send_reminder(beacon_sdk::ID::default()).await;
    assert!(matches!(
        res.unwrap_err(),
        APIError::UnexpectedStatusCode(code) if code.as_u16() == 404
    ));
}

#[actix_web::test]
async fn test_snoozed_user_is_skipped_by_reminders() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Partially snoozed"))
        .await
        .expect("To create alert");
    let alert_id = created.alert.id.clone();

    sdk.user
        .snooze_alert(alert_id.clone(), admin.id.clone())
        .await
        .expect("To snooze");

    let res = sdk
        .admin
        .send_reminder(alert_id)
        .await
        .expect("To send reminders");
    // The three other seeded users are reminded, the snoozed admin is not
    assert_eq!(res.reminders_sent, 3);
}
