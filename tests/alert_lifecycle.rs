mod helpers;

use beacon_domain::{Alert, Severity as DomainSeverity, Visibility};
use beacon_sdk::{AlertStatusFilter, APIError, Severity, UpdateAlertInput};
use chrono::Duration;
use helpers::setup::spawn_app;
use helpers::utils::{find_admin, find_member, org_alert_input};

#[actix_web::test]
async fn test_create_update_archive_round_trip() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Lifecycle alert"))
        .await
        .expect("To create alert");
    assert!(created.success);
    assert!(created.alert.is_active);
    let alert_id = created.alert.id.clone();

    let updated = sdk
        .admin
        .update_alert(UpdateAlertInput {
            alert_id: alert_id.clone(),
            title: None,
            message: Some("Updated test message".into()),
            severity: Some(Severity::Warning),
            expiry_time: None,
            visibility_type: None,
            team_ids: Vec::new(),
            user_ids: Vec::new(),
            reminders_enabled: None,
        })
        .await
        .expect("To update alert");
    assert_eq!(updated.alert.severity, Severity::Warning);
    assert_eq!(updated.alert.message, "Updated test message");

    let archived = sdk
        .admin
        .archive_alert(alert_id.clone())
        .await
        .expect("To archive alert");
    assert!(!archived.alert.is_active);
    assert!(archived.alert.archived_at.is_some());

    let active = sdk
        .admin
        .get_alerts(Some(AlertStatusFilter::Active))
        .await
        .expect("To list active alerts");
    assert!(active.alerts.iter().all(|a| a.id != alert_id));

    let archived_list = sdk
        .admin
        .get_alerts(Some(AlertStatusFilter::Archived))
        .await
        .expect("To list archived alerts");
    assert!(archived_list.alerts.iter().any(|a| a.id == alert_id));
}

#[actix_web::test]
async fn test_create_alert_validation() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;
    let member = find_member(&sdk).await;

    // Expiry in the past
    let mut input = org_alert_input(admin.id.clone(), "Expired on arrival");
    input.expiry_time = chrono::Utc::now() - Duration::hours(1);
    let res = sdk.admin.create_alert(input).await;
    assert!(matches!(
        res.unwrap_err(),
        APIError::UnexpectedStatusCode(code) if code.as_u16() == 400
    ));

    // Non-admin creator
    let input = org_alert_input(member.id.clone(), "From a regular user");
    let res = sdk.admin.create_alert(input).await;
    assert!(matches!(
        res.unwrap_err(),
        APIError::UnexpectedStatusCode(code) if code.as_u16() == 400
    ));
}

#[actix_web::test]
async fn test_update_archived_alert_conflicts() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let created = sdk
        .admin
        .create_alert(org_alert_input(admin.id.clone(), "Soon archived"))
        .await
        .expect("To create alert");
    let alert_id = created.alert.id.clone();
    sdk.admin
        .archive_alert(alert_id.clone())
        .await
        .expect("To archive alert");

    let res = sdk
        .admin
        .update_alert(UpdateAlertInput {
            alert_id,
            title: None,
            message: None,
            severity: Some(Severity::Critical),
            expiry_time: None,
            visibility_type: None,
            team_ids: Vec::new(),
            user_ids: Vec::new(),
            reminders_enabled: None,
        })
        .await;
    assert!(matches!(
        res.unwrap_err(),
        APIError::UnexpectedStatusCode(code) if code.as_u16() == 409
    ));
}

#[actix_web::test]
async fn test_expired_alerts_leave_active_listing() {
    let (app, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    let now = app.ctx.sys.now();
    let expired = Alert {
        id: Default::default(),
        title: "Already over".into(),
        message: "This alert expired an hour ago.".into(),
        severity: DomainSeverity::Info,
        visibility: Visibility::Organization,
        created_by: admin.id.clone(),
        expiry_time: now - Duration::hours(1),
        reminders_enabled: true,
        archived_at: None,
        created_at: now - Duration::hours(2),
        updated_at: now - Duration::hours(2),
    };
    app.ctx
        .repos
        .alerts
        .insert(&expired)
        .await
        .expect("To insert alert");

    let active = sdk
        .admin
        .get_alerts(Some(AlertStatusFilter::Active))
        .await
        .expect("To list active alerts");
    assert!(active.alerts.is_empty());

    let expired_list = sdk
        .admin
        .get_alerts(Some(AlertStatusFilter::Expired))
        .await
        .expect("To list expired alerts");
    assert_eq!(expired_list.alerts.len(), 1);
    assert!(!expired_list.alerts[0].is_active);
}
