mod helpers;

use helpers::setup::spawn_app;
use helpers::utils::{find_admin, org_alert_input};

#[actix_web::test]
async fn test_system_health_ok() {
    let (_, sdk, _) = spawn_app().await;

    let res = sdk
        .analytics
        .get_system_health()
        .await
        .expect("To check health");
    assert_eq!(res.system_health.overall_status, "healthy");
}

#[actix_web::test]
async fn test_list_seeded_users_and_teams() {
    let (_, sdk, _) = spawn_app().await;

    let users = sdk.admin.get_users().await.expect("To list users");
    let admins = users.users.iter().filter(|u| u.is_admin).count();
    assert_eq!(users.users.len(), 4);
    assert_eq!(admins, 1);

    let teams = sdk.admin.get_teams().await.expect("To list teams");
    assert_eq!(teams.teams.len(), 2);
    let engineering = teams
        .teams
        .iter()
        .find(|t| t.name == "Engineering")
        .expect("To find the Engineering team");
    assert_eq!(engineering.member_count, 2);
}

#[actix_web::test]
async fn test_analytics_overview_counts_seeded_entities() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    sdk.admin
        .create_alert(org_alert_input(admin.id.clone(), "Overview test alert"))
        .await
        .expect("To create alert");

    let res = sdk.analytics.get_overview().await.expect("To get overview");
    assert_eq!(res.overview.users.total_users, 4);
    assert_eq!(res.overview.users.total_admins, 1);
    assert_eq!(res.overview.teams.total_teams, 2);
    assert_eq!(res.overview.alerts.total, 1);
    assert_eq!(res.overview.alerts.active, 1);
    // One delivery per seeded user
    assert_eq!(res.overview.deliveries.total, 4);
    assert_eq!(res.overview.deliveries.unread, 4);
}

#[actix_web::test]
async fn test_alert_performance_and_engagement_respect_limits() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    for i in 0..3 {
        sdk.admin
            .create_alert(org_alert_input(
                admin.id.clone(),
                &format!("Performance alert {}", i),
            ))
            .await
            .expect("To create alert");
    }

    let res = sdk
        .analytics
        .get_alert_performance(Some(2))
        .await
        .expect("To get performance");
    assert_eq!(res.alerts.len(), 2);
    assert_eq!(res.alerts[0].delivered, 4);

    let res = sdk
        .analytics
        .get_user_engagement(Some(10))
        .await
        .expect("To get engagement");
    assert_eq!(res.users.len(), 4);
    assert_eq!(res.users[0].delivered, 3);
}

#[actix_web::test]
async fn test_daily_trends_window() {
    let (_, sdk, _) = spawn_app().await;
    let admin = find_admin(&sdk).await;

    sdk.admin
        .create_alert(org_alert_input(admin.id.clone(), "Trend alert"))
        .await
        .expect("To create alert");

    let res = sdk
        .analytics
        .get_daily_trends(Some(7))
        .await
        .expect("To get trends");
    assert_eq!(res.days, 7);
    assert_eq!(res.trends.len(), 7);
    let today = res.trends.last().expect("To have a bucket for today");
    assert_eq!(today.alerts_created, 1);
    assert_eq!(today.deliveries_created, 4);
}

#[actix_web::test]
async fn test_system_stats() {
    let (_, sdk, _) = spawn_app().await;

    let res = sdk
        .admin
        .get_system_stats()
        .await
        .expect("To get system stats");
    assert_eq!(res.stats.total_users, 4);
    assert_eq!(res.stats.total_teams, 2);
    assert_eq!(res.stats.total_alerts, 0);
    assert_eq!(res.stats.reminder_interval_minutes, 120);
}
