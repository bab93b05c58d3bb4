mod inmemory;

use beacon_domain::{Alert, ID};
pub use inmemory::InMemoryAlertRepo;

#[async_trait::async_trait]
pub trait IAlertRepo: Send + Sync {
    async fn insert(&self, alert: &Alert) -> anyhow::Result<()>;
    async fn save(&self, alert: &Alert) -> anyhow::Result<()>;
    async fn find(&self, alert_id: &ID) -> Option<Alert>;
    async fn find_all(&self) -> Vec<Alert>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use beacon_domain::{Alert, Severity, Visibility};
    use chrono::Duration;

    #[tokio::test]
    async fn crud_alert() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();

        let mut alert = Alert {
            id: Default::default(),
            title: "Disk space running low".into(),
            message: "The build cluster is at 90% disk usage.".into(),
            severity: Severity::Warning,
            visibility: Visibility::Organization,
            created_by: Default::default(),
            expiry_time: now + Duration::hours(24),
            reminders_enabled: true,
            archived_at: None,
            created_at: now,
            updated_at: now,
        };
        ctx.repos
            .alerts
            .insert(&alert)
            .await
            .expect("To insert alert");

        let found = ctx.repos.alerts.find(&alert.id).await.expect("To find alert");
        assert_eq!(found.title, alert.title);

        alert.severity = Severity::Critical;
        ctx.repos.alerts.save(&alert).await.expect("To save alert");
        let found = ctx.repos.alerts.find(&alert.id).await.expect("To find alert");
        assert_eq!(found.severity, Severity::Critical);

        assert_eq!(ctx.repos.alerts.find_all().await.len(), 1);
    }
}
