use super::send_alert_reminders::SendAlertRemindersUseCase;
use crate::shared::usecase::{execute, UseCase};
use beacon_infra::BeaconContext;

/// Periodic counterpart of the manual reminder trigger: walks every
/// active alert that has reminders enabled and dispatches to the
/// deliveries that still need one.
#[derive(Debug)]
pub struct SendDueRemindersUseCase;

#[derive(Debug)]
pub enum UseCaseError {}

#[async_trait::async_trait(?Send)]
impl UseCase for SendDueRemindersUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "SendDueReminders";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let mut reminders_sent = 0;

        for alert in ctx.repos.alerts.find_all().await {
            if !alert.is_active(now) || !alert.reminders_enabled {
                continue;
            }
            let usecase = SendAlertRemindersUseCase {
                alert_id: alert.id.clone(),
            };
            if let Ok(sent) = execute(usecase, ctx).await {
                reminders_sent += sent;
            }
        }

        Ok(reminders_sent)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::create_alert::CreateAlertUseCase;
    use crate::alert::update_alert::UpdateAlertUseCase;
    use beacon_domain::{Severity, User, Visibility};
    use beacon_infra::setup_context;
    use chrono::Duration;

    #[actix_web::test]
    async fn skips_alerts_with_reminders_disabled() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();
        let mut admin = User::new("Admin", "admin@acme.test", now);
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();

        let create = |title: &str| CreateAlertUseCase {
            title: title.into(),
            message: "A test notification body.".into(),
            severity: Severity::Info,
            visibility: Visibility::Organization,
            created_by: admin.id.clone(),
            expiry_time: now + Duration::hours(24),
            reminders_enabled: true,
        };
        let noisy = execute(create("Noisy alert"), &ctx).await.unwrap();
        let silent = execute(create("Silent alert"), &ctx).await.unwrap();

        let mute = UpdateAlertUseCase {
            alert_id: silent.id.clone(),
            title: None,
            message: None,
            severity: None,
            expiry_time: None,
            visibility: None,
            reminders_enabled: Some(false),
        };
        execute(mute, &ctx).await.expect("To update alert");

        let mut usecase = SendDueRemindersUseCase;
        let sent = usecase.execute(&ctx).await.unwrap();

        // Only the noisy alert reminds its single recipient
        assert_eq!(sent, 1);
        let noisy_delivery = ctx
            .repos
            .deliveries
            .find_by_alert_and_user(&noisy.id, &admin.id)
            .await
            .unwrap();
        assert_eq!(noisy_delivery.reminder_count, 1);
        let silent_delivery = ctx
            .repos
            .deliveries
            .find_by_alert_and_user(&silent.id, &admin.id)
            .await
            .unwrap();
        assert_eq!(silent_delivery.reminder_count, 0);
    }
}
