use crate::shared::usecase::UseCase;
use beacon_domain::{Alert, Delivery};
use beacon_infra::BeaconContext;

/// Fans an alert out into one `Delivery` per user in its visibility
/// scope. Deliveries that already exist are left untouched, so the
/// use case is safe to run again after a visibility change.
#[derive(Debug)]
pub struct SyncAlertDeliveriesUseCase {
    pub alert: Alert,
}

#[derive(Debug)]
pub enum UseCaseError {
    StorageError,
}

#[async_trait::async_trait(?Send)]
impl UseCase for SyncAlertDeliveriesUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "SyncAlertDeliveries";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let mut created = 0;

        for user in ctx.repos.users.find_all().await {
            if !self.alert.visibility.includes(&user) {
                continue;
            }
            let existing = ctx
                .repos
                .deliveries
                .find_by_alert_and_user(&self.alert.id, &user.id)
                .await;
            if existing.is_some() {
                continue;
            }

            let delivery = Delivery::new(self.alert.id.clone(), user.id.clone(), now);
            ctx.repos
                .deliveries
                .insert(&delivery)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            created += 1;
        }

        Ok(created)
    }
}
