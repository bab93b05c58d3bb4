use super::{
    create_alert::CreateAlertUseCase, sync_alert_deliveries::SyncAlertDeliveriesUseCase,
    update_alert::UpdateAlertUseCase,
};
use crate::shared::usecase::{execute, Subscriber};
use beacon_domain::Alert;

pub struct CreateDeliveriesOnAlertCreated;

#[async_trait::async_trait(?Send)]
impl Subscriber<CreateAlertUseCase> for CreateDeliveriesOnAlertCreated {
    async fn notify(&self, alert: &Alert, ctx: &beacon_infra::BeaconContext) {
        let sync_deliveries = SyncAlertDeliveriesUseCase {
            alert: alert.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_deliveries, ctx).await;
    }
}

pub struct SyncDeliveriesOnAlertUpdated;

#[async_trait::async_trait(?Send)]
impl Subscriber<UpdateAlertUseCase> for SyncDeliveriesOnAlertUpdated {
    async fn notify(&self, alert: &Alert, ctx: &beacon_infra::BeaconContext) {
        let sync_deliveries = SyncAlertDeliveriesUseCase {
            alert: alert.clone(),
        };

        // Sideeffect, ignore result
        let _ = execute(sync_deliveries, ctx).await;
    }
}
