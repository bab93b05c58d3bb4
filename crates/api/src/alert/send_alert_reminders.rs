use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::send_alert_reminders::*;
use beacon_domain::ID;
use beacon_infra::BeaconContext;
use tracing::info;

pub async fn send_alert_reminders_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = SendAlertRemindersUseCase {
        alert_id: path_params.alert_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|reminders_sent| HttpResponse::Ok().json(APIResponse::new(reminders_sent)))
        .map_err(BeaconError::from)
}

/// Re-notifies every user that has not acknowledged the alert yet.
/// Zero eligible users is a valid outcome, not an error.
#[derive(Debug)]
pub struct SendAlertRemindersUseCase {
    pub alert_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlertNotActive(ID),
    StorageError,
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(alert_id) => Self::NotFound(format!(
                "The alert with id: {}, was not found.",
                alert_id
            )),
            UseCaseError::AlertNotActive(alert_id) => Self::Conflict(format!(
                "The alert with id: {}, is no longer active and cannot send reminders.",
                alert_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SendAlertRemindersUseCase {
    type Response = usize;

    type Error = UseCaseError;

    const NAME: &'static str = "SendAlertReminders";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let alert = match ctx.repos.alerts.find(&self.alert_id).await {
            Some(alert) => alert,
            None => return Err(UseCaseError::NotFound(self.alert_id.clone())),
        };
        if !alert.is_active(now) {
            return Err(UseCaseError::AlertNotActive(alert.id));
        }

        let mut reminders_sent = 0;
        for mut delivery in ctx.repos.deliveries.find_by_alert(&alert.id).await {
            if !delivery.needs_reminder(now) {
                continue;
            }
            delivery.record_reminder(now);
            ctx.repos
                .deliveries
                .save(&delivery)
                .await
                .map_err(|_| UseCaseError::StorageError)?;
            info!(
                "Reminder for alert {} delivered to user {}",
                alert.id, delivery.user_id
            );
            reminders_sent += 1;
        }

        Ok(reminders_sent)
    }
}
