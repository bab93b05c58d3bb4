use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::snooze_alert::*;
use beacon_domain::{next_utc_midnight, Delivery, ID};
use beacon_infra::BeaconContext;

pub async fn snooze_alert_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = SnoozeAlertUseCase {
        alert_id: path_params.alert_id.clone(),
        user_id: body.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|delivery| HttpResponse::Ok().json(APIResponse::new(delivery)))
        .map_err(BeaconError::from)
}

/// Snoozes the delivery for the rest of the day. Reminders resume
/// after the next UTC midnight.
#[derive(Debug)]
pub struct SnoozeAlertUseCase {
    pub alert_id: ID,
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    DeliveryNotFound(ID, ID),
    StorageError,
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::DeliveryNotFound(alert_id, user_id) => Self::NotFound(format!(
                "The alert with id: {}, was not delivered to the user with id: {}.",
                alert_id, user_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for SnoozeAlertUseCase {
    type Response = Delivery;

    type Error = UseCaseError;

    const NAME: &'static str = "SnoozeAlert";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let mut delivery = match ctx
            .repos
            .deliveries
            .find_by_alert_and_user(&self.alert_id, &self.user_id)
            .await
        {
            Some(delivery) => delivery,
            None => {
                return Err(UseCaseError::DeliveryNotFound(
                    self.alert_id.clone(),
                    self.user_id.clone(),
                ))
            }
        };

        let now = ctx.sys.now();
        delivery.snooze(next_utc_midnight(now), now);
        ctx.repos
            .deliveries
            .save(&delivery)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(delivery)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::create_alert::CreateAlertUseCase;
    use beacon_domain::{DeliveryState, Severity, User, Visibility};
    use beacon_infra::setup_context;
    use chrono::Duration;

    #[actix_web::test]
    async fn snoozes_until_the_next_day() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();
        let mut admin = User::new("Admin", "admin@acme.test", now);
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();

        let usecase = CreateAlertUseCase {
            title: "Scheduled maintenance".into(),
            message: "The platform will be down tonight.".into(),
            severity: Severity::Info,
            visibility: Visibility::Organization,
            created_by: admin.id.clone(),
            expiry_time: now + Duration::hours(48),
            reminders_enabled: true,
        };
        let alert = execute(usecase, &ctx).await.expect("To create alert");

        let mut usecase = SnoozeAlertUseCase {
            alert_id: alert.id.clone(),
            user_id: admin.id.clone(),
        };
        let delivery = usecase.execute(&ctx).await.expect("To snooze");

        assert_eq!(delivery.state, DeliveryState::Snoozed);
        let until = delivery.snoozed_until.expect("To have a snooze horizon");
        assert!(until > ctx.sys.now());
        assert!(!delivery.needs_reminder(ctx.sys.now()));
    }
}
