use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::mark_alert_read::*;
use beacon_domain::{Delivery, ID};
use beacon_infra::BeaconContext;

pub async fn mark_alert_read_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = MarkAlertReadUseCase {
        alert_id: path_params.alert_id.clone(),
        user_id: body.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|delivery| HttpResponse::Ok().json(APIResponse::new(delivery)))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct MarkAlertReadUseCase {
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
impl UseCase for MarkAlertReadUseCase {
    type Response = Delivery;

    type Error = UseCaseError;

    const NAME: &'static str = "MarkAlertRead";

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

        delivery.mark_read(ctx.sys.now());
        ctx.repos
            .deliveries
            .save(&delivery)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(delivery)
    }
}
