use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::AlertStatusFilter;
use beacon_api_structs::get_alerts::*;
use beacon_domain::Alert;
use beacon_infra::BeaconContext;

pub async fn get_alerts_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetAlertsUseCase {
        status: query_params.status,
    };

    execute(usecase, &ctx)
        .await
        .map(|alerts| HttpResponse::Ok().json(APIResponse::new(alerts, ctx.sys.now())))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetAlertsUseCase {
    pub status: Option<AlertStatusFilter>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAlertsUseCase {
    type Response = Vec<Alert>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAlerts";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let mut alerts = ctx.repos.alerts.find_all().await;

        if let Some(status) = self.status {
            alerts.retain(|alert| match status {
                AlertStatusFilter::Active => alert.is_active(now),
                AlertStatusFilter::Archived => alert.is_archived(),
                AlertStatusFilter::Expired => !alert.is_archived() && alert.is_expired(now),
            });
        }
        alerts.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(alerts)
    }
}
