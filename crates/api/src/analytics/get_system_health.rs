use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::{HealthChecksDTO, SystemHealthDTO};
use beacon_api_structs::get_system_health::*;
use beacon_infra::BeaconContext;

pub async fn get_system_health_controller(
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetSystemHealthUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|system_health| HttpResponse::Ok().json(APIResponse { system_health }))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetSystemHealthUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSystemHealthUseCase {
    type Response = SystemHealthDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSystemHealth";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        // Proves the repositories answer queries
        let _ = ctx.repos.users.find_all().await;
        let repositories = "ok".to_string();

        let reminder_job = if ctx.config.reminder_interval.as_secs() > 0 {
            "ok".to_string()
        } else {
            "disabled".to_string()
        };

        let overall_status = if repositories == "ok" && reminder_job == "ok" {
            "healthy"
        } else {
            "degraded"
        };

        Ok(SystemHealthDTO {
            overall_status: overall_status.to_string(),
            checks: HealthChecksDTO {
                repositories,
                reminder_job,
            },
        })
    }
}
