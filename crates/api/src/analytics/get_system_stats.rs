use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::SystemStatsDTO;
use beacon_api_structs::get_system_stats::*;
use beacon_infra::BeaconContext;

pub async fn get_system_stats_controller(
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetSystemStatsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|stats| HttpResponse::Ok().json(APIResponse { stats }))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetSystemStatsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetSystemStatsUseCase {
    type Response = SystemStatsDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "GetSystemStats";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();
        let alerts = ctx.repos.alerts.find_all().await;
        let deliveries = ctx.repos.deliveries.find_all().await;

        Ok(SystemStatsDTO {
            environment: ctx.config.environment.as_str().to_string(),
            reminder_interval_minutes: ctx.config.reminder_interval.as_secs() / 60,
            total_alerts: alerts.len(),
            active_alerts: alerts.iter().filter(|a| a.is_active(now)).count(),
            total_users: ctx.repos.users.find_all().await.len(),
            total_teams: ctx.repos.teams.find_all().await.len(),
            total_deliveries: deliveries.len(),
            reminders_sent: deliveries.iter().map(|d| d.reminder_count as u64).sum(),
        })
    }
}
