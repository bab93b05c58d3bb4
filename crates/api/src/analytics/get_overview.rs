use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::{
    AlertCountsDTO, DeliveryCountsDTO, OverviewDTO, TeamCountsDTO, UserCountsDTO,
};
use beacon_api_structs::get_overview::*;
use beacon_domain::DeliveryState;
use beacon_infra::BeaconContext;

pub async fn get_overview_controller(
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetOverviewUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|overview| HttpResponse::Ok().json(APIResponse { overview }))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetOverviewUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetOverviewUseCase {
    type Response = OverviewDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "GetOverview";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();

        let alerts = ctx.repos.alerts.find_all().await;
        let archived = alerts.iter().filter(|a| a.is_archived()).count();
        let expired = alerts
            .iter()
            .filter(|a| !a.is_archived() && a.is_expired(now))
            .count();
        let active = alerts.iter().filter(|a| a.is_active(now)).count();

        let users = ctx.repos.users.find_all().await;
        let admins = users.iter().filter(|u| u.is_admin).count();

        let deliveries = ctx.repos.deliveries.find_all().await;
        let unread = deliveries
            .iter()
            .filter(|d| d.state == DeliveryState::Unread)
            .count();
        let read = deliveries
            .iter()
            .filter(|d| d.state == DeliveryState::Read)
            .count();
        let snoozed = deliveries
            .iter()
            .filter(|d| d.state == DeliveryState::Snoozed)
            .count();

        Ok(OverviewDTO {
            alerts: AlertCountsDTO {
                total: alerts.len(),
                active,
                expired,
                archived,
            },
            users: UserCountsDTO {
                total_users: users.len(),
                total_admins: admins,
            },
            teams: TeamCountsDTO {
                total_teams: ctx.repos.teams.find_all().await.len(),
            },
            deliveries: DeliveryCountsDTO {
                total: deliveries.len(),
                unread,
                read,
                snoozed,
            },
        })
    }
}
