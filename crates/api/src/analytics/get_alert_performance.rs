use super::percentage;
use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::AlertPerformanceDTO;
use beacon_api_structs::get_alert_performance::*;
use beacon_domain::DeliveryState;
use beacon_infra::BeaconContext;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

pub async fn get_alert_performance_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetAlertPerformanceUseCase {
        limit: query_params.limit,
    };

    execute(usecase, &ctx)
        .await
        .map(|alerts| HttpResponse::Ok().json(APIResponse { alerts }))
        .map_err(BeaconError::from)
}

/// Per-alert delivery and acknowledgement counts, most delivered first.
#[derive(Debug)]
pub struct GetAlertPerformanceUseCase {
    pub limit: Option<usize>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetAlertPerformanceUseCase {
    type Response = Vec<AlertPerformanceDTO>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetAlertPerformance";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut performance = Vec::new();
        for alert in ctx.repos.alerts.find_all().await {
            let deliveries = ctx.repos.deliveries.find_by_alert(&alert.id).await;
            let delivered = deliveries.len();
            let read = deliveries
                .iter()
                .filter(|d| d.state == DeliveryState::Read)
                .count();
            let snoozed = deliveries
                .iter()
                .filter(|d| d.state == DeliveryState::Snoozed)
                .count();

            performance.push(AlertPerformanceDTO {
                id: alert.id,
                title: alert.title,
                severity: alert.severity,
                delivered,
                read,
                snoozed,
                read_rate: percentage(read, delivered),
            });
        }
        performance.sort_by(|a, b| b.delivered.cmp(&a.delivered).then(b.read.cmp(&a.read)));
        performance.truncate(limit);

        Ok(performance)
    }
}
