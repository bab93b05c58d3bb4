use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::DailyTrendDTO;
use beacon_api_structs::get_daily_trends::*;
use beacon_infra::BeaconContext;
use chrono::{Duration, NaiveDate};

const DEFAULT_DAYS: i64 = 7;
const MAX_DAYS: i64 = 90;

pub async fn get_daily_trends_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetDailyTrendsUseCase {
        days: query_params.days,
    };

    execute(usecase, &ctx)
        .await
        .map(|trends| {
            let days = trends.len() as i64;
            HttpResponse::Ok().json(APIResponse { trends, days })
        })
        .map_err(BeaconError::from)
}

/// Daily buckets of alert and delivery activity for the trailing
/// `days` window, oldest bucket first.
#[derive(Debug)]
pub struct GetDailyTrendsUseCase {
    pub days: Option<i64>,
}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetDailyTrendsUseCase {
    type Response = Vec<DailyTrendDTO>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetDailyTrends";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let days = self.days.unwrap_or(DEFAULT_DAYS).clamp(1, MAX_DAYS);
        let today = ctx.sys.now().date_naive();
        let start = today - Duration::days(days - 1);

        let mut trends: Vec<DailyTrendDTO> = (0..days)
            .map(|offset| DailyTrendDTO {
                date: start + Duration::days(offset),
                alerts_created: 0,
                deliveries_created: 0,
                alerts_read: 0,
            })
            .collect();

        let bucket = |date: NaiveDate| -> Option<usize> {
            let offset = (date - start).num_days();
            if offset >= 0 && offset < days {
                Some(offset as usize)
            } else {
                None
            }
        };

        for alert in ctx.repos.alerts.find_all().await {
            if let Some(idx) = bucket(alert.created_at.date_naive()) {
                trends[idx].alerts_created += 1;
            }
        }
        for delivery in ctx.repos.deliveries.find_all().await {
            if let Some(idx) = bucket(delivery.created_at.date_naive()) {
                trends[idx].deliveries_created += 1;
            }
            if let Some(read_at) = delivery.read_at {
                if let Some(idx) = bucket(read_at.date_naive()) {
                    trends[idx].alerts_read += 1;
                }
            }
        }

        Ok(trends)
    }
}
