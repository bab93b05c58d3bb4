use super::percentage;
use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::UserEngagementDTO;
use beacon_api_structs::get_user_engagement::*;
use beacon_domain::DeliveryState;
use beacon_infra::BeaconContext;

const DEFAULT_LIMIT: usize = 10;
const MAX_LIMIT: usize = 50;

pub async fn get_user_engagement_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetUserEngagementUseCase {
        limit: query_params.limit,
    };

    execute(usecase, &ctx)
        .await
        .map(|users| HttpResponse::Ok().json(APIResponse { users }))
        .map_err(BeaconError::from)
}

/// Per-user delivery and acknowledgement counts, most delivered first.
#[derive(Debug)]
pub struct GetUserEngagementUseCase {
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
impl UseCase for GetUserEngagementUseCase {
    type Response = Vec<UserEngagementDTO>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserEngagement";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let limit = self.limit.unwrap_or(DEFAULT_LIMIT).clamp(1, MAX_LIMIT);

        let mut engagement = Vec::new();
        for user in ctx.repos.users.find_all().await {
            let deliveries = ctx.repos.deliveries.find_by_user(&user.id).await;
            let delivered = deliveries.len();
            let read = deliveries
                .iter()
                .filter(|d| d.state == DeliveryState::Read)
                .count();

            engagement.push(UserEngagementDTO {
                id: user.id,
                name: user.name,
                delivered,
                read,
                read_rate: percentage(read, delivered),
            });
        }
        engagement.sort_by(|a, b| b.delivered.cmp(&a.delivered).then(b.read.cmp(&a.read)));
        engagement.truncate(limit);

        Ok(engagement)
    }
}
