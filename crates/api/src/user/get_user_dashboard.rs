use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::DashboardSummaryDTO;
use beacon_api_structs::get_user_dashboard::*;
use beacon_domain::{DeliveryState, ID};
use beacon_infra::BeaconContext;

pub async fn get_user_dashboard_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetUserDashboardUseCase {
        user_id: query_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|summary| HttpResponse::Ok().json(APIResponse { summary }))
        .map_err(BeaconError::from)
}

/// Partitions a user's deliveries into unread / read / snoozed. The
/// three counts always add up to the user's total delivery count.
#[derive(Debug)]
pub struct GetUserDashboardUseCase {
    pub user_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    UserNotFound(ID),
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::UserNotFound(user_id) => Self::NotFound(format!(
                "The user with id: {}, was not found.",
                user_id
            )),
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetUserDashboardUseCase {
    type Response = DashboardSummaryDTO;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserDashboard";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseError::UserNotFound(self.user_id.clone()));
        }

        let deliveries = ctx.repos.deliveries.find_by_user(&self.user_id).await;
        let mut unread = 0;
        let mut read = 0;
        let mut snoozed = 0;
        for delivery in &deliveries {
            match delivery.state {
                DeliveryState::Unread => unread += 1,
                DeliveryState::Read => read += 1,
                DeliveryState::Snoozed => snoozed += 1,
            }
        }

        Ok(DashboardSummaryDTO::new(unread, read, snoozed))
    }
}
