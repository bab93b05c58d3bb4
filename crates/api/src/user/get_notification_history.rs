use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::get_notification_history::*;
use beacon_domain::{Delivery, ID};
use beacon_infra::BeaconContext;

const DEFAULT_PER_PAGE: usize = 20;
const MAX_PER_PAGE: usize = 100;

pub async fn get_notification_history_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetNotificationHistoryUseCase {
        user_id: query_params.user_id.clone(),
        page: query_params.page,
        per_page: query_params.per_page,
    };

    execute(usecase, &ctx)
        .await
        .map(|history| {
            HttpResponse::Ok().json(APIResponse::new(
                history.deliveries,
                history.page,
                history.per_page,
                history.total,
            ))
        })
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetNotificationHistoryUseCase {
    pub user_id: ID,
    pub page: Option<usize>,
    pub per_page: Option<usize>,
}

#[derive(Debug)]
pub struct NotificationHistory {
    pub deliveries: Vec<Delivery>,
    pub page: usize,
    pub per_page: usize,
    pub total: usize,
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
impl UseCase for GetNotificationHistoryUseCase {
    type Response = NotificationHistory;

    type Error = UseCaseError;

    const NAME: &'static str = "GetNotificationHistory";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseError::UserNotFound(self.user_id.clone()));
        }

        let page = self.page.unwrap_or(1).max(1);
        let per_page = self
            .per_page
            .unwrap_or(DEFAULT_PER_PAGE)
            .clamp(1, MAX_PER_PAGE);

        let mut deliveries = ctx.repos.deliveries.find_by_user(&self.user_id).await;
        deliveries.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        let total = deliveries.len();

        let deliveries = deliveries
            .into_iter()
            .skip((page - 1) * per_page)
            .take(per_page)
            .collect();

        Ok(NotificationHistory {
            deliveries,
            page,
            per_page,
            total,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::create_alert::CreateAlertUseCase;
    use beacon_domain::{Severity, User, Visibility};
    use beacon_infra::setup_context;
    use chrono::Duration;

    #[actix_web::test]
    async fn paginates_newest_first() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();
        let mut admin = User::new("Admin", "admin@acme.test", now);
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();

        for i in 0..5 {
            let usecase = CreateAlertUseCase {
                title: format!("Alert number {}", i),
                message: "A test notification body.".into(),
                severity: Severity::Info,
                visibility: Visibility::Organization,
                created_by: admin.id.clone(),
                expiry_time: now + Duration::hours(24),
                reminders_enabled: true,
            };
            execute(usecase, &ctx).await.expect("To create alert");
        }

        let mut usecase = GetNotificationHistoryUseCase {
            user_id: admin.id.clone(),
            page: Some(1),
            per_page: Some(2),
        };
        let history = usecase.execute(&ctx).await.expect("To fetch history");
        assert_eq!(history.total, 5);
        assert_eq!(history.deliveries.len(), 2);

        let mut usecase = GetNotificationHistoryUseCase {
            user_id: admin.id.clone(),
            page: Some(3),
            per_page: Some(2),
        };
        let history = usecase.execute(&ctx).await.expect("To fetch history");
        assert_eq!(history.deliveries.len(), 1);

        // Pages past the end are empty, not an error
        let mut usecase = GetNotificationHistoryUseCase {
            user_id: admin.id.clone(),
            page: Some(9),
            per_page: Some(2),
        };
        let history = usecase.execute(&ctx).await.expect("To fetch history");
        assert!(history.deliveries.is_empty());
    }
}
