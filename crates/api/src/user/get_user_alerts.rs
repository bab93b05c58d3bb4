use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::get_user_alerts::*;
use beacon_domain::{Alert, Delivery, ID};
use beacon_infra::BeaconContext;

pub async fn get_user_alerts_controller(
    query_params: web::Query<QueryParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetUserAlertsUseCase {
        user_id: query_params.user_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alerts| HttpResponse::Ok().json(APIResponse::new(alerts)))
        .map_err(BeaconError::from)
}

/// The active alerts a user can currently see, each paired with that
/// user's delivery state.
#[derive(Debug)]
pub struct GetUserAlertsUseCase {
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
impl UseCase for GetUserAlertsUseCase {
    type Response = Vec<(Alert, Delivery)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetUserAlerts";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        if ctx.repos.users.find(&self.user_id).await.is_none() {
            return Err(UseCaseError::UserNotFound(self.user_id.clone()));
        }
        let now = ctx.sys.now();

        let mut alerts = Vec::new();
        for delivery in ctx.repos.deliveries.find_by_user(&self.user_id).await {
            let alert = match ctx.repos.alerts.find(&delivery.alert_id).await {
                Some(alert) if alert.is_active(now) => alert,
                _ => continue,
            };
            alerts.push((alert, delivery));
        }
        alerts.sort_by(|(a, _), (b, _)| b.created_at.cmp(&a.created_at));

        Ok(alerts)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::archive_alert::ArchiveAlertUseCase;
    use crate::alert::create_alert::CreateAlertUseCase;
    use beacon_domain::{Severity, Team, User, Visibility};
    use beacon_infra::setup_context;
    use chrono::Duration;

    struct TestContext {
        ctx: BeaconContext,
        admin: User,
        member: User,
        outsider: User,
    }

    async fn setup() -> TestContext {
        let ctx = setup_context().await;
        let now = ctx.sys.now();
        let mut admin = User::new("Admin", "admin@acme.test", now);
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();

        let team = Team::new("Engineering");
        ctx.repos.teams.insert(&team).await.unwrap();
        let mut member = User::new("Member", "member@acme.test", now);
        member.team_id = Some(team.id.clone());
        ctx.repos.users.insert(&member).await.unwrap();
        let outsider = User::new("Outsider", "outsider@acme.test", now);
        ctx.repos.users.insert(&outsider).await.unwrap();

        let usecase = CreateAlertUseCase {
            title: "Deploy freeze".into(),
            message: "No deploys until further notice.".into(),
            severity: Severity::Warning,
            visibility: Visibility::Teams(vec![team.id.clone()]),
            created_by: admin.id.clone(),
            expiry_time: now + Duration::hours(24),
            reminders_enabled: true,
        };
        execute(usecase, &ctx).await.expect("To create alert");

        TestContext {
            ctx,
            admin,
            member,
            outsider,
        }
    }

    #[actix_web::test]
    async fn team_alert_is_visible_to_members_only() {
        let TestContext {
            ctx,
            member,
            outsider,
            ..
        } = setup().await;

        let mut usecase = GetUserAlertsUseCase {
            user_id: member.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 1);

        let mut usecase = GetUserAlertsUseCase {
            user_id: outsider.id.clone(),
        };
        assert!(usecase.execute(&ctx).await.unwrap().is_empty());
    }

    #[actix_web::test]
    async fn archived_alerts_disappear_from_user_listings() {
        let TestContext {
            ctx, admin, member, ..
        } = setup().await;

        let usecase = CreateAlertUseCase {
            title: "All hands".into(),
            message: "Company meeting on Friday.".into(),
            severity: Severity::Info,
            visibility: Visibility::Organization,
            created_by: admin.id.clone(),
            expiry_time: ctx.sys.now() + Duration::hours(24),
            reminders_enabled: true,
        };
        let org_alert = execute(usecase, &ctx).await.expect("To create alert");

        let mut usecase = GetUserAlertsUseCase {
            user_id: member.id.clone(),
        };
        assert_eq!(usecase.execute(&ctx).await.unwrap().len(), 2);

        let mut archive = ArchiveAlertUseCase {
            alert_id: org_alert.id.clone(),
        };
        archive.execute(&ctx).await.expect("To archive alert");

        let mut usecase = GetUserAlertsUseCase {
            user_id: member.id.clone(),
        };
        let alerts = usecase.execute(&ctx).await.unwrap();
        assert_eq!(alerts.len(), 1);
        assert_ne!(alerts[0].0.id, org_alert.id);
    }

    #[actix_web::test]
    async fn rejects_unknown_user() {
        let TestContext { ctx, .. } = setup().await;

        let mut usecase = GetUserAlertsUseCase {
            user_id: ID::default(),
        };
        assert!(matches!(
            usecase.execute(&ctx).await.unwrap_err(),
            UseCaseError::UserNotFound(_)
        ));
    }
}
