use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::archive_alert::*;
use beacon_domain::{Alert, ID};
use beacon_infra::BeaconContext;

pub async fn archive_alert_controller(
    path_params: web::Path<PathParams>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = ArchiveAlertUseCase {
        alert_id: path_params.alert_id.clone(),
    };

    execute(usecase, &ctx)
        .await
        .map(|alert| HttpResponse::Ok().json(APIResponse::new(alert, ctx.sys.now())))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct ArchiveAlertUseCase {
    pub alert_id: ID,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    StorageError,
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(alert_id) => Self::NotFound(format!(
                "The alert with id: {}, was not found.",
                alert_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for ArchiveAlertUseCase {
    type Response = Alert;

    type Error = UseCaseError;

    const NAME: &'static str = "ArchiveAlert";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let mut alert = match ctx.repos.alerts.find(&self.alert_id).await {
            Some(alert) => alert,
            None => return Err(UseCaseError::NotFound(self.alert_id.clone())),
        };

        alert.archive(ctx.sys.now());

        ctx.repos
            .alerts
            .save(&alert)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(alert)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::alert::create_alert::CreateAlertUseCase;
    use beacon_domain::{Severity, User, Visibility};
    use beacon_infra::setup_context;
    use chrono::Duration;

    async fn setup() -> (BeaconContext, Alert) {
        let ctx = setup_context().await;
        let now = ctx.sys.now();
        let mut admin = User::new("Admin", "admin@acme.test", now);
        admin.is_admin = true;
        ctx.repos.users.insert(&admin).await.unwrap();

        let usecase = CreateAlertUseCase {
            title: "Scheduled maintenance".into(),
            message: "The platform will be down tonight.".into(),
            severity: Severity::Info,
            visibility: Visibility::Organization,
            created_by: admin.id.clone(),
            expiry_time: now + Duration::hours(24),
            reminders_enabled: true,
        };
        let alert = execute(usecase, &ctx).await.expect("To create alert");
        (ctx, alert)
    }

    #[actix_web::test]
    async fn archives_alert() {
        let (ctx, alert) = setup().await;

        let mut usecase = ArchiveAlertUseCase {
            alert_id: alert.id.clone(),
        };
        let archived = usecase.execute(&ctx).await.expect("To archive alert");

        assert!(archived.is_archived());
        assert!(!archived.is_active(ctx.sys.now()));
    }

    #[actix_web::test]
    async fn archiving_twice_keeps_the_first_timestamp() {
        let (ctx, alert) = setup().await;

        let mut usecase = ArchiveAlertUseCase {
            alert_id: alert.id.clone(),
        };
        let first = usecase.execute(&ctx).await.expect("To archive alert");

        let mut usecase = ArchiveAlertUseCase {
            alert_id: alert.id.clone(),
        };
        let second = usecase.execute(&ctx).await.expect("To archive alert");

        assert_eq!(first.archived_at, second.archived_at);
    }

    #[actix_web::test]
    async fn rejects_unknown_alert() {
        let (ctx, _) = setup().await;

        let mut usecase = ArchiveAlertUseCase {
            alert_id: ID::default(),
        };
        let res = usecase.execute(&ctx).await;

        assert!(matches!(res.unwrap_err(), UseCaseError::NotFound(_)));
    }
}
