use super::subscribers::CreateDeliveriesOnAlertCreated;
use crate::error::BeaconError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::create_alert::*;
use beacon_api_structs::dtos::visibility_from_parts;
use beacon_domain::{Alert, Severity, Visibility, ID};
use beacon_infra::BeaconContext;
use chrono::{DateTime, Utc};

pub async fn create_alert_controller(
    body: web::Json<RequestBody>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let body = body.0;
    let usecase = CreateAlertUseCase {
        title: body.title,
        message: body.message,
        severity: body.severity.unwrap_or_default(),
        visibility: visibility_from_parts(body.visibility_type, body.team_ids, body.user_ids),
        created_by: body.created_by,
        expiry_time: body.expiry_time,
        reminders_enabled: body.reminders_enabled.unwrap_or(true),
    };

    execute(usecase, &ctx)
        .await
        .map(|alert| HttpResponse::Created().json(APIResponse::new(alert, ctx.sys.now())))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct CreateAlertUseCase {
    pub title: String,
    pub message: String,
    pub severity: Severity,
    pub visibility: Visibility,
    pub created_by: ID,
    pub expiry_time: DateTime<Utc>,
    pub reminders_enabled: bool,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    EmptyTitle,
    EmptyMessage,
    ExpiryInPast,
    EmptyScope,
    CreatorNotFound(ID),
    CreatorNotAdmin(ID),
    TeamNotFound(ID),
    UserNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::EmptyTitle => Self::BadClientData("The alert title cannot be empty".into()),
            UseCaseError::EmptyMessage => {
                Self::BadClientData("The alert message cannot be empty".into())
            }
            UseCaseError::ExpiryInPast => {
                Self::BadClientData("The alert expiry time has to be in the future".into())
            }
            UseCaseError::EmptyScope => Self::BadClientData(
                "The alert visibility scope has to contain at least one team or user".into(),
            ),
            UseCaseError::CreatorNotFound(user_id) => Self::NotFound(format!(
                "The user with id: {}, was not found.",
                user_id
            )),
            UseCaseError::CreatorNotAdmin(user_id) => Self::BadClientData(format!(
                "The user with id: {}, is not an admin and cannot create alerts.",
                user_id
            )),
            UseCaseError::TeamNotFound(team_id) => Self::NotFound(format!(
                "The team with id: {}, was not found.",
                team_id
            )),
            UseCaseError::UserNotFound(user_id) => Self::NotFound(format!(
                "The user with id: {}, was not found.",
                user_id
            )),
            UseCaseError::StorageError => Self::InternalError,
        }
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for CreateAlertUseCase {
    type Response = Alert;

    type Error = UseCaseError;

    const NAME: &'static str = "CreateAlert";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let now = ctx.sys.now();

        if self.title.trim().is_empty() {
            return Err(UseCaseError::EmptyTitle);
        }
        if self.message.trim().is_empty() {
            return Err(UseCaseError::EmptyMessage);
        }
        if self.expiry_time <= now {
            return Err(UseCaseError::ExpiryInPast);
        }

        let creator = match ctx.repos.users.find(&self.created_by).await {
            Some(user) => user,
            None => return Err(UseCaseError::CreatorNotFound(self.created_by.clone())),
        };
        if !creator.is_admin {
            return Err(UseCaseError::CreatorNotAdmin(creator.id));
        }

        match &self.visibility {
            Visibility::Organization => {}
            Visibility::Teams(team_ids) => {
                if team_ids.is_empty() {
                    return Err(UseCaseError::EmptyScope);
                }
                for team_id in team_ids {
                    if ctx.repos.teams.find(team_id).await.is_none() {
                        return Err(UseCaseError::TeamNotFound(team_id.clone()));
                    }
                }
            }
            Visibility::Users(user_ids) => {
                if user_ids.is_empty() {
                    return Err(UseCaseError::EmptyScope);
                }
                for user_id in user_ids {
                    if ctx.repos.users.find(user_id).await.is_none() {
                        return Err(UseCaseError::UserNotFound(user_id.clone()));
                    }
                }
            }
        }

        let alert = Alert {
            id: Default::default(),
            title: self.title.clone(),
            message: self.message.clone(),
            severity: self.severity,
            visibility: self.visibility.clone(),
            created_by: self.created_by.clone(),
            expiry_time: self.expiry_time,
            reminders_enabled: self.reminders_enabled,
            archived_at: None,
            created_at: now,
            updated_at: now,
        };

        ctx.repos
            .alerts
            .insert(&alert)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(alert)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(CreateDeliveriesOnAlertCreated)]
    }
}
