use super::subscribers::SyncDeliveriesOnAlertUpdated;
use crate::error::BeaconError;
use crate::shared::usecase::{execute, Subscriber, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::dtos::visibility_from_parts;
use beacon_api_structs::update_alert::*;
use beacon_domain::{Alert, Severity, Visibility, ID};
use beacon_infra::BeaconContext;
use chrono::{DateTime, Utc};

pub async fn update_alert_controller(
    path_params: web::Path<PathParams>,
    body: web::Json<RequestBody>,
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let RequestBody {
        title,
        message,
        severity,
        expiry_time,
        visibility_type,
        team_ids,
        user_ids,
        reminders_enabled,
    } = body.0;
    let usecase = UpdateAlertUseCase {
        alert_id: path_params.alert_id.clone(),
        title,
        message,
        severity,
        expiry_time,
        visibility: visibility_type
            .map(|visibility_type| visibility_from_parts(visibility_type, team_ids, user_ids)),
        reminders_enabled,
    };

    execute(usecase, &ctx)
        .await
        .map(|alert| HttpResponse::Ok().json(APIResponse::new(alert, ctx.sys.now())))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct UpdateAlertUseCase {
    pub alert_id: ID,
    pub title: Option<String>,
    pub message: Option<String>,
    pub severity: Option<Severity>,
    pub expiry_time: Option<DateTime<Utc>>,
    pub visibility: Option<Visibility>,
    pub reminders_enabled: Option<bool>,
}

#[derive(Debug, PartialEq)]
pub enum UseCaseError {
    NotFound(ID),
    AlertArchived(ID),
    EmptyTitle,
    EmptyMessage,
    EmptyScope,
    TeamNotFound(ID),
    UserNotFound(ID),
    StorageError,
}

impl From<UseCaseError> for BeaconError {
    fn from(e: UseCaseError) -> Self {
        match e {
            UseCaseError::NotFound(alert_id) => Self::NotFound(format!(
                "The alert with id: {}, was not found.",
                alert_id
            )),
            UseCaseError::AlertArchived(alert_id) => Self::Conflict(format!(
                "The alert with id: {}, is archived and can no longer be updated.",
                alert_id
            )),
            UseCaseError::EmptyTitle => Self::BadClientData("The alert title cannot be empty".into()),
            UseCaseError::EmptyMessage => {
                Self::BadClientData("The alert message cannot be empty".into())
            }
            UseCaseError::EmptyScope => Self::BadClientData(
                "The alert visibility scope has to contain at least one team or user".into(),
            ),
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
impl UseCase for UpdateAlertUseCase {
    type Response = Alert;

    type Error = UseCaseError;

    const NAME: &'static str = "UpdateAlert";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let mut alert = match ctx.repos.alerts.find(&self.alert_id).await {
            Some(alert) => alert,
            None => return Err(UseCaseError::NotFound(self.alert_id.clone())),
        };
        if alert.is_archived() {
            return Err(UseCaseError::AlertArchived(alert.id));
        }

        if let Some(title) = &self.title {
            if title.trim().is_empty() {
                return Err(UseCaseError::EmptyTitle);
            }
            alert.title = title.clone();
        }
        if let Some(message) = &self.message {
            if message.trim().is_empty() {
                return Err(UseCaseError::EmptyMessage);
            }
            alert.message = message.clone();
        }
        if let Some(severity) = self.severity {
            alert.severity = severity;
        }
        if let Some(expiry_time) = self.expiry_time {
            alert.expiry_time = expiry_time;
        }
        if let Some(reminders_enabled) = self.reminders_enabled {
            alert.reminders_enabled = reminders_enabled;
        }
        if let Some(visibility) = &self.visibility {
            match visibility {
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
            alert.visibility = visibility.clone();
        }
        alert.updated_at = ctx.sys.now();

        ctx.repos
            .alerts
            .save(&alert)
            .await
            .map_err(|_| UseCaseError::StorageError)?;

        Ok(alert)
    }

    fn subscribers() -> Vec<Box<dyn Subscriber<Self>>> {
        vec![Box::new(SyncDeliveriesOnAlertUpdated)]
    }
}
