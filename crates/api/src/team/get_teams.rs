use crate::error::BeaconError;
use crate::shared::usecase::{execute, UseCase};
use actix_web::{web, HttpResponse};
use beacon_api_structs::get_teams::*;
use beacon_domain::Team;
use beacon_infra::BeaconContext;

pub async fn get_teams_controller(
    ctx: web::Data<BeaconContext>,
) -> Result<HttpResponse, BeaconError> {
    let usecase = GetTeamsUseCase {};

    execute(usecase, &ctx)
        .await
        .map(|teams| HttpResponse::Ok().json(APIResponse::new(teams)))
        .map_err(BeaconError::from)
}

#[derive(Debug)]
pub struct GetTeamsUseCase {}

#[derive(Debug)]
pub enum UseCaseError {}

impl From<UseCaseError> for BeaconError {
    fn from(_: UseCaseError) -> Self {
        Self::InternalError
    }
}

#[async_trait::async_trait(?Send)]
impl UseCase for GetTeamsUseCase {
    type Response = Vec<(Team, usize)>;

    type Error = UseCaseError;

    const NAME: &'static str = "GetTeams";

    async fn execute(&mut self, ctx: &BeaconContext) -> Result<Self::Response, Self::Error> {
        let users = ctx.repos.users.find_all().await;
        let mut teams = ctx.repos.teams.find_all().await;
        teams.sort_by(|a, b| a.name.cmp(&b.name));

        Ok(teams
            .into_iter()
            .map(|team| {
                let member_count = users
                    .iter()
                    .filter(|user| user.team_id.as_ref() == Some(&team.id))
                    .count();
                (team, member_count)
            })
            .collect())
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use beacon_domain::User;
    use beacon_infra::setup_context;

    #[actix_web::test]
    async fn counts_members_per_team() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();

        let engineering = Team::new("Engineering");
        let operations = Team::new("Operations");
        ctx.repos.teams.insert(&engineering).await.unwrap();
        ctx.repos.teams.insert(&operations).await.unwrap();

        let mut alice = User::new("Alice", "alice@acme.test", now);
        alice.team_id = Some(engineering.id.clone());
        ctx.repos.users.insert(&alice).await.unwrap();
        let mut bob = User::new("Bob", "bob@acme.test", now);
        bob.team_id = Some(engineering.id.clone());
        ctx.repos.users.insert(&bob).await.unwrap();
        let loner = User::new("Loner", "loner@acme.test", now);
        ctx.repos.users.insert(&loner).await.unwrap();

        let mut usecase = GetTeamsUseCase {};
        let teams = usecase.execute(&ctx).await.unwrap();

        assert_eq!(teams.len(), 2);
        assert_eq!(teams[0].0.name, "Engineering");
        assert_eq!(teams[0].1, 2);
        assert_eq!(teams[1].0.name, "Operations");
        assert_eq!(teams[1].1, 0);
    }
}
