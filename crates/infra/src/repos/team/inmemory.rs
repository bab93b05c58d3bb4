use super::ITeamRepo;
use crate::repos::shared::inmemory_repo::*;
use beacon_domain::{Team, ID};

pub struct InMemoryTeamRepo {
    teams: std::sync::Mutex<Vec<Team>>,
}

impl InMemoryTeamRepo {
    pub fn new() -> Self {
        Self {
            teams: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl ITeamRepo for InMemoryTeamRepo {
    async fn insert(&self, team: &Team) -> anyhow::Result<()> {
        insert(team, &self.teams);
        Ok(())
    }

    async fn find(&self, team_id: &ID) -> Option<Team> {
        find(team_id, &self.teams)
    }

    async fn find_all(&self) -> Vec<Team> {
        find_all(&self.teams)
    }
}
