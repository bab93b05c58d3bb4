mod inmemory;

use beacon_domain::{Team, ID};
pub use inmemory::InMemoryTeamRepo;

#[async_trait::async_trait]
pub trait ITeamRepo: Send + Sync {
    async fn insert(&self, team: &Team) -> anyhow::Result<()>;
    async fn find(&self, team_id: &ID) -> Option<Team>;
    async fn find_all(&self) -> Vec<Team>;
}
