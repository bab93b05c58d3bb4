use beacon_domain::{Team, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TeamDTO {
    pub id: ID,
    pub name: String,
    pub member_count: usize,
}

impl TeamDTO {
    pub fn new(team: Team, member_count: usize) -> Self {
        Self {
            id: team.id,
            name: team.name,
            member_count,
        }
    }
}
