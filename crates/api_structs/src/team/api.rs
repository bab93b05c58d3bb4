use beacon_domain::Team;
use serde::{Deserialize, Serialize};

use crate::dtos::TeamDTO;

pub mod get_teams {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct APIResponse {
        pub teams: Vec<TeamDTO>,
    }

    impl APIResponse {
        pub fn new(teams: Vec<(Team, usize)>) -> Self {
            Self {
                teams: teams
                    .into_iter()
                    .map(|(team, member_count)| TeamDTO::new(team, member_count))
                    .collect(),
            }
        }
    }
}
