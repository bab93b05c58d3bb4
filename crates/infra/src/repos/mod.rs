mod alert;
mod delivery;
mod shared;
mod team;
mod user;

use alert::{IAlertRepo, InMemoryAlertRepo};
use delivery::{IDeliveryRepo, InMemoryDeliveryRepo};
use std::sync::Arc;
use team::{ITeamRepo, InMemoryTeamRepo};
use user::{IUserRepo, InMemoryUserRepo};

#[derive(Clone)]
pub struct Repos {
    pub alerts: Arc<dyn IAlertRepo>,
    pub deliveries: Arc<dyn IDeliveryRepo>,
    pub teams: Arc<dyn ITeamRepo>,
    pub users: Arc<dyn IUserRepo>,
}

impl Repos {
    pub fn create_inmemory() -> Self {
        Self {
            alerts: Arc::new(InMemoryAlertRepo::new()),
            deliveries: Arc::new(InMemoryDeliveryRepo::new()),
            teams: Arc::new(InMemoryTeamRepo::new()),
            users: Arc::new(InMemoryUserRepo::new()),
        }
    }
}
