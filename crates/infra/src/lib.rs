mod config;
mod repos;
mod seed;
mod system;

pub use config::{Config, Environment};
pub use repos::Repos;
pub use seed::seed_sample_data;
use std::sync::Arc;
pub use system::{FixedTimeSys, ISys, RealSys};

#[derive(Clone)]
pub struct BeaconContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl BeaconContext {
    fn create() -> Self {
        Self {
            repos: Repos::create_inmemory(),
            config: Config::new(),
            sys: Arc::new(RealSys {}),
        }
    }
}

/// Will setup the infrastructure context given the environment
pub async fn setup_context() -> BeaconContext {
    BeaconContext::create()
}
