use super::IAlertRepo;
use crate::repos::shared::inmemory_repo::*;
use beacon_domain::{Alert, ID};

pub struct InMemoryAlertRepo {
    alerts: std::sync::Mutex<Vec<Alert>>,
}

impl InMemoryAlertRepo {
    pub fn new() -> Self {
        Self {
            alerts: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IAlertRepo for InMemoryAlertRepo {
    async fn insert(&self, alert: &Alert) -> anyhow::Result<()> {
        insert(alert, &self.alerts);
        Ok(())
    }

    async fn save(&self, alert: &Alert) -> anyhow::Result<()> {
        save(alert, &self.alerts);
        Ok(())
    }

    async fn find(&self, alert_id: &ID) -> Option<Alert> {
        find(alert_id, &self.alerts)
    }

    async fn find_all(&self) -> Vec<Alert> {
        find_all(&self.alerts)
    }
}
