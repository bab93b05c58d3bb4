use super::IDeliveryRepo;
use crate::repos::shared::inmemory_repo::*;
use beacon_domain::{Delivery, ID};

pub struct InMemoryDeliveryRepo {
    deliveries: std::sync::Mutex<Vec<Delivery>>,
}

impl InMemoryDeliveryRepo {
    pub fn new() -> Self {
        Self {
            deliveries: std::sync::Mutex::new(vec![]),
        }
    }
}

#[async_trait::async_trait]
impl IDeliveryRepo for InMemoryDeliveryRepo {
    async fn insert(&self, delivery: &Delivery) -> anyhow::Result<()> {
        insert(delivery, &self.deliveries);
        Ok(())
    }

    async fn save(&self, delivery: &Delivery) -> anyhow::Result<()> {
        save(delivery, &self.deliveries);
        Ok(())
    }

    async fn find_by_alert_and_user(&self, alert_id: &ID, user_id: &ID) -> Option<Delivery> {
        let mut deliveries = find_by(&self.deliveries, |d| {
            d.alert_id == *alert_id && d.user_id == *user_id
        });
        if deliveries.is_empty() {
            return None;
        }
        Some(deliveries.remove(0))
    }

    async fn find_by_alert(&self, alert_id: &ID) -> Vec<Delivery> {
        find_by(&self.deliveries, |d| d.alert_id == *alert_id)
    }

    async fn find_by_user(&self, user_id: &ID) -> Vec<Delivery> {
        find_by(&self.deliveries, |d| d.user_id == *user_id)
    }

    async fn find_all(&self) -> Vec<Delivery> {
        find_all(&self.deliveries)
    }
}
