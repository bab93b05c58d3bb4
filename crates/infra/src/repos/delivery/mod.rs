mod inmemory;

use beacon_domain::{Delivery, ID};
pub use inmemory::InMemoryDeliveryRepo;

#[async_trait::async_trait]
pub trait IDeliveryRepo: Send + Sync {
    async fn insert(&self, delivery: &Delivery) -> anyhow::Result<()>;
    async fn save(&self, delivery: &Delivery) -> anyhow::Result<()>;
    async fn find_by_alert_and_user(&self, alert_id: &ID, user_id: &ID) -> Option<Delivery>;
    async fn find_by_alert(&self, alert_id: &ID) -> Vec<Delivery>;
    async fn find_by_user(&self, user_id: &ID) -> Vec<Delivery>;
    async fn find_all(&self) -> Vec<Delivery>;
}
