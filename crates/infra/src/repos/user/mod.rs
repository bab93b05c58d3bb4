mod inmemory;

use beacon_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    async fn find_all(&self) -> Vec<User>;
}

#[cfg(test)]
mod tests {
    use crate::setup_context;
    use beacon_domain::User;

    #[tokio::test]
    async fn inserts_and_finds_users() {
        let ctx = setup_context().await;
        let now = ctx.sys.now();

        let user = User::new("Alice Andrews", "alice@example.com", now);
        ctx.repos.users.insert(&user).await.expect("To insert user");

        let found = ctx.repos.users.find(&user.id).await.expect("To find user");
        assert_eq!(found.email, "alice@example.com");
        assert_eq!(ctx.repos.users.find_all().await.len(), 1);
    }
}
