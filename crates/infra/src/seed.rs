use crate::BeaconContext;
use beacon_domain::{Team, User};
use tracing::info;

/// Populates the repositories with the sample organization that the
/// development bootstrap advertises: one admin (admin@example.com),
/// two teams and a handful of members. No-op when users already exist.
pub async fn seed_sample_data(ctx: &BeaconContext) -> anyhow::Result<()> {
    if !ctx.repos.users.find_all().await.is_empty() {
        return Ok(());
    }
    let now = ctx.sys.now();

    let engineering = Team::new("Engineering");
    let operations = Team::new("Operations");
    ctx.repos.teams.insert(&engineering).await?;
    ctx.repos.teams.insert(&operations).await?;

    let mut admin = User::new("Sample Admin", "admin@example.com", now);
    admin.is_admin = true;
    ctx.repos.users.insert(&admin).await?;

    let mut alice = User::new("Alice Andrews", "alice@example.com", now);
    alice.team_id = Some(engineering.id.clone());
    ctx.repos.users.insert(&alice).await?;

    let mut bob = User::new("Bob Berg", "bob@example.com", now);
    bob.team_id = Some(engineering.id.clone());
    ctx.repos.users.insert(&bob).await?;

    let mut carol = User::new("Carol Chen", "carol@example.com", now);
    carol.team_id = Some(operations.id.clone());
    ctx.repos.users.insert(&carol).await?;

    info!("Seeded sample data: 4 users across 2 teams");
    Ok(())
}
