use crate::shared::entity::{Entity, ID};
use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct User {
    pub id: ID,
    pub name: String,
    pub email: String,
    pub is_admin: bool,
    /// The `Team` this `User` belongs to, if any. Team scoped
    /// alerts are delivered based on this membership.
    pub team_id: Option<ID>,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: &str, email: &str, created_at: DateTime<Utc>) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
            email: email.into(),
            is_admin: false,
            team_id: None,
            created_at,
        }
    }
}

impl Entity<ID> for User {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
