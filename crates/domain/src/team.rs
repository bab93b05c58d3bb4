use crate::shared::entity::{Entity, ID};

#[derive(Debug, Clone)]
pub struct Team {
    pub id: ID,
    pub name: String,
}

impl Team {
    pub fn new(name: &str) -> Self {
        Self {
            id: Default::default(),
            name: name.into(),
        }
    }
}

impl Entity<ID> for Team {
    fn id(&self) -> ID {
        self.id.clone()
    }
}
