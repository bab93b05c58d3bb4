mod alert;
mod delivery;
mod shared;
mod team;
mod user;

pub use alert::{Alert, Severity, Visibility};
pub use delivery::{next_utc_midnight, Delivery, DeliveryState};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use team::Team;
pub use user::User;
