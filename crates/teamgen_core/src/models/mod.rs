pub mod player;
pub mod team;

pub use player::{PlayerRecord, Roster};
pub use team::{Team, TeamAssignment};
