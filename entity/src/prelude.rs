pub use super::duel_log::Entity as DuelLog;
pub use super::player::Entity as Player;
