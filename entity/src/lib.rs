//! SeaORM entity definitions for the clan bot's persisted tables.

pub mod duel_log;
pub mod player;
pub mod prelude;
