//! Database repository layer.
//!
//! This module contains repository structs that handle database operations for each
//! domain. Repositories use SeaORM entity models internally and return domain models
//! to maintain separation between the data layer and business logic layer.

pub mod duel_log;
pub mod player;

#[cfg(test)]
mod test;
