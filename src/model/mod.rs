//! Domain models and operation-specific parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data boundary so the
//! service and bot layers never see database-specific structures.

pub mod duel;
pub mod duel_log;
pub mod player;
