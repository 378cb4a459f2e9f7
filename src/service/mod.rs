//! Service layer: business logic between the bot and the repositories.
//!
//! - `duel` - duel coordinator and the registry of live challenges
//! - `ledger` - point balances and transfers
//! - `player` - registration, balances, leaderboard, admin adjustments
//! - `analytics` - best-effort duel outcome recording

pub mod analytics;
pub mod duel;
pub mod ledger;
pub mod player;

#[cfg(test)]
mod test;
