use crate::{
    error::{ledger::LedgerError, AppError},
    model::player::{AdjustPointsParam, RegisterPlayerParam},
    service::player::{PlayerService, MAX_ADJUSTMENT},
};
use test_utils::{builder::TestBuilder, factory};

mod adjust_points;
mod register;

fn register_param(discord_id: u64, ign: &str) -> RegisterPlayerParam {
    RegisterPlayerParam {
        discord_id,
        ign: ign.to_string(),
        display_name: format!("Member {}", discord_id),
    }
}
