use crate::{
    data::duel_log::DuelLogRepository, error::AppError, model::duel_log::CreateDuelLogParam,
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod get_recent_for_player;
