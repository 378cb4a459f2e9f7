use crate::{
    data::player::PlayerRepository,
    error::AppError,
    model::player::RegisterPlayerParam,
};
use test_utils::{builder::TestBuilder, factory};

mod apply_delta;
mod create;
mod find;
mod get_leaderboard;
mod update_display_name;
