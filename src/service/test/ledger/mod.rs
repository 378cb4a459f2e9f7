use crate::{
    data::player::PlayerRepository,
    error::{ledger::LedgerError, AppError},
    service::ledger::{LedgerService, TransferReceipt},
};
use test_utils::{builder::TestBuilder, factory};

mod apply_delta;
mod transfer;
