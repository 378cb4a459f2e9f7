//! Best-effort duel analytics.
//!
//! Recording happens on a detached task. Failures are logged and swallowed; they never
//! reach the duel result or the user.

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;
use tokio::task::JoinHandle;

use crate::{
    data::duel_log::DuelLogRepository,
    model::{
        duel::{DuelChallenge, DuelOutcome},
        duel_log::CreateDuelLogParam,
    },
};

pub struct AnalyticsService {
    db: DatabaseConnection,
}

impl AnalyticsService {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records a resolved duel without blocking the caller.
    ///
    /// # Returns
    /// - `JoinHandle<()>` - Handle to the detached task. Callers on the resolution path
    ///   drop it; tests await it.
    pub fn record_duel_outcome(
        &self,
        challenge: &DuelChallenge,
        outcome: &DuelOutcome,
    ) -> JoinHandle<()> {
        let param = CreateDuelLogParam {
            challenger_id: challenge.challenger.discord_id,
            opponent_id: challenge.opponent.discord_id,
            wager: outcome.wager_transferred,
            winner_id: outcome.winner.discord_id,
            loser_id: outcome.loser.discord_id,
            winner_name: outcome.winner.ledger_key.clone(),
            loser_name: outcome.loser.ledger_key.clone(),
        };
        let db = self.db.clone();
        let duel_id = challenge.id;

        tokio::spawn(async move {
            if let Err(e) = DuelLogRepository::new(&db).create(param).await {
                tracing::warn!("Failed to record outcome of duel {}: {}", duel_id, e);
            }
        })
    }
}
