//! Duel coordinator.
//!
//! `DuelService` validates a proposal against fresh ledger balances and drives one
//! `DuelChallenge` through its response. Live challenges and their expiry timers are
//! owned by [`registry::DuelRegistry`]; this service only ever sees a challenge that the
//! registry has already handed out, so every transition here runs at most once.

pub mod registry;

#[cfg(test)]
mod test;

use chrono::Utc;
use dioxus_logger::tracing;
use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::{
    data::player::PlayerRepository,
    error::{duel::DuelError, ledger::LedgerError, AppError},
    model::duel::{
        DuelAction, DuelChallenge, DuelId, DuelOutcome, DuelParty, DuelResolution, DuelState,
        ProposeDuelParam,
    },
    service::{analytics::AnalyticsService, ledger::LedgerService},
};

pub struct DuelService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DuelService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates a duel proposal and creates the challenge in `Proposed`.
    ///
    /// Checks run in a fixed order and the first failure is returned: wager, bot
    /// opponent, self duel, challenger registration, opponent registration, challenger
    /// balance, opponent balance. Nothing is stored on rejection.
    ///
    /// # Arguments
    /// - `id` - Identifier for the new challenge, from `DuelRegistry::next_id`
    /// - `param` - Challenger, opponent and wager
    ///
    /// # Returns
    /// - `Ok(DuelChallenge)` - Challenge in `Proposed` with its response deadline set
    /// - `Err(AppError::DuelErr)` - Proposal rejected
    /// - `Err(AppError)` - Database error
    pub async fn propose(
        &self,
        id: DuelId,
        param: ProposeDuelParam,
    ) -> Result<DuelChallenge, AppError> {
        let ProposeDuelParam {
            challenger,
            opponent,
            wager,
        } = param;

        if wager < 1 {
            return Err(DuelError::InvalidWager(wager).into());
        }
        if opponent.is_bot {
            return Err(DuelError::OpponentIsBot.into());
        }
        if challenger.discord_id == opponent.discord_id {
            return Err(DuelError::SelfDuel.into());
        }

        let repo = PlayerRepository::new(self.db);

        let challenger = repo
            .find_by_discord_id(challenger.discord_id)
            .await?
            .ok_or(DuelError::ChallengerNotRegistered)?
            .into_participant();
        let opponent = repo
            .find_by_discord_id(opponent.discord_id)
            .await?
            .ok_or(DuelError::OpponentNotRegistered {
                opponent_id: opponent.discord_id,
            })?
            .into_participant();

        if challenger.balance < wager {
            return Err(DuelError::ChallengerInsufficientFunds {
                balance: challenger.balance,
                wager,
            }
            .into());
        }
        if opponent.balance < wager {
            return Err(DuelError::OpponentInsufficientFunds {
                opponent_id: opponent.discord_id,
                balance: opponent.balance,
                wager,
            }
            .into());
        }

        let challenge = DuelChallenge::new(id, challenger, opponent, wager, Utc::now())?;

        tracing::info!(
            "Duel {} proposed: {} vs {} for {} points",
            challenge.id,
            challenge.challenger.ledger_key,
            challenge.opponent.ledger_key,
            wager
        );

        Ok(challenge)
    }

    /// Handles one response to a challenge.
    ///
    /// Responses to a challenge that already left `Proposed` are ignored, and responses
    /// from anyone but the opponent are rejected without touching the challenge. On
    /// acceptance both balances are read fresh; if either party can no longer cover the
    /// wager the challenge is cancelled naming that party. Otherwise a fair coin picks
    /// the winner, the wager moves from loser to winner in one ledger transfer, and the
    /// outcome is handed to analytics without waiting for it.
    ///
    /// # Arguments
    /// - `challenge` - Challenge to advance, updated in place
    /// - `responder` - Discord ID of the user who responded
    /// - `action` - Accept or decline
    /// - `rng` - Source of the winner draw
    ///
    /// # Returns
    /// - `Ok(DuelResolution)` - What the response did
    /// - `Err(AppError)` - Ledger or database failure; no points were moved
    pub async fn respond<R: Rng + ?Sized>(
        &self,
        challenge: &mut DuelChallenge,
        responder: u64,
        action: DuelAction,
        rng: &mut R,
    ) -> Result<DuelResolution, AppError> {
        if challenge.state() != DuelState::Proposed {
            return Ok(DuelResolution::Ignored);
        }
        if !challenge.is_opponent(responder) {
            return Ok(DuelResolution::Unauthorized);
        }

        match action {
            DuelAction::Decline => {
                challenge.decline()?;
                tracing::info!("Duel {} declined", challenge.id);
                Ok(DuelResolution::Declined)
            }
            DuelAction::Accept => self.accept(challenge, rng).await,
        }
    }

    async fn accept<R: Rng + ?Sized>(
        &self,
        challenge: &mut DuelChallenge,
        rng: &mut R,
    ) -> Result<DuelResolution, AppError> {
        challenge.accept()?;

        let ledger = LedgerService::new(self.db);
        let wager = challenge.wager();

        challenge.challenger.balance = ledger.get_balance(&challenge.challenger.ledger_key).await?;
        challenge.opponent.balance = ledger.get_balance(&challenge.opponent.ledger_key).await?;

        for party in [DuelParty::Challenger, DuelParty::Opponent] {
            let balance = challenge.participant(party).balance;
            if balance < wager {
                return self.cancel(challenge, party, balance);
            }
        }

        let (winner_party, loser_party) = if rng.random_bool(0.5) {
            (DuelParty::Challenger, DuelParty::Opponent)
        } else {
            (DuelParty::Opponent, DuelParty::Challenger)
        };
        let mut winner = challenge.participant(winner_party).clone();
        let mut loser = challenge.participant(loser_party).clone();

        let receipt = match ledger
            .transfer(&loser.ledger_key, &winner.ledger_key, wager)
            .await
        {
            Ok(receipt) => receipt,
            Err(LedgerError::InsufficientFunds { balance, .. }) => {
                return self.cancel(challenge, loser_party, balance);
            }
            Err(e) => return Err(e.into()),
        };

        loser.balance = receipt.from_balance;
        winner.balance = receipt.to_balance;

        let outcome = DuelOutcome {
            winner,
            loser,
            wager_transferred: wager,
        };
        challenge.resolve(outcome.clone())?;

        tracing::info!(
            "Duel {} resolved: {} won {} points from {}",
            challenge.id,
            outcome.winner.ledger_key,
            wager,
            outcome.loser.ledger_key
        );

        AnalyticsService::new(self.db.clone()).record_duel_outcome(challenge, &outcome);

        Ok(DuelResolution::Resolved(outcome))
    }

    fn cancel(
        &self,
        challenge: &mut DuelChallenge,
        underfunded: DuelParty,
        balance: i64,
    ) -> Result<DuelResolution, AppError> {
        challenge.cancel()?;

        tracing::info!(
            "Duel {} cancelled: {} only has {} points",
            challenge.id,
            challenge.participant(underfunded).ledger_key,
            balance
        );

        Ok(DuelResolution::Cancelled {
            underfunded,
            balance,
        })
    }
}
