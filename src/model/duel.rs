//! Duel challenge domain model and its state machine.
//!
//! A `DuelChallenge` is created in `Proposed` and leaves that state exactly once:
//!
//! ```text
//! Proposed --decline--> Declined
//! Proposed --accept---> Accepted --balances ok--> Resolved
//!                                --underfunded--> Cancelled
//! Proposed --deadline-> Expired
//! ```
//!
//! `Accepted` only lives for the duration of the acceptance handling. Every other state
//! besides `Proposed` is terminal and no state is ever re-entered.

use chrono::{DateTime, Duration, Utc};

use crate::error::duel::DuelError;

/// Seconds the opponent has to answer a challenge.
pub const DUEL_RESPONSE_WINDOW_SECS: i64 = 60;

/// Identifier of a live challenge, unique for the lifetime of the process.
pub type DuelId = u64;

/// Registered player taking part in a duel.
///
/// `balance` is a point-in-time read from the ledger, refreshed before any transfer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Participant {
    pub discord_id: u64,
    /// In-game name the ledger account is keyed by.
    pub ledger_key: String,
    pub balance: i64,
}

/// Side of a duel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelParty {
    Challenger,
    Opponent,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelState {
    Proposed,
    Accepted,
    Declined,
    Expired,
    Cancelled,
    Resolved,
}

/// The two choices offered to the opponent.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DuelAction {
    Accept,
    Decline,
}

impl DuelAction {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Accept => "accept",
            Self::Decline => "decline",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "accept" => Some(Self::Accept),
            "decline" => Some(Self::Decline),
            _ => None,
        }
    }
}

/// Discord user named in a `/duel` command, before registration is checked.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Duelist {
    pub discord_id: u64,
    pub is_bot: bool,
}

/// Parameters for proposing a duel.
#[derive(Debug, Clone)]
pub struct ProposeDuelParam {
    pub challenger: Duelist,
    pub opponent: Duelist,
    pub wager: i64,
}

/// Result of a resolved duel. Participants carry their post-transfer balances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DuelOutcome {
    pub winner: Participant,
    pub loser: Participant,
    pub wager_transferred: i64,
}

/// What handling one opponent response did to a challenge.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DuelResolution {
    /// The challenge was no longer `Proposed`; nothing happened.
    Ignored,
    /// Someone other than the opponent responded; nothing happened.
    Unauthorized,
    Declined,
    /// A fresh balance read showed `underfunded` holding only `balance` points.
    Cancelled { underfunded: DuelParty, balance: i64 },
    Resolved(DuelOutcome),
}

/// One duel between two registered players.
#[derive(Debug, Clone)]
pub struct DuelChallenge {
    pub id: DuelId,
    pub challenger: Participant,
    pub opponent: Participant,
    /// Points at stake. Fixed at creation.
    wager: i64,
    state: DuelState,
    pub created_at: DateTime<Utc>,
    pub response_deadline: DateTime<Utc>,
    outcome: Option<DuelOutcome>,
}

impl DuelChallenge {
    /// Creates a challenge in `Proposed` with a deadline one response window after
    /// `created_at`.
    ///
    /// # Returns
    /// - `Ok(DuelChallenge)` - New challenge
    /// - `Err(DuelError::SelfDuel)` - Both participants share a Discord ID
    /// - `Err(DuelError::InvalidWager)` - Wager below 1
    pub fn new(
        id: DuelId,
        challenger: Participant,
        opponent: Participant,
        wager: i64,
        created_at: DateTime<Utc>,
    ) -> Result<Self, DuelError> {
        if challenger.discord_id == opponent.discord_id {
            return Err(DuelError::SelfDuel);
        }
        if wager < 1 {
            return Err(DuelError::InvalidWager(wager));
        }

        Ok(Self {
            id,
            challenger,
            opponent,
            wager,
            state: DuelState::Proposed,
            created_at,
            response_deadline: created_at + Duration::seconds(DUEL_RESPONSE_WINDOW_SECS),
            outcome: None,
        })
    }

    pub fn wager(&self) -> i64 {
        self.wager
    }

    pub fn state(&self) -> DuelState {
        self.state
    }

    /// Populated only once the challenge is `Resolved`.
    pub fn outcome(&self) -> Option<&DuelOutcome> {
        self.outcome.as_ref()
    }

    pub fn participant(&self, party: DuelParty) -> &Participant {
        match party {
            DuelParty::Challenger => &self.challenger,
            DuelParty::Opponent => &self.opponent,
        }
    }

    pub fn is_opponent(&self, discord_id: u64) -> bool {
        self.opponent.discord_id == discord_id
    }

    pub fn accept(&mut self) -> Result<(), DuelError> {
        self.transition(DuelState::Proposed, DuelState::Accepted)
    }

    pub fn decline(&mut self) -> Result<(), DuelError> {
        self.transition(DuelState::Proposed, DuelState::Declined)
    }

    pub fn expire(&mut self) -> Result<(), DuelError> {
        self.transition(DuelState::Proposed, DuelState::Expired)
    }

    pub fn cancel(&mut self) -> Result<(), DuelError> {
        self.transition(DuelState::Accepted, DuelState::Cancelled)
    }

    /// Records the outcome and moves `Accepted` to `Resolved`.
    pub fn resolve(&mut self, outcome: DuelOutcome) -> Result<(), DuelError> {
        self.transition(DuelState::Accepted, DuelState::Resolved)?;
        self.outcome = Some(outcome);
        Ok(())
    }

    fn transition(&mut self, from: DuelState, to: DuelState) -> Result<(), DuelError> {
        if self.state != from {
            return Err(DuelError::InvalidTransition {
                from: self.state,
                to,
            });
        }
        self.state = to;
        Ok(())
    }
}
