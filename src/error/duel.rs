use thiserror::Error;

use crate::model::duel::DuelState;

/// Reasons a duel cannot be proposed, plus illegal state transitions.
///
/// Every variant except `InvalidTransition` is a user-facing rejection: the challenge
/// is never created and the message is shown to the challenger.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DuelError {
    #[error("You must wager at least 1 point.")]
    InvalidWager(i64),

    #[error("You can't duel a bot.")]
    OpponentIsBot,

    #[error("You can't duel yourself.")]
    SelfDuel,

    #[error("You are not registered. Use /register to link your in-game name first.")]
    ChallengerNotRegistered,

    #[error("<@{opponent_id}> is not registered.")]
    OpponentNotRegistered { opponent_id: u64 },

    #[error("You don't have enough points for this duel. You have {balance}, the wager is {wager}.")]
    ChallengerInsufficientFunds { balance: i64, wager: i64 },

    #[error("<@{opponent_id}> doesn't have enough points for this duel. They have {balance}, the wager is {wager}.")]
    OpponentInsufficientFunds {
        opponent_id: u64,
        balance: i64,
        wager: i64,
    },

    /// A transition was attempted from a state that does not allow it.
    #[error("Invalid duel transition from {from:?} to {to:?}")]
    InvalidTransition { from: DuelState, to: DuelState },
}

impl DuelError {
    /// Whether this error is a rejection the user should see verbatim.
    pub fn is_validation(&self) -> bool {
        !matches!(self, Self::InvalidTransition { .. })
    }
}
