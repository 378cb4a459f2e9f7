use thiserror::Error;

/// Failures raised by the point ledger.
#[derive(Error, Debug)]
pub enum LedgerError {
    /// No player is registered under the ledger key.
    #[error("No registered player named {key}.")]
    NotRegistered { key: String },

    /// A debit would take the account below zero.
    #[error("{key} only has {balance} points, {amount} needed.")]
    InsufficientFunds { key: String, balance: i64, amount: i64 },

    /// Backend failure. Any open transaction has been rolled back.
    #[error(transparent)]
    Database(#[from] sea_orm::DbErr),
}
