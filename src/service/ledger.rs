//! Point ledger service.
//!
//! The ledger is the authoritative store of point balances, keyed by in-game name and
//! mutated only through signed deltas. Balances are always read fresh; nothing here
//! caches them.

use dioxus_logger::tracing;
use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{data::player::PlayerRepository, error::ledger::LedgerError};

/// Balances of both accounts right after a transfer committed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from_balance: i64,
    pub to_balance: i64,
}

pub struct LedgerService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LedgerService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Reads the current balance of a ledger account.
    ///
    /// # Returns
    /// - `Ok(i64)` - Current balance
    /// - `Err(LedgerError::NotRegistered)` - Unknown ledger key
    /// - `Err(LedgerError::Database)` - Backend failure
    pub async fn get_balance(&self, key: &str) -> Result<i64, LedgerError> {
        PlayerRepository::new(self.db)
            .get_points(key)
            .await?
            .ok_or_else(|| LedgerError::NotRegistered {
                key: key.to_string(),
            })
    }

    /// Applies a signed delta to one account.
    ///
    /// # Returns
    /// - `Ok(i64)` - Balance after the delta
    /// - `Err(LedgerError::NotRegistered)` - Unknown ledger key
    /// - `Err(LedgerError::InsufficientFunds)` - Debit larger than the balance, nothing applied
    /// - `Err(LedgerError::Database)` - Backend failure
    pub async fn apply_delta(&self, key: &str, delta: i64) -> Result<i64, LedgerError> {
        apply_delta_in(self.db, key, delta).await
    }

    /// Moves `amount` points from one account to another atomically.
    ///
    /// The debit and the credit run inside one database transaction. If either fails
    /// the transaction is rolled back, so a transfer is either fully applied or not at
    /// all.
    ///
    /// # Arguments
    /// - `from` - Ledger key debited
    /// - `to` - Ledger key credited
    /// - `amount` - Positive number of points to move
    ///
    /// # Returns
    /// - `Ok(TransferReceipt)` - Both balances after commit
    /// - `Err(LedgerError::InsufficientFunds)` - `from` cannot cover `amount`
    /// - `Err(LedgerError::NotRegistered)` - Either key is unknown
    /// - `Err(LedgerError::Database)` - Backend failure
    pub async fn transfer(
        &self,
        from: &str,
        to: &str,
        amount: i64,
    ) -> Result<TransferReceipt, LedgerError> {
        let txn = self.db.begin().await?;

        let result: Result<TransferReceipt, LedgerError> = async {
            let from_balance = apply_delta_in(&txn, from, -amount).await?;
            let to_balance = apply_delta_in(&txn, to, amount).await?;
            Ok(TransferReceipt {
                from_balance,
                to_balance,
            })
        }
        .await;

        match result {
            Ok(receipt) => {
                txn.commit().await?;
                Ok(receipt)
            }
            Err(err) => {
                if let Err(e) = txn.rollback().await {
                    tracing::error!(
                        "Failed to roll back transfer from {} to {}: {}",
                        from,
                        to,
                        e
                    );
                }
                Err(err)
            }
        }
    }
}

async fn apply_delta_in<C: ConnectionTrait>(
    db: &C,
    key: &str,
    delta: i64,
) -> Result<i64, LedgerError> {
    let repo = PlayerRepository::new(db);
    let applied = repo.apply_delta(key, delta).await?;
    let balance = repo.get_points(key).await?;

    match (applied, balance) {
        (_, None) => Err(LedgerError::NotRegistered {
            key: key.to_string(),
        }),
        (0, Some(balance)) => Err(LedgerError::InsufficientFunds {
            key: key.to_string(),
            balance,
            amount: delta.saturating_neg(),
        }),
        (_, Some(balance)) => Ok(balance),
    }
}
