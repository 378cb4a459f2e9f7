//! In-memory registry of live duel challenges.
//!
//! Each challenge is stored with the abort handle of its single expiry timer. Whichever
//! of the opponent's response and the timer removes the entry first owns the challenge;
//! every later event finds nothing and becomes a no-op. Challenges do not survive a
//! restart.

use std::collections::HashMap;
use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use dioxus_logger::tracing;
use tokio::{sync::RwLock, task::AbortHandle};

use crate::model::duel::{DuelChallenge, DuelId};

struct DuelEntry {
    challenge: DuelChallenge,
    timer: AbortHandle,
}

/// Result of an attempt to take a challenge out of the registry for a response.
#[derive(Debug)]
pub enum DuelClaim {
    /// The responder is the opponent; the challenge is theirs to resolve and its timer
    /// has been stopped.
    Claimed(DuelChallenge),
    /// The responder is not the opponent. The challenge stays pending.
    Unauthorized { opponent_id: u64 },
    /// No pending challenge under this id: already answered, expired, or never existed.
    Gone,
}

/// Shared handle to the live challenges. Cloning is cheap and every clone sees the same
/// challenges.
#[derive(Clone)]
pub struct DuelRegistry {
    duels: Arc<RwLock<HashMap<DuelId, DuelEntry>>>,
    next_id: Arc<AtomicU64>,
}

impl DuelRegistry {
    pub fn new() -> Self {
        Self {
            duels: Arc::new(RwLock::new(HashMap::new())),
            next_id: Arc::new(AtomicU64::new(1)),
        }
    }

    /// Reserves an identifier for a new challenge.
    pub fn next_id(&self) -> DuelId {
        self.next_id.fetch_add(1, Ordering::Relaxed)
    }

    /// Stores a challenge and starts its expiry timer.
    ///
    /// The timer sleeps until the challenge's response deadline. If the challenge is
    /// still pending when it wakes, it is removed, moved to `Expired` and passed to
    /// `on_expire`, typically to update the prompt.
    ///
    /// # Arguments
    /// - `challenge` - Challenge in `Proposed`
    /// - `on_expire` - Called at most once with the expired challenge
    pub async fn insert<F, Fut>(&self, challenge: DuelChallenge, on_expire: F)
    where
        F: FnOnce(DuelChallenge) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        let id = challenge.id;
        let window = (challenge.response_deadline - Utc::now())
            .to_std()
            .unwrap_or(Duration::ZERO);
        // Fixed before spawning so the window doesn't depend on when the task first runs
        let deadline = tokio::time::Instant::now() + window;

        // Hold the lock while spawning so the timer can't look the entry up before it exists
        let mut duels = self.duels.write().await;

        let registry = self.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep_until(deadline).await;
            if let Some(challenge) = registry.expire(id).await {
                on_expire(challenge).await;
            }
        })
        .abort_handle();

        if let Some(previous) = duels.insert(id, DuelEntry { challenge, timer }) {
            tracing::warn!("Duel {} was registered twice, replacing the older entry", id);
            previous.timer.abort();
        }
    }

    /// Takes a pending challenge for a response by `responder`.
    ///
    /// Only the opponent can claim a challenge. A successful claim removes it from the
    /// registry and stops its timer, so the challenge can be resolved exactly once.
    pub async fn claim(&self, id: DuelId, responder: u64) -> DuelClaim {
        let mut duels = self.duels.write().await;

        let Some(entry) = duels.get(&id) else {
            return DuelClaim::Gone;
        };

        if !entry.challenge.is_opponent(responder) {
            return DuelClaim::Unauthorized {
                opponent_id: entry.challenge.opponent.discord_id,
            };
        }

        match duels.remove(&id) {
            Some(entry) => {
                entry.timer.abort();
                DuelClaim::Claimed(entry.challenge)
            }
            None => DuelClaim::Gone,
        }
    }

    /// Removes a pending challenge and moves it to `Expired`.
    ///
    /// # Returns
    /// - `Some(DuelChallenge)` - The expired challenge
    /// - `None` - Nothing pending under this id
    pub async fn expire(&self, id: DuelId) -> Option<DuelChallenge> {
        let mut challenge = self.duels.write().await.remove(&id)?.challenge;

        if let Err(e) = challenge.expire() {
            tracing::error!("Failed to expire duel {}: {}", id, e);
            return None;
        }

        tracing::info!("Duel {} expired without a response", id);

        Some(challenge)
    }

    /// Drops a pending challenge without expiring it, e.g. when its prompt could not be
    /// posted.
    pub async fn discard(&self, id: DuelId) {
        if let Some(entry) = self.duels.write().await.remove(&id) {
            entry.timer.abort();
        }
    }

    #[cfg(test)]
    pub async fn is_pending(&self, id: DuelId) -> bool {
        self.duels.read().await.contains_key(&id)
    }
}

impl Default for DuelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
