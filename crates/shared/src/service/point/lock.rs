//! Per-user exclusion tokens.
//!
//! Every user id owns one async mutex, created lazily on first touch and
//! kept for the lifetime of the registry. Creation goes through the map's
//! insert-if-absent entry, so concurrent first touches converge on the same
//! token. The map shard lock is only held for that lookup; the long critical
//! section is the per-user mutex itself.
//!
//! `tokio::sync::Mutex` hands the lock out in the order it was requested,
//! which keeps concurrent mutations on one user strictly first-come,
//! first-served.

use dashmap::DashMap;
use std::sync::Arc;
use tokio::sync::{Mutex, OwnedMutexGuard};
use tracing::debug;

#[derive(Debug, Default)]
pub struct PointLockRegistry {
    locks: DashMap<i64, Arc<Mutex<()>>>,
}

/// Holds a user's token until dropped.
#[derive(Debug)]
pub struct PointLockGuard {
    user_id: i64,
    _guard: OwnedMutexGuard<()>,
}

impl PointLockGuard {
    #[cfg(test)]
    pub fn user_id(&self) -> i64 {
        self.user_id
    }
}

impl Drop for PointLockGuard {
    fn drop(&mut self) {
        debug!("🔓 point lock released: user_id={}", self.user_id);
    }
}

impl PointLockRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    fn token(&self, user_id: i64) -> Arc<Mutex<()>> {
        let entry = self.locks.entry(user_id).or_default();
        Arc::clone(entry.value())
    }

    /// Waits for the user's token. Waiters are served in arrival order.
    pub async fn acquire(&self, user_id: i64) -> PointLockGuard {
        let token = self.token(user_id);
        let guard = token.lock_owned().await;

        debug!("🔒 point lock acquired: user_id={user_id}");

        PointLockGuard {
            user_id,
            _guard: guard,
        }
    }

    /// Number of users that have a token. Tokens are never evicted.
    pub fn tracked_users(&self) -> usize {
        self.locks.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn first_touches_converge_on_one_token() {
        let registry = Arc::new(PointLockRegistry::new());

        let mut handles = Vec::new();
        for _ in 0..32 {
            let registry = registry.clone();
            handles.push(tokio::spawn(async move { registry.token(5) }));
        }

        let mut tokens = Vec::new();
        for handle in handles {
            tokens.push(handle.await.unwrap());
        }

        assert!(tokens.windows(2).all(|w| Arc::ptr_eq(&w[0], &w[1])));
        assert_eq!(registry.tracked_users(), 1);
    }

    #[tokio::test]
    async fn waiters_are_granted_in_arrival_order() {
        let registry = Arc::new(PointLockRegistry::new());
        let order = Arc::new(std::sync::Mutex::new(Vec::new()));

        let held = registry.acquire(1).await;

        let mut handles = Vec::new();
        for i in 0..10 {
            let registry = registry.clone();
            let order = order.clone();
            handles.push(tokio::spawn(async move {
                let _guard = registry.acquire(1).await;
                order.lock().unwrap().push(i);
            }));
            // let the task reach the wait queue before spawning the next one
            tokio::task::yield_now().await;
        }

        drop(held);
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(*order.lock().unwrap(), (0..10).collect::<Vec<_>>());
    }

    #[tokio::test]
    async fn held_token_does_not_block_other_users() {
        let registry = PointLockRegistry::new();

        let _held = registry.acquire(1).await;

        let other = timeout(Duration::from_millis(100), registry.acquire(2)).await;
        assert!(other.is_ok());

        let same = timeout(Duration::from_millis(50), registry.acquire(1)).await;
        assert!(same.is_err());
    }

    #[tokio::test]
    async fn token_is_reusable_after_release() {
        let registry = PointLockRegistry::new();

        let guard = registry.acquire(3).await;
        assert_eq!(guard.user_id(), 3);
        drop(guard);

        let again = timeout(Duration::from_millis(100), registry.acquire(3)).await;
        assert!(again.is_ok());
        assert_eq!(registry.tracked_users(), 1);
    }
}
