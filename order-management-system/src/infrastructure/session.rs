use std::sync::Arc;
use std::time::{Duration, Instant};

use dashmap::DashMap;
use domain_order::model::vo::{Language, SessionContext};
use tokio::sync::{Mutex, OwnedMutexGuard};
use uuid::Uuid;

struct SessionSlot {
    context: Arc<Mutex<SessionContext>>,
    last_access: Instant,
}

impl SessionSlot {
    fn in_use(&self) -> bool {
        Arc::strong_count(&self.context) > 1
    }
}

/// Session contexts by session id.
///
/// A request locks its session for the whole interaction, so interactions of
/// one session run one after another. Sessions not touched for `idle_timeout`
/// are dropped by [`SessionStore::evict_idle`].
pub struct SessionStore {
    sessions: DashMap<String, SessionSlot>,
    idle_timeout: Duration,
}

impl SessionStore {
    pub fn new(idle_timeout: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            idle_timeout,
        }
    }

    pub fn idle_timeout(&self) -> Duration {
        self.idle_timeout
    }

    /// Issues a new session id when `session_id` is absent or blank.
    pub async fn acquire(
        &self,
        session_id: Option<&str>,
        language: Language,
    ) -> (String, OwnedMutexGuard<SessionContext>) {
        let session_id = match session_id.map(str::trim).filter(|el| !el.is_empty()) {
            Some(el) => el.to_owned(),
            None => Uuid::new_v4().to_string(),
        };
        let context = {
            let mut slot = self.sessions.entry(session_id.to_owned()).or_insert_with(|| {
                tracing::debug!("Session {session_id} opened.");
                SessionSlot {
                    context: Arc::new(Mutex::new(SessionContext::new(language))),
                    last_access: Instant::now(),
                }
            });
            slot.last_access = Instant::now();
            slot.context.clone()
        };
        (session_id, context.lock_owned().await)
    }

    pub fn remove(&self, session_id: &str) -> bool {
        self.sessions.remove(session_id).is_some()
    }

    /// Drops sessions idle for longer than the timeout, returns how many.
    ///
    /// A session held by a running request is never dropped.
    pub fn evict_idle(&self) -> usize {
        let before = self.sessions.len();
        self.sessions
            .retain(|_, slot| slot.in_use() || slot.last_access.elapsed() < self.idle_timeout);
        let evicted = before.saturating_sub(self.sessions.len());
        if evicted > 0 {
            tracing::debug!("Evicted {evicted} idle sessions.");
        }
        evicted
    }

    /// Runs [`SessionStore::evict_idle`] periodically, never returns.
    pub async fn sweep(self: Arc<Self>) {
        let period = (self.idle_timeout / 2).max(Duration::from_secs(1));
        let mut interval = tokio::time::interval(period);
        loop {
            interval.tick().await;
            self.evict_idle();
        }
    }
}

#[cfg(test)]
mod tests {
    use domain_order::model::vo::Permission;

    use super::*;

    #[tokio::test]
    async fn test_session_kept_between_requests() {
        let store = SessionStore::new(Duration::from_secs(1800));

        let (session_id, mut session) = store.acquire(None, Language::Sv).await;
        session.cache_permission(Permission::OrdersEdit, true);
        drop(session);
        let (same_id, session) = store.acquire(Some(&session_id), Language::En).await;

        assert_eq!(session_id, same_id);
        assert_eq!(session.language(), Language::Sv);
        assert_eq!(session.cached_permission(Permission::OrdersEdit), Some(true));
    }

    #[tokio::test]
    async fn test_blank_id_issues_new_session() {
        let store = SessionStore::new(Duration::from_secs(1800));

        let (first, _) = store.acquire(Some(" "), Language::En).await;
        let (second, _) = store.acquire(None, Language::En).await;

        assert_ne!(first, second);
        assert!(!first.trim().is_empty());
        assert!(store.remove(&first));
        assert!(!store.remove(&first));
        assert!(store.remove(&second));
    }

    #[tokio::test]
    async fn test_idle_session_evicted() {
        let store = SessionStore::new(Duration::from_millis(20));

        let (session_id, session) = store.acquire(None, Language::En).await;
        drop(session);
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(store.evict_idle(), 1);
        assert!(!store.remove(&session_id));
        let (same_id, session) = store.acquire(Some(&session_id), Language::Sv).await;
        assert_eq!(same_id, session_id);
        assert_eq!(session.language(), Language::Sv);
    }

    #[tokio::test]
    async fn test_recent_and_held_sessions_kept() {
        let store = SessionStore::new(Duration::from_millis(200));

        let (held_id, held) = store.acquire(None, Language::En).await;
        tokio::time::sleep(Duration::from_millis(250)).await;
        let (recent_id, recent) = store.acquire(None, Language::En).await;
        drop(recent);

        assert_eq!(store.evict_idle(), 0);
        drop(held);
        assert!(store.remove(&held_id));
        assert!(store.remove(&recent_id));
    }

    #[tokio::test]
    async fn test_access_refreshes_session() {
        let store = SessionStore::new(Duration::from_millis(300));

        let (session_id, session) = store.acquire(None, Language::En).await;
        drop(session);
        tokio::time::sleep(Duration::from_millis(200)).await;
        let (_, session) = store.acquire(Some(&session_id), Language::En).await;
        drop(session);
        tokio::time::sleep(Duration::from_millis(200)).await;

        assert_eq!(store.evict_idle(), 0);
        assert!(store.remove(&session_id));
    }
}
