//! Visitor sessions
//!
//! A session owns one contact form, one reservation form and one order form,
//! each in its own [`SharedSlot`]. Sessions are kept in memory only and are
//! dropped when deleted or when the reaper finds them idle.

mod banner;
mod reaper;

pub use banner::{Banner, FormSlot, SharedSlot, WithBanner};
pub use reaper::SessionReaper;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use chrono::{DateTime, Utc};
use dashmap::DashMap;
use serde::Serialize;
use shared::error::{AppError, AppResult};
use shared::forms::{FormState, OrderForm, ReservationDraft};
use shared::models::ContactMessage;
use tokio::time::Instant;
use uuid::Uuid;

pub type ContactSlot = SharedSlot<FormState<ContactMessage>>;
pub type ReservationSlot = SharedSlot<FormState<ReservationDraft>>;
pub type OrderSlot = SharedSlot<OrderForm>;

#[derive(Debug)]
pub struct Session {
    id: Uuid,
    created_at: DateTime<Utc>,
    /// Reference point for `last_seen_ms`
    epoch: Instant,
    last_seen_ms: AtomicU64,
    contact: ContactSlot,
    reservation: ReservationSlot,
    order: OrderSlot,
}

impl Session {
    fn new(banner_delay: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            created_at: Utc::now(),
            epoch: Instant::now(),
            last_seen_ms: AtomicU64::new(0),
            contact: FormSlot::shared(FormState::new(), banner_delay),
            reservation: FormSlot::shared(FormState::new(), banner_delay),
            order: FormSlot::shared(OrderForm::new(), banner_delay),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn contact(&self) -> &ContactSlot {
        &self.contact
    }

    pub fn reservation(&self) -> &ReservationSlot {
        &self.reservation
    }

    pub fn order(&self) -> &OrderSlot {
        &self.order
    }

    fn touch(&self) {
        let elapsed = self.epoch.elapsed().as_millis() as u64;
        self.last_seen_ms.store(elapsed, Ordering::Relaxed);
    }

    /// Time since the session was last accessed
    pub fn idle_for(&self) -> Duration {
        let now = self.epoch.elapsed();
        let last_seen = Duration::from_millis(self.last_seen_ms.load(Ordering::Relaxed));
        now.saturating_sub(last_seen)
    }

    /// Cancel every pending banner timer
    async fn close(&self) {
        self.contact.lock().await.cancel_banner();
        self.reservation.lock().await.cancel_banner();
        self.order.lock().await.cancel_banner();
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct SessionInfo {
    pub id: Uuid,
    pub created_at: DateTime<Utc>,
}

impl From<&Session> for SessionInfo {
    fn from(session: &Session) -> Self {
        Self {
            id: session.id,
            created_at: session.created_at,
        }
    }
}

/// All live visitor sessions
pub struct SessionStore {
    sessions: DashMap<Uuid, Arc<Session>>,
    banner_delay: Duration,
}

impl SessionStore {
    pub fn new(banner_delay: Duration) -> Self {
        Self {
            sessions: DashMap::new(),
            banner_delay,
        }
    }

    pub fn create(&self) -> Arc<Session> {
        let session = Arc::new(Session::new(self.banner_delay));
        self.sessions.insert(session.id, session.clone());
        tracing::debug!(session_id = %session.id, "Visitor session created");
        session
    }

    /// Look up a session by its textual id and mark it as seen
    pub fn get(&self, id: &str) -> AppResult<Arc<Session>> {
        let uuid = Uuid::parse_str(id).map_err(|_| AppError::session_not_found(id))?;
        let session = self
            .sessions
            .get(&uuid)
            .map(|entry| entry.value().clone())
            .ok_or_else(|| AppError::session_not_found(id))?;
        session.touch();
        Ok(session)
    }

    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let uuid = Uuid::parse_str(id).map_err(|_| AppError::session_not_found(id))?;
        let (_, session) = self
            .sessions
            .remove(&uuid)
            .ok_or_else(|| AppError::session_not_found(id))?;
        session.close().await;
        tracing::debug!(session_id = %uuid, "Visitor session removed");
        Ok(())
    }

    /// Drop sessions idle for longer than `timeout`; returns how many went
    pub async fn remove_idle(&self, timeout: Duration) -> usize {
        let idle: Vec<Uuid> = self
            .sessions
            .iter()
            .filter(|entry| entry.value().idle_for() > timeout)
            .map(|entry| *entry.key())
            .collect();

        let mut removed = 0;
        for id in idle {
            // re-check: the session may have been used since the scan
            if let Some((_, session)) = self
                .sessions
                .remove_if(&id, |_, session| session.idle_for() > timeout)
            {
                session.close().await;
                removed += 1;
            }
        }
        removed
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::error::ErrorCode;

    #[tokio::test]
    async fn test_create_get_remove() {
        let store = SessionStore::new(Duration::from_secs(5));
        let session = store.create();
        let id = session.id().to_string();

        assert_eq!(store.get(&id).unwrap().id(), session.id());
        assert_eq!(store.len(), 1);

        store.remove(&id).await.unwrap();
        assert!(store.is_empty());
        let err = store.get(&id).unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert!(store.remove(&id).await.is_err());
    }

    #[test]
    fn test_malformed_id_is_not_found() {
        let store = SessionStore::new(Duration::from_secs(5));
        let err = store.get("not-a-uuid").unwrap_err();
        assert_eq!(err.code, ErrorCode::SessionNotFound);
    }

    #[tokio::test(start_paused = true)]
    async fn test_remove_idle_keeps_recent_sessions() {
        let store = SessionStore::new(Duration::from_secs(5));
        let stale = store.create();
        let fresh = store.create();

        tokio::time::advance(Duration::from_secs(90)).await;
        store.get(&fresh.id().to_string()).unwrap();
        tokio::time::advance(Duration::from_secs(20)).await;

        let removed = store.remove_idle(Duration::from_secs(60)).await;
        assert_eq!(removed, 1);
        assert!(store.get(&stale.id().to_string()).is_err());
        assert!(store.get(&fresh.id().to_string()).is_ok());
    }
}
