//! Idle session sweeper

use std::sync::Arc;
use std::time::Duration;

use tokio_util::sync::CancellationToken;

use super::SessionStore;

/// Periodically drops sessions nobody touched for `idle_timeout`
///
/// Registered as `TaskKind::Periodic` in `start_background_tasks()`.
pub struct SessionReaper {
    sessions: Arc<SessionStore>,
    idle_timeout: Duration,
    interval: Duration,
    shutdown: CancellationToken,
}

impl SessionReaper {
    pub fn new(
        sessions: Arc<SessionStore>,
        idle_timeout: Duration,
        interval: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            sessions,
            idle_timeout,
            interval,
            shutdown,
        }
    }

    pub async fn run(self) {
        tracing::info!(
            idle_timeout_secs = self.idle_timeout.as_secs(),
            interval_secs = self.interval.as_secs(),
            "Session reaper started"
        );

        loop {
            tokio::select! {
                _ = tokio::time::sleep(self.interval) => {
                    self.sweep().await;
                }
                _ = self.shutdown.cancelled() => {
                    tracing::info!("Session reaper received shutdown signal");
                    return;
                }
            }
        }
    }

    async fn sweep(&self) {
        let removed = self.sessions.remove_idle(self.idle_timeout).await;
        if removed > 0 {
            tracing::info!(
                removed,
                remaining = self.sessions.len(),
                "Removed idle visitor sessions"
            );
        } else {
            tracing::debug!("No idle visitor sessions");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test(start_paused = true)]
    async fn test_reaper_sweeps_until_shutdown() {
        let sessions = Arc::new(SessionStore::new(Duration::from_secs(5)));
        sessions.create();
        let shutdown = CancellationToken::new();

        let reaper = SessionReaper::new(
            sessions.clone(),
            Duration::from_secs(30),
            Duration::from_secs(10),
            shutdown.clone(),
        );
        let handle = tokio::spawn(reaper.run());

        tokio::time::sleep(Duration::from_secs(25)).await;
        assert_eq!(sessions.len(), 1);

        tokio::time::sleep(Duration::from_secs(20)).await;
        assert!(sessions.is_empty());

        shutdown.cancel();
        handle.await.unwrap();
    }
}
