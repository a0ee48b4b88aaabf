//! Shared server state

use std::path::PathBuf;
use std::sync::Arc;

use tokio_util::sync::CancellationToken;

use crate::core::Config;
use crate::core::tasks::{BackgroundTasks, TaskKind};
use crate::fixtures::FixtureStore;
use crate::sessions::{SessionReaper, SessionStore};
use crate::utils::logger::{LOG_CLEANUP_INTERVAL, periodic_cleanup};

/// State handed to every handler
///
/// Cheap to clone: everything heavy sits behind an `Arc`.
#[derive(Clone)]
pub struct ServerState {
    pub config: Config,
    pub fixtures: Arc<FixtureStore>,
    pub sessions: Arc<SessionStore>,
    /// Cancelled on shutdown; stops every background task
    pub shutdown: CancellationToken,
}

impl ServerState {
    pub async fn initialize(config: &Config) -> Self {
        let public_dir = config.public_dir();
        match tokio::fs::metadata(&public_dir).await {
            Ok(meta) if meta.is_dir() => {
                tracing::info!(dir = %public_dir.display(), "Serving fixtures");
            }
            _ => {
                tracing::warn!(
                    dir = %public_dir.display(),
                    "Public directory not found, menu and reviews will be empty"
                );
            }
        }

        Self {
            config: config.clone(),
            fixtures: Arc::new(FixtureStore::new(public_dir)),
            sessions: Arc::new(SessionStore::new(config.banner_delay())),
            shutdown: CancellationToken::new(),
        }
    }

    /// Spawn the session reaper, plus log cleanup when file logging is on
    pub fn start_background_tasks(&self) -> BackgroundTasks {
        let mut tasks = BackgroundTasks::new(self.shutdown.clone());

        let reaper = SessionReaper::new(
            self.sessions.clone(),
            self.config.session_idle_timeout(),
            self.config.session_sweep_interval(),
            tasks.shutdown_token(),
        );
        tasks.spawn("session_reaper", TaskKind::Periodic, reaper.run());

        if let Some(dir) = &self.config.log_dir {
            let cleanup = periodic_cleanup(
                PathBuf::from(dir),
                LOG_CLEANUP_INTERVAL,
                tasks.shutdown_token(),
            );
            tasks.spawn("log_cleanup", TaskKind::Periodic, cleanup);
        }

        tasks.log_summary();
        tasks
    }
}
