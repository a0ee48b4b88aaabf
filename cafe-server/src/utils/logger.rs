//! Logging Infrastructure
//!
//! Structured logging for development and production:
//! - Console output, pretty or JSON
//! - Daily rotating application logs (deleted after 14 days)
//! - Daily submission logs, one file per day, never deleted

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::filter::filter_fn;
use tokio_util::sync::CancellationToken;
use tracing_subscriber::{EnvFilter, Layer, Registry, fmt, layer::Layered, prelude::*};

use crate::submissions::SUBMISSION_TARGET;

/// Application logs older than this are removed
pub const APP_LOG_RETENTION_DAYS: i64 = 14;

/// How often old application logs are looked for
pub const LOG_CLEANUP_INTERVAL: Duration = Duration::from_secs(3600);

type Subscriber = Layered<EnvFilter, Registry>;
type BoxedLayer = Box<dyn Layer<Subscriber> + Send + Sync>;

/// Remove `app-YYYY-MM-DD.log` files older than the retention period
pub fn cleanup_old_logs(log_dir: &Path) -> anyhow::Result<()> {
    use chrono::{Local, TimeZone};

    let cutoff = Local::now() - chrono::Duration::days(APP_LOG_RETENTION_DAYS);

    let app_log_dir = log_dir.join("app");
    if !app_log_dir.exists() {
        return Ok(());
    }

    for entry in fs::read_dir(app_log_dir)? {
        let path = entry?.path();
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            continue;
        };

        let Some(date_part) = name
            .strip_prefix("app.")
            .or_else(|| name.strip_prefix("app-"))
            .map(|d| d.strip_suffix(".log").unwrap_or(d))
        else {
            continue;
        };

        if let Ok(naive_date) = chrono::NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            && let Some(midnight) = naive_date.and_hms_opt(0, 0, 0)
            && let Some(local_datetime) = Local.from_local_datetime(&midnight).single()
            && local_datetime < cutoff
        {
            fs::remove_file(&path)?;
            tracing::info!(file = %name, "Deleted old log file");
        }
    }

    Ok(())
}

fn console_layer(json_format: bool) -> BoxedLayer {
    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(false)
            .with_file(true)
            .with_line_number(true)
            .boxed()
    }
}

/// Daily rolling file layer receiving only events accepted by `keep`
fn file_layer(
    json_format: bool,
    dir: PathBuf,
    prefix: &str,
    keep: fn(&str) -> bool,
) -> BoxedLayer {
    let appender = RollingFileAppender::new(Rotation::DAILY, dir, prefix);
    let filter = filter_fn(move |meta| keep(meta.target()));

    if json_format {
        fmt::layer()
            .json()
            .with_target(true)
            .with_current_span(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_writer(std::sync::Mutex::new(appender))
            .with_filter(filter)
            .boxed()
    } else {
        fmt::layer()
            .with_target(true)
            .with_thread_ids(true)
            .with_file(true)
            .with_line_number(true)
            .with_ansi(false)
            .with_writer(std::sync::Mutex::new(appender))
            .with_filter(filter)
            .boxed()
    }
}

/// Initialize logging
///
/// # Arguments
/// * `level` - default filter when `RUST_LOG` is unset (e.g. "info", "debug")
/// * `json_format` - JSON console and file output
/// * `log_dir` - enables `app/` and `submissions/` rolling files below it
///
/// # Examples
/// ```no_run
/// // Development (console only)
/// cafe_server::init_logger_with_file("debug", false, None)?;
///
/// // Production (console + files)
/// cafe_server::init_logger_with_file("info", true, Some("./logs"))?;
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn init_logger_with_file(
    level: &str,
    json_format: bool,
    log_dir: Option<&str>,
) -> anyhow::Result<()> {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let mut layers: Vec<BoxedLayer> = vec![console_layer(json_format)];

    if let Some(dir) = log_dir {
        let log_dir = Path::new(dir);
        let app_log_dir = log_dir.join("app");
        let submission_log_dir = log_dir.join("submissions");
        fs::create_dir_all(&app_log_dir)?;
        fs::create_dir_all(&submission_log_dir)?;

        layers.push(file_layer(json_format, app_log_dir, "app", |target| {
            target != SUBMISSION_TARGET
        }));
        layers.push(file_layer(
            json_format,
            submission_log_dir,
            "submissions",
            |target| target == SUBMISSION_TARGET,
        ));
    }

    tracing_subscriber::registry()
        .with(env_filter)
        .with(layers)
        .try_init()?;

    Ok(())
}

/// Console-only logging
pub fn init_logger(level: &str, json_format: bool) -> anyhow::Result<()> {
    init_logger_with_file(level, json_format, None)
}

/// Cleans old application logs every `interval` until `shutdown` fires
///
/// Registered as `TaskKind::Periodic` in `start_background_tasks()`.
pub async fn periodic_cleanup(log_dir: PathBuf, interval: Duration, shutdown: CancellationToken) {
    loop {
        tokio::select! {
            _ = tokio::time::sleep(interval) => {
                if let Err(e) = cleanup_old_logs(&log_dir) {
                    tracing::error!(error = %e, "Failed to cleanup old logs");
                }
            }
            _ = shutdown.cancelled() => {
                tracing::debug!("Log cleanup received shutdown signal");
                return;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_cleanup_removes_only_old_app_logs() {
        let dir = TempDir::new().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(&app).unwrap();

        let old = (chrono::Local::now() - chrono::Duration::days(30))
            .format("%Y-%m-%d")
            .to_string();
        let recent = chrono::Local::now().format("%Y-%m-%d").to_string();

        fs::write(app.join(format!("app.{old}")), "old").unwrap();
        fs::write(app.join(format!("app.{recent}")), "new").unwrap();
        fs::write(app.join("notes.txt"), "keep").unwrap();

        cleanup_old_logs(dir.path()).unwrap();

        assert!(!app.join(format!("app.{old}")).exists());
        assert!(app.join(format!("app.{recent}")).exists());
        assert!(app.join("notes.txt").exists());
    }

    #[tokio::test(start_paused = true)]
    async fn test_periodic_cleanup_runs_until_shutdown() {
        let dir = TempDir::new().unwrap();
        let app = dir.path().join("app");
        fs::create_dir_all(&app).unwrap();
        let old = (chrono::Local::now() - chrono::Duration::days(30))
            .format("%Y-%m-%d")
            .to_string();
        fs::write(app.join(format!("app.{old}")), "old").unwrap();

        let shutdown = CancellationToken::new();
        let handle = tokio::spawn(periodic_cleanup(
            dir.path().to_path_buf(),
            Duration::from_secs(60),
            shutdown.clone(),
        ));

        tokio::time::sleep(Duration::from_secs(61)).await;
        assert!(!app.join(format!("app.{old}")).exists());

        shutdown.cancel();
        handle.await.unwrap();
    }

    #[test]
    fn test_cleanup_without_log_dir() {
        let dir = TempDir::new().unwrap();
        cleanup_old_logs(&dir.path().join("missing")).unwrap();
    }
}
