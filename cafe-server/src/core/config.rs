use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

/// Server configuration
///
/// # Environment variables
///
/// | Variable | Default | Description |
/// |----------|---------|-------------|
/// | WORK_DIR | . | Working directory (logs live below it) |
/// | HTTP_PORT | 3000 | HTTP listen port |
/// | PUBLIC_DIR | `<WORK_DIR>/public` | Directory holding the JSON fixtures |
/// | ENVIRONMENT | development | development, staging or production |
/// | LOG_LEVEL | info | Default tracing filter |
/// | LOG_JSON | true in production | JSON console output |
/// | LOG_DIR | unset | Enables daily rolling log files |
/// | BANNER_DELAY_MS | 5000 | How long the success banner stays up |
/// | SESSION_IDLE_TIMEOUT_SECS | 1800 | Idle visitor sessions are dropped after this |
/// | SESSION_SWEEP_INTERVAL_SECS | 60 | How often idle sessions are looked for |
/// | SHUTDOWN_TIMEOUT_MS | 10000 | Grace period for in-flight requests |
///
/// # Example
///
/// ```ignore
/// PUBLIC_DIR=./public HTTP_PORT=8080 cargo run -p cafe-server
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    pub work_dir: String,
    pub http_port: u16,
    pub public_dir: String,
    /// development | staging | production
    pub environment: String,
    pub log_level: String,
    pub log_json: bool,
    pub log_dir: Option<String>,
    pub banner_delay_ms: u64,
    pub session_idle_timeout_secs: u64,
    pub session_sweep_interval_secs: u64,
    pub shutdown_timeout_ms: u64,
}

fn env_or<T: FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Config {
    /// Load from environment variables, falling back to defaults
    pub fn from_env() -> Self {
        let work_dir = std::env::var("WORK_DIR").unwrap_or_else(|_| ".".into());
        let public_dir =
            std::env::var("PUBLIC_DIR").unwrap_or_else(|_| default_public_dir(&work_dir));
        let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".into());
        let log_json = env_or("LOG_JSON", environment == "production");

        Self {
            http_port: env_or("HTTP_PORT", 3000),
            public_dir,
            log_level: std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".into()),
            log_json,
            log_dir: std::env::var("LOG_DIR").ok().filter(|d| !d.is_empty()),
            banner_delay_ms: env_or("BANNER_DELAY_MS", 5000),
            session_idle_timeout_secs: env_or("SESSION_IDLE_TIMEOUT_SECS", 1800),
            session_sweep_interval_secs: env_or("SESSION_SWEEP_INTERVAL_SECS", 60),
            shutdown_timeout_ms: env_or("SHUTDOWN_TIMEOUT_MS", 10000),
            work_dir,
            environment,
        }
    }

    /// Override the working directory and port; fixtures are read from
    /// `<work_dir>/public`
    ///
    /// Mostly used by tests
    pub fn with_overrides(work_dir: impl Into<String>, http_port: u16) -> Self {
        let mut config = Self::from_env();
        config.work_dir = work_dir.into();
        config.public_dir = default_public_dir(&config.work_dir);
        config.http_port = http_port;
        config
    }

    pub fn with_banner_delay(mut self, delay: Duration) -> Self {
        self.banner_delay_ms = delay.as_millis() as u64;
        self
    }

    pub fn public_dir(&self) -> PathBuf {
        PathBuf::from(&self.public_dir)
    }

    pub fn banner_delay(&self) -> Duration {
        Duration::from_millis(self.banner_delay_ms)
    }

    pub fn session_idle_timeout(&self) -> Duration {
        Duration::from_secs(self.session_idle_timeout_secs)
    }

    pub fn session_sweep_interval(&self) -> Duration {
        // a zero interval would spin the reaper
        Duration::from_secs(self.session_sweep_interval_secs.max(1))
    }

    pub fn shutdown_timeout(&self) -> Duration {
        Duration::from_millis(self.shutdown_timeout_ms)
    }
}

fn default_public_dir(work_dir: &str) -> String {
    PathBuf::from(work_dir)
        .join("public")
        .to_string_lossy()
        .into_owned()
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}
