//! Cafe Server - restaurant site backend
//!
//! Serves the menu, reviews and store information from JSON fixtures, and
//! hosts each visitor's contact, reservation and order forms in an
//! in-memory session.
//!
//! # Module layout
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # config, state, server, background tasks
//! ├── api/           # HTTP handlers
//! ├── routes/        # router assembly and middleware stack
//! ├── middleware/    # request logging
//! ├── sessions/      # visitor sessions, success banner, reaper
//! ├── fixtures.rs    # JSON fixture loading
//! ├── submissions.rs # simulated persistence (logging)
//! └── utils/         # logger
//! ```

pub mod api;
pub mod core;
pub mod fixtures;
pub mod middleware;
pub mod routes;
pub mod sessions;
pub mod submissions;
pub mod utils;

pub use core::{Config, Server, ServerState};
pub use routes::{OneshotRouter, build_app};
pub use utils::{ApiResponse, AppError, AppResult, ErrorCategory, ErrorCode};

pub use utils::logger::{cleanup_old_logs, init_logger, init_logger_with_file};

/// Load `.env`, then set up logging from the environment
pub fn setup_environment() -> anyhow::Result<()> {
    dotenv::dotenv().ok();

    let config = Config::from_env();
    init_logger_with_file(
        &config.log_level,
        config.log_json,
        config.log_dir.as_deref(),
    )?;
    api::health::init_start_time();
    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______        ____
  / ____/____ _ / __/___
 / /    / __ `// /_ / _ \
/ /___ / /_/ // __//  __/
\____/ \__,_//_/   \___/
    "#
    );
}
