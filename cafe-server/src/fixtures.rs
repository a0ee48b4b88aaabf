//! JSON fixtures
//!
//! The menu, reviews, store information and existing reservations come from
//! JSON files in the public directory. Menu and reviews are read once and
//! cached; reservations are read fresh for every submission.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::de::DeserializeOwned;
use serde_json::Value;
use shared::error::{AppError, AppResult, ErrorCode};
use shared::models::{MenuCatalog, MenuItem, Review, StoreInfo};
use thiserror::Error;
use tokio::sync::OnceCell;

pub const MENU_FILE: &str = "menu.json";
pub const REVIEWS_FILE: &str = "reviews.json";
pub const RESERVATIONS_FILE: &str = "reservations.json";
pub const STORE_FILE: &str = "store.json";

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("{path} does not exist")]
    Missing { path: PathBuf },

    #[error("{path} is empty")]
    Empty { path: PathBuf },

    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

impl FixtureError {
    /// Missing, empty or malformed content, as opposed to an I/O failure
    pub fn is_content_problem(&self) -> bool {
        !matches!(self, FixtureError::Io { .. })
    }
}

async fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T, FixtureError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| match source.kind() {
        ErrorKind::NotFound => FixtureError::Missing {
            path: path.to_path_buf(),
        },
        _ => FixtureError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;

    if bytes.iter().all(u8::is_ascii_whitespace) {
        return Err(FixtureError::Empty {
            path: path.to_path_buf(),
        });
    }

    serde_json::from_slice(&bytes).map_err(|source| FixtureError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

pub struct FixtureStore {
    dir: PathBuf,
    menu: OnceCell<Arc<MenuCatalog>>,
    reviews: OnceCell<Arc<Vec<Review>>>,
}

impl FixtureStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            menu: OnceCell::new(),
            reviews: OnceCell::new(),
        }
    }

    /// The menu; a failed read is logged and yields an empty menu
    ///
    /// Entries that do not describe a menu item are skipped one by one.
    pub async fn menu(&self) -> Arc<MenuCatalog> {
        self.menu
            .get_or_init(|| async {
                let path = self.dir.join(MENU_FILE);
                let items = match read_json::<Vec<Value>>(&path).await {
                    Ok(entries) => {
                        let total = entries.len();
                        let items = menu_items(entries);
                        tracing::info!(
                            count = items.len(),
                            skipped = total - items.len(),
                            "Menu loaded"
                        );
                        items
                    }
                    Err(e) => {
                        tracing::error!(error = %e, "Error fetching menu data");
                        Vec::new()
                    }
                };
                Arc::new(MenuCatalog::new(items))
            })
            .await
            .clone()
    }

    /// Customer reviews; a failed read is logged and yields no reviews
    pub async fn reviews(&self) -> Arc<Vec<Review>> {
        self.reviews
            .get_or_init(|| async {
                let path = self.dir.join(REVIEWS_FILE);
                let reviews = read_json::<Vec<Review>>(&path).await.unwrap_or_else(|e| {
                    tracing::error!(error = %e, "Error fetching reviews");
                    Vec::new()
                });
                Arc::new(reviews)
            })
            .await
            .clone()
    }

    pub async fn store_info(&self) -> StoreInfo {
        let path = self.dir.join(STORE_FILE);
        read_json(&path).await.unwrap_or_else(|e| {
            tracing::error!(error = %e, "Error fetching store information");
            StoreInfo::default()
        })
    }

    /// Existing reservations, read fresh
    ///
    /// Entries are kept as stored, whatever their shape. A missing, empty or
    /// unparseable file counts as no reservations; any other read failure
    /// fails the call.
    pub async fn reservations(&self) -> AppResult<Vec<Value>> {
        let path = self.dir.join(RESERVATIONS_FILE);
        match read_json(&path).await {
            Ok(reservations) => Ok(reservations),
            Err(e) if e.is_content_problem() => {
                tracing::warn!(error = %e, "No usable reservations, starting from an empty list");
                Ok(Vec::new())
            }
            Err(e) => {
                tracing::error!(error = %e, "Error reading reservations");
                Err(AppError::new(ErrorCode::ReservationFailed))
            }
        }
    }
}

fn menu_items(entries: Vec<Value>) -> Vec<MenuItem> {
    entries
        .into_iter()
        .enumerate()
        .filter_map(|(position, entry)| match serde_json::from_value(entry) {
            Ok(item) => Some(item),
            Err(e) => {
                tracing::warn!(position, error = %e, "Skipping malformed menu entry");
                None
            }
        })
        .collect()
}
