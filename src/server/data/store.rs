//! File-backed JSON document store.
//!
//! The whole application state lives in one JSON document. Every operation
//! follows load → mutate in memory → save whole document. `JsonStore` funnels
//! all of them through a single async mutex so two handlers can never
//! interleave between a load and the matching save.

use chrono::{DateTime, Duration, Utc};
use entity::prelude::{Document, Match, MatchStatus, Player, Settings, User};
use std::{
    path::{Path, PathBuf},
    sync::Arc,
};
use tokio::sync::Mutex;

use crate::{
    model::role::Role,
    server::{
        config::BootstrapAccount,
        error::{store::StoreError, AppError},
        model::audit::SYSTEM_EXECUTOR,
    },
};

/// Number of placeholder slots in the roster of a fresh document.
pub const DEFAULT_ROSTER_SIZE: usize = 5;

/// Number of placeholder fixtures in the calendar of a fresh document.
pub const DEFAULT_FIXTURE_COUNT: usize = 3;

/// Competition name given to the placeholder fixtures.
pub const DEFAULT_COMPETITION: &str = "Championnat";

/// Shared handle to the JSON document on disk.
///
/// Cloning is cheap; clones share the same lock.
#[derive(Clone)]
pub struct JsonStore {
    inner: Arc<StoreInner>,
}

struct StoreInner {
    path: PathBuf,
    bootstrap: BootstrapAccount,
    /// Held for the full duration of every load and load-mutate-save cycle.
    lock: Mutex<()>,
}

impl JsonStore {
    /// Creates a store handle for the document at `path`.
    ///
    /// Nothing is read until the first operation. `bootstrap` is the privileged
    /// account seeded whenever a default document has to be created.
    pub fn new(path: impl Into<PathBuf>, bootstrap: BootstrapAccount) -> Self {
        Self {
            inner: Arc::new(StoreInner {
                path: path.into(),
                bootstrap,
                lock: Mutex::new(()),
            }),
        }
    }

    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Returns the full document.
    ///
    /// Creates and persists a default document when the file is absent or
    /// cannot be parsed.
    ///
    /// # Returns
    /// - `Ok(Document)` - Current document
    /// - `Err(AppError::StoreErr)` - File could not be read or the default could not be written
    pub async fn load(&self) -> Result<Document, AppError> {
        let _guard = self.inner.lock.lock().await;
        self.load_unlocked().await
    }

    /// Runs a read-only projection over the current document.
    pub async fn read<T>(&self, f: impl FnOnce(&Document) -> T) -> Result<T, AppError> {
        let _guard = self.inner.lock.lock().await;
        let document = self.load_unlocked().await?;
        Ok(f(&document))
    }

    /// Runs `f` against the current document and persists the result.
    ///
    /// The store lock is held from load to save. When `f` returns an error the
    /// document is left untouched on disk.
    ///
    /// # Returns
    /// - `Ok(T)` - Value produced by `f`, document saved
    /// - `Err(AppError)` - Error from `f` (nothing written) or from the store itself
    pub async fn mutate<T>(
        &self,
        f: impl FnOnce(&mut Document) -> Result<T, AppError>,
    ) -> Result<T, AppError> {
        let _guard = self.inner.lock.lock().await;
        let mut document = self.load_unlocked().await?;
        let output = f(&mut document)?;
        self.save_unlocked(&document).await?;
        Ok(output)
    }

    /// Overwrites the stored document.
    pub async fn save(&self, document: &Document) -> Result<(), AppError> {
        let _guard = self.inner.lock.lock().await;
        self.save_unlocked(document).await
    }

    async fn load_unlocked(&self) -> Result<Document, AppError> {
        let path = &self.inner.path;

        match tokio::fs::read(path).await {
            Ok(bytes) => match serde_json::from_slice::<Document>(&bytes) {
                Ok(document) => Ok(document),
                Err(e) => {
                    tracing::error!(
                        "Store document {} is corrupt, regenerating defaults: {}",
                        path.display(),
                        e
                    );
                    self.regenerate().await
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                tracing::info!(
                    "Store document {} not found, creating default document",
                    path.display()
                );
                self.regenerate().await
            }
            Err(source) => Err(StoreError::Io {
                path: path.clone(),
                source,
            }
            .into()),
        }
    }

    async fn regenerate(&self) -> Result<Document, AppError> {
        let document = default_document(&self.inner.bootstrap, Utc::now());
        self.save_unlocked(&document).await?;
        Ok(document)
    }

    /// Writes to a sibling temp file then renames it over the target, so
    /// readers never observe a partially written document.
    async fn save_unlocked(&self, document: &Document) -> Result<(), AppError> {
        let path = &self.inner.path;
        let bytes = serde_json::to_vec_pretty(document).map_err(StoreError::from)?;

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|source| StoreError::Io {
                    path: parent.to_path_buf(),
                    source,
                })?;
        }

        let temp_path = path.with_extension("json.tmp");
        tokio::fs::write(&temp_path, bytes)
            .await
            .map_err(|source| StoreError::Io {
                path: temp_path.clone(),
                source,
            })?;
        tokio::fs::rename(&temp_path, path)
            .await
            .map_err(|source| StoreError::Io {
                path: path.clone(),
                source,
            })?;

        Ok(())
    }
}

/// Builds the document written when no usable file exists.
///
/// Contains the bootstrap account as the single `owner`, a placeholder roster,
/// placeholder fixtures one week apart starting a week from `now`, and default
/// settings. Every other section starts empty.
pub fn default_document(bootstrap: &BootstrapAccount, now: DateTime<Utc>) -> Document {
    let owner = User {
        id: bootstrap.discord_id.clone(),
        username: bootstrap.username.clone(),
        password_hash: bootstrap.password_hash.clone(),
        roles: vec![Role::Owner.to_string()],
        account_type: None,
        discord_id: Some(bootstrap.discord_id.clone()),
        avatar: None,
        created_at: now,
        last_login_at: None,
        suspended: false,
        banned: false,
    };

    let roster = (1..=DEFAULT_ROSTER_SIZE)
        .map(|slot| Player {
            id: uuid::Uuid::new_v4().to_string(),
            pseudo: format!("Joueur {}", slot),
            position: "Titulaire".to_string(),
            discord_id: None,
            joined_at: now,
        })
        .collect();

    let matches = (1..=DEFAULT_FIXTURE_COUNT)
        .map(|week| Match {
            id: uuid::Uuid::new_v4().to_string(),
            opponent: format!("Adversaire {}", week),
            competition: Some(DEFAULT_COMPETITION.to_string()),
            scheduled_at: now + Duration::weeks(week as i64),
            status: MatchStatus::Scheduled,
            score: None,
            created_by: SYSTEM_EXECUTOR.to_string(),
            created_at: now,
        })
        .collect();

    Document {
        users: vec![owner],
        roster,
        matches,
        settings: Settings::default(),
        ..Default::default()
    }
}
