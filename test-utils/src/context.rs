use entity::prelude::Document;
use std::{path::PathBuf, sync::Arc};
use tempfile::TempDir;
use time::Duration;
use tower_sessions::{Expiry, MemoryStore, Session};

use crate::error::TestError;

/// File name of the store document inside the test directory.
pub const DATA_FILE_NAME: &str = "panel.json";

/// Test context containing a temporary data directory and a session.
///
/// The directory and everything in it are removed when the context is dropped.
pub struct TestContext {
    dir: TempDir,

    /// Session shared by all calls to `session()`.
    ///
    /// Initialized lazily on first access.
    pub session: Option<Session>,
}

impl TestContext {
    /// Creates a context with an empty temporary directory and no data file.
    pub fn new() -> Result<Self, TestError> {
        Ok(Self {
            dir: tempfile::tempdir()?,
            session: None,
        })
    }

    /// Path the store should be opened at.
    pub fn data_path(&self) -> PathBuf {
        self.dir.path().join(DATA_FILE_NAME)
    }

    pub fn write_document(&self, document: &Document) -> Result<(), TestError> {
        let bytes = serde_json::to_vec_pretty(document)?;
        std::fs::write(self.data_path(), bytes)?;
        Ok(())
    }

    /// Overwrites the data file with arbitrary content, valid JSON or not.
    pub fn write_raw(&self, contents: &str) -> Result<(), TestError> {
        std::fs::write(self.data_path(), contents)?;
        Ok(())
    }

    /// Reads the document currently on disk, bypassing the store.
    pub fn read_document(&self) -> Result<Document, TestError> {
        let bytes = std::fs::read(self.data_path())?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Gets or creates the test session.
    ///
    /// Subsequent calls return the same session instance.
    pub fn session(&mut self) -> &Session {
        self.session.get_or_insert_with(new_session)
    }
}

/// Creates a standalone session backed by its own in-memory store.
///
/// Use when a test needs several independently authenticated callers.
pub fn new_session() -> Session {
    Session::new(
        None,
        Arc::new(MemoryStore::default()),
        Some(Expiry::OnInactivity(Duration::days(7))),
    )
}
