//! Connection-source capability and shippable implementations.
//!
//! # Responsibility
//! - Define the capability the repository uses to obtain one connection per
//!   operation.
//! - Provide file-backed and in-memory sources for common embeddings.
//!
//! # Invariants
//! - Every yielded connection is bootstrapped: pragmas applied, migrations
//!   current.
//! - A yielded connection is owned by exactly one in-flight operation and is
//!   released when dropped.

use super::open::{bootstrap_connection, open_db};
use super::DbResult;
use rusqlite::Connection;
use std::path::PathBuf;
use uuid::Uuid;

/// Capability for acquiring a live database connection on demand.
///
/// The repository does not manage connection lifecycle beyond one operation:
/// it acquires, uses and drops. Callers with their own issuance policy (a
/// pool, a test double) implement this trait.
pub trait ConnectionSource {
    /// Yields a live connection with pragmas applied and migrations current.
    fn connection(&self) -> DbResult<Connection>;
}

/// Source backed by a SQLite database file.
///
/// Each acquisition opens a fresh connection to the same file via
/// [`open_db`]; concurrent issuance safety is SQLite's own file locking.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ConnectionSource for FileSource {
    fn connection(&self) -> DbResult<Connection> {
        open_db(&self.path)
    }
}

/// Source backed by a named shared-cache in-memory database.
///
/// A plain in-memory database is private to one connection, which would make
/// per-operation acquisition see an empty store every time. This source
/// instead opens a uniquely named `cache=shared` database and keeps one
/// anchor connection alive for its own lifetime, so data persists across
/// acquisitions and disappears when the source is dropped.
#[derive(Debug)]
pub struct MemorySource {
    uri: String,
    _anchor: Connection,
}

impl MemorySource {
    /// Creates an empty in-memory store with migrations applied.
    ///
    /// The database name is unique per source, so two sources never share
    /// state.
    pub fn new() -> DbResult<Self> {
        let uri = format!("file:customer-db-{}?mode=memory&cache=shared", Uuid::new_v4());
        let mut anchor = Connection::open(&uri)?;
        bootstrap_connection(&mut anchor)?;
        Ok(Self {
            uri,
            _anchor: anchor,
        })
    }
}

impl ConnectionSource for MemorySource {
    fn connection(&self) -> DbResult<Connection> {
        let mut conn = Connection::open(&self.uri)?;
        // Pragmas are per-connection; the migration check is a no-op after
        // the anchor bootstrap.
        bootstrap_connection(&mut conn)?;
        Ok(conn)
    }
}
