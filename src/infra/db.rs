//! SQLite connection and schema.

use crate::error::AppError;
use rusqlite::Connection;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// Database file location, relative to the working directory.
pub const DEFAULT_DB_PATH: &str = "database/estudiantes.db";

const SCHEMA: &str = include_str!("../../sql/schema.sql");

#[derive(Debug, Clone)]
enum Location {
    File(PathBuf),
    Memory,
}

/// Storage client: owns the single process-wide connection.
///
/// Built once at startup and passed by reference to every operation. The
/// connection slot is empty when opening failed or after [`DbPool::close`];
/// the next access tries to reopen it.
pub struct DbPool {
    location: Location,
    conn: Mutex<Option<Connection>>,
}

/// Initialize DB at path and ensure the schema, failing on any error.
pub fn init_db(db_path: &Path) -> Result<DbPool, AppError> {
    let location = Location::File(db_path.to_path_buf());
    let conn = open_connection(&location)?;
    log::info!("DB opened at {:?}", db_path);
    Ok(DbPool {
        location,
        conn: Mutex::new(Some(conn)),
    })
}

/// Fresh in-memory database with the schema applied.
#[doc(hidden)]
pub fn init_test_db() -> DbPool {
    let location = Location::Memory;
    let conn = open_connection(&location).expect("in-memory db");
    DbPool {
        location,
        conn: Mutex::new(Some(conn)),
    }
}

impl DbPool {
    /// Open the database at `db_path`. A failure is logged and leaves the pool
    /// closed; operations then report [`AppError::Unavailable`] until a reopen
    /// succeeds.
    pub fn open(db_path: &Path) -> DbPool {
        init_db(db_path).unwrap_or_else(|e| {
            log::error!("DB open failed at {:?}: {}", db_path, e);
            DbPool {
                location: Location::File(db_path.to_path_buf()),
                conn: Mutex::new(None),
            }
        })
    }

    pub fn is_open(&self) -> bool {
        self.conn.lock().map(|c| c.is_some()).unwrap_or(false)
    }

    /// Release the connection. Safe to call more than once.
    pub fn close(&self) {
        let Ok(mut slot) = self.conn.lock() else {
            log::error!("DB lock poisoned, connection not closed");
            return;
        };
        if let Some(conn) = slot.take() {
            match conn.close() {
                Ok(()) => log::info!("DB connection closed"),
                Err((_, e)) => log::error!("DB close failed: {}", e),
            }
        }
    }
}

/// Run `f` against the connection, reopening it first if it is closed.
pub(crate) fn with_connection<T>(
    pool: &DbPool,
    f: impl FnOnce(&Connection) -> Result<T, AppError>,
) -> Result<T, AppError> {
    let mut slot = pool
        .conn
        .lock()
        .map_err(|e| AppError::Db(format!("db lock: {}", e)))?;
    if slot.is_none() {
        match open_connection(&pool.location) {
            Ok(conn) => {
                log::info!("DB connection reopened");
                *slot = Some(conn);
            }
            Err(e) => {
                log::error!("DB reopen failed: {}", e);
                return Err(AppError::Unavailable);
            }
        }
    }
    match slot.as_ref() {
        Some(conn) => f(conn),
        None => Err(AppError::Unavailable),
    }
}

fn open_connection(location: &Location) -> Result<Connection, AppError> {
    let conn = match location {
        Location::File(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                std::fs::create_dir_all(parent)?;
            }
            Connection::open(path)?
        }
        Location::Memory => Connection::open_in_memory()?,
    };
    ensure_schema(&conn)?;
    Ok(conn)
}

fn ensure_schema(conn: &Connection) -> Result<(), AppError> {
    conn.execute_batch(SCHEMA)?;
    log::debug!("schema ensured");
    Ok(())
}
