//! Infrastructure: SQLite connection and schema.

pub mod db;

pub(crate) use db::with_connection;
pub use db::{init_db, DbPool, DEFAULT_DB_PATH};
