//! SQLite storage bootstrap for Notely core.
//!
//! # Responsibility
//! - Open and configure SQLite connections for Notely core.
//! - Verify the expected `notes` schema before handing out connections.
//!
//! # Invariants
//! - Returned connections have passed the schema check.
//! - Schema provisioning is an explicit, separate step (`schema::provision_schema`);
//!   opening a database never creates tables implicitly.

use std::error::Error;
use std::fmt::{Display, Formatter};

mod open;
pub mod schema;

pub use open::{open_db, open_db_in_memory};

pub type DbResult<T> = Result<T, DbError>;

/// Storage-unavailable error surfaced by connection bootstrap.
#[derive(Debug)]
pub enum DbError {
    Sqlite(rusqlite::Error),
    MissingTable(&'static str),
    MissingColumn {
        table: &'static str,
        column: &'static str,
    },
}

impl Display for DbError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::MissingTable(table) => {
                write!(f, "database schema is missing required table `{table}`")
            }
            Self::MissingColumn { table, column } => write!(
                f,
                "database schema is missing required column `{table}.{column}`"
            ),
        }
    }
}

impl Error for DbError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::MissingTable(_) | Self::MissingColumn { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for DbError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}
