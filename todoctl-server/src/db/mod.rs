//! Database access layer: pool construction, per-statement execution, and
//! explicit transactions over PostgreSQL.

pub mod executor;
pub mod migrations;
pub mod pool;
pub mod tx;

pub use executor::{QueryExecutor, SqlParam};
pub use pool::{create_pool, create_pool_with_url};
pub use tx::TxExecutor;

use thiserror::Error;

/// Postgres "too many connections" SQLSTATE.
const TOO_MANY_CONNECTIONS: &str = "53300";

/// Database error taxonomy.
///
/// Connection failures are split into three distinguishable cases so callers
/// can tell a refused connect from an exhausted pool from a dropped link.
/// Everything else surfaces as [`DbError::Statement`].
#[derive(Debug, Error)]
pub enum DbError {
    #[error("connection refused: {source}")]
    ConnectionRefused { source: sqlx::Error },

    #[error("too many connections: {source}")]
    TooManyConnections { source: sqlx::Error },

    #[error("connection lost: {source}")]
    ConnectionLost { source: sqlx::Error },

    #[error("statement failed: {0}")]
    Statement(#[from] sqlx::Error),

    #[error("no active transaction")]
    NoTransaction,
}

/// Map a connection-path failure onto the [`DbError`] taxonomy.
pub(crate) fn classify_connection(source: sqlx::Error) -> DbError {
    match &source {
        sqlx::Error::Io(io) if io.kind() == std::io::ErrorKind::ConnectionRefused => {
            DbError::ConnectionRefused { source }
        }
        sqlx::Error::Io(_) | sqlx::Error::PoolClosed => DbError::ConnectionLost { source },
        sqlx::Error::PoolTimedOut => DbError::TooManyConnections { source },
        sqlx::Error::Database(db) if db.code().as_deref() == Some(TOO_MANY_CONNECTIONS) => {
            DbError::TooManyConnections { source }
        }
        _ => DbError::Statement(source),
    }
}
