//! Explicit transactions.
//!
//! A [`TxExecutor`] owns one connection for its whole lifetime and moves
//! through begin, statements, then exactly one commit or rollback. Commit on
//! a finished transaction is an error; rollback on a finished transaction
//! degrades to `Ok(false)`.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::{FromRow, PgPool, Postgres, Row, Transaction};
use todoctl_core::util::strip_string;
use tracing::info;

use super::executor::{build_insert, SqlParam};
use super::{classify_connection, DbError};

/// Runs a statement sequence inside a single transaction.
pub struct TxExecutor {
    tx: Option<Transaction<'static, Postgres>>,
    log_statements: bool,
}

impl TxExecutor {
    /// Begin a transaction on a connection taken from the pool.
    pub async fn begin(pool: &PgPool) -> Result<Self, DbError> {
        let tx = pool.begin().await.map_err(classify_connection)?;
        Ok(Self {
            tx: Some(tx),
            log_statements: true,
        })
    }

    pub fn with_statement_logging(mut self, enabled: bool) -> Self {
        self.log_statements = enabled;
        self
    }

    fn log(&self, query: &str) {
        if self.log_statements {
            info!("sql (tx): {}", strip_string(query));
        }
    }

    fn active(&mut self) -> Result<&mut Transaction<'static, Postgres>, DbError> {
        self.tx.as_mut().ok_or(DbError::NoTransaction)
    }

    /// Run a SELECT inside the transaction. `None` means no rows matched.
    pub async fn select_many<T>(
        &mut self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Option<Vec<T>>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.log(query);
        let tx = self.active()?;
        let mut stmt = sqlx::query_as::<Postgres, T>(query);
        for param in params {
            stmt = param.bind_as(stmt);
        }
        let rows = stmt.fetch_all(&mut **tx).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }

    /// Run a single-row SELECT inside the transaction.
    pub async fn select_one<T>(
        &mut self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Option<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.log(query);
        let tx = self.active()?;
        let mut stmt = sqlx::query_as::<Postgres, T>(query);
        for param in params {
            stmt = param.bind_as(stmt);
        }
        Ok(stmt.fetch_optional(&mut **tx).await?)
    }

    /// Insert one row inside the transaction, returning its generated id.
    pub async fn insert(
        &mut self,
        table: &str,
        fields: &[(&str, SqlParam)],
    ) -> Result<Option<i64>, DbError> {
        let query = build_insert(table, fields);
        self.log(&query);
        let tx = self.active()?;
        let mut stmt = sqlx::query(&query);
        for (_, param) in fields {
            stmt = param.bind(stmt);
        }
        let row = stmt.fetch_optional(&mut **tx).await?;
        match row {
            Some(row) => Ok(Some(row.try_get("id")?)),
            None => Ok(None),
        }
    }

    /// Run an UPDATE inside the transaction, reporting whether a row changed.
    pub async fn update(&mut self, query: &str, params: &[SqlParam]) -> Result<bool, DbError> {
        self.log(query);
        let tx = self.active()?;
        let mut stmt = sqlx::query(query);
        for param in params {
            stmt = param.bind(stmt);
        }
        let result = stmt.execute(&mut **tx).await?;
        Ok(result.rows_affected() > 0)
    }

    /// Commit the transaction. Fails with [`DbError::NoTransaction`] if it
    /// was already committed or rolled back.
    pub async fn commit(&mut self) -> Result<(), DbError> {
        let tx = self.tx.take().ok_or(DbError::NoTransaction)?;
        tx.commit().await?;
        Ok(())
    }

    /// Roll back the transaction.
    ///
    /// Returns `Ok(false)` when there is nothing to roll back, so callers on
    /// an error path never turn cleanup into a second failure.
    pub async fn rollback(&mut self) -> Result<bool, DbError> {
        match self.tx.take() {
            Some(tx) => {
                tx.rollback().await?;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    #[cfg(test)]
    fn detached() -> Self {
        Self {
            tx: None,
            log_statements: false,
        }
    }
}
