//! Per-statement query execution over the shared pool.
//!
//! Each call acquires a connection, runs one statement, and releases the
//! connection back to the pool. Empty result sets are reported as `None`
//! rather than an error, and write statements report whether any row was
//! touched.

use sqlx::postgres::{PgArguments, PgRow};
use sqlx::query::{Query, QueryAs};
use sqlx::{FromRow, PgPool, Postgres, Row};
use todoctl_core::util::strip_string;
use tracing::info;

use super::{classify_connection, DbError};

/// Bindable statement parameter.
///
/// Variants map onto the Postgres column types the store uses: `BIGINT`
/// ids, `INTEGER` status values, and `TEXT` names.
#[derive(Debug, Clone, PartialEq)]
pub enum SqlParam {
    BigInt(i64),
    Int(i32),
    Text(String),
}

impl SqlParam {
    pub(crate) fn bind<'q>(
        &'q self,
        query: Query<'q, Postgres, PgArguments>,
    ) -> Query<'q, Postgres, PgArguments> {
        match self {
            SqlParam::BigInt(v) => query.bind(*v),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        }
    }

    pub(crate) fn bind_as<'q, T>(
        &'q self,
        query: QueryAs<'q, Postgres, T, PgArguments>,
    ) -> QueryAs<'q, Postgres, T, PgArguments> {
        match self {
            SqlParam::BigInt(v) => query.bind(*v),
            SqlParam::Int(v) => query.bind(*v),
            SqlParam::Text(v) => query.bind(v.as_str()),
        }
    }
}

/// Compose a parameterized `INSERT ... RETURNING id` for `table`.
pub(crate) fn build_insert(table: &str, fields: &[(&str, SqlParam)]) -> String {
    let columns: Vec<&str> = fields.iter().map(|(name, _)| *name).collect();
    let placeholders: Vec<String> = (1..=fields.len()).map(|i| format!("${i}")).collect();
    format!(
        "INSERT INTO {} ({}) VALUES ({}) RETURNING id",
        table,
        columns.join(", "),
        placeholders.join(", ")
    )
}

/// Executes individual statements against the pool.
#[derive(Clone)]
pub struct QueryExecutor {
    pool: PgPool,
    log_statements: bool,
}

impl QueryExecutor {
    /// Executor with statement logging enabled.
    pub fn new(pool: PgPool) -> Self {
        Self::with_statement_logging(pool, true)
    }

    pub fn with_statement_logging(pool: PgPool, log_statements: bool) -> Self {
        Self {
            pool,
            log_statements,
        }
    }

    fn log(&self, query: &str) {
        if self.log_statements {
            info!("sql: {}", strip_string(query));
        }
    }

    /// Run a SELECT expected to return any number of rows.
    ///
    /// `None` means the statement matched nothing.
    pub async fn select_many<T>(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Option<Vec<T>>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.log(query);
        let mut conn = self.pool.acquire().await.map_err(classify_connection)?;
        let mut stmt = sqlx::query_as::<Postgres, T>(query);
        for param in params {
            stmt = param.bind_as(stmt);
        }
        let rows = stmt.fetch_all(&mut *conn).await?;
        if rows.is_empty() {
            Ok(None)
        } else {
            Ok(Some(rows))
        }
    }

    /// Run a SELECT expected to return at most one row.
    pub async fn select_one<T>(
        &self,
        query: &str,
        params: &[SqlParam],
    ) -> Result<Option<T>, DbError>
    where
        T: for<'r> FromRow<'r, PgRow> + Send + Unpin,
    {
        self.log(query);
        let mut conn = self.pool.acquire().await.map_err(classify_connection)?;
        let mut stmt = sqlx::query_as::<Postgres, T>(query);
        for param in params {
            stmt = param.bind_as(stmt);
        }
        Ok(stmt.fetch_optional(&mut *conn).await?)
    }

    /// Insert one row into `table` and return its generated id.
    ///
    /// `None` means the insert produced no row.
    pub async fn insert(
        &self,
        table: &str,
        fields: &[(&str, SqlParam)],
    ) -> Result<Option<i64>, DbError> {
        let query = build_insert(table, fields);
        self.log(&query);
        let mut conn = self.pool.acquire().await.map_err(classify_connection)?;
        let mut stmt = sqlx::query(&query);
        for (_, param) in fields {
            stmt = param.bind(stmt);
        }
        let row = stmt.fetch_optional(&mut *conn).await?;
        match row {
            Some(row) => Ok(Some(row.try_get("id")?)),
            None => Ok(None),
        }
    }

    /// Run an UPDATE, reporting whether any row changed.
    pub async fn update(&self, query: &str, params: &[SqlParam]) -> Result<bool, DbError> {
        self.execute(query, params).await
    }

    /// Run a DELETE, reporting whether any row was removed.
    pub async fn delete(&self, query: &str, params: &[SqlParam]) -> Result<bool, DbError> {
        self.execute(query, params).await
    }

    async fn execute(&self, query: &str, params: &[SqlParam]) -> Result<bool, DbError> {
        self.log(query);
        let mut conn = self.pool.acquire().await.map_err(classify_connection)?;
        let mut stmt = sqlx::query(query);
        for param in params {
            stmt = param.bind(stmt);
        }
        let result = stmt.execute(&mut *conn).await?;
        Ok(result.rows_affected() > 0)
    }
}
