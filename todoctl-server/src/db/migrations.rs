//! Schema setup, run once at startup before serving traffic.

use sqlx::PgPool;
use tracing::info;

use super::DbError;

/// Create the `todos` table if it does not exist yet.
pub async fn run(pool: &PgPool) -> Result<(), DbError> {
    info!("running migrations");

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS todos (
            id BIGSERIAL PRIMARY KEY,
            name TEXT NOT NULL,
            status INTEGER NOT NULL DEFAULT 0
        )
        "#,
    )
    .execute(pool)
    .await?;

    info!("migrations complete");
    Ok(())
}
