//! Idempotent DDL for the subjects table.

use crate::error::StoreError;
use sqlx::PgPool;

const STATEMENTS: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS subjects (
        id UUID PRIMARY KEY DEFAULT gen_random_uuid(),
        name VARCHAR(30) NOT NULL,
        created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
    )
    "#,
    "ALTER TABLE subjects ADD COLUMN IF NOT EXISTS created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()",
];

/// Create the subjects table if missing. Safe to run on every startup.
pub async fn apply_migrations(pool: &PgPool) -> Result<(), StoreError> {
    // gen_random_uuid() is built in from PostgreSQL 13; older servers need pgcrypto,
    // which may require privileges we do not have.
    if let Err(e) = sqlx::query("CREATE EXTENSION IF NOT EXISTS pgcrypto").execute(pool).await {
        tracing::debug!(error = %e, "pgcrypto not created");
    }
    for sql in STATEMENTS {
        tracing::debug!(sql = %sql.trim(), "migration");
        sqlx::query(sql).execute(pool).await?;
    }
    tracing::info!(statements = STATEMENTS.len(), "migrations applied");
    Ok(())
}
