//! PostgreSQL subject store and database bootstrap.

use super::SubjectStore;
use crate::error::StoreError;
use crate::models::Subject;
use async_trait::async_trait;
use sqlx::postgres::PgConnectOptions;
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

const SUBJECT_COLUMNS: &str = "id, name";

#[derive(Clone)]
pub struct PgSubjectStore {
    pool: PgPool,
}

impl PgSubjectStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SubjectStore for PgSubjectStore {
    async fn list(&self) -> Result<Vec<Subject>, StoreError> {
        let sql = format!("SELECT {} FROM subjects ORDER BY created_at, id", SUBJECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let rows = sqlx::query_as::<_, Subject>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    async fn find(&self, id: Uuid) -> Result<Option<Subject>, StoreError> {
        let sql = format!("SELECT {} FROM subjects WHERE id = $1", SUBJECT_COLUMNS);
        tracing::debug!(sql = %sql, %id, "query");
        let row = sqlx::query_as::<_, Subject>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn insert(&self, name: &str) -> Result<Subject, StoreError> {
        let sql = format!("INSERT INTO subjects (name) VALUES ($1) RETURNING {}", SUBJECT_COLUMNS);
        tracing::debug!(sql = %sql, "query");
        let row = sqlx::query_as::<_, Subject>(&sql)
            .bind(name)
            .fetch_one(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update(&self, id: Uuid, name: &str) -> Result<Subject, StoreError> {
        let sql = format!(
            "UPDATE subjects SET name = $1 WHERE id = $2 RETURNING {}",
            SUBJECT_COLUMNS
        );
        tracing::debug!(sql = %sql, %id, "query");
        sqlx::query_as::<_, Subject>(&sql)
            .bind(name)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(StoreError::RecordNotFound)
    }

    async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let sql = "DELETE FROM subjects WHERE id = $1";
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(sql).bind(id).execute(&self.pool).await?;
        if result.rows_affected() == 0 {
            return Err(StoreError::RecordNotFound);
        }
        Ok(())
    }

    async fn ping(&self) -> Result<(), StoreError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), StoreError> {
    let (admin, db_name) = admin_options(database_url)?;
    let Some(db_name) = db_name.filter(|name| name != "postgres") else {
        return Ok(());
    };
    let mut conn: sqlx::PgConnection = admin.connect().await?;
    let exists: (bool,) =
        sqlx::query_as("SELECT EXISTS(SELECT 1 FROM pg_database WHERE datname = $1)")
            .bind(&db_name)
            .fetch_one(&mut conn)
            .await?;
    if !exists.0 {
        tracing::info!(database = %db_name, "creating database");
        sqlx::query(&format!("CREATE DATABASE {}", quote_ident(&db_name)))
            .execute(&mut conn)
            .await?;
    }
    Ok(())
}

/// Options for the `postgres` maintenance database on the same server, plus the target
/// database name when the URL names one.
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), StoreError> {
    let opts = PgConnectOptions::from_str(database_url)?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok((opts.database("postgres"), db_name))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_options_target_postgres_on_same_server() {
        let (admin, db) = admin_options("postgres://u:p@localhost:5432/tutors?sslmode=disable")
            .unwrap();
        assert_eq!(db.as_deref(), Some("tutors"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "localhost");
        assert_eq!(admin.get_port(), 5432);
    }

    #[test]
    fn slashes_in_query_do_not_change_database_name() {
        let url = "postgres://u:p@db:5432/tutors?sslmode=verify-full&sslrootcert=/etc/ssl/ca.pem";
        let (admin, db) = admin_options(url).unwrap();
        assert_eq!(db.as_deref(), Some("tutors"));
        assert_eq!(admin.get_database(), Some("postgres"));
        assert_eq!(admin.get_host(), "db");
    }

    #[test]
    fn url_without_database_has_no_target() {
        let (_, db) = admin_options("postgres://u:p@localhost:5432").unwrap();
        assert_eq!(db, None);
    }

    #[test]
    fn rejects_malformed_url() {
        assert!(admin_options("not a url").is_err());
    }

    #[test]
    fn quotes_identifiers() {
        assert_eq!(quote_ident("my\"db"), "\"my\"\"db\"");
    }
}
