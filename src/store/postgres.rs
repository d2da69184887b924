//! PostgreSQL-backed document store. Each collection is a table in the
//! configured schema holding one JSONB document per row; `seq` keeps
//! insertion order.

use super::{Document, DocumentStore};
use crate::error::{AppError, ConfigError};
use async_trait::async_trait;
use serde_json::{Map, Value};
use sqlx::postgres::{PgConnectOptions, PgConnection};
use sqlx::{ConnectOptions, PgPool};
use std::str::FromStr;
use uuid::Uuid;

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
    schema: String,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool, schema: impl Into<String>) -> Self {
        Self {
            pool,
            schema: schema.into(),
        }
    }

    fn table(&self, collection: &str) -> String {
        qualified_table(&self.schema, collection)
    }
}

/// Schema-qualified, quoted table name for a collection (e.g. `"company"."employees"`).
fn qualified_table(schema: &str, collection: &str) -> String {
    format!("{}.{}", quote_ident(schema), quote_ident(collection))
}

fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn into_document(id: Uuid, doc: Value) -> Result<Document, AppError> {
    match doc {
        Value::Object(fields) => Ok(Document { id, fields }),
        other => Err(AppError::Store(format!(
            "document {} is not an object: {}",
            id, other
        ))),
    }
}

/// Create the schema and one table per collection if they do not exist.
pub async fn ensure_collections(
    pool: &PgPool,
    schema: &str,
    collections: &[&str],
) -> Result<(), AppError> {
    sqlx::query(&format!("CREATE SCHEMA IF NOT EXISTS {}", quote_ident(schema)))
        .execute(pool)
        .await?;

    for collection in collections {
        let q_table = qualified_table(schema, collection);
        let ddl = format!(
            r#"
            CREATE TABLE IF NOT EXISTS {} (
                id UUID PRIMARY KEY,
                seq BIGSERIAL NOT NULL,
                doc JSONB NOT NULL,
                created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
                updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
            )
            "#,
            q_table
        );
        sqlx::query(&ddl).execute(pool).await?;
        tracing::info!(schema, collection, "collection ready");
    }
    Ok(())
}

/// Ensure the database in `database_url` exists; create it if not. Connects to the
/// default `postgres` database to run CREATE DATABASE. Call before creating the main pool.
pub async fn ensure_database_exists(database_url: &str) -> Result<(), AppError> {
    let (admin, db_name) = admin_options(database_url)?;
    let Some(db_name) = db_name.filter(|name| name != "postgres") else {
        return Ok(());
    };
    let mut conn: PgConnection = admin.connect().await?;
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

/// Options for the `postgres` maintenance database on the same server, and the
/// database named by the URL (if any).
fn admin_options(database_url: &str) -> Result<(PgConnectOptions, Option<String>), ConfigError> {
    let opts = PgConnectOptions::from_str(database_url)
        .map_err(|e| ConfigError::DatabaseUrl(e.to_string()))?;
    let db_name = opts
        .get_database()
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(String::from);
    Ok((opts.database("postgres"), db_name))
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn ping(&self) -> Result<(), AppError> {
        sqlx::query("SELECT 1").fetch_optional(&self.pool).await?;
        Ok(())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        let sql = format!("SELECT id, doc FROM {} ORDER BY seq", self.table(collection));
        tracing::debug!(sql = %sql, "query");
        let rows: Vec<(Uuid, Value)> = sqlx::query_as(&sql).fetch_all(&self.pool).await?;
        rows.into_iter()
            .map(|(id, doc)| into_document(id, doc))
            .collect()
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        let sql = format!("SELECT COUNT(*) FROM {}", self.table(collection));
        tracing::debug!(sql = %sql, "query");
        let (count,): (i64,) = sqlx::query_as(&sql).fetch_one(&self.pool).await?;
        Ok(u64::try_from(count).unwrap_or(0))
    }

    async fn find_nth(&self, collection: &str, skip: u64) -> Result<Option<Document>, AppError> {
        let Ok(offset) = i64::try_from(skip) else {
            return Ok(None);
        };
        let sql = format!(
            "SELECT id, doc FROM {} ORDER BY seq OFFSET $1 LIMIT 1",
            self.table(collection)
        );
        tracing::debug!(sql = %sql, offset, "query");
        let row: Option<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(offset)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(id, doc)| into_document(id, doc)).transpose()
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError> {
        let sql = format!("SELECT id, doc FROM {} WHERE id = $1", self.table(collection));
        tracing::debug!(sql = %sql, %id, "query");
        let row: Option<(Uuid, Value)> = sqlx::query_as(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        row.map(|(id, doc)| into_document(id, doc)).transpose()
    }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        let sql = format!("INSERT INTO {} (id, doc) VALUES ($1, $2)", self.table(collection));
        tracing::debug!(sql = %sql, %id, "query");
        sqlx::query(&sql)
            .bind(id)
            .bind(Value::Object(fields))
            .execute(&self.pool)
            .await?;
        Ok(id)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<bool, AppError> {
        let sql = format!(
            "UPDATE {} SET doc = doc || $2, updated_at = NOW() WHERE id = $1",
            self.table(collection)
        );
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql)
            .bind(id)
            .bind(Value::Object(fields))
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<bool, AppError> {
        let sql = format!("DELETE FROM {} WHERE id = $1", self.table(collection));
        tracing::debug!(sql = %sql, %id, "query");
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}
