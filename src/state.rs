//! Shared application state for all routes. The store is the only shared resource.

use crate::config::{Settings, StoreKind};
use crate::error::AppError;
use crate::model::{Department, Employee, Entity, Product};
use crate::store::{ensure_collections, ensure_database_exists, DocumentStore, MemoryDocumentStore, PgDocumentStore};
use std::sync::Arc;

/// Collections created on startup.
pub const COLLECTIONS: &[&str] = &[Employee::COLLECTION, Department::COLLECTION, Product::COLLECTION];

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
}

impl AppState {
    pub fn new(store: impl DocumentStore + 'static) -> Self {
        Self {
            store: Arc::new(store),
        }
    }

    /// Build the configured store. For PostgreSQL this creates the database,
    /// schema and collection tables when missing.
    pub async fn from_settings(settings: &Settings) -> Result<Self, AppError> {
        match settings.store {
            StoreKind::Memory => {
                tracing::warn!("using in-memory store; data is lost on exit");
                Ok(Self::new(MemoryDocumentStore::new()))
            }
            StoreKind::Postgres => {
                ensure_database_exists(&settings.database_url).await?;
                let pool = sqlx::postgres::PgPoolOptions::new()
                    .max_connections(settings.max_connections)
                    .connect(&settings.database_url)
                    .await?;
                ensure_collections(&pool, &settings.schema, COLLECTIONS).await?;
                Ok(Self::new(PgDocumentStore::new(pool, settings.schema.clone())))
            }
        }
    }
}
