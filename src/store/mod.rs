//! Document store: one collection per entity, records kept as JSON objects
//! addressed by a UUID assigned on insert.

mod memory;
mod postgres;

pub use memory::MemoryDocumentStore;
pub use postgres::{ensure_collections, ensure_database_exists, PgDocumentStore};

use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use uuid::Uuid;

/// Key under which the identifier appears in serialized records.
pub const ID_FIELD: &str = "_id";

#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    pub id: Uuid,
    pub fields: Map<String, Value>,
}

impl Document {
    /// Fields plus `_id`, as sent to clients.
    pub fn into_json(self) -> Value {
        let mut map = self.fields;
        map.insert(ID_FIELD.to_string(), Value::String(self.id.to_string()));
        Value::Object(map)
    }
}

#[async_trait]
pub trait DocumentStore: Send + Sync {
    async fn ping(&self) -> Result<(), AppError>;

    /// All documents in insertion order.
    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError>;

    async fn count(&self, collection: &str) -> Result<u64, AppError>;

    /// The document at position `skip` in insertion order.
    async fn find_nth(&self, collection: &str, skip: u64) -> Result<Option<Document>, AppError>;

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError>;

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, AppError>;

    /// Replace the given fields, leaving the rest untouched. Returns whether a document matched.
    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<bool, AppError>;

    /// Returns whether a document was removed.
    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<bool, AppError>;
}
