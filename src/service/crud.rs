//! Generic CRUD over any [`Entity`]: one store call per operation, typed in and out.

use crate::error::AppError;
use crate::model::{Entity, Record};
use crate::store::{Document, DocumentStore};
use rand::Rng;
use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

pub struct CrudService;

impl CrudService {
    /// All records in storage order.
    pub async fn list<E: Entity>(store: &dyn DocumentStore) -> Result<Vec<Record<E>>, AppError> {
        store
            .find_all(E::COLLECTION)
            .await?
            .into_iter()
            .map(decode)
            .collect()
    }

    /// A uniformly chosen record, or `None` when the collection is empty.
    pub async fn random<E: Entity>(store: &dyn DocumentStore) -> Result<Option<Record<E>>, AppError> {
        let count = store.count(E::COLLECTION).await?;
        let skip = random_index(count);
        tracing::debug!(collection = E::COLLECTION, count, skip, "random pick");
        store.find_nth(E::COLLECTION, skip).await?.map(decode).transpose()
    }

    pub async fn read<E: Entity>(store: &dyn DocumentStore, id: &str) -> Result<Option<Record<E>>, AppError> {
        let id = parse_id(id)?;
        store.find_by_id(E::COLLECTION, id).await?.map(decode).transpose()
    }

    /// Validate and insert. Returns the new identifier.
    pub async fn create<E: Entity>(store: &dyn DocumentStore, body: E::Body) -> Result<Uuid, AppError> {
        let entity = E::from_body(body)?;
        let fields = to_fields(&entity)?;
        store.insert(E::COLLECTION, fields).await
    }

    /// Validate the supplied fields and replace them. Returns whether the record existed.
    pub async fn update<E: Entity>(
        store: &dyn DocumentStore,
        id: &str,
        body: E::Body,
    ) -> Result<bool, AppError> {
        let id = parse_id(id)?;
        let changes = E::changes_from_body(body)?;
        let fields = to_fields(&changes)?;
        store.update_by_id(E::COLLECTION, id, fields).await
    }

    /// Returns whether the record existed.
    pub async fn delete<E: Entity>(store: &dyn DocumentStore, id: &str) -> Result<bool, AppError> {
        let id = parse_id(id)?;
        store.delete_by_id(E::COLLECTION, id).await
    }
}

/// floor(random() * count); 0 for an empty collection.
fn random_index(count: u64) -> u64 {
    if count == 0 {
        return 0;
    }
    rand::thread_rng().gen_range(0..count)
}

fn parse_id(id: &str) -> Result<Uuid, AppError> {
    Uuid::parse_str(id).map_err(|_| AppError::InvalidId(id.to_string()))
}

fn decode<E: Entity>(doc: Document) -> Result<Record<E>, AppError> {
    Ok(serde_json::from_value(doc.into_json())?)
}

fn to_fields<T: Serialize>(value: &T) -> Result<Map<String, Value>, AppError> {
    match serde_json::to_value(value)? {
        Value::Object(map) => Ok(map),
        other => Err(AppError::Store(format!("expected an object, got {}", other))),
    }
}
