//! In-process document store. Used by the test suite and by `COMPANY_STORE=memory`.

use super::{Document, DocumentStore};
use crate::error::AppError;
use async_trait::async_trait;
use serde_json::{Map, Value};
use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};
use uuid::Uuid;

type Collections = HashMap<String, Vec<Document>>;

#[derive(Default)]
pub struct MemoryDocumentStore {
    collections: RwLock<Collections>,
}

impl MemoryDocumentStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Collections>, AppError> {
        self.collections
            .read()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Collections>, AppError> {
        self.collections
            .write()
            .map_err(|_| AppError::Store("memory store lock poisoned".into()))
    }
}

#[async_trait]
impl DocumentStore for MemoryDocumentStore {
    async fn ping(&self) -> Result<(), AppError> {
        self.read().map(|_| ())
    }

    async fn find_all(&self, collection: &str) -> Result<Vec<Document>, AppError> {
        Ok(self.read()?.get(collection).cloned().unwrap_or_default())
    }

    async fn count(&self, collection: &str) -> Result<u64, AppError> {
        Ok(self.read()?.get(collection).map_or(0, |docs| docs.len() as u64))
    }

    async fn find_nth(&self, collection: &str, skip: u64) -> Result<Option<Document>, AppError> {
        let Ok(index) = usize::try_from(skip) else {
            return Ok(None);
        };
        Ok(self
            .read()?
            .get(collection)
            .and_then(|docs| docs.get(index))
            .cloned())
    }

    async fn find_by_id(&self, collection: &str, id: Uuid) -> Result<Option<Document>, AppError> {
        Ok(self
            .read()?
            .get(collection)
            .and_then(|docs| docs.iter().find(|d| d.id == id))
            .cloned())
    }

    async fn insert(&self, collection: &str, fields: Map<String, Value>) -> Result<Uuid, AppError> {
        let id = Uuid::new_v4();
        tracing::debug!(collection, %id, "insert");
        self.write()?
            .entry(collection.to_string())
            .or_default()
            .push(Document { id, fields });
        Ok(id)
    }

    async fn update_by_id(
        &self,
        collection: &str,
        id: Uuid,
        fields: Map<String, Value>,
    ) -> Result<bool, AppError> {
        tracing::debug!(collection, %id, "update");
        let mut guard = self.write()?;
        let Some(doc) = guard
            .get_mut(collection)
            .and_then(|docs| docs.iter_mut().find(|d| d.id == id))
        else {
            return Ok(false);
        };
        doc.fields.extend(fields);
        Ok(true)
    }

    async fn delete_by_id(&self, collection: &str, id: Uuid) -> Result<bool, AppError> {
        tracing::debug!(collection, %id, "delete");
        let mut guard = self.write()?;
        let Some(docs) = guard.get_mut(collection) else {
            return Ok(false);
        };
        let before = docs.len();
        docs.retain(|d| d.id != id);
        Ok(docs.len() != before)
    }
}
