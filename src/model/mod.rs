//! Entity models: field rules and the typed shapes of each collection.

mod department;
mod employee;
mod product;

pub use department::{Department, DepartmentBody, DepartmentChanges};
pub use employee::{Employee, EmployeeBody, EmployeeChanges};
pub use product::{Product, ProductBody, ProductChanges};

use crate::service::ValidationErrors;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use uuid::Uuid;

/// A collection served by the generic CRUD handlers.
///
/// `Body` is the loosely typed request body (every field optional and of any
/// JSON type). Validation turns it into either a full record (`Self`) for
/// create or a set of field replacements (`Changes`) for update.
pub trait Entity: Serialize + DeserializeOwned + Send + Sync + 'static {
    /// Collection name, also the URL segment.
    const COLLECTION: &'static str;

    type Body: DeserializeOwned + Send + 'static;
    type Changes: Serialize + Send + 'static;

    fn from_body(body: Self::Body) -> Result<Self, ValidationErrors>;

    fn changes_from_body(body: Self::Body) -> Result<Self::Changes, ValidationErrors>;
}

/// A stored entity with its identifier.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Record<E> {
    #[serde(rename = "_id")]
    pub id: Uuid,
    #[serde(flatten)]
    pub fields: E,
}
