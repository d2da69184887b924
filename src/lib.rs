//! company-api: REST CRUD backend for employees, departments and products.

pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod model;
pub mod response;
pub mod routes;
pub mod service;
pub mod state;
pub mod store;

pub use config::{Settings, StoreKind};
pub use error::{AppError, ConfigError};
pub use model::{Department, Employee, Entity, Product, Record};
pub use response::MessageBody;
pub use routes::{app, common_routes_with_ready, entity_routes};
pub use service::CrudService;
pub use state::AppState;
pub use store::{DocumentStore, MemoryDocumentStore, PgDocumentStore};
