//! CrudService: generic CRUD over the document store, plus request validation.

mod crud;
mod validation;
pub use crud::CrudService;
pub use validation::{ErrorKind, FieldError, FieldRule, RequestValidator, ValidationErrors};
