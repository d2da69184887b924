//! Response helpers shared by the entity handlers.

use axum::{http::StatusCode, Json};
use serde::{Deserialize, Serialize};

/// Body of `get-by-id` and `get-random` misses.
pub const NOT_FOUND: &str = "Not found";
/// Body of `update-by-id` and `delete-by-id` misses.
pub const NOT_FOUND_ELLIPSIS: &str = "Not found...";
pub const OK: &str = "OK";

/// `{ "message": ... }`, used for acknowledgements and errors alike.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct MessageBody<T> {
    pub message: T,
}

pub fn success_one_ok<T: Serialize>(data: T) -> (StatusCode, Json<T>) {
    (StatusCode::OK, Json(data))
}

pub fn success_many<T: Serialize>(data: Vec<T>) -> (StatusCode, Json<Vec<T>>) {
    (StatusCode::OK, Json(data))
}

/// The bare `{ "message": "OK" }` returned by create, update and delete.
pub fn acknowledged() -> (StatusCode, Json<MessageBody<&'static str>>) {
    (StatusCode::OK, Json(MessageBody { message: OK }))
}
