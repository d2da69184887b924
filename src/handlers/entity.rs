//! Entity CRUD handlers: list, random, read, create, update, delete.
//!
//! Written once and instantiated per [`Entity`]; each handler makes a single
//! store call through [`CrudService`].

use crate::error::AppError;
use crate::extractors::JsonBody;
use crate::model::Entity;
use crate::response::{acknowledged, success_many, success_one_ok, NOT_FOUND, NOT_FOUND_ELLIPSIS};
use crate::service::CrudService;
use crate::state::AppState;
use axum::extract::{Path, State};
use axum::response::IntoResponse;

pub async fn list<E: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let rows = CrudService::list::<E>(state.store.as_ref()).await?;
    Ok(success_many(rows))
}

pub async fn random<E: Entity>(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::random::<E>(state.store.as_ref())
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;
    Ok(success_one_ok(row))
}

pub async fn read<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let row = CrudService::read::<E>(state.store.as_ref(), &id)
        .await?
        .ok_or(AppError::NotFound(NOT_FOUND))?;
    Ok(success_one_ok(row))
}

pub async fn create<E: Entity>(
    State(state): State<AppState>,
    JsonBody(body): JsonBody<E::Body>,
) -> Result<impl IntoResponse, AppError> {
    let id = CrudService::create::<E>(state.store.as_ref(), body).await?;
    tracing::info!(collection = E::COLLECTION, %id, "created");
    Ok(acknowledged())
}

pub async fn update<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
    JsonBody(body): JsonBody<E::Body>,
) -> Result<impl IntoResponse, AppError> {
    if !CrudService::update::<E>(state.store.as_ref(), &id, body).await? {
        return Err(AppError::NotFound(NOT_FOUND_ELLIPSIS));
    }
    tracing::info!(collection = E::COLLECTION, %id, "updated");
    Ok(acknowledged())
}

pub async fn delete<E: Entity>(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    if !CrudService::delete::<E>(state.store.as_ref(), &id).await? {
        return Err(AppError::NotFound(NOT_FOUND_ELLIPSIS));
    }
    tracing::info!(collection = E::COLLECTION, %id, "deleted");
    Ok(acknowledged())
}
