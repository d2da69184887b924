//! Entity CRUD routes. Every collection gets the same six routes under
//! `/{collection}`; `/random` is matched before `/:id`. A method with no
//! handler on a known path answers like an unknown path.

use super::common::not_found;
use crate::handlers::entity::{create, delete as delete_handler, list, random, read, update};
use crate::model::{Department, Employee, Entity, Product};
use crate::state::AppState;
use axum::{routing::get, Router};

/// Routes for one collection, without state.
pub fn collection_routes<E: Entity>() -> Router<AppState> {
    let base = format!("/{}", E::COLLECTION);
    Router::new()
        .route(&base, get(list::<E>).post(create::<E>).fallback(not_found))
        .route(&format!("{}/random", base), get(random::<E>).fallback(not_found))
        .route(
            &format!("{}/:id", base),
            get(read::<E>)
                .put(update::<E>)
                .delete(delete_handler::<E>)
                .fallback(not_found),
        )
}

/// Employees, departments and products.
pub fn entity_routes(state: AppState) -> Router {
    Router::new()
        .merge(collection_routes::<Employee>())
        .merge(collection_routes::<Department>())
        .merge(collection_routes::<Product>())
        .with_state(state)
}
