use super::handlers;
use axum::{
    routing::{get, put},
    Router,
};

/// Creates the entities router
pub fn entities_routes() -> Router {
    Router::new()
        .route(
            "/rdap/entities",
            get(handlers::search_entities).post(handlers::create_entity),
        )
        .route("/rdap/entities/:handle", put(handlers::update_entity))
}
