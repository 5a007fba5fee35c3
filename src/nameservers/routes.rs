use super::handlers;
use axum::{
    routing::{get, put},
    Router,
};

/// Creates the nameservers router
pub fn nameservers_routes() -> Router {
    Router::new()
        .route(
            "/rdap/nameservers",
            get(handlers::search_nameservers).post(handlers::create_nameserver),
        )
        .route("/rdap/nameservers/:handle", put(handlers::update_nameserver))
}
