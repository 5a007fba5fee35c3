use super::handlers;
use axum::{
    routing::{get, put},
    Router,
};

/// Creates the domains router
pub fn domains_routes() -> Router {
    Router::new()
        .route(
            "/rdap/domains",
            get(handlers::search_domains).post(handlers::create_domain),
        )
        .route("/rdap/domains/:handle", put(handlers::update_domain))
}
