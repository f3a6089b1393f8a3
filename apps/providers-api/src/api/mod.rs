//! API routes module

use axum::Router;
use domain_catalogue::InMemoryCatalogueStore;

/// Create all API routes
pub fn routes(store: InMemoryCatalogueStore) -> Router {
    domain_catalogue::handlers::router(store)
}
