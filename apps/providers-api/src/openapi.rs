//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for the Providers API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Providers API",
        version = "0.1.0",
        description = "Provider catalogue management API",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api", api = domain_catalogue::ApiDoc)
    ),
    tags(
        (name = "CatalogueItems", description = "Provider catalogue endpoints")
    )
)]
pub struct ApiDoc;
