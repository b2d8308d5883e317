//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for all APIs
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Readopt API",
        version = "0.1.0",
        description = "Backend for the Readopt used books marketplace"
    ),
    servers(
        (url = "http://localhost:8000", description = "Local development server")
    ),
    paths(crate::api::root::read_root, crate::api::root::test_database),
    components(schemas(crate::api::root::RootMessage, crate::api::root::DiagnosticReport)),
    nest(
        (path = "/api/listings", api = domain_listings::ApiDoc),
        (path = "/api/users", api = domain_users::ApiDoc)
    ),
    tags(
        (name = "Status", description = "Liveness and database diagnostics"),
        (name = "Listings", description = "Book listings for sale"),
        (name = "Users", description = "Marketplace users")
    )
)]
pub struct ApiDoc;
