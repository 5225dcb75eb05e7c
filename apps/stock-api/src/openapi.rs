//! OpenAPI documentation configuration

use utoipa::OpenApi;

/// Combined OpenAPI documentation for Stock API
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Stock API",
        version = "0.1.0",
        description = "Automotive parts inventory with restock priority ranking",
        license(name = "MIT")
    ),
    servers(
        (url = "http://localhost:8080", description = "Local development server")
    ),
    nest(
        (path = "/api/stock", api = domain_stock::handlers::StockApiDoc),
        (path = "/api/restock", api = domain_stock::handlers::RestockApiDoc)
    )
)]
pub struct ApiDoc;
