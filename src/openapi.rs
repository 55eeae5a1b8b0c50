use crate::service::Service;
use utoipa::OpenApi;

/// OpenAPI Specification for the Accounts Service
///
/// Generated at compile time from the route annotations.
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Accounts: `GET /accounts`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::accounts::list_accounts,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::account::Account
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Accounts", description = "Read-only account listing")
    ),
    info(
        description = "Read-only account listing service",
        title = "Accounts Service API",
        version = "0.1.0",
    )
)]
pub struct AccountsApiDoc;

/// OpenAPI Specification for the Billing Service
///
/// # Endpoints
/// - Health Check: `GET /health`
/// - Invoices: `GET /invoices`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health::health,
        crate::routes::invoices::list_invoices,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::invoice::Invoice
        )
    ),
    tags(
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Invoices", description = "Read-only invoice listing")
    ),
    info(
        description = "Read-only invoice listing service",
        title = "Billing Service API",
        version = "0.1.0",
    )
)]
pub struct BillingApiDoc;

/// OpenAPI document of the given service.
pub fn document(service: Service) -> utoipa::openapi::OpenApi {
    match service {
        Service::Accounts => AccountsApiDoc::openapi(),
        Service::Billing => BillingApiDoc::openapi(),
    }
}
