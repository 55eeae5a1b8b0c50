use crate::catalog::RecordSource;
use crate::error::ApiError;
use crate::models::{Account, Invoice};
use crate::service::Service;
use actix_web::{HttpRequest, HttpResponse, web};

/// # Health Check Endpoint
///
/// `GET /health`, mounted on both services.
pub mod health;

/// # Account Listing Endpoint
///
/// `GET /accounts`, mounted on the accounts service only.
pub mod accounts;

/// # Invoice Listing Endpoint
///
/// `GET /invoices`, mounted on the billing service only.
pub mod invoices;

/// Shared "serve a record source as a JSON list" helper
pub mod listing;


/// # Accounts Route Table
///
/// Registers the accounts service identity, its record source and its two
/// routes. Everything else falls through to [`not_found`] once the app sets
/// it as the default service.
///
/// ```text
/// GET /health   - {"status":"ok","service":"accounts"}
/// GET /accounts - account list
/// ```
pub fn configure_accounts(
    source: web::Data<dyn RecordSource<Account>>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(Service::Accounts))
            .app_data(source)
            .service(health::health)
            .service(accounts::list_accounts);
    }
}

/// # Billing Route Table
///
/// ```text
/// GET /health   - {"status":"ok","service":"billing"}
/// GET /invoices - invoice list
/// ```
pub fn configure_billing(
    source: web::Data<dyn RecordSource<Invoice>>,
) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        cfg.app_data(web::Data::new(Service::Billing))
            .app_data(source)
            .service(health::health)
            .service(invoices::list_invoices);
    }
}

/// Fallback for any path or method without a route: 404 with a JSON error body.
pub async fn not_found(req: HttpRequest) -> Result<HttpResponse, ApiError> {
    tracing::debug!(method = %req.method(), path = req.path(), "no route matched");
    Err(ApiError::RouteNotFound {
        method: req.method().to_string(),
        path: req.path().to_string(),
    })
}
