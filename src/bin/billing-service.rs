use accounts_billing::{Service, config::ServerConfig, logging, server};

/// Billing Service Entry Point
///
/// Serves `GET /health` and `GET /invoices`.
///
/// # Configuration
/// - `BILLING_HOST` / `HOST`, default `127.0.0.1`
/// - `BILLING_PORT` / `PORT`, default `8082`
/// - `BILLING_WORKERS`, `BILLING_API_DOCS`
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logging::init(Service::Billing);

    let config = ServerConfig::from_env(Service::Billing).map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    server::run(Service::Billing, config).await
}
