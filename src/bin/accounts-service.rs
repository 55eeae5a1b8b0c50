use accounts_billing::{Service, config::ServerConfig, logging, server};

/// Accounts Service Entry Point
///
/// Serves `GET /health` and `GET /accounts`.
///
/// # Configuration
/// - `ACCOUNTS_HOST` / `HOST`, default `127.0.0.1`
/// - `ACCOUNTS_PORT` / `PORT`, default `8081`
/// - `ACCOUNTS_WORKERS`, `ACCOUNTS_API_DOCS`
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    logging::init(Service::Accounts);

    let config = ServerConfig::from_env(Service::Accounts).map_err(|e| {
        tracing::error!(error = %e, "invalid configuration");
        std::io::Error::new(std::io::ErrorKind::InvalidInput, e)
    })?;

    server::run(Service::Accounts, config).await
}
