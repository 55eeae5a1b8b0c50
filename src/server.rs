use crate::catalog::{RecordSource, StaticAccounts, StaticInvoices};
use crate::config::ServerConfig;
use crate::models::{Account, Invoice};
use crate::openapi;
use crate::routes;
use crate::service::Service;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, middleware::Logger, web};
use std::sync::Arc;
use utoipa_swagger_ui::SwaggerUi;

/// Route table of one service, ready to be applied to each worker's `App`.
type RouteTable = Arc<dyn Fn(&mut web::ServiceConfig) + Send + Sync>;

fn route_table(service: Service) -> RouteTable {
    match service {
        Service::Accounts => {
            let source: Arc<dyn RecordSource<Account>> = Arc::new(StaticAccounts);
            let source = web::Data::from(source);
            Arc::new(move |cfg: &mut web::ServiceConfig| {
                routes::configure_accounts(source.clone())(cfg)
            })
        }
        Service::Billing => {
            let source: Arc<dyn RecordSource<Invoice>> = Arc::new(StaticInvoices);
            let source = web::Data::from(source);
            Arc::new(move |cfg: &mut web::ServiceConfig| {
                routes::configure_billing(source.clone())(cfg)
            })
        }
    }
}

/// # Application Builder
///
/// Assembles the app one worker serves for `service`:
/// - the service's route table (`/health` plus its listing route)
/// - Swagger UI and `/api-docs/openapi.json`, only when `api_docs` is set
/// - a JSON 404 fallback for every other path or method
/// - the request logger
pub fn app(
    service: Service,
    api_docs: bool,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    let table = route_table(service);

    App::new()
        .wrap(Logger::default())
        .configure(move |cfg| table(cfg))
        .configure(move |cfg| {
            if api_docs {
                cfg.service(
                    SwaggerUi::new("/swagger-ui/{_:.*}")
                        .url("/api-docs/openapi.json", openapi::document(service)),
                );
            }
        })
        .default_service(web::to(routes::not_found))
}

/// # Service Entry Point
///
/// Runs the HTTP server for one service until it is shut down. Every worker
/// gets its own [`app`].
pub async fn run(service: Service, config: ServerConfig) -> std::io::Result<()> {
    let api_docs = config.api_docs;

    tracing::info!(
        service = service.name(),
        host = %config.host,
        port = config.port,
        workers = ?config.workers,
        api_docs,
        "starting HTTP server"
    );

    let mut server =
        HttpServer::new(move || app(service, api_docs)).bind(config.bind_address())?;

    if let Some(workers) = config.workers {
        server = server.workers(workers);
    }

    server.run().await?;

    tracing::info!(service = service.name(), "HTTP server stopped");
    Ok(())
}
