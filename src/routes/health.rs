use crate::models::HealthResponse;
use crate::service::Service;
use actix_web::{HttpResponse, Responder, get, web};

/// # Health Check Endpoint
///
/// Liveness probe shared by both services. The `service` field names the
/// service the route table was configured for.
///
/// ## Response
///
/// - **200 OK**: always
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "ok",
///   "service": "billing"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/health",
    responses(
        (status = 200, description = "Service is running", body = HealthResponse)
    ),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(service: web::Data<Service>) -> impl Responder {
    HttpResponse::Ok().json(HealthResponse::ok(service.name()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Service::Billing))
                .service(health),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert!(resp.status().is_success());

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let health_response: HealthResponse = test::read_body_json(resp).await;
        assert_eq!(health_response, HealthResponse::ok("billing"));
    }

    #[actix_web::test]
    async fn test_health_rejects_other_methods() {
        let app = test::init_service(
            App::new()
                .app_data(web::Data::new(Service::Accounts))
                .service(health),
        )
        .await;

        let req = test::TestRequest::post().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status(), 404);
    }
}
