use super::listing::json_list;
use crate::catalog::RecordSource;
use crate::models::Invoice;
use actix_web::{Responder, get, web};

/// # Invoice Listing Endpoint
///
/// Returns every invoice known to the service, in catalog order.
///
/// ## Example Response
/// ```json
/// [
///   { "invoiceNo": "INV-9001", "amount": 1499 },
///   { "invoiceNo": "INV-9002", "amount": 799 }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/invoices",
    responses(
        (status = 200, description = "All invoices", body = Vec<Invoice>)
    ),
    tag = "Invoices"
)]
#[get("/invoices")]
pub async fn list_invoices(source: web::Data<dyn RecordSource<Invoice>>) -> impl Responder {
    json_list::<Invoice, _>(source.get_ref())
}
