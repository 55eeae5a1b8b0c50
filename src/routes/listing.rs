use crate::catalog::RecordSource;
use actix_web::HttpResponse;
use serde::Serialize;

/// Serves every record of `source` as a JSON array with status 200.
///
/// Shared by all listing routes; each call asks the source again, so nothing
/// is cached between requests.
pub fn json_list<T, S>(source: &S) -> HttpResponse
where
    T: Serialize,
    S: RecordSource<T> + ?Sized,
{
    HttpResponse::Ok().json(source.records())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Invoice;
    use actix_web::body::to_bytes;

    struct EmptySource;

    impl RecordSource<Invoice> for EmptySource {
        fn records(&self) -> Vec<Invoice> {
            Vec::new()
        }
    }

    #[actix_web::test]
    async fn test_empty_source_is_an_empty_array() {
        let resp = json_list::<Invoice, _>(&EmptySource);
        assert_eq!(resp.status(), 200);

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(&body[..], b"[]");
    }

    #[actix_web::test]
    async fn test_trait_object_source() {
        let source: Box<dyn RecordSource<Invoice>> = Box::new(crate::catalog::StaticInvoices);
        let resp = json_list::<Invoice, _>(source.as_ref());

        let body = to_bytes(resp.into_body()).await.unwrap();
        assert_eq!(
            &body[..],
            br#"[{"invoiceNo":"INV-9001","amount":1499},{"invoiceNo":"INV-9002","amount":799}]"#
        );
    }
}
