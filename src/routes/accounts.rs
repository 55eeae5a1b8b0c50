use super::listing::json_list;
use crate::catalog::RecordSource;
use crate::models::Account;
use actix_web::{Responder, get, web};

/// # Account Listing Endpoint
///
/// Returns every account known to the service, in catalog order. No
/// filtering, no paging.
///
/// ## Example Response
/// ```json
/// [
///   { "id": 101, "name": "Riya", "tier": "GOLD" },
///   { "id": 102, "name": "Dev", "tier": "SILVER" }
/// ]
/// ```
#[utoipa::path(
    get,
    path = "/accounts",
    responses(
        (status = 200, description = "All accounts", body = Vec<Account>)
    ),
    tag = "Accounts"
)]
#[get("/accounts")]
pub async fn list_accounts(source: web::Data<dyn RecordSource<Account>>) -> impl Responder {
    json_list::<Account, _>(source.get_ref())
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};
    use mockall::mock;
    use std::sync::Arc;

    mock! {
        pub AccountSource {}

        impl RecordSource<Account> for AccountSource {
            fn records(&self) -> Vec<Account>;
        }
    }

    fn data_from(source: MockAccountSource) -> web::Data<dyn RecordSource<Account>> {
        let source: Arc<dyn RecordSource<Account>> = Arc::new(source);
        web::Data::from(source)
    }

    #[actix_web::test]
    async fn test_list_accounts_serves_source_records() {
        let mut source = MockAccountSource::new();
        source
            .expect_records()
            .times(1)
            .returning(|| vec![Account::new(7, "Ana", "PLATINUM")]);

        let app = test::init_service(
            App::new()
                .app_data(data_from(source))
                .service(list_accounts),
        )
        .await;

        let req = test::TestRequest::get().uri("/accounts").to_request();
        let accounts: Vec<Account> = test::call_and_read_body_json(&app, req).await;

        assert_eq!(accounts, vec![Account::new(7, "Ana", "PLATINUM")]);
    }

    #[actix_web::test]
    async fn test_list_accounts_asks_source_per_request() {
        let mut source = MockAccountSource::new();
        source.expect_records().times(3).returning(Vec::new);

        let app = test::init_service(
            App::new()
                .app_data(data_from(source))
                .service(list_accounts),
        )
        .await;

        for _ in 0..3 {
            let req = test::TestRequest::get().uri("/accounts").to_request();
            let body = test::call_and_read_body(&app, req).await;
            assert_eq!(&body[..], b"[]");
        }
    }
}
