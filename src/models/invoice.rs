use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Invoice record served by the billing service.
///
/// `amount` is an opaque integer. Whether it counts minor or whole currency
/// units is not defined here.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Invoice {
    #[serde(rename = "invoiceNo")]
    #[schema(example = "INV-9001")]
    pub invoice_no: String,
    #[schema(example = 1499)]
    pub amount: i64,
}

impl Invoice {
    pub fn new(invoice_no: &str, amount: i64) -> Self {
        Self {
            invoice_no: invoice_no.to_string(),
            amount,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invoice_uses_camel_case_number() {
        let json = serde_json::to_string(&Invoice::new("INV-9002", 799)).unwrap();
        assert_eq!(json, r#"{"invoiceNo":"INV-9002","amount":799}"#);
    }

    #[test]
    fn test_invoice_rejects_snake_case_number() {
        let parsed = serde_json::from_str::<Invoice>(r#"{"invoice_no":"INV-1","amount":1}"#);
        assert!(parsed.is_err());
    }
}
