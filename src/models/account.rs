use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Account record served by the accounts service.
///
/// `tier` is a free-form label (`"GOLD"`, `"SILVER"`, ...); no tier domain is
/// enforced.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq, ToSchema)]
pub struct Account {
    #[schema(example = 101)]
    pub id: u64,
    #[schema(example = "Riya")]
    pub name: String,
    #[schema(example = "GOLD")]
    pub tier: String,
}

impl Account {
    pub fn new(id: u64, name: &str, tier: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            tier: tier.to_string(),
        }
    }
}
