use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Liveness payload returned by `GET /health` on both services.
///
/// ## Fields
/// - `status`: always `"ok"` while the process can answer HTTP
/// - `service`: name of the owning service (`"accounts"` or `"billing"`)
///
/// ## Example JSON
/// ```json
/// {
///   "status": "ok",
///   "service": "accounts"
/// }
/// ```
#[derive(Serialize, Debug, Clone, PartialEq, Eq, Deserialize, ToSchema)]
pub struct HealthResponse {
    #[schema(example = "ok")]
    pub status: String,
    #[schema(example = "accounts")]
    pub service: String,
}

impl HealthResponse {
    pub fn ok(service: &str) -> Self {
        Self {
            status: "ok".to_string(),
            service: service.to_string(),
        }
    }
}
