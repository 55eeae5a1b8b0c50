/// # Health Status Response
///
/// Shared `{status, service}` payload of both services' `GET /health`.
pub mod health;

/// Account records listed by `GET /accounts`
pub mod account;

/// Invoice records listed by `GET /invoices`
pub mod invoice;

pub use account::Account;
pub use health::HealthResponse;
pub use invoice::Invoice;
