use std::fmt;

/// Identity of one of the two HTTP services.
///
/// Both services are built from the same scaffold; this tag is what tells
/// them apart at runtime (health payload, configuration keys, default port).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Service {
    Accounts,
    Billing,
}

impl Service {
    /// Name reported in the `service` field of the health payload.
    pub fn name(self) -> &'static str {
        match self {
            Service::Accounts => "accounts",
            Service::Billing => "billing",
        }
    }

    /// Prefix for service-specific environment keys, e.g. `ACCOUNTS_PORT`.
    pub fn env_prefix(self) -> &'static str {
        match self {
            Service::Accounts => "ACCOUNTS",
            Service::Billing => "BILLING",
        }
    }

    pub fn default_port(self) -> u16 {
        match self {
            Service::Accounts => 8081,
            Service::Billing => 8082,
        }
    }

    /// Path of the read-only listing route owned by this service.
    pub fn listing_path(self) -> &'static str {
        match self {
            Service::Accounts => "/accounts",
            Service::Billing => "/invoices",
        }
    }
}

impl fmt::Display for Service {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_service_names() {
        assert_eq!(Service::Accounts.name(), "accounts");
        assert_eq!(Service::Billing.name(), "billing");
        assert_eq!(Service::Billing.to_string(), "billing");
    }

    #[test]
    fn test_services_do_not_share_ports_or_prefixes() {
        assert_ne!(Service::Accounts.default_port(), Service::Billing.default_port());
        assert_ne!(Service::Accounts.env_prefix(), Service::Billing.env_prefix());
    }

    #[test]
    fn test_listing_paths() {
        assert_eq!(Service::Accounts.listing_path(), "/accounts");
        assert_eq!(Service::Billing.listing_path(), "/invoices");
    }
}
