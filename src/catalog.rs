use crate::models::{Account, Invoice};

/// Read-only source of the records a listing route returns.
///
/// Route handlers only see this trait. The literal tables below can be
/// replaced by a real store without touching the HTTP contract.
pub trait RecordSource<T>: Send + Sync {
    /// Returns a freshly built, ordered list of records.
    fn records(&self) -> Vec<T>;
}

/// The two fixed accounts.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticAccounts;

impl RecordSource<Account> for StaticAccounts {
    fn records(&self) -> Vec<Account> {
        vec![
            Account::new(101, "Riya", "GOLD"),
            Account::new(102, "Dev", "SILVER"),
        ]
    }
}

/// The two fixed invoices.
#[derive(Debug, Default, Clone, Copy)]
pub struct StaticInvoices;

impl RecordSource<Invoice> for StaticInvoices {
    fn records(&self) -> Vec<Invoice> {
        vec![Invoice::new("INV-9001", 1499), Invoice::new("INV-9002", 799)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_static_accounts_order() {
        let accounts = StaticAccounts.records();

        assert_eq!(accounts.len(), 2);
        assert_eq!(accounts[0], Account::new(101, "Riya", "GOLD"));
        assert_eq!(accounts[1], Account::new(102, "Dev", "SILVER"));
    }

    #[test]
    fn test_static_invoices_order() {
        let invoices = StaticInvoices.records();

        assert_eq!(invoices.len(), 2);
        assert_eq!(invoices[0], Invoice::new("INV-9001", 1499));
        assert_eq!(invoices[1], Invoice::new("INV-9002", 799));
    }

    #[test]
    fn test_records_are_rebuilt_on_every_call() {
        let mut first = StaticAccounts.records();
        first[0].tier = "BRONZE".to_string();

        // Mutating one result must not leak into the next
        assert_eq!(StaticAccounts.records()[0].tier, "GOLD");
        assert_eq!(StaticInvoices.records(), StaticInvoices.records());
    }
}
