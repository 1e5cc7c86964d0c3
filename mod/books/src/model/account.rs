use serde::{Deserialize, Serialize};

/// Top-level account classification in the chart of accounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccountCategory {
    Asset,
    Liability,
    Equity,
    Cost,
    ProfitLoss,
}

/// Which side of the ledger increases this account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Debit,
    Credit,
}

/// A chart-of-accounts entry, as the server reports it.
///
/// Codes are hierarchical by prefix ("1001" is a child of "10"); the
/// client never edits the chart, only reads it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Account {
    pub code: String,
    pub name: String,
    pub category: AccountCategory,
    pub direction: Direction,

    /// Foreign-currency account; amounts carry a currency code.
    #[serde(default)]
    pub currency: Option<String>,

    /// Tracks auxiliary dimensions (customer, department, ...).
    #[serde(default)]
    pub auxiliary: bool,

    #[serde(default = "default_active")]
    pub active: bool,
}

fn default_active() -> bool {
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_server_payload() {
        let account: Account = serde_json::from_str(
            r#"{
                "code": "1001",
                "name": "Cash",
                "category": "asset",
                "direction": "debit"
            }"#,
        )
        .unwrap();
        assert_eq!(account.code, "1001");
        assert_eq!(account.category, AccountCategory::Asset);
        assert_eq!(account.direction, Direction::Debit);
        assert_eq!(account.currency, None);
        assert!(!account.auxiliary);
        assert!(account.active);
    }

    #[test]
    fn decodes_foreign_currency_account() {
        let account: Account = serde_json::from_str(
            r#"{
                "code": "1012",
                "name": "Bank USD",
                "category": "asset",
                "direction": "debit",
                "currency": "USD",
                "auxiliary": true,
                "active": false
            }"#,
        )
        .unwrap();
        assert_eq!(account.currency.as_deref(), Some("USD"));
        assert!(account.auxiliary);
        assert!(!account.active);
    }
}
