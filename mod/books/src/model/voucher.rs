use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use ledgerctl_core::Period;

/// One line of a voucher. Amounts are in minor units (cents); exactly
/// one of `debit`/`credit` is non-zero on a well-formed entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoucherEntry {
    pub account_code: String,
    pub summary: String,
    #[serde(default)]
    pub debit: i64,
    #[serde(default)]
    pub credit: i64,
}

/// A posted journal voucher, as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Voucher {
    pub id: String,

    /// Voucher word (e.g. "GEN"), the book this voucher belongs to.
    pub word: String,

    /// Sequence number within word + period.
    pub number: u32,

    pub date: NaiveDate,

    /// Count of attached receipts.
    #[serde(default)]
    pub attachments: u32,

    pub entries: Vec<VoucherEntry>,

    pub created_at: String,
}

impl Voucher {
    /// Total debit amount, minor units.
    pub fn total_debit(&self) -> i64 {
        self.entries.iter().map(|e| e.debit).sum()
    }

    /// Total credit amount, minor units.
    pub fn total_credit(&self) -> i64 {
        self.entries.iter().map(|e| e.credit).sum()
    }
}

/// Input line for a new voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewVoucherEntry {
    pub account_code: String,
    pub summary: String,
    #[serde(default)]
    pub debit: i64,
    #[serde(default)]
    pub credit: i64,
}

/// Input for creating a voucher.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateVoucher {
    pub word: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub attachments: u32,
    pub entries: Vec<NewVoucherEntry>,
}

impl CreateVoucher {
    /// Whether total debits equal total credits.
    pub fn is_balanced(&self) -> bool {
        let debit: i64 = self.entries.iter().map(|e| e.debit).sum();
        let credit: i64 = self.entries.iter().map(|e| e.credit).sum();
        debit == credit
    }
}

/// Filters for listing vouchers.
#[derive(Debug, Clone, Default)]
pub struct VoucherQuery {
    pub period: Option<Period>,
    pub word: Option<String>,
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

impl VoucherQuery {
    /// Render as query pairs for the request URL.
    pub fn to_query(&self) -> Vec<(&'static str, String)> {
        let mut pairs = Vec::new();
        if let Some(period) = &self.period {
            pairs.push(("period", period.to_string()));
        }
        if let Some(word) = &self.word {
            pairs.push(("word", word.clone()));
        }
        if let Some(limit) = self.limit {
            pairs.push(("limit", limit.to_string()));
        }
        if let Some(offset) = self.offset {
            pairs.push(("offset", offset.to_string()));
        }
        pairs
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(code: &str, debit: i64, credit: i64) -> NewVoucherEntry {
        NewVoucherEntry {
            account_code: code.into(),
            summary: "test".into(),
            debit,
            credit,
        }
    }

    #[test]
    fn balance_check() {
        let input = CreateVoucher {
            word: "GEN".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            attachments: 0,
            entries: vec![entry("1001", 10_000, 0), entry("6001", 0, 10_000)],
        };
        assert!(input.is_balanced());

        let lopsided = CreateVoucher {
            entries: vec![entry("1001", 10_000, 0), entry("6001", 0, 9_999)],
            ..input
        };
        assert!(!lopsided.is_balanced());
    }

    #[test]
    fn voucher_totals() {
        let voucher: Voucher = serde_json::from_str(
            r#"{
                "id": "v1",
                "word": "GEN",
                "number": 12,
                "date": "2026-07-15",
                "entries": [
                    {"account_code": "1001", "summary": "cash in", "debit": 500},
                    {"account_code": "2202", "summary": "payable", "credit": 500}
                ],
                "created_at": "2026-07-15T10:00:00Z"
            }"#,
        )
        .unwrap();
        assert_eq!(voucher.total_debit(), 500);
        assert_eq!(voucher.total_credit(), 500);
        assert_eq!(voucher.attachments, 0);
    }

    #[test]
    fn query_pairs_skip_unset_filters() {
        let q = VoucherQuery {
            period: Some("2026-07".parse().unwrap()),
            word: None,
            limit: Some(20),
            offset: None,
        };
        assert_eq!(
            q.to_query(),
            vec![("period", "2026-07".to_string()), ("limit", "20".to_string())]
        );
        assert!(VoucherQuery::default().to_query().is_empty());
    }
}
