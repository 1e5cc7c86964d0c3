use serde::{Deserialize, Serialize};

use ledgerctl_core::Period;

/// One account's row in a trial balance. Amounts are minor units.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialBalanceRow {
    pub account_code: String,
    pub account_name: String,
    pub opening_debit: i64,
    pub opening_credit: i64,
    pub period_debit: i64,
    pub period_credit: i64,
    pub closing_debit: i64,
    pub closing_credit: i64,
}

/// State of a server-side balance generation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RunStatus {
    Pending,
    Completed,
    Failed,
}

/// A balance generation run, as the server reports it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BalanceRun {
    pub id: String,
    pub period: Period,
    pub status: RunStatus,
    #[serde(default)]
    pub generated_at: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Input for requesting balance generation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateBalance {
    pub period: Period,
}
