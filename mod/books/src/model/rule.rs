use serde::{Deserialize, Serialize};

use crate::model::account::AccountCategory;

/// Maps a slice of the chart of accounts onto a report line.
///
/// Accounts are selected by code prefix within a category; the server
/// applies rules in declared order when it renders reports.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GroupingRule {
    pub id: String,
    pub name: String,
    pub source_category: AccountCategory,

    /// Account-code prefixes this rule collects.
    pub account_prefixes: Vec<String>,

    /// Caption of the report line the collected balance lands on.
    pub target_line: String,
}
