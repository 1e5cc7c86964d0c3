use serde::{Deserialize, Serialize};

/// Built-in financial statement kinds, plus user-designed reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportKind {
    BalanceSheet,
    IncomeStatement,
    CashFlow,
    Custom,
}

/// A financial report definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Report {
    pub id: String,
    pub name: String,
    pub kind: ReportKind,
}

/// One rendered report line. `amounts` holds one value per column, in
/// minor units; formula evaluation happened server-side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportRow {
    pub line_no: u32,
    pub caption: String,
    pub amounts: Vec<i64>,
}

/// A rendered report for one period: column captions plus rows.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReportTable {
    pub columns: Vec<String>,
    pub rows: Vec<ReportRow>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_rendered_report() {
        let table: ReportTable = serde_json::from_str(
            r#"{
                "columns": ["Opening", "Closing"],
                "rows": [
                    {"line_no": 1, "caption": "Current assets", "amounts": [120000, 135000]},
                    {"line_no": 2, "caption": "Fixed assets", "amounts": [500000, 498000]}
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.rows[1].caption, "Fixed assets");
        assert_eq!(table.rows[0].amounts, vec![120_000, 135_000]);
    }
}
