use ledgerctl_core::Period;
use tracing::debug;

use crate::model::{Report, ReportTable};
use crate::service::{BooksError, BooksService};

#[derive(serde::Deserialize)]
struct ReportList {
    items: Vec<Report>,
}

impl BooksService {
    /// List the available report definitions.
    pub async fn list_reports(&self) -> Result<Vec<Report>, BooksError> {
        let list: ReportList = self.api.get_json("/ledger/reports").await?;
        Ok(list.items)
    }

    /// Fetch a report rendered for one period. Formula evaluation is
    /// server-side; this is the finished table.
    pub async fn report_rows(&self, id: &str, period: &Period) -> Result<ReportTable, BooksError> {
        if id.is_empty() {
            return Err(BooksError::Validation("report id is required".into()));
        }
        debug!(id, %period, "fetching report rows");
        let table = self
            .api
            .get_json_query(
                &format!("/ledger/reports/{}/rows", id),
                &[("period", period.to_string())],
            )
            .await?;
        Ok(table)
    }
}
