use ledgerctl_core::Period;
use tracing::{debug, info};

use crate::model::{BalanceRun, GenerateBalance, TrialBalanceRow};
use crate::service::{BooksError, BooksService};

#[derive(serde::Deserialize)]
struct RowList {
    items: Vec<TrialBalanceRow>,
}

#[derive(serde::Deserialize)]
struct RunList {
    items: Vec<BalanceRun>,
}

impl BooksService {
    /// Fetch the trial balance for a period.
    pub async fn trial_balance(&self, period: &Period) -> Result<Vec<TrialBalanceRow>, BooksError> {
        debug!(%period, "fetching trial balance");
        let list: RowList = self
            .api
            .get_json_query("/ledger/balances/trial", &[("period", period.to_string())])
            .await?;
        Ok(list.items)
    }

    /// Ask the server to (re)generate balances for a period. The heavy
    /// lifting happens remotely; the returned run may still be pending.
    pub async fn generate_balance(&self, period: &Period) -> Result<BalanceRun, BooksError> {
        info!(%period, "requesting balance generation");
        let run = self
            .api
            .post_json("/ledger/balances/generate", &GenerateBalance { period: *period })
            .await?;
        Ok(run)
    }

    /// List past balance generation runs.
    pub async fn list_balance_runs(&self) -> Result<Vec<BalanceRun>, BooksError> {
        let list: RunList = self.api.get_json("/ledger/balances/runs").await?;
        Ok(list.items)
    }
}
