use ledgerctl_core::{ListParams, ListResult};
use tracing::debug;

use crate::model::Account;
use crate::service::{BooksError, BooksService};

impl BooksService {
    /// List chart-of-accounts entries with pagination.
    pub async fn list_accounts(
        &self,
        params: &ListParams,
    ) -> Result<ListResult<Account>, BooksError> {
        let result = self
            .api
            .get_json_query("/ledger/accounts", &params.to_query())
            .await?;
        Ok(result)
    }

    /// Get a single account by code.
    pub async fn get_account(&self, code: &str) -> Result<Account, BooksError> {
        if code.is_empty() {
            return Err(BooksError::Validation("account code is required".into()));
        }
        debug!(code, "fetching account");
        let account = self
            .api
            .get_json(&format!("/ledger/accounts/{}", code))
            .await?;
        Ok(account)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::service::testing::{serve, service};

    use axum::routing::get;
    use axum::{Json, Router};

    #[tokio::test]
    async fn lists_accounts() {
        let app = Router::new().route(
            "/ledger/accounts",
            get(|| async {
                Json(serde_json::json!({
                    "items": [
                        {"code": "1001", "name": "Cash", "category": "asset", "direction": "debit"},
                        {"code": "2202", "name": "Payables", "category": "liability", "direction": "credit"}
                    ],
                    "total": 2
                }))
            }),
        );
        let svc = service(&serve(app).await);

        let result = svc.list_accounts(&ListParams::default()).await.unwrap();
        assert_eq!(result.total, 2);
        assert_eq!(result.items[0].code, "1001");
        assert_eq!(result.items[1].name, "Payables");
    }

    #[tokio::test]
    async fn empty_code_fails_locally() {
        let svc = service("http://127.0.0.1:9");
        let err = svc.get_account("").await.unwrap_err();
        assert!(matches!(err, BooksError::Validation(_)));
    }
}
