use ledgerctl_core::ListResult;
use tracing::debug;

use crate::model::{CreateVoucher, Voucher, VoucherQuery};
use crate::service::{BooksError, BooksService};

impl BooksService {
    /// List vouchers matching the query filters.
    pub async fn list_vouchers(
        &self,
        query: &VoucherQuery,
    ) -> Result<ListResult<Voucher>, BooksError> {
        let result = self
            .api
            .get_json_query("/ledger/vouchers", &query.to_query())
            .await?;
        Ok(result)
    }

    /// Get a single voucher by id.
    pub async fn get_voucher(&self, id: &str) -> Result<Voucher, BooksError> {
        if id.is_empty() {
            return Err(BooksError::Validation("voucher id is required".into()));
        }
        let voucher = self.api.get_json(&format!("/ledger/vouchers/{}", id)).await?;
        Ok(voucher)
    }

    /// Submit a new voucher. The entries must balance before anything
    /// goes over the wire; posting rules stay server-side.
    pub async fn create_voucher(&self, input: &CreateVoucher) -> Result<Voucher, BooksError> {
        if input.word.is_empty() {
            return Err(BooksError::Validation("voucher word is required".into()));
        }
        if input.entries.is_empty() {
            return Err(BooksError::Validation("voucher needs at least one entry".into()));
        }
        for entry in &input.entries {
            if entry.account_code.is_empty() {
                return Err(BooksError::Validation("entry account code is required".into()));
            }
            if (entry.debit == 0) == (entry.credit == 0) {
                return Err(BooksError::Validation(format!(
                    "entry on '{}' must have exactly one of debit/credit",
                    entry.account_code
                )));
            }
            if entry.debit < 0 || entry.credit < 0 {
                return Err(BooksError::Validation(format!(
                    "entry on '{}' has a negative amount",
                    entry.account_code
                )));
            }
        }
        if !input.is_balanced() {
            return Err(BooksError::Validation(
                "voucher does not balance: total debit != total credit".into(),
            ));
        }

        debug!(word = %input.word, entries = input.entries.len(), "creating voucher");
        let voucher = self.api.post_json("/ledger/vouchers", input).await?;
        Ok(voucher)
    }

    /// Delete an unposted voucher. The server refuses posted ones.
    pub async fn delete_voucher(&self, id: &str) -> Result<(), BooksError> {
        if id.is_empty() {
            return Err(BooksError::Validation("voucher id is required".into()));
        }
        self.api.delete(&format!("/ledger/vouchers/{}", id)).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::NewVoucherEntry;
    use crate::service::testing::{serve, service};

    use axum::routing::{get, post};
    use axum::{Json, Router};
    use chrono::NaiveDate;

    fn valid_input() -> CreateVoucher {
        CreateVoucher {
            word: "GEN".into(),
            date: NaiveDate::from_ymd_opt(2026, 7, 15).unwrap(),
            attachments: 2,
            entries: vec![
                NewVoucherEntry {
                    account_code: "1001".into(),
                    summary: "cash sale".into(),
                    debit: 50_000,
                    credit: 0,
                },
                NewVoucherEntry {
                    account_code: "6001".into(),
                    summary: "revenue".into(),
                    debit: 0,
                    credit: 50_000,
                },
            ],
        }
    }

    #[tokio::test]
    async fn lists_vouchers_with_filters() {
        let app = Router::new().route(
            "/ledger/vouchers",
            get(|| async {
                Json(serde_json::json!({
                    "items": [{
                        "id": "v1", "word": "GEN", "number": 7, "date": "2026-07-02",
                        "entries": [], "created_at": "2026-07-02T09:00:00Z"
                    }],
                    "total": 1
                }))
            }),
        );
        let svc = service(&serve(app).await);

        let query = VoucherQuery {
            period: Some("2026-07".parse().unwrap()),
            word: Some("GEN".into()),
            ..Default::default()
        };
        let result = svc.list_vouchers(&query).await.unwrap();
        assert_eq!(result.total, 1);
        assert_eq!(result.items[0].number, 7);
    }

    #[tokio::test]
    async fn create_round_trips() {
        let app = Router::new().route(
            "/ledger/vouchers",
            post(|Json(body): Json<serde_json::Value>| async move {
                Json(serde_json::json!({
                    "id": "v9",
                    "word": body["word"],
                    "number": 13,
                    "date": body["date"],
                    "attachments": body["attachments"],
                    "entries": body["entries"],
                    "created_at": "2026-07-15T10:00:00Z"
                }))
            }),
        );
        let svc = service(&serve(app).await);

        let voucher = svc.create_voucher(&valid_input()).await.unwrap();
        assert_eq!(voucher.id, "v9");
        assert_eq!(voucher.word, "GEN");
        assert_eq!(voucher.total_debit(), 50_000);
        assert_eq!(voucher.total_credit(), 50_000);
    }

    #[tokio::test]
    async fn unbalanced_voucher_fails_locally() {
        // Unreachable server: validation must fire first.
        let svc = service("http://127.0.0.1:9");

        let mut input = valid_input();
        input.entries[1].credit = 49_999;
        let err = svc.create_voucher(&input).await.unwrap_err();
        assert!(matches!(err, BooksError::Validation(_)));
    }

    #[tokio::test]
    async fn entry_with_both_sides_fails_locally() {
        let svc = service("http://127.0.0.1:9");

        let mut input = valid_input();
        input.entries[0].credit = 1;
        let err = svc.create_voucher(&input).await.unwrap_err();
        assert!(matches!(err, BooksError::Validation(_)));

        let mut input = valid_input();
        input.entries[0].debit = 0;
        let err = svc.create_voucher(&input).await.unwrap_err();
        assert!(matches!(err, BooksError::Validation(_)));
    }

    #[tokio::test]
    async fn delete_maps_remote_refusal() {
        use axum::http::StatusCode;

        let app = Router::new().route(
            "/ledger/vouchers/{id}",
            axum::routing::delete(|| async {
                (
                    StatusCode::CONFLICT,
                    Json(serde_json::json!({"code": "ALREADY_EXISTS", "message": "voucher is posted"})),
                )
            }),
        );
        let svc = service(&serve(app).await);

        let err = svc.delete_voucher("v1").await.unwrap_err();
        match err {
            BooksError::Api(ledgerctl_client::ApiError::Remote { status, message }) => {
                assert_eq!(status, 409);
                assert_eq!(message, "voucher is posted");
            }
            other => panic!("expected Remote, got {:?}", other),
        }

        assert!(matches!(
            svc.delete_voucher("").await.unwrap_err(),
            BooksError::Validation(_)
        ));
    }

    #[tokio::test]
    async fn empty_entries_fail_locally() {
        let svc = service("http://127.0.0.1:9");

        let mut input = valid_input();
        input.entries.clear();
        let err = svc.create_voucher(&input).await.unwrap_err();
        assert!(matches!(err, BooksError::Validation(_)));
    }
}
