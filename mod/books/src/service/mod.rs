pub mod account;
pub mod balance;
pub mod rate;
pub mod report;
pub mod rule;
pub mod voucher;

use std::sync::Arc;

use thiserror::Error;

use ledgerctl_client::{ApiClient, ApiError};
use ledgerctl_core::ClientError;

/// Books service error type.
#[derive(Debug, Error)]
pub enum BooksError {
    /// Input rejected locally, before any network call.
    #[error("{0}")]
    Validation(String),

    /// A remote call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl From<BooksError> for ClientError {
    fn from(e: BooksError) -> Self {
        match e {
            BooksError::Validation(m) => ClientError::Validation(m),
            BooksError::Api(e) => e.into(),
        }
    }
}

/// Data access for the accounting surfaces. Thin by design: validate,
/// call the server, decode.
pub struct BooksService {
    pub(crate) api: Arc<ApiClient>,
}

impl BooksService {
    pub fn new(api: Arc<ApiClient>) -> Self {
        Self { api }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use axum::Router;

    /// Serve a router on an ephemeral port, return its base URL.
    pub async fn serve(app: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });
        format!("http://{}", addr)
    }

    pub fn service(base: &str) -> super::BooksService {
        let api = std::sync::Arc::new(ledgerctl_client::ApiClient::new(base).unwrap());
        super::BooksService::new(api)
    }
}
