use ledgerctl_core::Period;
use tracing::info;

use crate::model::{ExchangeRate, SetExchangeRate};
use crate::service::{BooksError, BooksService};

#[derive(serde::Deserialize)]
struct RateList {
    items: Vec<ExchangeRate>,
}

impl BooksService {
    /// List exchange rates for a period.
    pub async fn list_exchange_rates(
        &self,
        period: &Period,
    ) -> Result<Vec<ExchangeRate>, BooksError> {
        let list: RateList = self
            .api
            .get_json_query("/ledger/exchange-rates", &[("period", period.to_string())])
            .await?;
        Ok(list.items)
    }

    /// Set a currency's rate for a period. Upserts on (currency, period).
    pub async fn set_exchange_rate(
        &self,
        input: &SetExchangeRate,
    ) -> Result<ExchangeRate, BooksError> {
        if input.currency.is_empty() {
            return Err(BooksError::Validation("currency is required".into()));
        }
        if !(input.rate.is_finite() && input.rate > 0.0) {
            return Err(BooksError::Validation("rate must be a positive number".into()));
        }
        info!(currency = %input.currency, period = %input.period, rate = input.rate, "setting exchange rate");
        let rate = self.api.put_json("/ledger/exchange-rates", input).await?;
        Ok(rate)
    }
}
